//! Category and Source code tables.
//!
//! The import format stores single-character value codes; the UI-facing
//! side of the system shows display labels. Both directions of the mapping
//! are fixed. Validation rules are expressed in terms of the value codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Part category classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Normal,
    Phantom,
    Exclude,
    Reference,
    Setup,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Normal,
        Category::Phantom,
        Category::Exclude,
        Category::Reference,
        Category::Setup,
    ];

    /// The value code written to the file.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Category::Normal => "",
            Category::Phantom => "P",
            Category::Exclude => "X",
            Category::Reference => "R",
            Category::Setup => "1",
        }
    }

    /// The display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::Normal => "Normal",
            Category::Phantom => "Phantom",
            Category::Exclude => "Exclude",
            Category::Reference => "Reference",
            Category::Setup => "Setup",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.code() == code)
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Procurement/manufacturing source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    Unspecified,
    PurchaseToStock,
    PurchaseToJob,
    ManufacturedToStock,
    ManufacturedToJob,
    ConsignToStock,
    ConsignToJob,
}

impl Source {
    pub const ALL: [Source; 7] = [
        Source::Unspecified,
        Source::PurchaseToStock,
        Source::PurchaseToJob,
        Source::ManufacturedToStock,
        Source::ManufacturedToJob,
        Source::ConsignToStock,
        Source::ConsignToJob,
    ];

    /// The value code written to the file.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Source::Unspecified => "",
            Source::PurchaseToStock => "P",
            Source::PurchaseToJob => "J",
            Source::ManufacturedToStock => "M",
            Source::ManufacturedToJob => "F",
            Source::ConsignToStock => "C",
            Source::ConsignToJob => "G",
        }
    }

    /// The display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Source::Unspecified => "—",
            Source::PurchaseToStock => "Purchase to Stock",
            Source::PurchaseToJob => "Purchase to Job",
            Source::ManufacturedToStock => "Manufactured to Stock",
            Source::ManufacturedToJob => "Manufactured to Job",
            Source::ConsignToStock => "Consign to Stock",
            Source::ConsignToJob => "Consign to Job",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.code() == code)
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.label() == label)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a source code denotes a Manufactured part (eligible to parent
/// sub-components).
#[must_use]
pub fn is_manufactured(code: &str) -> bool {
    matches!(code, "M" | "F")
}
