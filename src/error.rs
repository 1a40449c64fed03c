//! Unified error types for bom-tools.
//!
//! Field-level validation problems are collected into a [`ValidationReport`]
//! and surfaced as a batch, so a user can fix every row in one pass.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::builder::ValidationIssue;

/// Main error type for bom-tools operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BomError {
    /// Template header row does not match the expected schema.
    ///
    /// Recoverable: callers may proceed with an explicit override after
    /// surfacing both header lists.
    #[error("template headers do not match the expected format\n  found:    [{}]\n  expected: [{}]",
        found.join(", "), expected.join(", "))]
    SchemaMismatch {
        found: Vec<String>,
        expected: Vec<String>,
    },

    /// One or more rows failed validation; all issues are collected.
    #[error("validation failed with {} issue(s):\n{}", .0.len(), .0)]
    Validation(ValidationReport),

    /// Level 2/3 rows were requested but no Manufactured parent exists at
    /// the level above.
    #[error("no level {} part has a Manufactured source; at least one part must be \
             Manufactured to Stock (M) or Manufactured to Job (F) to parent level {level} rows",
        level - 1)]
    GatingBlocked { level: u8 },

    /// A group named a parent that is not an eligible Manufactured part.
    #[error("level {level} group parent {parent:?} is not a Manufactured part at level {}",
        level - 1)]
    IneligibleParent { level: u8, parent: String },

    /// The parent (Level 0) part number is required before any child rows
    /// can be built.
    #[error("parent part number is required")]
    ParentPartRequired,

    /// Short-form part number space is exhausted (past ZZ999).
    #[error("short-form part number space exhausted after prefix ZZ")]
    AllocatorExhausted,

    /// Could not allocate a part number distinct from the parent within the
    /// retry ceiling.
    #[error("could not allocate a part number distinct from parent {parent:?} after {attempts} attempts")]
    PartNumberCollision { parent: String, attempts: u32 },

    /// Sequence increment outside the supported set.
    #[error("invalid sequence increment {0}; expected one of 1, 10, 100, 1000, 10000")]
    InvalidIncrement(u32),

    /// A required worksheet is missing from the workbook.
    #[error("workbook has no sheet named {name:?}")]
    SheetNotFound { name: String },

    /// IO errors with path context.
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Errors from the spreadsheet reader/writer layer.
    #[error("spreadsheet error: {0}")]
    Spreadsheet(String),

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Convenient Result type for bom-tools operations.
pub type Result<T> = std::result::Result<T, BomError>;

/// A batch of validation issues collected across all rows.
#[derive(Debug, Default)]
pub struct ValidationReport {
    issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    #[must_use]
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for issue in &self.issues {
            writeln!(f, "  - {issue}")?;
        }
        Ok(())
    }
}

impl BomError {
    /// Create an IO error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Wrap a non-empty batch of validation issues.
    pub fn validation(issues: Vec<ValidationIssue>) -> Self {
        Self::Validation(ValidationReport::new(issues))
    }
}

impl From<std::io::Error> for BomError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<calamine::XlsxError> for BomError {
    fn from(err: calamine::XlsxError) -> Self {
        match err {
            calamine::XlsxError::WorksheetNotFound(name) => Self::SheetNotFound { name },
            other => Self::Spreadsheet(other.to_string()),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for BomError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Spreadsheet(err.to_string())
    }
}
