//! Bill-of-Materials domain model used by the comparison engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single item in a Bill of Materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomItem {
    pub part_number: String,
    pub description: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_designator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl BomItem {
    /// Item with the default unit "EA" and no designator or notes.
    #[must_use]
    pub fn new(
        part_number: impl Into<String>,
        description: impl Into<String>,
        quantity: f64,
    ) -> Self {
        Self {
            part_number: part_number.into(),
            description: description.into(),
            quantity,
            unit: "EA".to_string(),
            reference_designator: None,
            notes: None,
        }
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }
}

impl fmt::Display for BomItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} (Qty: {})",
            self.part_number, self.description, self.quantity
        )
    }
}

/// A complete Bill of Materials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bom {
    pub name: String,
    pub version: String,
    pub date: NaiveDate,
    pub items: Vec<BomItem>,
}

impl Bom {
    #[must_use]
    pub fn new(name: impl Into<String>, version: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            date,
            items: Vec::new(),
        }
    }

    pub fn add_item(&mut self, item: BomItem) {
        self.items.push(item);
    }

    /// First item with the given part number, if any.
    #[must_use]
    pub fn get_item_by_part_number(&self, part_number: &str) -> Option<&BomItem> {
        self.items.iter().find(|i| i.part_number == part_number)
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
