//! Comparison result structures.

use serde::{Deserialize, Serialize};

use crate::model::BomItem;

/// An item present in both BOMs whose compared fields differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifiedPair {
    pub old: BomItem,
    pub new: BomItem,
}

/// The fields considered by modification detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparedField {
    Quantity,
    Description,
    Unit,
}

impl ComparedField {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ComparedField::Quantity => "Quantity",
            ComparedField::Description => "Description",
            ComparedField::Unit => "Unit",
        }
    }
}

/// One field-level change on a modified item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldChange {
    pub part_number: String,
    pub field: ComparedField,
    pub old_value: String,
    pub new_value: String,
}

/// Item counts per comparison category.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
    pub unchanged: usize,
}

/// Read-only snapshot of the differences between two BOMs.
///
/// The four partitions are disjoint and computed once at construction;
/// they are never re-derived if the underlying BOMs change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[must_use]
pub struct BomComparison {
    pub old_name: String,
    pub new_name: String,
    /// Items whose part number exists only in the new BOM.
    pub added: Vec<BomItem>,
    /// Items whose part number exists only in the old BOM.
    pub removed: Vec<BomItem>,
    /// Items in both BOMs with a quantity, description, or unit difference.
    pub modified: Vec<ModifiedPair>,
    /// Items in both BOMs with no difference in the compared fields.
    pub unchanged: Vec<BomItem>,
}

impl BomComparison {
    /// Counts per category.
    #[must_use]
    pub fn summary(&self) -> ComparisonSummary {
        ComparisonSummary {
            added: self.added.len(),
            removed: self.removed.len(),
            modified: self.modified.len(),
            unchanged: self.unchanged.len(),
        }
    }

    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty() || !self.modified.is_empty()
    }

    /// One entry per (part number, changed field, old value, new value),
    /// restricted to the three compared fields.
    #[must_use]
    pub fn field_changes(&self) -> Vec<FieldChange> {
        let mut changes = Vec::new();
        for pair in &self.modified {
            let part_number = &pair.old.part_number;
            if pair.old.quantity != pair.new.quantity {
                changes.push(FieldChange {
                    part_number: part_number.clone(),
                    field: ComparedField::Quantity,
                    old_value: pair.old.quantity.to_string(),
                    new_value: pair.new.quantity.to_string(),
                });
            }
            if pair.old.description != pair.new.description {
                changes.push(FieldChange {
                    part_number: part_number.clone(),
                    field: ComparedField::Description,
                    old_value: pair.old.description.clone(),
                    new_value: pair.new.description.clone(),
                });
            }
            if pair.old.unit != pair.new.unit {
                changes.push(FieldChange {
                    part_number: part_number.clone(),
                    field: ComparedField::Unit,
                    old_value: pair.old.unit.clone(),
                    new_value: pair.new.unit.clone(),
                });
            }
        }
        changes
    }
}
