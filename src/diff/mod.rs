//! BOM comparison: engine and result structures.

mod engine;
mod result;

pub use engine::compare;
pub use result::{BomComparison, ComparedField, ComparisonSummary, FieldChange, ModifiedPair};
