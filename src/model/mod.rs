//! Core data structures: the row schema, part rows, code tables, and the
//! BOM domain model used by the comparison engine.

mod bom;
mod codes;
mod row;
pub mod schema;

pub use bom::{Bom, BomItem};
pub use codes::{is_manufactured, Category, Source};
pub use row::{CellValue, Column, PartRow};
pub use schema::{
    headers_match, REQUIRED_FIELDS, SEQUENCE_INCREMENTS, TEMPLATE_HEADERS, TEMPLATE_SHEET,
};
