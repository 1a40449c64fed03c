//! **A library and CLI for building and comparing Bill-of-Materials
//! spreadsheets in the BOM Compare ERP import format.**
//!
//! `bom-tools` assembles a hierarchical part tree (top-level parent, then
//! Level 1–3 components, entered manually or generated with plausible random
//! values) into a flat, schema-valid row sequence, and writes it as a
//! 27-column spreadsheet ready for import. It also diffs two BOM files into
//! added/removed/modified/unchanged item sets with field-level change
//! detection.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the fixed column [`model::schema`], the [`PartRow`]
//!   record, the Category/Source code tables, and the [`Bom`] domain model
//!   used by the comparison engine.
//! - **[`generate`]**: the per-run [`PartNumberAllocator`] and the
//!   [`RandomRowGenerator`] producing synthetic rows for a caller-chosen
//!   subset of columns.
//! - **[`builder`]**: turns a plain-data [`BomSpec`] tree into the ordered
//!   row sequence, enforcing parent gating, sequence assignment, and the
//!   batch validation pass.
//! - **[`diff`]**: [`compare`] two [`Bom`]s into a [`BomComparison`]
//!   snapshot.
//! - **[`xlsx`]**: spreadsheet adapter — template reading, BOM output,
//!   and the multi-sheet comparison report.
//! - **[`reports`]**: summary and JSON stdout renderings of a comparison.
//!
//! ## Example: building a row sequence
//!
//! ```
//! use bom_tools::{BomBuilder, BomSpec, GroupRows, PartRow};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let spec = BomSpec {
//!         parent: PartRow {
//!             part_no: Some("TOP-100".into()),
//!             description: Some("Top assembly".into()),
//!             quantity: Some(1.0),
//!             ..PartRow::default()
//!         },
//!         level1: GroupRows::Manual(vec![PartRow {
//!             part_no: Some("C1".into()),
//!             quantity: Some(2.0),
//!             source: Some("M".into()),
//!             ..PartRow::default()
//!         }]),
//!         ..BomSpec::default()
//!     };
//!
//!     let mut builder = BomBuilder::new();
//!     let outcome = builder.build(&spec)?;
//!     assert!(outcome.issues.is_empty());
//!     assert_eq!(outcome.rows.len(), 2);
//!     Ok(())
//! }
//! ```
//!
//! ## Example: diffing two BOMs
//!
//! ```no_run
//! use std::path::Path;
//! use bom_tools::{compare, xlsx::read_bom};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let old = read_bom(Path::new("old_bom.xlsx"))?;
//!     let new = read_bom(Path::new("new_bom.xlsx"))?;
//!
//!     let comparison = compare(&old, &new);
//!     println!(
//!         "added: {}, removed: {}",
//!         comparison.added.len(),
//!         comparison.removed.len()
//!     );
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // usize/f64 casts for sheet coordinates and counts are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // # Errors / # Panics doc sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod builder;
pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod generate;
pub mod model;
pub mod reports;
pub mod xlsx;

// Re-export main types for convenience
pub use builder::{
    validate_rows, BomBuilder, BomSpec, BuildOutcome, GroupRows, GroupSpec, RandomGroup,
    ValidationIssue,
};
pub use diff::{compare, BomComparison, ComparisonSummary, FieldChange};
pub use error::{BomError, Result, ValidationReport};
pub use generate::{FieldSet, PartNumberAllocator, RandomRowGenerator};
pub use model::{
    headers_match, Bom, BomItem, Category, CellValue, Column, PartRow, Source, TEMPLATE_HEADERS,
};
pub use reports::{ReportFormat, ReportGenerator};
