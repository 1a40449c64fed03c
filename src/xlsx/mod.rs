//! Spreadsheet adapter: template-driven reading and writing of BOM files.
//!
//! Reading goes through `calamine`, writing through `rust_xlsxwriter`.
//! Workbooks are never edited in place: output is built in memory after
//! validation completes, then persisted in one step.

mod reader;
mod writer;

pub use reader::{read_bom, read_template_headers};
pub use writer::{write_bom_file, write_comparison, write_template};

/// Header row of the six-column item sheets (simple BOM files and the
/// Added/Removed report sheets).
pub(crate) const ITEM_HEADERS: [&str; 6] = [
    "Part Number",
    "Description",
    "Quantity",
    "Unit",
    "Reference Designator",
    "Notes",
];
