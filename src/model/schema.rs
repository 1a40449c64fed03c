//! Fixed column schema for the BOM Compare import format.
//!
//! The import format is a 27-column sheet named "Template". The column list
//! and order are fixed; the matcher never reorders or renames columns to
//! cope with drift.

use super::Column;

/// Name of the worksheet carrying the header row and data rows.
pub const TEMPLATE_SHEET: &str = "Template";

/// The 27 column headers, in file order.
pub const TEMPLATE_HEADERS: [&str; 27] = [
    "PartNo",
    "Revision",
    "Description",
    "AltDescription1",
    "AltDescription2",
    "DescExtra",
    "Quantity",
    "IssueUM",
    "ConsumptionConv",
    "UM",
    "Cost",
    "Source",
    "Drawing",
    "Leadtime",
    "Level",
    "Location",
    "Memo1",
    "Memo2",
    "Parent",
    "Productline",
    "Sequence",
    "SortCode",
    "Tag",
    "Category",
    "BomComplete",
    "BomComments",
    "Router",
];

/// Columns that must be non-blank on every data row.
///
/// `Parent` may be the empty string (cleared self-reference) but never
/// absent.
pub const REQUIRED_FIELDS: [Column; 4] = [
    Column::PartNo,
    Column::Quantity,
    Column::Parent,
    Column::Sequence,
];

/// Supported sequence increments, smallest first.
pub const SEQUENCE_INCREMENTS: [u32; 5] = [1, 10, 100, 1000, 10000];

/// Exact ordered, case-sensitive header comparison.
///
/// Returns `false` on any difference in content, order, or length. Callers
/// must surface both lists and require explicit confirmation before
/// proceeding with mismatched headers.
#[must_use]
pub fn headers_match(found: &[String]) -> bool {
    found.len() == TEMPLATE_HEADERS.len()
        && found
            .iter()
            .zip(TEMPLATE_HEADERS.iter())
            .all(|(f, e)| f == e)
}
