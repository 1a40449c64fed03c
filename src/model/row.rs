//! Part row record and column access.
//!
//! A [`PartRow`] is one data row of the import sheet: every column is
//! optional, and absent fields are written out as blank cells. Columns are
//! addressed through the [`Column`] enum rather than header strings.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::schema::REQUIRED_FIELDS;

/// One of the 27 schema columns, in declaration (= file) order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Column {
    PartNo,
    Revision,
    Description,
    AltDescription1,
    AltDescription2,
    DescExtra,
    Quantity,
    IssueUM,
    ConsumptionConv,
    UM,
    Cost,
    Source,
    Drawing,
    Leadtime,
    Level,
    Location,
    Memo1,
    Memo2,
    Parent,
    Productline,
    Sequence,
    SortCode,
    Tag,
    Category,
    BomComplete,
    BomComments,
    Router,
}

impl Column {
    /// All columns in file order.
    pub const ALL: [Column; 27] = [
        Column::PartNo,
        Column::Revision,
        Column::Description,
        Column::AltDescription1,
        Column::AltDescription2,
        Column::DescExtra,
        Column::Quantity,
        Column::IssueUM,
        Column::ConsumptionConv,
        Column::UM,
        Column::Cost,
        Column::Source,
        Column::Drawing,
        Column::Leadtime,
        Column::Level,
        Column::Location,
        Column::Memo1,
        Column::Memo2,
        Column::Parent,
        Column::Productline,
        Column::Sequence,
        Column::SortCode,
        Column::Tag,
        Column::Category,
        Column::BomComplete,
        Column::BomComments,
        Column::Router,
    ];

    /// The exact header string for this column.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Column::PartNo => "PartNo",
            Column::Revision => "Revision",
            Column::Description => "Description",
            Column::AltDescription1 => "AltDescription1",
            Column::AltDescription2 => "AltDescription2",
            Column::DescExtra => "DescExtra",
            Column::Quantity => "Quantity",
            Column::IssueUM => "IssueUM",
            Column::ConsumptionConv => "ConsumptionConv",
            Column::UM => "UM",
            Column::Cost => "Cost",
            Column::Source => "Source",
            Column::Drawing => "Drawing",
            Column::Leadtime => "Leadtime",
            Column::Level => "Level",
            Column::Location => "Location",
            Column::Memo1 => "Memo1",
            Column::Memo2 => "Memo2",
            Column::Parent => "Parent",
            Column::Productline => "Productline",
            Column::Sequence => "Sequence",
            Column::SortCode => "SortCode",
            Column::Tag => "Tag",
            Column::Category => "Category",
            Column::BomComplete => "BomComplete",
            Column::BomComments => "BomComments",
            Column::Router => "Router",
        }
    }

    /// Zero-based column index in the sheet.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a column by its exact header string.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Scalar value carried by one cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Int(i64),
    Float(f64),
}

impl CellValue {
    /// `true` for empty text; numbers are never blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, CellValue::Text(s) if s.is_empty())
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
        }
    }
}

/// One data row of the import sheet.
///
/// Every field is optional; absent fields come out as blank cells. Serde
/// names follow the sheet headers, so a JSON spec file reads like the
/// spreadsheet it produces.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartRow {
    #[serde(rename = "PartNo", skip_serializing_if = "Option::is_none")]
    pub part_no: Option<String>,
    #[serde(rename = "Revision", skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
    #[serde(rename = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "AltDescription1", skip_serializing_if = "Option::is_none")]
    pub alt_description1: Option<String>,
    #[serde(rename = "AltDescription2", skip_serializing_if = "Option::is_none")]
    pub alt_description2: Option<String>,
    #[serde(rename = "DescExtra", skip_serializing_if = "Option::is_none")]
    pub desc_extra: Option<String>,
    #[serde(rename = "Quantity", skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(rename = "IssueUM", skip_serializing_if = "Option::is_none")]
    pub issue_um: Option<String>,
    #[serde(rename = "ConsumptionConv", skip_serializing_if = "Option::is_none")]
    pub consumption_conv: Option<f64>,
    #[serde(rename = "UM", skip_serializing_if = "Option::is_none")]
    pub um: Option<String>,
    #[serde(rename = "Cost", skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(rename = "Source", skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "Drawing", skip_serializing_if = "Option::is_none")]
    pub drawing: Option<String>,
    #[serde(rename = "Leadtime", skip_serializing_if = "Option::is_none")]
    pub leadtime: Option<i64>,
    #[serde(rename = "Level", skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(rename = "Location", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "Memo1", skip_serializing_if = "Option::is_none")]
    pub memo1: Option<String>,
    #[serde(rename = "Memo2", skip_serializing_if = "Option::is_none")]
    pub memo2: Option<String>,
    #[serde(rename = "Parent", skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(rename = "Productline", skip_serializing_if = "Option::is_none")]
    pub productline: Option<String>,
    #[serde(rename = "Sequence", skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i64>,
    #[serde(rename = "SortCode", skip_serializing_if = "Option::is_none")]
    pub sort_code: Option<String>,
    #[serde(rename = "Tag", skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(rename = "Category", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "BomComplete", skip_serializing_if = "Option::is_none")]
    pub bom_complete: Option<String>,
    #[serde(rename = "BomComments", skip_serializing_if = "Option::is_none")]
    pub bom_comments: Option<String>,
    #[serde(rename = "Router", skip_serializing_if = "Option::is_none")]
    pub router: Option<String>,
}

impl PartRow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cell value for a column, if populated.
    #[must_use]
    pub fn value(&self, column: Column) -> Option<CellValue> {
        fn text(v: &Option<String>) -> Option<CellValue> {
            v.as_ref().map(|s| CellValue::Text(s.clone()))
        }
        match column {
            Column::PartNo => text(&self.part_no),
            Column::Revision => text(&self.revision),
            Column::Description => text(&self.description),
            Column::AltDescription1 => text(&self.alt_description1),
            Column::AltDescription2 => text(&self.alt_description2),
            Column::DescExtra => text(&self.desc_extra),
            Column::Quantity => self.quantity.map(CellValue::Float),
            Column::IssueUM => text(&self.issue_um),
            Column::ConsumptionConv => self.consumption_conv.map(CellValue::Float),
            Column::UM => text(&self.um),
            Column::Cost => self.cost.map(CellValue::Float),
            Column::Source => text(&self.source),
            Column::Drawing => text(&self.drawing),
            Column::Leadtime => self.leadtime.map(CellValue::Int),
            Column::Level => self.level.map(|l| CellValue::Int(i64::from(l))),
            Column::Location => text(&self.location),
            Column::Memo1 => text(&self.memo1),
            Column::Memo2 => text(&self.memo2),
            Column::Parent => text(&self.parent),
            Column::Productline => text(&self.productline),
            Column::Sequence => self.sequence.map(CellValue::Int),
            Column::SortCode => text(&self.sort_code),
            Column::Tag => text(&self.tag),
            Column::Category => text(&self.category),
            Column::BomComplete => text(&self.bom_complete),
            Column::BomComments => text(&self.bom_comments),
            Column::Router => text(&self.router),
        }
    }

    /// The part number, or "" when absent.
    #[must_use]
    pub fn part_no_or_blank(&self) -> &str {
        self.part_no.as_deref().unwrap_or("")
    }

    /// Required columns that are missing from this row.
    ///
    /// `Parent` counts as present when it is the empty string (a cleared
    /// self-reference) but not when absent. `PartNo` must be non-blank.
    #[must_use]
    pub fn missing_required(&self) -> Vec<Column> {
        REQUIRED_FIELDS
            .iter()
            .copied()
            .filter(|col| match col {
                Column::PartNo => self.part_no.as_deref().map_or(true, str::is_empty),
                Column::Quantity => self.quantity.is_none(),
                Column::Parent => self.parent.is_none(),
                Column::Sequence => self.sequence.is_none(),
                _ => false,
            })
            .collect()
    }

    /// Whether this row references itself as its own parent.
    ///
    /// Comparison trims surrounding whitespace; blank values never match.
    #[must_use]
    pub fn is_self_parent(&self) -> bool {
        match (self.part_no.as_deref(), self.parent.as_deref()) {
            (Some(part), Some(parent)) => {
                let part = part.trim();
                !part.is_empty() && part == parent.trim()
            }
            _ => false,
        }
    }
}
