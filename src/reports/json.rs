//! JSON comparison report.

use serde::Serialize;

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::diff::BomComparison;

/// Structured JSON reporter.
pub struct JsonReporter;

impl JsonReporter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized shape of the JSON report.
#[derive(Serialize)]
struct JsonReport<'a> {
    old: &'a str,
    new: &'a str,
    summary: crate::diff::ComparisonSummary,
    added: &'a [crate::model::BomItem],
    removed: &'a [crate::model::BomItem],
    modified: Vec<crate::diff::FieldChange>,
    unchanged: &'a [crate::model::BomItem],
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, comparison: &BomComparison) -> Result<String, ReportError> {
        let report = JsonReport {
            old: &comparison.old_name,
            new: &comparison.new_name,
            summary: comparison.summary(),
            added: &comparison.added,
            removed: &comparison.removed,
            modified: comparison.field_changes(),
            unchanged: &comparison.unchanged,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
