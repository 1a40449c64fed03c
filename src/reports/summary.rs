//! Compact shell-friendly comparison summary.

use std::fmt::Write as _;

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::diff::BomComparison;

/// Human-readable summary reporter.
pub struct SummaryReporter;

impl SummaryReporter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, comparison: &BomComparison) -> Result<String, ReportError> {
        let summary = comparison.summary();
        let mut out = String::new();

        writeln!(
            out,
            "BOM comparison: {} -> {}",
            comparison.old_name, comparison.new_name
        )?;
        writeln!(
            out,
            "  added: {}  removed: {}  modified: {}  unchanged: {}",
            summary.added, summary.removed, summary.modified, summary.unchanged
        )?;

        if !comparison.has_changes() {
            writeln!(out, "No changes detected.")?;
            return Ok(out);
        }

        for item in &comparison.added {
            writeln!(out, "  + {item}")?;
        }
        for item in &comparison.removed {
            writeln!(out, "  - {item}")?;
        }
        for change in comparison.field_changes() {
            writeln!(
                out,
                "  ~ {} {}: {} -> {}",
                change.part_number,
                change.field.name(),
                change.old_value,
                change.new_value
            )?;
        }

        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
