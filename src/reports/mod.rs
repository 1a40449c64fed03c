//! Terminal report generation for comparison results.
//!
//! The xlsx report lives in the spreadsheet adapter; this module renders a
//! [`BomComparison`] for stdout in either human-readable summary form or
//! JSON for programmatic integration.

mod json;
mod summary;

pub use json::JsonReporter;
pub use summary::SummaryReporter;

use clap::ValueEnum;
use thiserror::Error;

use crate::diff::BomComparison;

/// Errors that can occur during report generation.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("format error: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Output format for the compare command's stdout report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable change summary.
    #[default]
    Summary,
    /// Structured JSON.
    Json,
}

/// Trait for comparison report generators.
pub trait ReportGenerator {
    /// Render a comparison to a string.
    fn generate(&self, comparison: &BomComparison) -> Result<String, ReportError>;

    /// The format this generator produces.
    fn format(&self) -> ReportFormat;
}

/// Reporter for the requested format.
#[must_use]
pub fn reporter_for(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => Box::new(SummaryReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}
