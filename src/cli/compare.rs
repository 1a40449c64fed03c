//! Compare command handler.
//!
//! Reads two BOM files, runs the diff engine, optionally writes the xlsx
//! report, and renders a stdout report.

use anyhow::Result;

use super::exit_codes;
use crate::config::CompareConfig;
use crate::diff::compare;
use crate::reports::reporter_for;
use crate::xlsx::{read_bom, write_comparison};

/// Run the compare command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_compare(config: CompareConfig) -> Result<i32> {
    let old = read_bom(&config.old)?;
    let new = read_bom(&config.new)?;
    tracing::info!(
        "Parsed {} items from {}, {} items from {}",
        old.item_count(),
        config.old.display(),
        new.item_count(),
        config.new.display()
    );

    let comparison = compare(&old, &new);

    if let Some(report_path) = &config.report {
        write_comparison(&comparison, report_path)?;
        println!("Comparison report generated: {}", report_path.display());
    }

    let report = reporter_for(config.format).generate(&comparison)?;
    print!("{report}");

    if config.fail_on_change && comparison.has_changes() {
        return Ok(exit_codes::CHANGES_DETECTED);
    }
    Ok(exit_codes::SUCCESS)
}
