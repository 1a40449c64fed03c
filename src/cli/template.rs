//! Create-template command handler.

use anyhow::Result;
use std::path::Path;

use crate::xlsx::write_template;

/// Emit a blank template with the styled header row.
pub fn run_create_template(output: &Path) -> Result<()> {
    write_template(output)?;
    println!("Template created: {}", output.display());
    Ok(())
}
