//! Configuration types for bom-tools operations.
//!
//! `main.rs` builds these from CLI arguments; the handlers in [`crate::cli`]
//! consume them. A [`BomSpec`] can also be loaded from a JSON file, which
//! replaces the interactive collection mechanism of a form-driven UI.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::builder::BomSpec;
use crate::error::{BomError, Result};
use crate::reports::ReportFormat;

/// Configuration for the `generate` command.
#[derive(Debug)]
pub struct GenerateConfig {
    /// Template whose header row is validated before writing. Optional:
    /// without a template the fixed schema is used directly.
    pub template: Option<PathBuf>,
    /// Output BOM file path.
    pub output: PathBuf,
    /// Proceed despite a template header mismatch (explicit override).
    pub allow_header_mismatch: bool,
    /// The fully-formed specification tree to build.
    pub spec: BomSpec,
}

/// Configuration for the `compare` command.
#[derive(Debug)]
pub struct CompareConfig {
    /// Path to the old/baseline BOM file.
    pub old: PathBuf,
    /// Path to the new BOM file.
    pub new: PathBuf,
    /// Optional xlsx comparison report path.
    pub report: Option<PathBuf>,
    /// Stdout report format.
    pub format: ReportFormat,
    /// Exit with code 1 when any change is detected.
    pub fail_on_change: bool,
}

/// Load a [`BomSpec`] from a JSON file.
pub fn load_spec(path: &Path) -> Result<BomSpec> {
    let file = File::open(path).map_err(|e| BomError::io(path, e))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| BomError::config(format!("invalid spec file {}: {e}", path.display())))
}
