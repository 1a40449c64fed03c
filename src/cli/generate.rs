//! Generate command handler.
//!
//! Builds the row sequence from the spec tree, validates it, and writes
//! the output file. Nothing is written while validation issues remain.

use anyhow::Result;

use crate::builder::BomBuilder;
use crate::config::GenerateConfig;
use crate::error::BomError;
use crate::model::{headers_match, TEMPLATE_HEADERS};
use crate::xlsx::{read_template_headers, write_bom_file};

/// Run the generate command.
pub fn run_generate(config: GenerateConfig) -> Result<()> {
    if let Some(template) = &config.template {
        let headers = read_template_headers(template)?;
        if !headers_match(&headers) {
            if config.allow_header_mismatch {
                tracing::warn!(
                    "template headers do not match the expected format; continuing on override"
                );
            } else {
                return Err(BomError::SchemaMismatch {
                    found: headers,
                    expected: TEMPLATE_HEADERS.iter().map(|h| (*h).to_string()).collect(),
                }
                .into());
            }
        }
    }

    let mut builder = BomBuilder::new();
    let outcome = builder.build(&config.spec)?;

    if !outcome.issues.is_empty() {
        for issue in &outcome.issues {
            tracing::error!("{issue}");
        }
        return Err(BomError::validation(outcome.issues).into());
    }

    write_bom_file(&outcome.rows, &config.output)?;

    let per_level = |level: u8| {
        outcome
            .rows
            .iter()
            .filter(|r| r.level == Some(level))
            .count()
    };
    tracing::info!(
        "Wrote {} rows (level 1: {}, level 2: {}, level 3: {})",
        outcome.rows.len(),
        per_level(1),
        per_level(2),
        per_level(3)
    );
    println!("Saved: {}", config.output.display());
    Ok(())
}
