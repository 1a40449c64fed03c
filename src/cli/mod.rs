//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs; each implements the business
//! logic for one subcommand.

mod compare;
mod generate;
mod template;

pub use compare::run_compare;
pub use generate::run_generate;
pub use template::run_create_template;

// Re-export config types used by handlers
pub use crate::config::{CompareConfig, GenerateConfig};

/// Process exit codes shared by the handlers.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CHANGES_DETECTED: i32 = 1;
}
