//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod compare;
pub mod convert;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use compare::{execute_compare, validate_args};
pub use convert::execute_convert;
pub use models::{CompareArgs, ConvertArgs};
pub use utils::{display_version, validate_report_file};
