//! CLI command handlers.

mod build;
mod config;
mod inspect;
mod log_payload;

pub use build::{run_build_from_item, run_build_from_path};
pub use config::run_config;
pub use inspect::run_inspect;
pub use log_payload::run_log_payload;
