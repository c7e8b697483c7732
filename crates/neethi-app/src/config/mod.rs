//! Configuration for Neethi
//!
//! Supports:
//! - `.neethi/config.toml` - Settings, looked up in the working directory
//! - `NEETHI_API_BASE` - Backend origin override
//! - `--api-base` - Backend origin override on the command line

pub mod priority;
pub mod settings;
pub mod types;

pub use priority::{resolve_api_base, ResolvedApiBase, API_BASE_ENV};
pub use settings::{config_path, init_config_dir, load_settings};
pub use types::*;
