//! Neethi - terminal client for Department of Justice citizen services
//!
//! The binary is a thin wrapper around [`run`]; the interactive UI lives in
//! `neethi-tui` and the scriptable NDJSON mode in [`headless`].

pub mod headless;

pub use headless::run_headless;

use neethi_app::config::{load_settings, resolve_api_base, API_BASE_ENV};
use neethi_core::prelude::*;

/// Launch options gathered from the command line
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// `--api-base` value, if given
    pub api_base: Option<String>,
    pub headless: bool,
}

/// Main application entry point
pub async fn run(options: LaunchOptions) -> Result<()> {
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Logs go to a file; the terminal and stdout belong to the front end
    neethi_core::logging::init()?;

    let base_dir = std::env::current_dir().context("resolving working directory")?;
    let settings = load_settings(&base_dir);
    let env_base = std::env::var(API_BASE_ENV).ok();
    let api_base = resolve_api_base(options.api_base.as_deref(), env_base.as_deref(), &settings);

    info!("Backend: {} (from {})", api_base.url, api_base.source);

    let mode = if options.headless { "headless" } else { "terminal" };
    let result = if options.headless {
        run_headless(settings, &api_base.url).await
    } else {
        neethi_tui::run_tui(settings, &api_base.url).await
    }
    .with_context(|| format!("{} session against {}", mode, api_base.url));

    info!("Neethi exiting");
    result
}
