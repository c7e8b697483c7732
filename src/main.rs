//! Neethi - Department of Justice citizen services in the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use clap::Parser;
use neethi::LaunchOptions;
use neethi_app::config::init_config_dir;
use neethi_core::prelude::*;

/// Neethi - Department of Justice citizen services in the terminal
#[derive(Parser, Debug)]
#[command(name = "neethi", version)]
#[command(about = "eCourts, Tele-Law, legal aid and the Neethi assistant in your terminal", long_about = None)]
struct Args {
    /// Backend origin, e.g. http://localhost:8000 (overrides NEETHI_API_BASE)
    #[arg(long, value_name = "URL")]
    api_base: Option<String>,

    /// Run in headless mode (NDJSON output, commands on stdin, no TUI)
    #[arg(long)]
    headless: bool,

    /// Write a default .neethi/config.toml in the current directory and exit
    #[arg(long, conflicts_with = "headless")]
    init: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if args.init {
        let path = init_config_dir(&std::env::current_dir()?)?;
        println!("Config file: {}", path.display());
        return Ok(());
    }

    neethi::run(LaunchOptions {
        api_base: args.api_base,
        headless: args.headless,
    })
    .await
}
