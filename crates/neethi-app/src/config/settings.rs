//! Settings file loading

use std::path::{Path, PathBuf};

use neethi_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const NEETHI_DIR: &str = ".neethi";

/// Path of the settings file under `base_dir`
pub fn config_path(base_dir: &Path) -> PathBuf {
    base_dir.join(NEETHI_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `.neethi/config.toml`
///
/// A missing, unreadable, or invalid file yields the defaults.
pub fn load_settings(base_dir: &Path) -> Settings {
    let config_path = config_path(base_dir);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create `.neethi/config.toml` with commented defaults
///
/// An existing file is left untouched. Returns the file path.
pub fn init_config_dir(base_dir: &Path) -> Result<PathBuf> {
    let neethi_dir = base_dir.join(NEETHI_DIR);

    if !neethi_dir.exists() {
        std::fs::create_dir_all(&neethi_dir)
            .map_err(|e| Error::config(format!("Failed to create .neethi dir: {}", e)))?;
    }

    let config_path = neethi_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        let default_content = r#"# Neethi Configuration

[api]
# Backend origin. Overridden by NEETHI_API_BASE and --api-base.
base_url = "http://localhost:8000"

[ui]
show_footer = true      # Footer bar on every page except the assistant
chat_widget = true      # Floating chat widget (Ctrl+O)
# welcome_message = "Hello! How can I help you today?"

[behavior]
confirm_quit = true     # Ask before quitting while a request is in flight
"#;
        std::fs::write(&config_path, default_content)
            .map_err(|e| Error::config(format!("Failed to write config.toml: {}", e)))?;
        info!("Created {:?}", config_path);
    }

    Ok(config_path)
}
