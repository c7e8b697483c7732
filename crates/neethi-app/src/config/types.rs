//! Configuration types

use std::fmt;

use serde::{Deserialize, Serialize};

use neethi_client::DEFAULT_BASE_URL;

/// Application settings (.neethi/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,
}

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiSettings {
    /// Backend origin, e.g. `http://localhost:8000`
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the footer bar on pages other than the assistant
    #[serde(default = "default_true")]
    pub show_footer: bool,

    /// Allow the floating chat widget
    #[serde(default = "default_true")]
    pub chat_widget: bool,

    /// Replace the assistant's opening message
    #[serde(default)]
    pub welcome_message: Option<String>,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_footer: true,
            chat_widget: true,
            welcome_message: None,
        }
    }
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before quitting while a request is in flight
    #[serde(default = "default_true")]
    pub confirm_quit: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self { confirm_quit: true }
    }
}

/// Where a resolved value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// From `--api-base`
    CommandLine,
    /// From `NEETHI_API_BASE`
    Environment,
    /// From `.neethi/config.toml`
    ConfigFile,
    /// Built-in fallback
    Default,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::CommandLine => write!(f, "command line"),
            ConfigSource::Environment => write!(f, "environment"),
            ConfigSource::ConfigFile => write!(f, "config file"),
            ConfigSource::Default => write!(f, "default"),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_true() -> bool {
    true
}
