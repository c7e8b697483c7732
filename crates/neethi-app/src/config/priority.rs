//! Backend origin resolution
//!
//! Priority order:
//! 1. `--api-base`
//! 2. `NEETHI_API_BASE`
//! 3. `.neethi/config.toml` `[api] base_url`
//! 4. `http://localhost:8000`

use neethi_client::DEFAULT_BASE_URL;

use super::types::{ConfigSource, Settings};

/// Environment variable overriding the backend origin
pub const API_BASE_ENV: &str = "NEETHI_API_BASE";

/// Backend origin with source tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedApiBase {
    pub url: String,
    pub source: ConfigSource,
}

/// Pick the backend origin; blank values are skipped
pub fn resolve_api_base(
    cli: Option<&str>,
    env: Option<&str>,
    settings: &Settings,
) -> ResolvedApiBase {
    let non_blank = |v: Option<&str>| v.map(str::trim).filter(|v| !v.is_empty()).map(String::from);

    if let Some(url) = non_blank(cli) {
        return ResolvedApiBase {
            url,
            source: ConfigSource::CommandLine,
        };
    }
    if let Some(url) = non_blank(env) {
        return ResolvedApiBase {
            url,
            source: ConfigSource::Environment,
        };
    }
    match non_blank(Some(settings.api.base_url.as_str())) {
        Some(url) if url != DEFAULT_BASE_URL => ResolvedApiBase {
            url,
            source: ConfigSource::ConfigFile,
        },
        _ => ResolvedApiBase {
            url: DEFAULT_BASE_URL.to_string(),
            source: ConfigSource::Default,
        },
    }
}
