//! Application Configuration
//!
//! Values baked in at build time. Set `TASKBOARD_API_BASE`,
//! `TASKBOARD_SESSION_KEY` or `TASKBOARD_LOG_LEVEL` when running `trunk build`
//! to override the defaults.

use log::LevelFilter;
use reqwest::Url;

pub const DEFAULT_API_BASE: &str = "http://localhost:3003/api";
pub const DEFAULT_SESSION_KEY: &str = "user";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// REST base without trailing slash
    pub api_base_url: String,
    /// Local storage key holding the session record
    pub session_key: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            session_key: DEFAULT_SESSION_KEY.to_string(),
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    pub fn from_values(
        api_base: Option<&str>,
        session_key: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: api_base
                .map(normalize_base_url)
                .unwrap_or(defaults.api_base_url),
            session_key: session_key
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.session_key),
            log_level: parse_log_level(log_level),
        }
    }

    /// Install the logger first so warnings raised while reading the
    /// remaining values are recorded
    pub fn load_with_logging(
        api_base: Option<&str>,
        session_key: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        if let Err(e) = console_logger::init(parse_log_level(log_level)) {
            log::warn!("[CONFIG] Logger already installed: {}", e);
        }
        Self::from_values(api_base, session_key, log_level)
    }

    /// Build-time config with logging installed
    pub fn load_build_env() -> Self {
        Self::load_with_logging(
            option_env!("TASKBOARD_API_BASE"),
            option_env!("TASKBOARD_SESSION_KEY"),
            option_env!("TASKBOARD_LOG_LEVEL"),
        )
    }
}

fn parse_log_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|l| l.trim().parse().ok())
        .unwrap_or(LevelFilter::Info)
}

/// Trim trailing slashes; fall back to the default for unusable URLs
fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    match Url::parse(trimmed) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => trimmed.to_string(),
        _ => {
            log::warn!("[CONFIG] Ignoring invalid API base {:?}", raw);
            DEFAULT_API_BASE.to_string()
        }
    }
}
