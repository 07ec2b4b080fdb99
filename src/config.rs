//! Server configuration parsed from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Url;

use crate::search::{DEFAULT_SEARCH_ENGINE_URL, DEFAULT_SEARCH_QUERY_PARAM, SearchEngine};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_SESSION_IDLE_SECS: u64 = 1800;
pub const DEFAULT_SESSION_SWEEP_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid SEARCH_ENGINE_URL '{url}': {source}")]
    InvalidSearchUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("SEARCH_ENGINE_URL must be http or https, got '{0}'")]
    UnsupportedScheme(String),
    #[error("SEARCH_QUERY_PARAM must not be empty")]
    EmptyQueryParam,
    #[error("SESSION_SWEEP_INTERVAL_SECS must be at least 1")]
    ZeroSweepInterval,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    /// Sessions untouched for this long are discarded.
    pub idle_timeout: Duration,
    pub sweep_interval: Duration,
    pub max_sessions: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            idle_timeout: Duration::from_secs(DEFAULT_SESSION_IDLE_SECS),
            sweep_interval: Duration::from_secs(DEFAULT_SESSION_SWEEP_INTERVAL_SECS),
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub static_dir: PathBuf,
    pub search: SearchEngine,
    pub sessions: SessionLimits,
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `STATIC_DIR`: default `<crate>/static`
    /// - `SEARCH_ENGINE_URL`: default Google web search
    /// - `SEARCH_QUERY_PARAM`: default `q`
    /// - `SESSION_IDLE_SECS`: default 1800
    /// - `SESSION_SWEEP_INTERVAL_SECS`: default 60
    /// - `MAX_SESSIONS`: default 10000
    pub fn from_env() -> Result<Self, ConfigError> {
        let search = parse_search_engine(
            std::env::var("SEARCH_ENGINE_URL").ok().as_deref(),
            std::env::var("SEARCH_QUERY_PARAM").ok().as_deref(),
        )?;
        let sessions = parse_session_limits(
            env_parse("SESSION_IDLE_SECS", DEFAULT_SESSION_IDLE_SECS),
            env_parse("SESSION_SWEEP_INTERVAL_SECS", DEFAULT_SESSION_SWEEP_INTERVAL_SECS),
            env_parse("MAX_SESSIONS", DEFAULT_MAX_SESSIONS),
        )?;

        Ok(Self { port: env_parse("PORT", DEFAULT_PORT), static_dir: static_dir(), search, sessions })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            static_dir: default_static_dir(),
            search: SearchEngine::default(),
            sessions: SessionLimits::default(),
        }
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static")
}

/// Resolve the directory holding the browser form.
fn static_dir() -> PathBuf {
    std::env::var("STATIC_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| default_static_dir())
}

/// The sweep ticker cannot run with a zero period.
fn parse_session_limits(idle_secs: u64, sweep_secs: u64, max_sessions: usize) -> Result<SessionLimits, ConfigError> {
    if sweep_secs == 0 {
        return Err(ConfigError::ZeroSweepInterval);
    }
    Ok(SessionLimits {
        idle_timeout: Duration::from_secs(idle_secs),
        sweep_interval: Duration::from_secs(sweep_secs),
        max_sessions,
    })
}

fn parse_search_engine(url: Option<&str>, param: Option<&str>) -> Result<SearchEngine, ConfigError> {
    let raw = url.unwrap_or(DEFAULT_SEARCH_ENGINE_URL);
    let base =
        Url::parse(raw).map_err(|source| ConfigError::InvalidSearchUrl { url: raw.to_owned(), source })?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(ConfigError::UnsupportedScheme(base.scheme().to_owned()));
    }

    let param = param.unwrap_or(DEFAULT_SEARCH_QUERY_PARAM).trim();
    if param.is_empty() {
        return Err(ConfigError::EmptyQueryParam);
    }
    Ok(SearchEngine::new(base, param))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
