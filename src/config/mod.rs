//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `CODEMATCH_*` environment
//! variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::DEFAULT_TOP_N;

/// Runtime configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `CODEMATCH_*` overrides on top of
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the codelist catalog. Default:
    /// `https://www.opencodelists.org`.
    pub api_url: String,

    /// Path to the annotator lexicon artifact. Absent means the annotator
    /// runs in stub mode.
    pub lexicon_path: Option<PathBuf>,

    /// Shortlist size per ranking axis. Default: `5`.
    pub top_n: usize,

    /// HTTP request timeout in seconds. Default: `30`.
    pub http_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: crate::catalog::DEFAULT_BASE_URL.to_string(),
            lexicon_path: None,
            top_n: DEFAULT_TOP_N,
            http_timeout_secs: 30,
        }
    }
}

impl Config {
    const ENV_API_URL: &'static str = "CODEMATCH_API_URL";
    const ENV_LEXICON_PATH: &'static str = "CODEMATCH_LEXICON_PATH";
    const ENV_TOP_N: &'static str = "CODEMATCH_TOP_N";
    const ENV_HTTP_TIMEOUT_SECS: &'static str = "CODEMATCH_HTTP_TIMEOUT_SECS";

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_url = Self::parse_string_from_env(Self::ENV_API_URL, defaults.api_url);
        let lexicon_path = Self::parse_optional_path_from_env(Self::ENV_LEXICON_PATH);
        let top_n = Self::parse_top_n_from_env(defaults.top_n)?;
        let http_timeout_secs =
            Self::parse_u64_from_env(Self::ENV_HTTP_TIMEOUT_SECS, defaults.http_timeout_secs);

        Ok(Self {
            api_url,
            lexicon_path,
            top_n,
            http_timeout_secs,
        })
    }

    /// Validates paths and basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.top_n == 0 {
            return Err(ConfigError::InvalidTopN {
                value: self.top_n.to_string(),
            });
        }

        if let Some(ref path) = self.lexicon_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        Ok(())
    }

    /// HTTP timeout as a [`Duration`].
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    fn parse_top_n_from_env(default: usize) -> Result<usize, ConfigError> {
        match env::var(Self::ENV_TOP_N) {
            Ok(value) => {
                let top_n: usize = value.parse().map_err(|e| ConfigError::TopNParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if top_n == 0 {
                    return Err(ConfigError::InvalidTopN { value });
                }

                Ok(top_n)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}
