//! Layered configuration.
//!
//! Sources, later ones overriding earlier ones:
//! - Bundled defaults (include_str! from cineregional.toml)
//! - `~/.config/cineregional/cineregional.toml`
//! - `./cineregional.toml`
//!
//! API keys are never read from these files, only the names of the
//! environment variables that hold them.

use cineregional_core::PromptVariant;
use cineregional_error::{CineError, CineResult, ConfigError, GeminiError};
use cineregional_models::resolve_api_key;
use config::{Config, ConfigBuilder, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../cineregional.toml");

/// Runtime settings for the analyzer and its Gemini backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CineConfig {
    /// Gemini model identifier
    pub model: String,
    /// REST endpoint root
    pub base_url: String,
    /// Environment variables searched for the API key, in order
    pub api_key_env: Vec<String>,
    /// Upper bound on one upstream call; unset waits indefinitely
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    /// Which data blocks to ask for
    #[serde(default)]
    pub variant: PromptVariant,
}

impl CineConfig {
    /// Only the bundled defaults, ignoring user files.
    ///
    /// # Examples
    ///
    /// ```
    /// use cineregional::CineConfig;
    ///
    /// let config = CineConfig::bundled().unwrap();
    /// assert_eq!(config.api_key_env, vec!["GEMINI_API_KEY", "API_KEY"]);
    /// assert!(config.request_timeout_secs.is_none());
    /// ```
    pub fn bundled() -> CineResult<Self> {
        Self::finish(Self::defaults())
    }

    /// Bundled defaults overlaid with one specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> CineResult<Self> {
        debug!("Loading configuration from file");
        Self::finish(Self::defaults().add_source(File::from(path.as_ref())))
    }

    /// Load with precedence: current dir > home dir > bundled defaults.
    ///
    /// User files are optional and silently skipped when absent.
    #[instrument]
    pub fn load() -> CineResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder = Self::defaults();
        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/cineregional/cineregional.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }
        builder = builder.add_source(File::with_name("cineregional").required(false));

        Self::finish(builder)
    }

    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Resolve the API key through `lookup`, trying each configured name.
    pub fn api_key(&self, lookup: impl Fn(&str) -> Option<String>) -> Result<String, GeminiError> {
        let names: Vec<&str> = self.api_key_env.iter().map(String::as_str).collect();
        resolve_api_key(&names, lookup)
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> CineResult<Self> {
        let config = builder.build().map_err(|e| {
            CineError::from(ConfigError::new(format!(
                "Failed to build configuration: {}",
                e
            )))
        })?;
        config.try_deserialize().map_err(|e| {
            CineError::from(ConfigError::new(format!(
                "Failed to parse configuration: {}",
                e
            )))
        })
    }
}
