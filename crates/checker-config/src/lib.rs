//! # checker-config
//!
//! Layered configuration loading for Course Checker using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`COURSE_CHECKER_*` prefix, `__` as separator)
//! 2. The legacy `TOKEN` variable, mapped to `canvas.token`
//! 3. Project-level `.course-checker/config.toml`
//! 4. User-level `~/.config/course-checker/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `COURSE_CHECKER_CANVAS__TOKEN` -> `canvas.token`,
//! `COURSE_CHECKER_RULES__EXCLUDED_SIS_MARKER` -> `rules.excluded_sis_marker`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use checker_config::CheckerConfig;
//!
//! let config = CheckerConfig::load_with_dotenv().expect("config");
//! if config.canvas.is_configured() {
//!     println!("Canvas: {}", config.canvas.base_url);
//! }
//! ```

mod canvas;
mod error;
mod rules;
mod sub_accounts;

pub use canvas::{CanvasConfig, MAX_PAGE_SIZE};
pub use error::ConfigError;
pub use rules::RulesConfig;
pub use sub_accounts::{SubAccount, SubAccounts};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix of environment overrides.
pub const ENV_PREFIX: &str = "COURSE_CHECKER_";

/// Token variable name used by earlier deployments.
pub const LEGACY_TOKEN_VAR: &str = "TOKEN";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CheckerConfig {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default)]
    pub rules: RulesConfig,
    #[serde(default)]
    pub sub_accounts: SubAccounts,
}

impl CheckerConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load `.env` from the current directory (if any), then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source is malformed.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".course-checker/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: legacy TOKEN
        figment = figment.merge(
            Env::raw()
                .only(&[LEGACY_TOKEN_VAR])
                .map(|_| "canvas.token".into()),
        );

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("course-checker").join("config.toml"))
    }
}
