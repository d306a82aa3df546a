//! Settings loader
//!
//! Merges verifier settings with Figment. Later providers win:
//!
//! ```text
//! VerifierConfig::default()
//!   → bindcheck.toml (explicit path, or the first default location found)
//!   → BINDCHECK_* environment (nested keys split on "__")
//! ```

use crate::config::VerifierConfig;
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
};
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use bindcheck_domain::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};

/// Loads [`VerifierConfig`] from defaults, a TOML file and the environment
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Loader searching the default locations, reading `BINDCHECK_*` variables
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Read this file instead of searching the default locations
    #[must_use]
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Read `{prefix}_*` environment variables instead of `BINDCHECK_*`
    #[must_use]
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Merge every source and validate the result
    ///
    /// A missing explicit file is logged and skipped; defaults still apply.
    pub fn load(&self) -> Result<VerifierConfig> {
        let config: VerifierConfig = self
            .figment()
            .extract()
            .config_context("Failed to extract configuration")?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Write `config` as TOML to `path`
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &VerifierConfig, path: P) -> Result<()> {
        let rendered =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;
        std::fs::write(path.as_ref(), rendered).with_config_context(|| {
            format!("Failed to write config file {}", path.as_ref().display())
        })
    }

    /// Explicit settings file, if one was given
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn figment(&self) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(VerifierConfig::default()));

        match self.config_file() {
            Some(path) if path.exists() => {
                log_config_loaded(&path, true);
                figment = figment.merge(Toml::file(path));
            }
            Some(path) => log_config_loaded(&path, false),
            None => {}
        }

        let prefix = format!("{}_", self.env_prefix);
        figment.merge(Env::prefixed(&prefix).split(CONFIG_ENV_SEPARATOR))
    }

    fn config_file(&self) -> Option<PathBuf> {
        match &self.config_path {
            Some(path) => Some(path.clone()),
            None => Self::find_default_config_path(),
        }
    }

    /// First existing `bindcheck.toml` in cwd, `./bindcheck/`, or the user config dir
    fn find_default_config_path() -> Option<PathBuf> {
        let cwd = env::current_dir().ok()?;
        [
            Some(cwd.join(DEFAULT_CONFIG_FILENAME)),
            Some(cwd.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::config_dir().map(|dir| dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ]
        .into_iter()
        .flatten()
        .find(|path| path.exists())
    }
}

fn validate_config(config: &VerifierConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;

    if config.containers.iter().any(|name| name.trim().is_empty()) {
        return Err(Error::configuration("Container kind names cannot be empty"));
    }
    Ok(())
}
