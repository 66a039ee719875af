//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/movlib/movlib.toml`
//! 3. Environment variables: `MOVLIB_*` prefix

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::domain::DEFAULT_DATE_FORMAT;

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Default catalog file used when a command omits its source argument
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_file: Option<PathBuf>,
    /// chrono layout for the date column of catalog records
    pub date_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_file: None,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder().set_default("date_format", DEFAULT_DATE_FORMAT)?;

        if let Some(path) = global_config_path() {
            if path.exists() {
                builder = builder.add_source(File::from(path));
            }
        }

        builder = builder.add_source(Environment::with_prefix("MOVLIB"));

        let settings: Settings = builder.build()?.try_deserialize()?;
        Ok(settings.expanded())
    }

    /// Expand `~` and `$VAR` in configured paths.
    fn expanded(mut self) -> Self {
        self.catalog_file = self
            .catalog_file
            .map(|p| PathBuf::from(expand_env_vars(&p.to_string_lossy())));
        self
    }

    /// TOML template written by `config init`.
    pub fn template() -> String {
        let body = toml::to_string_pretty(&Settings::default()).unwrap_or_default();
        format!(
            "# movlib configuration\n\
             # catalog_file = \"~/movies/catalog.tsv\"\n\
             {}",
            body
        )
    }
}

/// Path of the global config file, if a home directory can be determined.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "movlib").map(|dirs| dirs.config_dir().join("movlib.toml"))
}

/// Expand environment variables and `~` in a path string.
///
/// Falls back to the input unchanged when expansion fails (e.g. an unset
/// variable).
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
