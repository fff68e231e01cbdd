//! User configuration at ~/.config/agenda/config.toml

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::{AgendaError, AgendaResult};

static DEFAULT_LOG_FILTER: &str = "warn";
static ENV_PREFIX: &str = "AGENDA";

fn default_color() -> bool {
    true
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

/// Settings read from the config file, overridable through `AGENDA_*`
/// environment variables (e.g. `AGENDA_COLOR=false`).
///
/// The file is optional; every field has a default.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AgendaConfig {
    /// Colorize menu output
    #[serde(default = "default_color")]
    pub color: bool,

    /// tracing-subscriber filter directive used when AGENDA_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        AgendaConfig {
            color: default_color(),
            log_filter: default_log_filter(),
        }
    }
}

impl AgendaConfig {
    pub fn config_path() -> AgendaResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| AgendaError::Config("Could not determine config directory".into()))?
            .join("agenda");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from `path`, or from the default location when `None`.
    /// A missing file is not an error.
    pub fn load(path: Option<&Path>) -> AgendaResult<Self> {
        Self::load_with_env(path, Self::environment())
    }

    /// Like [`AgendaConfig::load`], but with the environment overrides taken
    /// from `env` instead of the process environment.
    pub fn load_with_env(path: Option<&Path>, env: Environment) -> AgendaResult<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(env)
            .build()
            .map_err(|e| AgendaError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| AgendaError::Config(e.to_string()))
    }

    /// `AGENDA_*` variables, e.g. `AGENDA_COLOR=false`
    pub fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .ignore_empty(true)
    }
}
