use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use lintfix_types::config::LinterConfig;
use lintfix_types::wire::ConfigDoc;
use thiserror::Error;
use tracing::debug;

/// The default configuration file name.
pub const CONFIG_FILE_NAME: &str = "linter.config.json";

/// Why a configuration file could not be turned into a [`LinterConfig`].
///
/// Every variant carries the offending path; all of them are fatal to the
/// run.
#[derive(Debug, Error, Clone)]
pub enum ConfigError {
    #[error("{path}: failed to read config file: {message}")]
    Io { path: Utf8PathBuf, message: String },

    #[error("{path}: invalid JSON in config file: {message}")]
    Json { path: Utf8PathBuf, message: String },

    #[error("{path}: invalid config schema: {message}")]
    Schema { path: Utf8PathBuf, message: String },
}

impl ConfigError {
    /// Path of the offending configuration file.
    pub fn path(&self) -> &Utf8Path {
        match self {
            ConfigError::Io { path, .. }
            | ConfigError::Json { path, .. }
            | ConfigError::Schema { path, .. } => path,
        }
    }
}

/// Loads and validates the configuration file at `path`.
pub fn load_config(path: &Utf8Path) -> Result<LinterConfig, ConfigError> {
    debug!(path = %path, "loading linter configuration");

    let contents = fs::read_to_string(path).map_err(|err| ConfigError::Io {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    parse_config(&contents, path)
}

/// Parses and validates a configuration document from a string.
///
/// `path` is only used for error reporting.
pub fn parse_config(contents: &str, path: &Utf8Path) -> Result<LinterConfig, ConfigError> {
    let doc: ConfigDoc = serde_json::from_str(contents).map_err(|err| ConfigError::Json {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    LinterConfig::try_from(doc).map_err(|err| ConfigError::Schema {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}
