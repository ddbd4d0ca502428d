//! Clap-free settings for the lint pipeline.

use camino::Utf8PathBuf;

/// Settings for a lint run.
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Target directory announced in the plan.
    pub directory: String,

    /// Path to the configuration file.
    pub config_path: Utf8PathBuf,

    /// Directory commands run in; also the value substituted into
    /// command templates at execution time.
    pub working_dir: Utf8PathBuf,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            directory: "src/".to_string(),
            config_path: Utf8PathBuf::from("linter.config.json"),
            working_dir: Utf8PathBuf::from("."),
        }
    }
}
