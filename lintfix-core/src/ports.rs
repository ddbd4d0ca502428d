//! Port traits abstracting all I/O away from the pipeline.

use camino::Utf8Path;
use lintfix_config::ConfigError;
use lintfix_types::config::LinterConfig;
use lintfix_types::outcome::CommandOutcome;
use thiserror::Error;

/// An external process could not be run at all.
///
/// A non-zero exit code is not a failure here; it is reported inside
/// [`CommandOutcome`] and left to the driver.
#[derive(Debug, Error, Clone)]
#[error("command `{command}` failed: {message}")]
pub struct CommandFailure {
    pub command: String,
    pub message: String,
    pub exit_code: i32,
    pub stderr: String,
}

/// Source of the validated linter configuration.
pub trait ConfigSource {
    fn load(&self) -> Result<LinterConfig, ConfigError>;
}

/// Spawns external tool commands.
pub trait CommandExecutor {
    fn execute(
        &self,
        tool: &str,
        command: &str,
        cwd: &Utf8Path,
    ) -> Result<CommandOutcome, CommandFailure>;
}

/// Fire-and-forget line output.
pub trait OutputSink {
    fn emit(&self, line: &str);
}
