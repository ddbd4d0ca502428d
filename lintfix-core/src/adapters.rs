//! Default process- and filesystem-backed port implementations.

use crate::ports::{CommandExecutor, CommandFailure, ConfigSource, OutputSink};
use camino::{Utf8Path, Utf8PathBuf};
use lintfix_config::ConfigError;
use lintfix_types::config::LinterConfig;
use lintfix_types::outcome::CommandOutcome;
use std::process::Command;
use std::time::Instant;
use tracing::debug;

/// Loads the configuration from disk via [`lintfix_config::load_config`].
#[derive(Debug, Clone)]
pub struct FsConfigSource {
    pub path: Utf8PathBuf,
}

impl FsConfigSource {
    pub fn new(path: Utf8PathBuf) -> Self {
        Self { path }
    }
}

impl ConfigSource for FsConfigSource {
    fn load(&self) -> Result<LinterConfig, ConfigError> {
        lintfix_config::load_config(&self.path)
    }
}

/// In-memory configuration source for embedding and testing.
#[derive(Debug, Clone)]
pub struct StaticConfigSource {
    config: LinterConfig,
}

impl StaticConfigSource {
    pub fn new(config: LinterConfig) -> Self {
        Self { config }
    }
}

impl ConfigSource for StaticConfigSource {
    fn load(&self) -> Result<LinterConfig, ConfigError> {
        Ok(self.config.clone())
    }
}

/// Runs commands through `sh -c` in the requested working directory.
///
/// The child's stdout and stderr are captured in full; a hung child
/// blocks the run. Timeouts, if wanted, belong in a wrapping executor,
/// not in the pipeline.
#[derive(Debug, Clone, Default)]
pub struct ShellExecutor;

impl CommandExecutor for ShellExecutor {
    fn execute(
        &self,
        tool: &str,
        command: &str,
        cwd: &Utf8Path,
    ) -> Result<CommandOutcome, CommandFailure> {
        debug!(tool, command, cwd = %cwd, "spawning command");
        let started = Instant::now();

        let output = Command::new("sh")
            .arg("-c")
            .arg(command)
            .current_dir(cwd)
            .output()
            .map_err(|err| CommandFailure {
                command: command.to_string(),
                message: err.to_string(),
                exit_code: -1,
                stderr: String::new(),
            })?;

        // A signal-terminated child has no exit code.
        let exit_code = output.status.code().unwrap_or(-1);

        Ok(CommandOutcome {
            tool: tool.to_string(),
            exit_code,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            duration_ms: started.elapsed().as_millis() as u64,
        })
    }
}

/// Writes announcement lines to stdout.
#[derive(Debug, Clone, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&self, line: &str) {
        println!("{}", line);
    }
}
