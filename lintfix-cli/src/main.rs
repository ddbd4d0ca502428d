use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Parser;
use lintfix_core::adapters::{FsConfigSource, ShellExecutor, StdoutSink};
use lintfix_core::pipeline::run_lint;
use lintfix_core::settings::RunSettings;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "lintfix",
    version,
    about = "Runs configured lint and format tools against a directory in priority order."
)]
struct Cli {
    /// Target directory to lint.
    #[arg(default_value = "src/")]
    directory: String,

    /// Path to the configuration file.
    #[arg(default_value = "linter.config.json")]
    config: Utf8PathBuf,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("resolve current directory")?;
    let working_dir = Utf8PathBuf::from_path_buf(cwd)
        .map_err(|path| anyhow::anyhow!("current directory is not UTF-8: {}", path.display()))?;

    let settings = RunSettings {
        directory: cli.directory,
        config_path: cli.config,
        working_dir,
    };

    let config_source = FsConfigSource::new(settings.config_path.clone());
    run_lint(&settings, &config_source, &ShellExecutor, &StdoutSink)?;
    Ok(())
}
