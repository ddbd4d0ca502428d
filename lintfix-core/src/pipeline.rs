//! The lint pipeline: load configuration, plan steps, drive execution.
//!
//! These entry points are I/O-agnostic: configuration, process spawning,
//! and output all go through the port traits.

use crate::ports::{CommandExecutor, CommandFailure, ConfigSource, OutputSink};
use crate::settings::RunSettings;
use camino::Utf8Path;
use lintfix_config::ConfigError;
use lintfix_domain::{plan_steps, substitute_directory};
use lintfix_render::format_step;
use lintfix_types::outcome::CommandOutcome;
use lintfix_types::step::{DiagnosticSummary, LintStep};
use tracing::debug;

/// Error type for a lint run. Both kinds abort the run and propagate
/// unchanged to the caller.
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Command(#[from] CommandFailure),
}

/// Runs the full pipeline: load, plan, execute, summarize.
pub fn run_lint(
    settings: &RunSettings,
    config_source: &dyn ConfigSource,
    executor: &dyn CommandExecutor,
    sink: &dyn OutputSink,
) -> Result<DiagnosticSummary, LintError> {
    let config = config_source.load()?;
    let steps = plan_steps(&config, &settings.directory);
    debug!(steps = steps.len(), "planned lint steps");

    let summary = run_steps(&steps, &settings.working_dir, executor, sink)?;
    Ok(summary)
}

/// Walks the planned steps strictly in order, one at a time.
///
/// Diagnostics assume the filesystem state left by fixes, so there is no
/// parallelism here. Runnable steps are announced, executed with the
/// working directory substituted into their template, and followed by a
/// completion announcement. The first executor failure aborts the
/// remainder; fixes already applied stay applied.
pub fn run_steps(
    steps: &[LintStep],
    working_dir: &Utf8Path,
    executor: &dyn CommandExecutor,
    sink: &dyn OutputSink,
) -> Result<DiagnosticSummary, CommandFailure> {
    let mut outcomes = Vec::new();

    for step in steps {
        sink.emit(&format_step(step));

        match step {
            LintStep::RunFix { tool, command, .. }
            | LintStep::RunDiagnostics { tool, command, .. } => {
                let resolved = substitute_directory(command, working_dir.as_str());
                let outcome = executor.execute(tool, &resolved, working_dir)?;
                sink.emit(&format_step(&LintStep::FixCompleted {
                    tool: tool.clone(),
                    passes: None,
                }));
                outcomes.push(outcome);
            }
            LintStep::AnnounceDirectory { .. }
            | LintStep::FixCompleted { .. }
            | LintStep::FallbackCheck { .. }
            | LintStep::Summary { .. } => {}
        }
    }

    let summary = summarize(&outcomes);
    sink.emit(&format_step(&LintStep::Summary { summary }));
    Ok(summary)
}

/// Folds command outcomes into the final summary.
///
/// Tool output is not parsed into per-source counts yet, so every
/// category reports zero; the totals are still computed as the sum of the
/// per-source counts so the seam is ready for real aggregation.
pub fn summarize(_outcomes: &[CommandOutcome]) -> DiagnosticSummary {
    let typescript_errors = 0;
    let eslint_errors = 0;
    let biome_errors = 0;

    DiagnosticSummary {
        typescript_errors,
        eslint_errors,
        biome_errors,
        total_errors: typescript_errors + eslint_errors + biome_errors,
        total_warnings: 0,
    }
}
