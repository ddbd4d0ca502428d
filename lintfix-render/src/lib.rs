//! Rendering helpers for human-readable run output.

use lintfix_types::step::{DiagnosticSummary, LintStep};

/// Renders a step as a fixed human-readable line.
///
/// The match is exhaustive on purpose; a new step variant must pick its
/// rendering here before anything compiles.
pub fn format_step(step: &LintStep) -> String {
    match step {
        LintStep::AnnounceDirectory { directory } => {
            format!("📋 Linting directory: {}", directory)
        }
        LintStep::RunFix {
            tool,
            directory,
            command,
        } => {
            format!(
                "🔧 Running {} auto-fix on: {}\n   ↳ Command: {}",
                tool, directory, command
            )
        }
        LintStep::FixCompleted { tool, passes } => match passes {
            None => format!("✅ {} auto-fix completed", tool),
            Some(passes) => format!("✅ {} auto-fix completed ({} passes)", tool, passes),
        },
        LintStep::RunDiagnostics {
            tool,
            directory,
            command,
        } => {
            format!(
                "🧪 Running {} diagnostics on: {}\n   ↳ Command: {}",
                tool, directory, command
            )
        }
        LintStep::FallbackCheck { tool } => {
            format!("🔄 {}: Falling back to individual file checking...", tool)
        }
        LintStep::Summary { summary } => format_summary(summary),
    }
}

/// Renders the final summary with the per-source error breakdown.
pub fn format_summary(summary: &DiagnosticSummary) -> String {
    let breakdown = format!(
        "{} TypeScript, {} ESLint, {} Biome",
        summary.typescript_errors, summary.eslint_errors, summary.biome_errors
    );
    format!(
        "\n📊 Total: {} errors ({}), {} warnings.",
        summary.total_errors, breakdown, summary.total_warnings
    )
}
