/// One step of a lint run.
///
/// Steps are produced once by the planner and consumed once by the driver.
/// Every consumer matches exhaustively, so adding a variant is a compile
/// error at each consumption site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintStep {
    /// Announces the directory the run targets. Always the first step.
    AnnounceDirectory { directory: String },

    /// Run a command that mutates files in place.
    RunFix {
        tool: String,
        directory: String,
        command: String,
    },

    /// A runnable command finished; `passes` is rendered only when known.
    FixCompleted { tool: String, passes: Option<u32> },

    /// Run a command that only reports issues.
    RunDiagnostics {
        tool: String,
        directory: String,
        command: String,
    },

    /// A tool switched to per-file checking.
    FallbackCheck { tool: String },

    /// Final aggregate of the run.
    Summary { summary: DiagnosticSummary },
}

/// Aggregated error and warning counts for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiagnosticSummary {
    pub typescript_errors: u64,
    pub eslint_errors: u64,
    pub biome_errors: u64,
    pub total_errors: u64,
    pub total_warnings: u64,
}
