/// Outcome of a single external command invocation.
///
/// A non-zero exit code lives here as data; it is not an executor error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub tool: String,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub duration_ms: u64,
}
