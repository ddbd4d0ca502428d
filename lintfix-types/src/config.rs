/// One external tool invocation declared in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    /// Human-readable tool name, e.g. "ESLint".
    pub name: String,

    /// Shell command template. May contain the `${directory}` placeholder
    /// or a quoted legacy `"src/"` default.
    pub command: String,

    /// Fix commands mutate files in place; diagnostic commands only report.
    pub is_fix: bool,

    /// Ordering key; lower levels run earlier within their group.
    pub level: u32,
}

/// Named priority group of rule identifiers.
///
/// Declared configuration metadata. The planner does not consume it; it is
/// validated and retained as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityLevel {
    /// Group level, at least 1.
    pub level: u32,

    pub name: String,

    /// Rule identifiers belonging to the group; never empty.
    pub rules: Vec<String>,
}

/// Validated linter configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinterConfig {
    pub commands: Vec<CommandSpec>,
    pub priority_levels: Vec<PriorityLevel>,
}
