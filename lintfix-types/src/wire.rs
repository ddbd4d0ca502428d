//! Schema-exact wire representation of the JSON configuration document.
//!
//! Unknown fields are tolerated; both top-level lists default to empty.
//! Converting into [`LinterConfig`] is the validation boundary: a document
//! that converts cleanly satisfies every schema rule.

use serde::{Deserialize, Serialize};

use crate::config::{CommandSpec, LinterConfig, PriorityLevel};

/// Top-level configuration document as found on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigDoc {
    #[serde(default)]
    pub commands: Vec<CommandDoc>,

    #[serde(default, rename = "priorityLevels")]
    pub priority_levels: Vec<PriorityLevelDoc>,
}

/// One command entry as found on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandDoc {
    #[serde(rename = "commandName")]
    pub command_name: String,

    pub command: String,

    #[serde(rename = "isCommandFix")]
    pub is_command_fix: bool,

    /// Kept signed so range violations surface as schema errors, not
    /// parse errors.
    pub level: i64,
}

/// One priority level entry as found on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityLevelDoc {
    pub level: i64,
    pub name: String,

    #[serde(default)]
    pub rules: Vec<String>,
}

/// Schema violations found while converting a wire document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    EmptyCommandField { index: usize, field: &'static str },
    CommandLevelOutOfRange { index: usize, value: i64 },
    EmptyPriorityField { index: usize, field: &'static str },
    PriorityLevelOutOfRange { index: usize, value: i64 },
    EmptyRules { index: usize },
    EmptyRule { index: usize, rule: usize },
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaError::EmptyCommandField { index, field } => {
                write!(f, "commands[{}]: {} must be non-empty", index, field)
            }
            SchemaError::CommandLevelOutOfRange { index, value } => {
                write!(
                    f,
                    "commands[{}]: level must be a non-negative integer (got {})",
                    index, value
                )
            }
            SchemaError::EmptyPriorityField { index, field } => {
                write!(f, "priorityLevels[{}]: {} must be non-empty", index, field)
            }
            SchemaError::PriorityLevelOutOfRange { index, value } => {
                write!(
                    f,
                    "priorityLevels[{}]: level must be at least 1 (got {})",
                    index, value
                )
            }
            SchemaError::EmptyRules { index } => {
                write!(f, "priorityLevels[{}]: rules must be non-empty", index)
            }
            SchemaError::EmptyRule { index, rule } => {
                write!(
                    f,
                    "priorityLevels[{}]: rules[{}] must be non-empty",
                    index, rule
                )
            }
        }
    }
}

impl std::error::Error for SchemaError {}

impl TryFrom<ConfigDoc> for LinterConfig {
    type Error = SchemaError;

    fn try_from(doc: ConfigDoc) -> Result<Self, Self::Error> {
        let mut commands = Vec::with_capacity(doc.commands.len());
        for (index, cmd) in doc.commands.into_iter().enumerate() {
            if cmd.command_name.is_empty() {
                return Err(SchemaError::EmptyCommandField {
                    index,
                    field: "commandName",
                });
            }
            if cmd.command.is_empty() {
                return Err(SchemaError::EmptyCommandField {
                    index,
                    field: "command",
                });
            }
            let level = u32::try_from(cmd.level)
                .map_err(|_| SchemaError::CommandLevelOutOfRange {
                    index,
                    value: cmd.level,
                })?;

            commands.push(CommandSpec {
                name: cmd.command_name,
                command: cmd.command,
                is_fix: cmd.is_command_fix,
                level,
            });
        }

        let mut priority_levels = Vec::with_capacity(doc.priority_levels.len());
        for (index, group) in doc.priority_levels.into_iter().enumerate() {
            if group.name.is_empty() {
                return Err(SchemaError::EmptyPriorityField {
                    index,
                    field: "name",
                });
            }
            let level = u32::try_from(group.level)
                .ok()
                .filter(|level| *level >= 1)
                .ok_or(SchemaError::PriorityLevelOutOfRange {
                    index,
                    value: group.level,
                })?;
            if group.rules.is_empty() {
                return Err(SchemaError::EmptyRules { index });
            }
            for (rule, id) in group.rules.iter().enumerate() {
                if id.is_empty() {
                    return Err(SchemaError::EmptyRule { index, rule });
                }
            }

            priority_levels.push(PriorityLevel {
                level,
                name: group.name,
                rules: group.rules,
            });
        }

        Ok(LinterConfig {
            commands,
            priority_levels,
        })
    }
}
