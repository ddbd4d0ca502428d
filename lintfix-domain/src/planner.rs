use lintfix_types::config::{CommandSpec, LinterConfig};
use lintfix_types::step::LintStep;

/// Splits commands into fix and diagnostic groups.
///
/// The partition is stable: relative order within each group equals the
/// declaration order in the configuration.
pub fn partition_commands(commands: &[CommandSpec]) -> (Vec<CommandSpec>, Vec<CommandSpec>) {
    commands.iter().cloned().partition(|cmd| cmd.is_fix)
}

/// Sorts commands ascending by level.
///
/// The sort is stable; declaration order is the documented tie-break for
/// commands sharing a level.
pub fn sort_by_level(mut commands: Vec<CommandSpec>) -> Vec<CommandSpec> {
    commands.sort_by_key(|cmd| cmd.level);
    commands
}

/// Derives the ordered execution plan for a directory.
///
/// The plan always opens with [`LintStep::AnnounceDirectory`], then every
/// fix command in sorted order, then every diagnostic command in sorted
/// order. An empty command list yields the single announce step.
pub fn plan_steps(config: &LinterConfig, directory: &str) -> Vec<LintStep> {
    let (fix_commands, diagnostic_commands) = partition_commands(&config.commands);
    let fix_commands = sort_by_level(fix_commands);
    let diagnostic_commands = sort_by_level(diagnostic_commands);

    let mut steps = Vec::with_capacity(config.commands.len() + 1);
    steps.push(LintStep::AnnounceDirectory {
        directory: directory.to_string(),
    });

    for cmd in fix_commands {
        steps.push(LintStep::RunFix {
            tool: cmd.name,
            directory: directory.to_string(),
            command: cmd.command,
        });
    }

    for cmd in diagnostic_commands {
        steps.push(LintStep::RunDiagnostics {
            tool: cmd.name,
            directory: directory.to_string(),
            command: cmd.command,
        });
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn command(name: &str, command: &str, is_fix: bool, level: u32) -> CommandSpec {
        CommandSpec {
            name: name.to_string(),
            command: command.to_string(),
            is_fix,
            level,
        }
    }

    #[test]
    fn partition_separates_fix_and_diagnostic_commands() {
        let commands = vec![
            command("eslint-fix", "eslint --fix", true, 0),
            command("eslint-check", "eslint --check", false, 1),
            command("biome-fix", "biome --write", true, 0),
        ];

        let (fix, diagnostic) = partition_commands(&commands);
        assert_eq!(fix.len(), 2);
        assert_eq!(diagnostic.len(), 1);
        assert!(fix.iter().all(|c| c.is_fix));
        assert!(diagnostic.iter().all(|c| !c.is_fix));
    }

    #[test]
    fn partition_handles_empty_list() {
        let (fix, diagnostic) = partition_commands(&[]);
        assert!(fix.is_empty());
        assert!(diagnostic.is_empty());
    }

    #[test]
    fn sort_orders_by_level_ascending() {
        let commands = vec![
            command("cmd2", "cmd2", false, 2),
            command("cmd0", "cmd0", false, 0),
            command("cmd1", "cmd1", false, 1),
        ];

        let sorted = sort_by_level(commands);
        let levels: Vec<u32> = sorted.iter().map(|c| c.level).collect();
        assert_eq!(levels, vec![0, 1, 2]);
    }

    #[test]
    fn sort_preserves_declaration_order_for_equal_levels() {
        let commands = vec![
            command("first", "first", false, 0),
            command("second", "second", false, 0),
        ];

        let sorted = sort_by_level(commands);
        assert_eq!(sorted[0].name, "first");
        assert_eq!(sorted[1].name, "second");
    }

    #[test]
    fn plan_orders_announce_then_fixes_then_diagnostics() {
        let config = LinterConfig {
            commands: vec![
                command("eslint", "eslint --check", false, 1),
                command("eslint-fix", "eslint --fix", true, 0),
            ],
            priority_levels: vec![],
        };

        let steps = plan_steps(&config, "src/");
        assert_eq!(steps.len(), 3);
        assert!(matches!(&steps[0], LintStep::AnnounceDirectory { directory } if directory == "src/"));
        assert!(matches!(&steps[1], LintStep::RunFix { tool, .. } if tool == "eslint-fix"));
        assert!(matches!(&steps[2], LintStep::RunDiagnostics { tool, .. } if tool == "eslint"));
    }

    #[test]
    fn plan_for_empty_config_is_announce_only() {
        let config = LinterConfig::default();
        let steps = plan_steps(&config, "src/");
        assert_eq!(
            steps,
            vec![LintStep::AnnounceDirectory {
                directory: "src/".to_string()
            }]
        );
    }

    #[test]
    fn plan_carries_directory_and_template_into_steps() {
        let config = LinterConfig {
            commands: vec![command("eslint-fix", "npx eslint --fix ${directory}", true, 0)],
            priority_levels: vec![],
        };

        let steps = plan_steps(&config, "lib/");
        assert_eq!(
            steps[1],
            LintStep::RunFix {
                tool: "eslint-fix".to_string(),
                directory: "lib/".to_string(),
                command: "npx eslint --fix ${directory}".to_string(),
            }
        );
    }
}
