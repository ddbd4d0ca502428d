//! Property tests for wire-document validation.

use lintfix_types::config::LinterConfig;
use lintfix_types::wire::{CommandDoc, ConfigDoc, PriorityLevelDoc};
use proptest::prelude::*;

proptest! {
    /// Well-formed documents always convert and preserve declaration order.
    #[test]
    fn valid_docs_convert_and_preserve_order(
        entries in prop::collection::vec(
            ("[a-z][a-z0-9-]{0,11}", any::<bool>(), 0i64..100),
            0..8,
        )
    ) {
        let doc = ConfigDoc {
            commands: entries
                .iter()
                .map(|(name, is_fix, level)| CommandDoc {
                    command_name: name.clone(),
                    command: format!("npx {}", name),
                    is_command_fix: *is_fix,
                    level: *level,
                })
                .collect(),
            priority_levels: vec![],
        };

        let config = LinterConfig::try_from(doc).expect("valid doc");
        prop_assert_eq!(config.commands.len(), entries.len());
        for (cmd, (name, is_fix, level)) in config.commands.iter().zip(&entries) {
            prop_assert_eq!(&cmd.name, name);
            prop_assert_eq!(cmd.is_fix, *is_fix);
            prop_assert_eq!(i64::from(cmd.level), *level);
        }
    }

    #[test]
    fn negative_command_levels_never_convert(level in -100i64..0) {
        let doc = ConfigDoc {
            commands: vec![CommandDoc {
                command_name: "tool".to_string(),
                command: "npx tool".to_string(),
                is_command_fix: false,
                level,
            }],
            priority_levels: vec![],
        };

        prop_assert!(LinterConfig::try_from(doc).is_err());
    }

    #[test]
    fn non_positive_priority_levels_never_convert(level in -100i64..1) {
        let doc = ConfigDoc {
            commands: vec![],
            priority_levels: vec![PriorityLevelDoc {
                level,
                name: "group".to_string(),
                rules: vec!["rule".to_string()],
            }],
        };

        prop_assert!(LinterConfig::try_from(doc).is_err());
    }
}
