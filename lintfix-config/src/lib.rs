//! Configuration ingestion for lintfix.
//!
//! The loader is strict: a document must satisfy every schema rule before
//! the planner ever sees it. Unknown JSON fields are tolerated so configs
//! can carry annotations for other tools.

mod load;

pub use load::{CONFIG_FILE_NAME, ConfigError, load_config, parse_config};
