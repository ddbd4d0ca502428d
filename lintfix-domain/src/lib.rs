//! Domain logic: turn a validated configuration into an ordered list of
//! lint steps.
//!
//! This crate owns *what* runs and in which order. It does not own *how*
//! commands are executed; that's the `lintfix-core` pipeline.

mod planner;
mod substitute;

pub use planner::{partition_commands, plan_steps, sort_by_level};
pub use substitute::substitute_directory;
