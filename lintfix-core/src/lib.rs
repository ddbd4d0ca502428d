//! Embeddable lint pipeline for lintfix.
//!
//! Provides a clap-free, I/O-abstracted entry point suitable for linking
//! into another host process.
//!
//! # Port traits
//!
//! All I/O is abstracted behind port traits in [`ports`]:
//! - [`ConfigSource`](ports::ConfigSource) — load the linter configuration
//! - [`CommandExecutor`](ports::CommandExecutor) — spawn external tools
//! - [`OutputSink`](ports::OutputSink) — emit announcement lines
//!
//! The [`adapters`] module provides default process- and
//! filesystem-backed implementations.
//!
//! # Entry points
//!
//! - [`run_lint`](pipeline::run_lint) — load, plan, execute, summarize
//! - [`run_steps`](pipeline::run_steps) — drive an already-planned step list

pub mod adapters;
pub mod pipeline;
pub mod ports;
pub mod settings;

// Re-export the loader error so embedders don't need lintfix-config directly.
pub use lintfix_config::ConfigError;
