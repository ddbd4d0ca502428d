//! Shared data model for the lintfix workspace.
//!
//! # Design constraints
//! - `wire` mirrors the on-disk JSON configuration exactly; everything
//!   else is internal state and stays serde-free.
//! - Validation happens at the wire boundary, never downstream.

pub mod config;
pub mod outcome;
pub mod step;
pub mod wire;
