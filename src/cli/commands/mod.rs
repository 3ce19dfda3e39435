//! CLI command implementations.

pub mod run;
pub mod schedule;
pub mod validate;
