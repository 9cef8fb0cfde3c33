//! CLI library components for the estimator.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
