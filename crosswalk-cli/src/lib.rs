//! Crosswalk CLI - Command-line interface for the Crosswalk pipeline.
//!
//! This crate provides the `crosswalk` binary: project scaffolding,
//! standalone reconciliation, and the full migration-script pipeline.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
