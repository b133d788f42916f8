//! CLI internals for the murmur binary, exposed for integration tests.

pub mod cli;
pub mod config;
pub mod report;
pub mod transcribe;
