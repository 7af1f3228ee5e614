//! Command-line shell around `slp-report`.
//!
//! Exposes argument parsing, config loading and the shell flow as a library
//! so `slp-e2e-tests` can drive them with a stub viewer.

pub mod app;
pub mod cli;
pub mod config;
