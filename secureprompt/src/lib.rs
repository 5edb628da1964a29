// secureprompt/src/lib.rs
//! # SecurePrompt CLI
//!
//! Command-line front end for `secureprompt-core`. Loads the keyword
//! configuration, builds one checker, and runs the `check`, `sanitize` or
//! `keywords` subcommand against it.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;
