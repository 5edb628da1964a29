//! errors.rs - Custom error types for the secureprompt-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `secureprompt-core` library.
///
/// Scanning, redaction and checking are infallible; every variant here comes
/// from building a checker out of configuration.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SecurePromptError {
    /// Index counts enabled entries only.
    #[error("Enabled keyword #{0} is empty or whitespace-only")]
    EmptyKeyword(usize),

    #[error("Failed to compile pattern rule '{0}': {1}")]
    RuleCompilationError(String, regex::Error),

    #[error("Rule '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("Rule '{0}': replacement label '{1}' contains a monitored keyword")]
    FlaggedReplacement(String, String),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
