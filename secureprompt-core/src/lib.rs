// secureprompt-core/src/lib.rs
//! # SecurePrompt Core Library
//!
//! `secureprompt-core` detects and redacts sensitive substrings (personal
//! identifiers, credentials, financial data) in free-text prompts before they
//! are forwarded to a language-model service.
//!
//! The library is pure: it performs no I/O besides optional configuration
//! loading, keeps no state between calls, and every type it hands out after
//! construction is immutable and `Send + Sync`.
//!
//! ## Modules
//!
//! * `matcher`: a hand-built Aho-Corasick automaton and its scanner.
//! * `sanitizers`: keyword redaction, regex-based structural redaction and
//!   the reverse-order span rewriter they share.
//! * `checker`: SAFE / SENSITIVE classification and the result record.
//! * `engine`: the `SanitizationEngine` trait consumed by front ends.
//! * `config`: keyword dictionary and pattern rules, loaded from YAML.
//! * `validators`: programmatic checks (Luhn, SSN ranges, NIK fields).
//! * `redaction_match`: match, finding and span types plus safe logging helpers.
//! * `headless`: one-shot convenience wrappers.
//!
//! ## Usage Example
//!
//! ```rust
//! use secureprompt_core::{PromptChecker, SanitizationEngine, Status};
//!
//! let checker = PromptChecker::with_keywords(&["password", "email"]);
//!
//! let result = checker.check("What is my password?");
//! assert_eq!(result.status, Status::Sensitive);
//! assert_eq!(result.matches[0].position, 11);
//!
//! let redacted = checker.redact("What is my password?", &result.matches);
//! assert_eq!(redacted, "What is my [PASSWORD]?");
//! ```
//!
//! ## Error Handling
//!
//! Only construction can fail: configuration loading returns `anyhow::Error`
//! with context, and building a checker returns [`SecurePromptError`].
//! Scanning, checking and redaction accept any string.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod checker;
pub mod config;
pub mod engine;
pub mod errors;
pub mod headless;
pub mod matcher;
pub mod redaction_match;
pub mod sanitizers;
pub mod validators;

/// Re-exports the configuration types and functions.
pub use config::{
    merge_config,
    validate_config,
    KeywordEntry,
    PatternRule,
    SecurePromptConfig,
    MAX_PATTERN_LENGTH,
};

/// Re-exports the custom error type for clear error reporting.
pub use errors::SecurePromptError;

/// Re-exports the engine trait and its implementation.
pub use engine::SanitizationEngine;
pub use checker::{passthrough_response, CheckResult, PromptChecker, Status, PASSTHROUGH_PREFIX};

/// Re-exports the automaton.
pub use matcher::{Automaton, FindIter};

/// Re-exports match and span types.
pub use redaction_match::{default_label, Finding, KeywordMatch, RedactionSpan};

/// Re-exports the redaction primitives.
pub use sanitizers::keyword::{redact, redact_with};
pub use sanitizers::pattern::PatternSanitizer;
pub use sanitizers::spans::apply_spans;

/// Re-exports types and functions for one-shot, non-interactive use.
pub use headless::{headless_check_prompt, headless_sanitize_string};
