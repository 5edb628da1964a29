// secureprompt-core/src/engine.rs
//! Defines the core SanitizationEngine trait.
//!
//! Front ends (the CLI, an HTTP layer, tests) hold a `&dyn SanitizationEngine`
//! built once at startup. The trait is the whole capability surface: the
//! active keyword list and the check/redact operations, with nothing probed
//! at runtime.
//!
//! License: MIT OR APACHE 2.0

use crate::checker::CheckResult;
use crate::redaction_match::KeywordMatch;

/// A trait that defines the core functionality of a prompt checker.
///
/// Implementations are immutable after construction and must be safe to
/// call from many threads at once. None of the operations can fail.
pub trait SanitizationEngine: Send + Sync {
    /// Classifies `prompt` as SAFE or SENSITIVE and reports keyword matches.
    fn check(&self, prompt: &str) -> CheckResult;

    /// Boolean-only variant of [`check`](Self::check) that stops at the first match.
    fn is_sensitive(&self, prompt: &str) -> bool;

    /// Replaces the given keyword matches in `prompt` with their labels.
    ///
    /// # Arguments
    /// * `prompt` - The text the matches were reported against.
    /// * `matches` - Keyword matches, typically from [`check`](Self::check).
    fn redact(&self, prompt: &str, matches: &[KeywordMatch]) -> String;

    /// Runs every detector over `prompt` and returns the redacted text.
    fn sanitize(&self, prompt: &str) -> String;

    /// The active keyword dictionary, lower-cased and deduplicated.
    fn keywords(&self) -> &[String];
}
