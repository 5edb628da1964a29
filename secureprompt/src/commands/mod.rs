// secureprompt/src/commands/mod.rs
//! Subcommand implementations and the shared checker bootstrap.

pub mod check;
pub mod keywords;
pub mod sanitize;

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;

use secureprompt_core::config::{merge_config, SecurePromptConfig};
use secureprompt_core::PromptChecker;

/// Loads the configuration and builds the one checker shared by a run.
///
/// The built-in dictionary is the base unless `no_defaults` is set; a user
/// file, when given, is merged over it.
pub fn build_checker(config_path: Option<&Path>, no_defaults: bool) -> Result<PromptChecker> {
    let base = if no_defaults {
        debug!("Built-in configuration disabled by --no-defaults.");
        SecurePromptConfig::default()
    } else {
        SecurePromptConfig::load_default()?
    };
    let user = config_path.map(SecurePromptConfig::load_from_file).transpose()?;
    let config = merge_config(base, user);

    let checker = PromptChecker::new(&config).context("Failed to build prompt checker")?;
    debug!(
        "Active pattern rules: [{}]",
        checker.pattern_sanitizer().rule_names().collect::<Vec<_>>().join(", ")
    );
    Ok(checker)
}
