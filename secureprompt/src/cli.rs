// secureprompt/src/cli.rs
//! This file defines the command-line interface (CLI) for the secureprompt
//! application, including all available commands and their arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "secureprompt",
    version = env!("CARGO_PKG_VERSION"),
    about = "Check prompts for sensitive keywords before they reach a language model",
    long_about = "SecurePrompt scans a prompt for keywords from a sensitivity dictionary (passwords, card numbers, national IDs and the like) using a single-pass keyword automaton. It can classify a prompt as SAFE or SENSITIVE, or rewrite it with every sensitive span replaced by a label.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', global = true, help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet", help = "Enable debug logging.")]
    pub debug: bool,

    /// Path to a YAML configuration merged over the built-in dictionary.
    #[arg(
        long = "config",
        value_name = "FILE",
        global = true,
        env = "SECUREPROMPT_CONFIG",
        help = "Path to a custom keyword configuration file (YAML)."
    )]
    pub config: Option<PathBuf>,

    /// Start from an empty dictionary instead of the built-in one.
    #[arg(long = "no-defaults", global = true, help = "Do not load the built-in keywords and pattern rules.")]
    pub no_defaults: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `secureprompt` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classifies a prompt as SAFE or SENSITIVE and prints the result as JSON.
    #[command(about = "Classifies a prompt as SAFE or SENSITIVE and prints the result as JSON.")]
    Check(CheckCommand),

    /// Replaces every sensitive span of a prompt with its label.
    #[command(about = "Replaces every sensitive span of a prompt with its label.")]
    Sanitize(SanitizeCommand),

    /// Lists the active keyword dictionary as JSON.
    #[command(about = "Lists the active keyword dictionary as JSON.")]
    Keywords,
}

/// Where the prompt text comes from.
#[derive(Args, Debug, Default, Clone)]
pub struct InputArgs {
    /// Prompt text (reads from stdin if neither this nor --input-file is given).
    #[arg(value_name = "PROMPT")]
    pub prompt: Option<String>,

    /// Path to an input file.
    #[arg(
        long,
        short = 'i',
        value_name = "FILE",
        conflicts_with = "prompt",
        help = "Read the prompt from a specified file instead of stdin."
    )]
    pub input_file: Option<PathBuf>,
}

/// Arguments for the `check` command.
#[derive(Args, Debug)]
pub struct CheckCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Exit with status 2 when the prompt is SENSITIVE.
    #[arg(long = "fail-on-sensitive", help = "Exit with status 2 when the prompt is classified SENSITIVE.")]
    pub fail_on_sensitive: bool,

    /// Print the JSON result on a single line.
    #[arg(long, help = "Print the JSON result on a single line.")]
    pub compact: bool,
}

/// Arguments for the `sanitize` command.
#[derive(Args, Debug)]
pub struct SanitizeCommand {
    #[command(flatten)]
    pub input: InputArgs,

    /// Write sanitized output to this file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE", help = "Write output to a specified file instead of stdout.")]
    pub output: Option<PathBuf>,

    /// Only replace dictionary keywords, skipping the structural pattern rules.
    #[arg(long = "keywords-only", help = "Redact dictionary keywords only, without the pattern rules.")]
    pub keywords_only: bool,
}
