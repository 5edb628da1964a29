// secureprompt/src/main.rs
//! SecurePrompt entry point.
//!
//! Parses arguments, initializes logging, builds the checker once and
//! dispatches to the selected subcommand.

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use std::fs;
use std::io::{self, Write};

use secureprompt::cli::{Cli, Commands};
use secureprompt::commands::{self, check, keywords, sanitize};
use secureprompt::logger;
use secureprompt::ui::output_format;
use secureprompt::utils::input::read_input;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(log::LevelFilter::Off)
    } else if cli.debug {
        Some(log::LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    let checker = commands::build_checker(cli.config.as_deref(), cli.no_defaults)?;
    let stderr_supports_color = io::stderr().is_terminal();

    match cli.command {
        Commands::Check(cmd) => {
            let prompt = read_input(&cmd.input)?;
            let result = {
                let mut stdout = io::stdout().lock();
                let result = check::run_check(&checker, &prompt, cmd.compact, &mut stdout)?;
                stdout.flush()?;
                result
            };
            if !cli.quiet && stderr_supports_color {
                output_format::print_check_summary(&mut io::stderr(), &result, true)?;
            }
            if cmd.fail_on_sensitive && result.is_sensitive() {
                std::process::exit(check::SENSITIVE_EXIT_CODE);
            }
        }
        Commands::Sanitize(cmd) => {
            let prompt = read_input(&cmd.input)?;
            let opts = sanitize::SanitizeOptions { keywords_only: cmd.keywords_only };
            match &cmd.output {
                Some(path) => {
                    let mut file = fs::File::create(path)
                        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                    sanitize::run_sanitize(&checker, &prompt, opts, &mut file)?;
                    if !cli.quiet {
                        output_format::print_info_message(
                            &mut io::stderr(),
                            &format!("Sanitized prompt written to {}", path.display()),
                            stderr_supports_color,
                        )?;
                    }
                }
                None => {
                    let mut stdout = io::stdout().lock();
                    sanitize::run_sanitize(&checker, &prompt, opts, &mut stdout)?;
                }
            }
        }
        Commands::Keywords => {
            let mut stdout = io::stdout().lock();
            keywords::run_keywords(&checker, &mut stdout)?;
        }
    }

    Ok(())
}
