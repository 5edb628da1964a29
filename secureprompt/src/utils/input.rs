// secureprompt/src/utils/input.rs
//! Resolves the prompt text from the argument, a file, or stdin.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs;
use std::io::{self, Read};

use crate::cli::InputArgs;

/// Reads the prompt named by `args`.
///
/// A prompt argument is used verbatim. Text read from a file or stdin has a
/// single trailing line ending removed, since shells and editors append one
/// that is not part of the prompt.
pub fn read_input(args: &InputArgs) -> Result<String> {
    if let Some(prompt) = &args.prompt {
        debug!("Using prompt from command-line argument.");
        return Ok(prompt.clone());
    }

    let text = match &args.input_file {
        Some(path) => {
            info!("Reading prompt from file: {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?
        }
        None => {
            if io::stdin().is_terminal() {
                info!("Reading prompt from stdin (end input with Ctrl-D).");
            }
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read prompt from stdin")?;
            buffer
        }
    };
    Ok(strip_trailing_newline(text))
}

fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_argument_is_used_verbatim() {
        let args = InputArgs { prompt: Some("keep me\n".to_string()), input_file: None };
        assert_eq!(read_input(&args).unwrap(), "keep me\n");
    }

    #[test]
    fn test_file_input_drops_one_line_ending() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "line one\nline two\r\n").unwrap();
        let args = InputArgs { prompt: None, input_file: Some(file.path().to_path_buf()) };
        assert_eq!(read_input(&args).unwrap(), "line one\nline two");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let args = InputArgs { prompt: None, input_file: Some("/no/such/prompt.txt".into()) };
        let err = read_input(&args).unwrap_err();
        assert!(format!("{:#}", err).contains("/no/such/prompt.txt"));
    }

    #[test]
    fn test_strip_trailing_newline_only_once() {
        assert_eq!(strip_trailing_newline("a\n\n".to_string()), "a\n");
        assert_eq!(strip_trailing_newline("a".to_string()), "a");
    }
}
