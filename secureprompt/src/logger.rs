// secureprompt/src/logger.rs
//! Logger setup for the CLI binary.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes `env_logger` on stderr.
///
/// `RUST_LOG` is honored unless `level_override` is given; without either,
/// only warnings and errors are shown. Calling this twice is harmless.
pub fn init_logger(level_override: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level_override {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).format_target(true);
    let _ = builder.try_init();
}
