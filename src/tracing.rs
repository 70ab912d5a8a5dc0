//! Logging setup
//!
//! Console output goes to stderr so `bindery list` stays pipeable. Filter it
//! with `RUST_LOG`, e.g. `RUST_LOG=bindery::keymap::persist=debug`; without
//! it the console shows warnings, or debug output for bindery with `--verbose`.
//!
//! Every run also appends to `~/.config/bindery/logs/bindery.log.YYYY-MM-DD`
//! at debug level, so skipped keymap records and rebinds can be traced after
//! the fact.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config_paths::{self, LOG_FILE_PREFIX};

fn console_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "bindery=debug,info" } else { "warn" })
    })
}

/// Install the console and file subscribers
///
/// Keep the returned guard alive until exit; dropping it flushes the file
/// writer. `None` means file logging is unavailable and only the console
/// layer is active.
pub fn init(verbose: bool) -> Option<WorkerGuard> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter(verbose));

    let (file_layer, guard) = match config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(EnvFilter::new("debug"));
            (Some(layer), Some(guard))
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            (None, None)
        }
    };

    if let Err(e) = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
    {
        eprintln!("Warning: Logging already initialized: {}", e);
    }

    guard
}
