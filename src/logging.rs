//! Tracing setup for the binary.
//!
//! The interactive UI owns the terminal, so logs go to stderr only when
//! asked for, or to a file through a non-blocking appender.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "NESTED_SELECT_LOG";

/// Keeps the file writer alive; drop it last to flush buffered lines
pub struct LoggingGuard {
    _guard: Option<WorkerGuard>,
}

/// Default directive for a `-v` count
pub fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn filter(verbose: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber.
///
/// A second call is a no-op so tests and embedders can call it freely.
pub fn init(verbose: u8, log_file: Option<&Path>) -> LoggingGuard {
    match log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .map(|n| n.to_os_string())
                .unwrap_or_else(|| "nested-select.log".into());
            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = tracing_subscriber::registry()
                .with(filter(verbose))
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(writer),
                )
                .try_init();
            LoggingGuard {
                _guard: Some(guard),
            }
        }
        None => {
            let _ = tracing_subscriber::registry()
                .with(filter(verbose))
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .try_init();
            LoggingGuard { _guard: None }
        }
    }
}
