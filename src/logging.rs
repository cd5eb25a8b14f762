//! Logging setup for Files Manager.
//!
//! The configured level applies to this crate and to request traces from
//! `tower_http`. `sqlx` logs every statement at `info`, which drowns out
//! request traces on a busy file service, so it is held at `warn` unless
//! `RUST_LOG` says otherwise. A non-empty `RUST_LOG` replaces the
//! configured directives entirely.

use std::fs::{self, File};
use std::path::Path;
use std::sync::Arc;

use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::Result;

/// Level applied to `sqlx` when `RUST_LOG` is unset.
const SQLX_LEVEL: &str = "warn";

/// Parse a configured level name. Unknown names fall back to `info`.
fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Directives used when `RUST_LOG` is unset.
fn default_directives(level: &str) -> String {
    let level = parse_level(level).as_str().to_lowercase();
    format!("{level},tower_http={level},sqlx={SQLX_LEVEL}")
}

/// Build the filter from the configured level and the value of `RUST_LOG`.
///
/// An unparsable `RUST_LOG` is ignored in favour of the configured level.
fn build_filter(level: &str, rust_log: Option<&str>) -> EnvFilter {
    if let Some(directives) = rust_log.map(str::trim).filter(|d| !d.is_empty()) {
        match EnvFilter::try_new(directives) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("Ignoring invalid RUST_LOG ({e}); using configured level"),
        }
    }
    EnvFilter::new(default_directives(level))
}

fn filter_from_env(level: &str) -> EnvFilter {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    build_filter(level, rust_log.as_deref())
}

/// Open the log file for appending, creating its directory if needed.
fn open_log_file(path: &str) -> Result<File> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(fs::OpenOptions::new().create(true).append(true).open(path)?)
}

/// Log to stdout and to the configured file.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let log_file = Arc::new(open_log_file(&config.file)?);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout.and(log_file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter_from_env(&config.level))
        .init();

    Ok(())
}

/// Log to stdout only. Used when the log file cannot be opened.
pub fn init_console_only(level: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .with(filter_from_env(level))
        .init();
}
