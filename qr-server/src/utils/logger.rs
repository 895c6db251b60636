//! Logging Infrastructure
//!
//! Structured logging setup with support for both development and production environments.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional JSON formatting and file output
///
/// `RUST_LOG` takes precedence over `log_level`. Calling this more than once
/// is harmless; later calls are ignored.
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    // 日志目录无法创建时退回到 stdout
    let file_appender = log_dir.and_then(|dir| {
        let log_path = Path::new(dir);
        match std::fs::create_dir_all(log_path) {
            Ok(()) => Some(tracing_appender::rolling::daily(log_path, "qr-server")),
            Err(e) => {
                eprintln!("Failed to create log directory {}: {}", dir, e);
                None
            }
        }
    });

    let _ = match (json, file_appender) {
        (true, Some(writer)) => builder.json().with_writer(writer).try_init(),
        (true, None) => builder.json().try_init(),
        (false, Some(writer)) => builder.with_writer(writer).try_init(),
        (false, None) => builder.try_init(),
    };
}
