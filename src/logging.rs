use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Default log file: `<cache_dir>/product-catalog/catalog.log`.
pub fn default_log_path() -> PathBuf {
    let cache_dir = dirs::cache_dir().unwrap_or_else(|| PathBuf::from("."));
    cache_dir.join("product-catalog").join("catalog.log")
}

/// Resolve the log file: explicit override, then config, then default.
pub fn resolve_log_path(config: &LoggingConfig, cli_override: Option<&Path>) -> PathBuf {
    cli_override
        .map(Path::to_path_buf)
        .or_else(|| config.file.clone())
        .unwrap_or_else(default_log_path)
}

/// Install the global subscriber.
///
/// The terminal belongs to the UI, so events go to an append-only file.
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(config: &LoggingConfig, path: &Path) -> io::Result<()> {
    let file = open_log_file(path)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.trim()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| io::Error::new(io::ErrorKind::AlreadyExists, err.to_string()))
}

fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}
