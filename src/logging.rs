// Tracing setup.
// Logs go to a file in the cache directory; the terminal belongs to the TUI.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::log_path;
use crate::error::Result;

/// Environment variable holding a tracing filter that overrides the config.
pub const LOG_ENV: &str = "SNAPTODO_LOG";

/// Install the global subscriber. Returns the log file path, if any.
pub fn init(default_level: &str) -> Result<Option<PathBuf>> {
    let Some(path) = log_path() else {
        return Ok(None);
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .try_init()
        .map_err(io::Error::other)?;

    Ok(Some(path))
}
