//! Tracing subscriber setup
//!
//! The TUI owns the terminal, so it logs to a file under the user cache
//! directory. Every other command logs to stderr. `KHANA_LOG` (or `RUST_LOG`)
//! overrides the default filter.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable checked before `RUST_LOG`
pub const LOG_ENV: &str = "KHANA_LOG";

/// Where log records go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

impl LogTarget {
    /// File target at the default log location
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the cache directory cannot be determined.
    pub fn default_file() -> io::Result<Self> {
        let dir = dirs::cache_dir()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "Could not determine cache directory"))?;
        Ok(Self::File(dir.join("khana").join("khana.log")))
    }
}

/// Filter directive used when no environment override is set
#[must_use]
pub const fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    match (verbose, quiet) {
        (true, _) => "khana=debug",
        (false, true) => "error",
        (false, false) => "warn",
    }
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install the global subscriber
///
/// Calling this twice is harmless; the second subscriber is ignored.
///
/// # Errors
///
/// Returns an I/O error if the log file cannot be created.
pub fn init(target: &LogTarget, verbose: bool, quiet: bool) -> io::Result<()> {
    let filter = env_filter(default_directive(verbose, quiet));

    let installed = match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .with_target(false)
            .try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init()
        }
    };

    if let Err(e) = installed {
        tracing::debug!("tracing subscriber already installed: {e}");
    }
    Ok(())
}
