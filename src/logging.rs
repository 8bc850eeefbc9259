//! Optional file-backed tracing.
//!
//! Stdout belongs to the TUI, so log output goes to a file instead, and
//! only when asked for: set `TAGSTRIP_LOG` to a file path to capture the
//! editor's transition events. `RUST_LOG` filters as usual.

use std::fs::File;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable naming the log file. Unset means no logging.
pub const LOG_PATH_VAR: &str = "TAGSTRIP_LOG";

/// Install the tracing subscriber if a log file was requested.
///
/// Failures are swallowed: logging is best-effort and must never stop the
/// editor from starting.
pub fn init() {
    let Ok(path) = std::env::var(LOG_PATH_VAR) else {
        return;
    };
    let Ok(file) = File::create(&path) else {
        return;
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tagstrip=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}
