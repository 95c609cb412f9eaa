//! Process-wide logger bootstrap.
//!
//! Library code only uses the `log` macros; binaries call [`init_logging`]
//! once at startup. Initialization never panics and repeated calls are no-ops.

use std::sync::OnceLock;

use flexi_logger::{Logger, LoggerHandle};

static LOGGER: OnceLock<LoggerHandle> = OnceLock::new();

pub const DEFAULT_LEVEL: &str = "info";

/// Starts stderr logging. `RUST_LOG` overrides `level` when set.
pub fn init_logging(level: &str) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }
    let handle = Logger::try_with_env_or_str(level)
        .map_err(|e| format!("invalid log spec `{}`: {}", level, e))?
        .format(flexi_logger::detailed_format)
        .start()
        .map_err(|e| format!("failed to start logger: {}", e))?;
    let _ = LOGGER.set(handle);
    Ok(())
}
