// src/logging.rs

use crate::errors::{CarbonitoError, CarbonitoResult};
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use std::path::Path;

/// Starts the file logger. The terminal belongs to the TUI, so everything
/// goes to `carbonito.log` under the configured `log_dir`. The returned
/// handle must stay alive for the duration of the program.
pub fn init_logging(level: &str, log_dir: &Path) -> CarbonitoResult<LoggerHandle> {
    let handle = Logger::try_with_str(level)
        .map_err(|e| CarbonitoError::Logging(e.to_string()))?
        .log_to_file(
            FileSpec::default()
                .directory(log_dir)
                .basename("carbonito")
                .suppress_timestamp(),
        )
        .start()
        .map_err(|e| CarbonitoError::Logging(e.to_string()))?;

    Ok(handle)
}
