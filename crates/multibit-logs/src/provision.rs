//! Output directory and log file creation

use multibit_core::{Error, Result};
use std::fs::{self, File, OpenOptions};
use std::io::ErrorKind;
use std::path::Path;

/// Create the output directory if it does not exist yet.
///
/// Only the last path component is created; a missing data directory is left
/// for the log file open to report.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    match fs::create_dir(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists && dir.is_dir() => Ok(()),
        Err(e) => Err(Error::resource(dir, e)),
    }
}

/// Open the console log for appending, creating it if needed.
/// Existing content is never truncated.
pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::resource(path, e))
}
