//! Startup sequence: locate data, redirect the console, start the application

use multibit_core::{DirectoryResolver, Result};
use multibit_logs::{bootstrap_logging, RedirectionResult};
use std::ffi::OsString;
use tracing::debug;

use crate::entry::ApplicationEntry;

/// Redirect the console into the data directory's log, then run the
/// application with `args` untouched.
///
/// A failed redirection has already been reported by the time this returns
/// and never stops the application from starting. Only the application's own
/// failure is returned.
pub fn launch<R, E>(resolver: &R, entry: &E, args: Vec<OsString>) -> Result<i32>
where
    R: DirectoryResolver + ?Sized,
    E: ApplicationEntry + ?Sized,
{
    let data_dir = resolver.application_data_directory();

    match bootstrap_logging(&data_dir) {
        RedirectionResult::Redirected(paths) => {
            debug!("Logging to {}", paths.log_file.display());
        }
        RedirectionResult::NotRedirected(err) => {
            debug!("Continuing on the original console ({})", err.failure_kind().description());
        }
    }

    entry.run(args)
}
