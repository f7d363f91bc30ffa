//! One-shot console redirection at startup

use multibit_core::{constants::DIAGNOSTIC_PREFIX, Error, Result};
use tracing::{debug, error, info};

use crate::paths::OutputPaths;
use crate::provision::{ensure_output_dir, open_log_file};
use crate::redirect::{redirect_std_streams, OriginalStreams};

/// Outcome of [`bootstrap_logging`]
#[derive(Debug)]
pub enum RedirectionResult {
    /// stdout and stderr now write to `log_file`
    Redirected(OutputPaths),
    /// The original stdout and stderr are still in place
    NotRedirected(Error),
}

impl RedirectionResult {
    pub fn is_redirected(&self) -> bool {
        matches!(self, RedirectionResult::Redirected(_))
    }
}

/// Send this process's stdout and stderr to `<data dir>/log/multibit.log`
/// (or `log/multibit.log` when `resolved_data_directory` is empty).
///
/// The log directory and file are created when missing; an existing log is
/// appended to. On success the process-wide descriptors 1 and 2 point at the
/// log until the process exits. Any failure is reported, through `tracing`
/// if a subscriber is installed and otherwise as a plain line on the original
/// stdout, and leaves both streams untouched. This function never panics and
/// never returns an error to the caller.
///
/// Call it once, from the startup thread, before other threads write to the
/// console. Calling it again with a different directory is not supported.
pub fn bootstrap_logging(resolved_data_directory: &str) -> RedirectionResult {
    let originals = OriginalStreams::capture();

    match redirect_to_log_file(resolved_data_directory, &originals) {
        Ok(paths) => {
            info!("Console output redirected to {}", paths.log_file.display());
            RedirectionResult::Redirected(paths)
        }
        Err(err) => {
            report_failure(&err, &originals);
            RedirectionResult::NotRedirected(err)
        }
    }
}

fn redirect_to_log_file(
    resolved_data_directory: &str,
    originals: &OriginalStreams,
) -> Result<OutputPaths> {
    let paths = OutputPaths::derive(resolved_data_directory);

    // Opening the log file reports the real problem
    if let Err(e) = ensure_output_dir(&paths.output_dir) {
        debug!("Could not create {}: {}", paths.output_dir.display(), e);
    }

    let file = open_log_file(&paths.log_file)?;
    redirect_std_streams(&file, originals)?;

    Ok(paths)
}

/// Report a failed redirection through the best channel available
pub fn report_failure(err: &Error, originals: &OriginalStreams) {
    if tracing::dispatcher::has_been_set() {
        error!(
            category = %err.category(),
            "{}: {}",
            err.failure_kind().description(),
            err
        );
    } else {
        originals.write_diagnostic(&format_diagnostic(err));
    }
}

/// Plain diagnostic line used when no logger is installed
pub fn format_diagnostic(err: &Error) -> String {
    format!(
        "{} : {} : {} {}",
        DIAGNOSTIC_PREFIX,
        err.failure_kind().description(),
        err.category(),
        err
    )
}
