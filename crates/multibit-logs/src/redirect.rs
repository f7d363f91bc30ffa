//! Process-wide stdout/stderr redirection

use multibit_core::{Error, Result};
use std::fs::File;
use std::io::{self, Write};

/// Copies of stdout and stderr taken before any redirection.
///
/// A windowed launch may start with either descriptor closed, in which case
/// the corresponding copy is `None`.
#[derive(Debug, Default)]
pub struct OriginalStreams {
    stdout: Option<File>,
    stderr: Option<File>,
}

impl OriginalStreams {
    /// Duplicate the current stdout and stderr descriptors
    #[cfg(unix)]
    pub fn capture() -> Self {
        use std::os::fd::AsFd;

        Self {
            stdout: io::stdout().as_fd().try_clone_to_owned().ok().map(File::from),
            stderr: io::stderr().as_fd().try_clone_to_owned().ok().map(File::from),
        }
    }

    #[cfg(not(unix))]
    pub fn capture() -> Self {
        Self::default()
    }

    pub fn from_files(stdout: Option<File>, stderr: Option<File>) -> Self {
        Self { stdout, stderr }
    }

    pub fn has_stdout(&self) -> bool {
        self.stdout.is_some()
    }

    /// Write one line to the original stdout, ignoring failures
    pub fn write_diagnostic(&self, line: &str) {
        if let Some(mut out) = self.stdout.as_ref() {
            let _ = out.write_all(format!("{}\n", line).as_bytes());
            let _ = out.flush();
        }
    }

    /// Put the original stdout back on descriptor 1
    #[cfg(unix)]
    fn restore_stdout(&self) {
        use std::os::fd::AsRawFd;

        let target = io::stdout().as_raw_fd();
        match &self.stdout {
            Some(original) => {
                let _ = nix::unistd::dup2(original.as_raw_fd(), target);
            }
            None => {
                let _ = nix::unistd::close(target);
            }
        }
    }
}

/// Point stdout and stderr at `sink` for the rest of the process lifetime.
///
/// Either both streams end up on the sink or neither does: when the stderr
/// swap fails, stdout is put back from `originals` before returning.
#[cfg(unix)]
pub fn redirect_std_streams(sink: &File, originals: &OriginalStreams) -> Result<()> {
    use nix::unistd::dup2;
    use std::os::fd::AsRawFd;

    // Anything still buffered belongs on the old console
    let _ = io::stdout().flush();
    let _ = io::stderr().flush();

    let fd = sink.as_raw_fd();
    dup2(fd, io::stdout().as_raw_fd())
        .map_err(|e| Error::redirect(format!("stdout: {}", e)))?;

    if let Err(e) = dup2(fd, io::stderr().as_raw_fd()) {
        originals.restore_stdout();
        return Err(Error::redirect(format!("stderr: {}", e)));
    }

    Ok(())
}

#[cfg(not(unix))]
pub fn redirect_std_streams(_sink: &File, _originals: &OriginalStreams) -> Result<()> {
    Err(Error::redirect(
        "stream redirection is not supported on this platform",
    ))
}
