//! Application entry point started by the launcher

use multibit_core::{ApplicationConfig, Error, Result};
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::info;

/// The real application, started once the console has been redirected
pub trait ApplicationEntry {
    /// Run the application with the launcher's arguments (without argv[0])
    /// and return its exit code
    fn run(&self, args: Vec<OsString>) -> Result<i32>;
}

/// Runs the application as a child process sharing the launcher's stdio,
/// so its output follows any redirection already in place
#[derive(Debug, Clone)]
pub struct ProcessEntry {
    program: String,
    env: HashMap<String, String>,
}

impl ProcessEntry {
    pub fn new<S: Into<String>>(program: S) -> Self {
        Self {
            program: program.into(),
            env: HashMap::new(),
        }
    }

    pub fn from_config(config: &ApplicationConfig) -> Self {
        Self {
            program: config.program.clone(),
            env: config.env.clone(),
        }
    }

    /// Find the program on PATH, or use it as a path when it exists
    fn resolve_program(&self) -> Result<PathBuf> {
        match which::which(&self.program) {
            Ok(path) => Ok(path),
            Err(_) => {
                let path = Path::new(&self.program);
                if path.exists() {
                    Ok(path.to_path_buf())
                } else {
                    Err(Error::ApplicationNotFound(self.program.clone()))
                }
            }
        }
    }
}

impl ApplicationEntry for ProcessEntry {
    fn run(&self, args: Vec<OsString>) -> Result<i32> {
        let program = self.resolve_program()?;
        info!(
            "Starting {} with {} argument(s)",
            program.display(),
            args.len()
        );

        let status = Command::new(&program)
            .args(&args)
            .envs(&self.env)
            .status()
            .map_err(|e| {
                Error::ApplicationStartFailed(format!(
                    "Failed to start '{}': {}",
                    program.display(),
                    e
                ))
            })?;

        info!("Application exited with {}", status);
        // Killed by a signal
        Ok(status.code().unwrap_or(1))
    }
}
