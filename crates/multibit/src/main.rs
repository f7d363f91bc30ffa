//! MultiBit launcher
//!
//! Desktop launches have no console, so everything the application writes to
//! stdout or stderr is sent to `<data dir>/log/multibit.log` before the
//! application itself is started with the launcher's arguments.
//!
//! Set `MULTIBIT_LOG` (e.g. `multibit=debug`) to change the launcher's log
//! level.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Result;
use multibit_core::{constants, ApplicationDataDirectoryLocator, DirectoryResolver, LauncherConfig};
use std::ffi::OsString;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod entry;
mod launch;

use entry::ProcessEntry;

fn main() -> Result<()> {
    // Initialize logging; the fmt layer writes to stdout and follows the redirection
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env(constants::LOG_ENV)
                .unwrap_or_else(|_| constants::DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_ansi(false))
        .init();

    // Passed on to the application untouched
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();

    let locator = ApplicationDataDirectoryLocator::new();
    let config =
        LauncherConfig::load_or_default(&locator.application_data_directory()).with_env_overrides();
    let entry = ProcessEntry::from_config(&config.application);

    match launch::launch(&locator, &entry, args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            error!("MultiBit could not be started: {}", e);
            std::process::exit(1);
        }
    }
}
