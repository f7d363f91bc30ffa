//! Constants and default values for the MultiBit launcher

use std::path::{Path, PathBuf};

/// Directory (below the data directory) that holds the console log
pub const OUTPUT_DIRECTORY: &str = "log";

/// File that receives everything written to stdout and stderr
pub const CONSOLE_OUTPUT_FILENAME: &str = "multibit.log";

/// Application directory name used for the per-user data directory
pub const APP_DIR_NAME: &str = "MultiBit";

/// Marks a portable install: when present in the working directory,
/// the working directory itself is used as the data directory
pub const PROPERTIES_FILE: &str = "multibit.properties";

/// Launcher configuration file, looked up in the data directory
pub const CONFIG_FILE: &str = "multibit-launcher.toml";

/// Program started once the console has been redirected
pub const DEFAULT_APP_PROGRAM: &str = "multibit-app";

/// Prefix of the plain diagnostic line written when no logger is available
pub const DIAGNOSTIC_PREFIX: &str = "MultiBit start up";

/// Overrides the located data directory
pub const DATA_DIR_ENV: &str = "MULTIBIT_DATA_DIR";

/// Overrides the configured application program
pub const APP_PROGRAM_ENV: &str = "MULTIBIT_APP";

/// Tracing filter for the launcher
pub const LOG_ENV: &str = "MULTIBIT_LOG";

/// Filter used when `MULTIBIT_LOG` is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "multibit=info,multibit_logs=info,multibit_core=info";

/// Get the output directory for a resolved data directory.
///
/// An empty data directory means "undetermined" and yields the relative
/// default `log`.
pub fn output_dir(data_dir: &str) -> PathBuf {
    if data_dir.is_empty() {
        PathBuf::from(OUTPUT_DIRECTORY)
    } else {
        Path::new(data_dir).join(OUTPUT_DIRECTORY)
    }
}

/// Get the console log path inside an output directory
pub fn console_log_path(output_dir: &Path) -> PathBuf {
    output_dir.join(CONSOLE_OUTPUT_FILENAME)
}

/// Get the launcher config path for a resolved data directory
pub fn config_path(data_dir: &str) -> PathBuf {
    if data_dir.is_empty() {
        PathBuf::from(CONFIG_FILE)
    } else {
        Path::new(data_dir).join(CONFIG_FILE)
    }
}
