//! Output location derived from the data directory

use multibit_core::constants;
use std::path::PathBuf;

/// Where console output goes.
///
/// Both paths are always rooted at the same base, either the resolved data
/// directory or the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// `<data dir>/log`, or `log`
    pub output_dir: PathBuf,
    /// `<output dir>/multibit.log`
    pub log_file: PathBuf,
}

impl OutputPaths {
    /// Derive the output location from a resolved data directory.
    /// The empty string selects the working-directory default.
    pub fn derive(resolved_data_directory: &str) -> Self {
        let output_dir = constants::output_dir(resolved_data_directory);
        let log_file = constants::console_log_path(&output_dir);
        Self {
            output_dir,
            log_file,
        }
    }
}
