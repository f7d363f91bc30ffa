//! MultiBit Logs - Console output redirection into the persistent log file

mod bootstrap;
mod paths;
mod provision;
mod redirect;

pub use bootstrap::{bootstrap_logging, format_diagnostic, report_failure, RedirectionResult};
pub use paths::OutputPaths;
pub use provision::{ensure_output_dir, open_log_file};
pub use redirect::{redirect_std_streams, OriginalStreams};
