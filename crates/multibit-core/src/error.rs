//! Error types for the MultiBit launcher

use std::path::PathBuf;

/// Launcher error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Resource unavailable: {}: {source}", .path.display())]
    ResourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Stream redirection failed: {0}")]
    StreamRedirectFailed(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Application not found: {0}")]
    ApplicationNotFound(String),

    #[error("Application failed to start: {0}")]
    ApplicationStartFailed(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias for the launcher
pub type Result<T> = std::result::Result<T, Error>;

/// How a failed console redirection is classified when it is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The log file or stream could not be opened
    ResourceUnavailable,
    /// Anything else that went wrong while redirecting
    GenericBootstrapFailure,
}

impl FailureKind {
    pub fn description(&self) -> &'static str {
        match self {
            FailureKind::ResourceUnavailable => "Error in IO Redirection",
            FailureKind::GenericBootstrapFailure => {
                "Error in redirecting output & exceptions to file"
            }
        }
    }
}

impl Error {
    pub fn resource<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Error::ResourceUnavailable {
            path: path.into(),
            source,
        }
    }

    pub fn redirect<S: Into<String>>(msg: S) -> Self {
        Error::StreamRedirectFailed(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::ConfigError(msg.into())
    }

    pub fn failure_kind(&self) -> FailureKind {
        match self {
            Error::ResourceUnavailable { .. } => FailureKind::ResourceUnavailable,
            _ => FailureKind::GenericBootstrapFailure,
        }
    }

    /// Name of the underlying failure, used in plain diagnostics
    pub fn category(&self) -> String {
        match self {
            Error::ResourceUnavailable { source, .. } | Error::IoError(source) => {
                format!("std::io::ErrorKind::{:?}", source.kind())
            }
            Error::TomlError(_) => "toml::de::Error".to_string(),
            Error::StreamRedirectFailed(_) => "multibit::Error::StreamRedirectFailed".to_string(),
            Error::ConfigError(_) => "multibit::Error::ConfigError".to_string(),
            Error::ConfigNotFound(_) => "multibit::Error::ConfigNotFound".to_string(),
            Error::ApplicationNotFound(_) => "multibit::Error::ApplicationNotFound".to_string(),
            Error::ApplicationStartFailed(_) => {
                "multibit::Error::ApplicationStartFailed".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let err = Error::resource(
            "/data/log/multibit.log",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            err.to_string(),
            "Resource unavailable: /data/log/multibit.log: denied"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::IoError(_)));
    }

    #[test]
    fn test_failure_kind() {
        let err = Error::resource("x", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.failure_kind(), FailureKind::ResourceUnavailable);

        let err = Error::redirect("dup2 failed");
        assert_eq!(err.failure_kind(), FailureKind::GenericBootstrapFailure);

        // A bare IO error did not come from opening the log file
        let err: Error = io::Error::from(io::ErrorKind::Other).into();
        assert_eq!(err.failure_kind(), FailureKind::GenericBootstrapFailure);
    }

    #[test]
    fn test_category() {
        let err = Error::resource("x", io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(err.category(), "std::io::ErrorKind::PermissionDenied");

        let err = Error::redirect("dup2 failed");
        assert_eq!(err.category(), "multibit::Error::StreamRedirectFailed");
    }

    #[test]
    fn test_failure_descriptions() {
        assert_eq!(
            FailureKind::ResourceUnavailable.description(),
            "Error in IO Redirection"
        );
        assert_eq!(
            FailureKind::GenericBootstrapFailure.description(),
            "Error in redirecting output & exceptions to file"
        );
    }
}
