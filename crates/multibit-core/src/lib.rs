//! MultiBit Core - Shared constants, configuration, error handling and data directory location

pub mod config;
pub mod constants;
pub mod error;
pub mod locator;

pub use config::*;
pub use constants::*;
pub use error::{Error, FailureKind, Result};
pub use locator::{ApplicationDataDirectoryLocator, DirectoryResolver, FixedDirectory};
