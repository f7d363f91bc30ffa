//! Application data directory location

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::constants::*;

/// Answers where the application keeps its persistent data.
///
/// An empty string means no data directory could be determined and callers
/// fall back to paths relative to the working directory. Only the empty
/// string has that meaning.
pub trait DirectoryResolver {
    fn application_data_directory(&self) -> String;
}

/// Resolver returning a fixed, already known directory
#[derive(Debug, Clone, Default)]
pub struct FixedDirectory(pub String);

impl FixedDirectory {
    pub fn new<S: Into<String>>(dir: S) -> Self {
        Self(dir.into())
    }
}

impl DirectoryResolver for FixedDirectory {
    fn application_data_directory(&self) -> String {
        self.0.clone()
    }
}

/// Locates the per-user data directory.
///
/// The location is computed once, when the locator is created:
/// 1. `MULTIBIT_DATA_DIR`, if set and non-empty
/// 2. the working directory (empty result) when it holds `multibit.properties`
/// 3. `%APPDATA%\MultiBit` on Windows,
///    `~/Library/Application Support/MultiBit` on macOS, `~/MultiBit` elsewhere
///
/// A located directory that does not exist yet is created.
#[derive(Debug, Clone)]
pub struct ApplicationDataDirectoryLocator {
    application_data_directory: String,
}

impl ApplicationDataDirectoryLocator {
    pub fn new() -> Self {
        let env_override = std::env::var(DATA_DIR_ENV).ok();
        let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let dir = locate(env_override, &working_dir, dirs::home_dir().as_deref());

        if !dir.is_empty() {
            ensure_exists(Path::new(&dir));
        }

        Self {
            application_data_directory: dir,
        }
    }
}

impl Default for ApplicationDataDirectoryLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectoryResolver for ApplicationDataDirectoryLocator {
    fn application_data_directory(&self) -> String {
        self.application_data_directory.clone()
    }
}

/// Work out the data directory without touching the filesystem beyond
/// checking for the properties file.
pub fn locate(env_override: Option<String>, working_dir: &Path, home: Option<&Path>) -> String {
    if let Some(dir) = env_override.filter(|d| !d.is_empty()) {
        debug!("Using data directory from {}: {}", DATA_DIR_ENV, dir);
        return dir;
    }

    if working_dir.join(PROPERTIES_FILE).exists() {
        debug!("Found {} in working directory", PROPERTIES_FILE);
        return String::new();
    }

    platform_default(home)
        .map(|dir| dir.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(target_os = "windows")]
fn platform_default(_home: Option<&Path>) -> Option<PathBuf> {
    dirs::config_dir().map(|appdata| appdata.join(APP_DIR_NAME))
}

#[cfg(target_os = "macos")]
fn platform_default(home: Option<&Path>) -> Option<PathBuf> {
    home.map(|h| h.join("Library").join("Application Support").join(APP_DIR_NAME))
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn platform_default(home: Option<&Path>) -> Option<PathBuf> {
    home.map(|h| h.join(APP_DIR_NAME))
}

fn ensure_exists(dir: &Path) {
    if dir.is_dir() {
        return;
    }
    match std::fs::create_dir_all(dir) {
        Ok(()) => debug!("Created data directory {}", dir.display()),
        Err(e) => warn!("Could not create data directory {}: {}", dir.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_env_override_wins() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(PROPERTIES_FILE), "").unwrap();

        let located = locate(Some("/srv/multibit".to_string()), dir.path(), None);
        assert_eq!(located, "/srv/multibit");
    }

    #[test]
    fn test_empty_env_override_ignored() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(PROPERTIES_FILE), "").unwrap();

        let located = locate(Some(String::new()), dir.path(), None);
        assert_eq!(located, "");
    }

    #[test]
    fn test_properties_file_selects_working_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(PROPERTIES_FILE), "").unwrap();

        let home = TempDir::new().unwrap();
        let located = locate(None, dir.path(), Some(home.path()));
        assert_eq!(located, "");
    }

    #[cfg(all(unix, not(target_os = "macos")))]
    #[test]
    fn test_home_default() {
        let dir = TempDir::new().unwrap();
        let located = locate(None, dir.path(), Some(Path::new("/home/u")));
        assert_eq!(located, "/home/u/MultiBit");
    }

    #[cfg(target_os = "macos")]
    #[test]
    fn test_home_default() {
        let dir = TempDir::new().unwrap();
        let located = locate(None, dir.path(), Some(Path::new("/Users/u")));
        assert_eq!(located, "/Users/u/Library/Application Support/MultiBit");
    }

    #[cfg(unix)]
    #[test]
    fn test_no_home_gives_empty() {
        let dir = TempDir::new().unwrap();
        assert_eq!(locate(None, dir.path(), None), "");
    }

    #[test]
    fn test_fixed_directory() {
        let resolver = FixedDirectory::new("/home/u/.app");
        assert_eq!(resolver.application_data_directory(), "/home/u/.app");
        assert_eq!(FixedDirectory::default().application_data_directory(), "");
    }

    #[test]
    fn test_ensure_exists_creates_nested() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join("a").join("MultiBit");

        ensure_exists(&target);
        assert!(target.is_dir());

        // Second call is a no-op
        ensure_exists(&target);
        assert!(target.is_dir());
    }
}
