//! Launcher configuration
//!
//! Read from `multibit-launcher.toml` in the application data directory:
//!
//! ```toml
//! [application]
//! program = "/opt/multibit/bin/multibit-app"
//!
//! [application.env]
//! MULTIBIT_LOCALE = "en"
//! ```

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::constants::*;
use crate::error::{Error, Result};

/// Configuration file structure (multibit-launcher.toml)
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct LauncherConfig {
    pub application: ApplicationConfig,
}

/// The program started after the console has been redirected
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Program name (looked up on PATH) or path
    pub program: String,
    /// Extra environment for the application
    pub env: HashMap<String, String>,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_APP_PROGRAM.to_string(),
            env: HashMap::new(),
        }
    }
}

impl LauncherConfig {
    /// Load config from a file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse TOML config content
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: LauncherConfig = toml::from_str(content)?;
        if config.application.program.trim().is_empty() {
            return Err(Error::config("application.program must not be empty"));
        }
        Ok(config)
    }

    /// Load the config belonging to a resolved data directory.
    ///
    /// Never fails: a missing file gives the defaults and an unreadable one
    /// is reported and ignored, since configuration must not stop startup.
    pub fn load_or_default(data_dir: &str) -> Self {
        let path = config_path(data_dir);
        match Self::load(&path) {
            Ok(config) => {
                debug!("Loaded launcher config from {}", path.display());
                config
            }
            Err(Error::ConfigNotFound(_)) => {
                debug!("No launcher config at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("Ignoring launcher config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Apply `MULTIBIT_APP` on top of the file settings
    pub fn with_env_overrides(self) -> Self {
        let program = std::env::var(APP_PROGRAM_ENV).ok();
        self.with_program_override(program)
    }

    fn with_program_override(mut self, program: Option<String>) -> Self {
        if let Some(program) = program.filter(|p| !p.trim().is_empty()) {
            self.application.program = program;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = LauncherConfig::default();
        assert_eq!(config.application.program, "multibit-app");
        assert!(config.application.env.is_empty());
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[application]
program = "/opt/multibit/bin/multibit-app"

[application.env]
MULTIBIT_LOCALE = "en"
"#;

        let config = LauncherConfig::from_toml(toml).unwrap();
        assert_eq!(config.application.program, "/opt/multibit/bin/multibit-app");
        assert_eq!(
            config.application.env.get("MULTIBIT_LOCALE"),
            Some(&"en".to_string())
        );
    }

    #[test]
    fn test_parse_empty_toml_uses_defaults() {
        let config = LauncherConfig::from_toml("").unwrap();
        assert_eq!(config, LauncherConfig::default());
    }

    #[test]
    fn test_parse_empty_program_rejected() {
        let result = LauncherConfig::from_toml("[application]\nprogram = \"  \"\n");
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = LauncherConfig::load(&dir.path().join(CONFIG_FILE));
        assert!(matches!(result, Err(Error::ConfigNotFound(_))));
    }

    #[test]
    fn test_load_or_default_reads_data_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[application]\nprogram = \"sh\"\n",
        )
        .unwrap();

        let config = LauncherConfig::load_or_default(dir.path().to_str().unwrap());
        assert_eq!(config.application.program, "sh");
    }

    #[test]
    fn test_load_or_default_ignores_invalid_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[application\nprogram =").unwrap();

        let config = LauncherConfig::load_or_default(dir.path().to_str().unwrap());
        assert_eq!(config, LauncherConfig::default());
    }

    #[test]
    fn test_program_override() {
        let config = LauncherConfig::default().with_program_override(Some("sh".to_string()));
        assert_eq!(config.application.program, "sh");

        let config = LauncherConfig::default().with_program_override(Some(String::new()));
        assert_eq!(config.application.program, "multibit-app");
    }
}
