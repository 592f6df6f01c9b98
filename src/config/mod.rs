mod defaults;
mod types;

pub use defaults::default_config_path;
pub use types::*;

use crate::error::ConfigError;
use crate::paths;
use defaults::*;
use std::path::Path;

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: default_version(),
            repository_root: None,
            rule_urls: default_rule_urls(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Validate the settings and return the repository root
    pub fn validate(&self) -> Result<&str, ConfigError> {
        if self.version != default_version() {
            return Err(ConfigError::UnsupportedVersion(self.version));
        }

        let root = match self.repository_root.as_deref() {
            Some(root) if !root.trim().is_empty() => root,
            _ => return Err(ConfigError::MissingRepositoryRoot),
        };

        if !paths::is_absolute(root) {
            return Err(ConfigError::RelativeRepositoryRoot(root.to_string()));
        }

        Ok(root)
    }
}
