use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// When a `Steps` container re-registers its declared steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationPolicy {
    /// Re-register whenever ids, titles or order differ
    #[default]
    Content,

    /// Re-register only when the number of steps changes
    Length,
}

impl RegistrationPolicy {
    /// Whether `declared` should replace `registered`
    pub fn needs_update<T: PartialEq>(self, registered: &[T], declared: &[T]) -> bool {
        match self {
            RegistrationPolicy::Content => registered != declared,
            RegistrationPolicy::Length => registered.len() != declared.len(),
        }
    }
}

/// What happens to the active index when the step list is replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplacePolicy {
    /// Leave the index alone, even if it is now out of bounds
    #[default]
    Preserve,

    /// Pull the index back onto the last step
    Clamp,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardConfig {
    /// Step re-registration trigger
    #[serde(default)]
    pub registration: RegistrationPolicy,

    /// Index handling on step replacement
    #[serde(default)]
    pub on_replace: ReplacePolicy,
}

impl WizardConfig {
    /// Parse configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from `path`, falling back to defaults if it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!("No wizard config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::LoadFailed {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json_str(&content)?;
        tracing::debug!("Loaded wizard config from {}", path.display());
        Ok(config)
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Save configuration to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_failed = |source: std::io::Error| ConfigError::SaveFailed {
            path: path.display().to_string(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(save_failed)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(save_failed)?;
        Ok(())
    }

    /// Default config file location
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("wizard-stepper").join("config.json"))
            .ok_or(ConfigError::NoConfigDir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WizardConfig::default();
        assert_eq!(config.registration, RegistrationPolicy::Content);
        assert_eq!(config.on_replace, ReplacePolicy::Preserve);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = WizardConfig::from_json_str(r#"{ "on_replace": "clamp" }"#).unwrap();
        assert_eq!(config.registration, RegistrationPolicy::Content);
        assert_eq!(config.on_replace, ReplacePolicy::Clamp);
    }

    #[test]
    fn test_invalid_json() {
        let err = WizardConfig::from_json_str(r#"{ "registration": "sometimes" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = WizardConfig {
            registration: RegistrationPolicy::Length,
            on_replace: ReplacePolicy::Clamp,
        };
        config.save_to(&path).unwrap();

        assert_eq!(WizardConfig::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = WizardConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, WizardConfig::default());
    }

    #[test]
    fn test_registration_policy() {
        let registered = vec![1, 2, 3];
        let retitled = vec![1, 2, 4];

        assert!(RegistrationPolicy::Content.needs_update(&registered, &retitled));
        assert!(!RegistrationPolicy::Length.needs_update(&registered, &retitled));
        assert!(RegistrationPolicy::Length.needs_update(&registered, &[1]));
        assert!(!RegistrationPolicy::Content.needs_update(&registered, &registered));
    }
}
