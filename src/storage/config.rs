//! Configuration management
//!
//! Address templates and attribute types are read from a TOML file.
//! Priority: --config argument > REGAPP_CONFIG environment variable > default path

use super::Result;
use super::address_template::{AddressTemplate, AddressTemplateRegistry};
use crate::core::models::PersonAttributeType;
use crate::core::services::person_service::InMemoryPersonService;
use crate::error::StorageError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const CONFIG_ENV_VAR: &str = "REGAPP_CONFIG";

/// Application configuration
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub address_templates: Vec<AddressTemplate>,
    #[serde(default)]
    pub attribute_types: Vec<PersonAttributeType>,
}

impl Config {
    /// Load configuration from file. A missing file yields the defaults.
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let explicit = path.is_some() || Self::env_path().is_some();
        let config_path = Self::resolve_path(path)?;

        if !config_path.exists() {
            if explicit {
                log::warn!(
                    "Configuration file {} does not exist, using defaults",
                    config_path.display()
                );
            } else {
                log::debug!(
                    "No configuration at {}, using defaults",
                    config_path.display()
                );
            }
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: format!("Failed to parse config file: {}", e),
            })?;

        for template in &config.address_templates {
            template
                .check_patterns()
                .map_err(|e| StorageError::ConfigParseError {
                    message: format!("Address template '{}': {}", template.name, e),
                })?;
        }

        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = Self::resolve_path(path)?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content = toml::to_string(self).map_err(|e| StorageError::ConfigParseError {
            message: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        Ok(())
    }

    /// Path that `load` and `save` use when given `path`
    pub fn resolve_path(path: Option<PathBuf>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(p),
            None => match Self::env_path() {
                Some(p) => Ok(p),
                None => Self::config_file_path(),
            },
        }
    }

    fn env_path() -> Option<PathBuf> {
        std::env::var(CONFIG_ENV_VAR)
            .ok()
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
    }

    fn config_file_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().ok_or(StorageError::ConfigDirNotFound)?;

        let app_config_dir = home_dir.join(".config").join("regapp-validate");
        let config_file = app_config_dir.join("config.toml");

        Ok(config_file)
    }

    pub fn address_template_registry(&self) -> AddressTemplateRegistry {
        AddressTemplateRegistry::new(self.address_templates.clone())
    }

    pub fn person_service(&self) -> InMemoryPersonService {
        InMemoryPersonService::new(self.attribute_types.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
[[address_templates]]
name = "default"

[address_templates.element_regex]
latitude = ""
postalCode = "[0-9]{5}"

[[address_templates]]
name = "legacy"

[[attribute_types]]
uuid = "14d4f066-15f5-102d-96e4-000c29c2a5d7"
name = "Telephone Number"
"#;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.address_templates.is_empty());
        assert!(config.attribute_types.is_empty());
        assert!(config.address_template_registry().is_empty());
    }

    #[test]
    fn test_config_parses_templates_and_attribute_types() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, SAMPLE).expect("Failed to write config");

        let config = Config::load(Some(config_path)).expect("Failed to load config");
        assert_eq!(config.address_templates.len(), 2);

        let registry = config.address_template_registry();
        let default = registry.default_template().expect("default template");
        assert_eq!(default.name, "default");
        assert!(default.defers_to_default_format("latitude"));
        assert_eq!(default.element_regex_for("postalCode"), Some("[0-9]{5}"));

        let legacy = registry.get("legacy").expect("legacy template");
        assert!(legacy.element_regex.is_none());

        assert_eq!(config.attribute_types.len(), 1);
        assert!(!config.attribute_types[0].retired);
    }

    #[test]
    fn test_empty_element_regex_table_is_kept() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            "[[address_templates]]\nname = \"empty\"\n\n[address_templates.element_regex]\n",
        )
        .expect("Failed to write config");

        let config = Config::load(Some(config_path)).expect("Failed to load config");
        let template = &config.address_templates[0];
        assert_eq!(template.element_regex, Some(HashMap::new()));
        assert!(template.defers_to_default_format("latitude"));
        assert!(template.defers_to_default_format("longitude"));
    }

    #[test]
    fn test_config_load_save() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            address_templates: vec![
                AddressTemplate::new("default").with_element_regex("longitude", ""),
            ],
            attribute_types: vec![PersonAttributeType::new("uuid-1", "Mother's Name")],
        };

        config
            .save(Some(config_path.clone()))
            .expect("Failed to save config");

        let loaded = Config::load(Some(config_path)).expect("Failed to load config");
        assert_eq!(loaded.address_templates, config.address_templates);
        assert_eq!(loaded.attribute_types, config.attribute_types);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let nonexistent_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load(Some(nonexistent_path)).expect("Failed to load default config");
        assert!(config.address_templates.is_empty());
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "[[address_templates]\nname = ").expect("Failed to write config");

        let result = Config::load(Some(config_path));
        assert!(matches!(
            result,
            Err(StorageError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_load_rejects_broken_override_pattern() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(
            &config_path,
            "[[address_templates]]\nname = \"x\"\n[address_templates.element_regex]\npostalCode = \"[0-9\"\n",
        )
        .expect("Failed to write config");

        let err = Config::load(Some(config_path)).unwrap_err();
        assert!(err.to_string().contains("postalCode"));
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = PathBuf::from("/tmp/explicit.toml");
        assert_eq!(Config::resolve_path(Some(path.clone())).unwrap(), path);
    }
}
