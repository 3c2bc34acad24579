//! Address templates
//!
//! A template describes the address layout and may override the validation
//! pattern of individual fields. The registry replaces a process-wide lookup:
//! callers build it from configuration and pass it where it is needed.

use crate::error::ValidationError;
use crate::utils::validation::is_blank;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AddressTemplate {
    pub name: String,
    /// Per-field override patterns. `None` means the template defines no map at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_regex: Option<HashMap<String, String>>,
    /// Human-readable hints shown next to overridden fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element_regex_formats: Option<HashMap<String, String>>,
}

impl AddressTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            element_regex: None,
            element_regex_formats: None,
        }
    }

    /// Sets an override pattern, creating the map if needed
    pub fn with_element_regex(mut self, field: &str, pattern: &str) -> Self {
        self.element_regex
            .get_or_insert_with(HashMap::new)
            .insert(field.to_string(), pattern.to_string());
        self
    }

    pub fn element_regex_for(&self, field: &str) -> Option<&str> {
        self.element_regex
            .as_ref()
            .and_then(|map| map.get(field))
            .map(String::as_str)
    }

    /// Sets the hint shown next to an overridden field
    pub fn with_element_regex_format(mut self, field: &str, format: &str) -> Self {
        self.element_regex_formats
            .get_or_insert_with(HashMap::new)
            .insert(field.to_string(), format.to_string());
        self
    }

    pub fn element_regex_format_for(&self, field: &str) -> Option<&str> {
        self.element_regex_formats
            .as_ref()
            .and_then(|map| map.get(field))
            .map(String::as_str)
            .filter(|format| !is_blank(Some(*format)))
    }

    /// True when the template has an override map but leaves `field` to the
    /// default format (entry absent or blank).
    pub fn defers_to_default_format(&self, field: &str) -> bool {
        self.element_regex.is_some() && is_blank(self.element_regex_for(field))
    }

    /// Checks that every non-blank override pattern compiles
    pub fn check_patterns(&self) -> Result<(), ValidationError> {
        let Some(map) = &self.element_regex else {
            return Ok(());
        };

        for (field, pattern) in map {
            if is_blank(Some(pattern.as_str())) {
                continue;
            }
            Regex::new(pattern).map_err(|e| ValidationError::InvalidPattern {
                field: field.clone(),
                message: e.to_string(),
            })?;
        }

        Ok(())
    }
}

/// Ordered set of registered templates; the first one is the default
#[derive(Debug, Clone, Default)]
pub struct AddressTemplateRegistry {
    templates: Vec<AddressTemplate>,
}

impl AddressTemplateRegistry {
    pub fn new(templates: Vec<AddressTemplate>) -> Self {
        Self { templates }
    }

    pub fn register(&mut self, template: AddressTemplate) {
        self.templates.push(template);
    }

    pub fn default_template(&self) -> Option<&AddressTemplate> {
        self.templates.first()
    }

    pub fn get(&self, name: &str) -> Option<&AddressTemplate> {
        self.templates.iter().find(|t| t.name == name)
    }

    pub fn templates(&self) -> &[AddressTemplate] {
        &self.templates
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
