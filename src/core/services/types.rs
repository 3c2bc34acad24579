use super::traits::ErrorCollector;
use serde::Serialize;

pub const LATITUDE_INVALID: &str = "registrationapp.latitude.invalid";
pub const LONGITUDE_INVALID: &str = "registrationapp.longitude.invalid";

/// A single validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// Collects rejections in the order they were reported
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Rejections {
    items: Vec<Rejection>,
}

impl Rejections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_errors(&self) -> bool {
        !self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn codes(&self) -> Vec<&str> {
        self.items.iter().map(|r| r.code.as_str()).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rejection> {
        self.items.iter()
    }
}

impl ErrorCollector for Rejections {
    fn reject(&mut self, code: &str) {
        self.items.push(Rejection {
            code: code.to_string(),
            field: None,
        });
    }

    fn reject_value(&mut self, field: &str, code: &str) {
        self.items.push(Rejection {
            code: code.to_string(),
            field: Some(field.to_string()),
        });
    }
}

impl<'a> IntoIterator for &'a Rejections {
    type Item = &'a Rejection;
    type IntoIter = std::slice::Iter<'a, Rejection>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
