use super::traits::PersonService;
use crate::core::models::PersonAttributeType;

/// Person service backed by a fixed list of attribute types
#[derive(Debug, Clone, Default)]
pub struct InMemoryPersonService {
    attribute_types: Vec<PersonAttributeType>,
}

impl InMemoryPersonService {
    /// Create new InMemoryPersonService instance
    pub fn new(attribute_types: Vec<PersonAttributeType>) -> Self {
        Self { attribute_types }
    }

    pub fn add_attribute_type(&mut self, attribute_type: PersonAttributeType) {
        self.attribute_types.push(attribute_type);
    }

    pub fn attribute_types(&self) -> &[PersonAttributeType] {
        &self.attribute_types
    }
}

impl PersonService for InMemoryPersonService {
    fn attribute_type_by_uuid(&self, uuid: &str) -> Option<PersonAttributeType> {
        self.attribute_types.iter().find(|t| t.uuid == uuid).cloned()
    }

    fn attribute_type_by_name(&self, name: &str) -> Option<PersonAttributeType> {
        self.attribute_types
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
            .cloned()
    }
}
