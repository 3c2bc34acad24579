use crate::core::models::PersonAttributeType;

/// Resolves person attribute types; the registration helpers only ever read through it
pub trait PersonService {
    /// Get an attribute type by its UUID
    fn attribute_type_by_uuid(&self, uuid: &str) -> Option<PersonAttributeType>;

    /// Get an attribute type by its display name
    fn attribute_type_by_name(&self, name: &str) -> Option<PersonAttributeType>;
}

/// Sink for validation failures, keyed by a stable message code
pub trait ErrorCollector {
    /// Record a failure against the whole form
    fn reject(&mut self, code: &str);

    /// Record a failure against a single field
    fn reject_value(&mut self, field: &str, code: &str);
}

impl<T: PersonService + ?Sized> PersonService for &T {
    fn attribute_type_by_uuid(&self, uuid: &str) -> Option<PersonAttributeType> {
        (**self).attribute_type_by_uuid(uuid)
    }

    fn attribute_type_by_name(&self, name: &str) -> Option<PersonAttributeType> {
        (**self).attribute_type_by_name(name)
    }
}
