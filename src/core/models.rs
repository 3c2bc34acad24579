use serde::{Deserialize, Serialize};

// Person attribute models
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PersonAttributeType {
    pub uuid: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub retired: bool,
}

impl PersonAttributeType {
    pub fn new(uuid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            name: name.into(),
            description: None,
            retired: false,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PersonAttribute {
    pub attribute_type: PersonAttributeType,
    pub value: String,
    #[serde(default)]
    pub voided: bool,
}

impl PersonAttribute {
    pub fn new(attribute_type: PersonAttributeType, value: impl Into<String>) -> Self {
        Self {
            attribute_type,
            value: value.into(),
            voided: false,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Person {
    pub uuid: Option<String>,
    #[serde(default)]
    pub attributes: Vec<PersonAttribute>,
}

impl Person {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_attribute(&mut self, attribute: PersonAttribute) {
        self.attributes.push(attribute);
    }

    /// First non-voided attribute of the given type
    pub fn attribute(&self, attribute_type: &PersonAttributeType) -> Option<&PersonAttribute> {
        self.attributes
            .iter()
            .find(|a| !a.voided && a.attribute_type.uuid == attribute_type.uuid)
    }
}

// Address models
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct PersonAddress {
    pub address1: Option<String>,
    pub address2: Option<String>,
    pub city_village: Option<String>,
    pub state_province: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    /// Free-form user input, checked before the address is accepted
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl PersonAddress {
    pub fn with_coordinates(latitude: Option<&str>, longitude: Option<&str>) -> Self {
        Self {
            latitude: latitude.map(str::to_string),
            longitude: longitude.map(str::to_string),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone() -> PersonAttributeType {
        PersonAttributeType::new("phone-uuid", "Telephone Number")
    }

    #[test]
    fn test_attribute_matches_by_type_uuid() {
        let mut person = Person::new();
        person.add_attribute(PersonAttribute::new(phone(), "555-0100"));

        let renamed = PersonAttributeType::new("phone-uuid", "Phone");
        let attr = person.attribute(&renamed).expect("attribute should be found");
        assert_eq!(attr.value, "555-0100");

        let other = PersonAttributeType::new("other-uuid", "Telephone Number");
        assert!(person.attribute(&other).is_none());
    }

    #[test]
    fn test_attribute_skips_voided() {
        let mut person = Person::new();
        let mut old = PersonAttribute::new(phone(), "555-0000");
        old.voided = true;
        person.add_attribute(old);
        person.add_attribute(PersonAttribute::new(phone(), "555-0199"));

        assert_eq!(
            person.attribute(&phone()).map(|a| a.value.as_str()),
            Some("555-0199")
        );
    }

    #[test]
    fn test_address_with_coordinates() {
        let address = PersonAddress::with_coordinates(Some("12.5"), None);
        assert_eq!(address.latitude.as_deref(), Some("12.5"));
        assert!(address.longitude.is_none());
        assert!(address.city_village.is_none());
    }
}
