use super::traits::{ErrorCollector, PersonService};
use super::types::{LATITUDE_INVALID, LONGITUDE_INVALID};
use crate::core::models::{Person, PersonAddress};
use crate::error::ConfigError;
use crate::storage::address_template::{AddressTemplate, AddressTemplateRegistry};
use crate::utils::validation::{is_blank, is_valid_latitude, is_valid_longitude};

/// Registration form helpers bound to a person service
pub struct RegistrationValidator<S: PersonService> {
    person_service: S,
}

impl<S: PersonService> RegistrationValidator<S> {
    /// Create new RegistrationValidator instance
    pub fn new(person_service: S) -> Self {
        Self { person_service }
    }

    pub fn person_service(&self) -> &S {
        &self.person_service
    }

    /// Value of the person's attribute whose type has the given UUID.
    ///
    /// Returns `None` when the person is absent, the type is unknown, or the
    /// person has no such attribute.
    pub fn attribute<'p>(
        &self,
        person: Option<&'p Person>,
        attribute_type_uuid: &str,
    ) -> Option<&'p str> {
        let person = person?;
        let Some(attribute_type) = self.person_service.attribute_type_by_uuid(attribute_type_uuid)
        else {
            log::debug!("Unknown person attribute type {}", attribute_type_uuid);
            return None;
        };

        person
            .attribute(&attribute_type)
            .map(|attr| attr.value.as_str())
    }
}

/// Checks the address coordinates against the default formats, but only for
/// fields the default address template does not override.
///
/// Each failing field adds one rejection to `errors`; a bad latitude does not
/// stop the longitude check. Fails only when an address is given and no
/// template is registered.
pub fn validate_latitude_and_longitude_if_necessary<E: ErrorCollector + ?Sized>(
    address: Option<&PersonAddress>,
    templates: &AddressTemplateRegistry,
    errors: &mut E,
) -> crate::Result<()> {
    let Some(address) = address else {
        return Ok(());
    };

    let template = templates
        .default_template()
        .ok_or(ConfigError::NoAddressTemplate)?;

    check_coordinate(
        template,
        "latitude",
        address.latitude.as_deref(),
        is_valid_latitude,
        LATITUDE_INVALID,
        errors,
    );
    check_coordinate(
        template,
        "longitude",
        address.longitude.as_deref(),
        is_valid_longitude,
        LONGITUDE_INVALID,
        errors,
    );

    Ok(())
}

fn check_coordinate<E: ErrorCollector + ?Sized>(
    template: &AddressTemplate,
    field: &str,
    value: Option<&str>,
    is_valid: fn(&str) -> bool,
    code: &str,
    errors: &mut E,
) {
    let value = match value {
        Some(v) if !is_blank(Some(v)) => v,
        _ => return,
    };

    if !template.defers_to_default_format(field) {
        log::debug!(
            "Template '{}' does not defer {} to the default format, skipping",
            template.name,
            field
        );
        return;
    }

    if !is_valid(value) {
        log::debug!("Rejecting {} value {:?}", field, value);
        errors.reject(code);
    }
}
