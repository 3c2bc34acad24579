//! # regapp-validate
//!
//! Validation helpers for patient registration forms:
//!
//! - [`RegistrationValidator::attribute`] reads a person attribute value by
//!   attribute type UUID, resolving the type through an injected [`PersonService`]
//! - [`is_valid_latitude`] / [`is_valid_longitude`] check coordinate strings
//!   against the default formats
//! - [`validate_latitude_and_longitude_if_necessary`] applies those checks to an
//!   address unless the default address template overrides the field, reporting
//!   failures into an [`ErrorCollector`]
//!
//! ```rust
//! use regapp_validate::prelude::*;
//!
//! let templates = AddressTemplateRegistry::new(vec![
//!     AddressTemplate::new("default").with_element_regex("latitude", ""),
//! ]);
//! let address = PersonAddress::with_coordinates(Some("91"), None);
//! let mut errors = Rejections::new();
//!
//! validate_latitude_and_longitude_if_necessary(Some(&address), &templates, &mut errors)?;
//! assert_eq!(errors.codes(), vec!["registrationapp.latitude.invalid"]);
//! # Ok::<(), regapp_validate::AppError>(())
//! ```

pub use error::AppError;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::Result;
    pub use crate::error::AppError;

    pub use crate::core::models::{Person, PersonAddress, PersonAttribute, PersonAttributeType};
    pub use crate::core::services::person_service::InMemoryPersonService;
    pub use crate::core::services::registration_service::{
        RegistrationValidator, validate_latitude_and_longitude_if_necessary,
    };
    pub use crate::core::services::traits::{ErrorCollector, PersonService};
    pub use crate::core::services::types::{Rejection, Rejections};

    pub use crate::storage::address_template::{AddressTemplate, AddressTemplateRegistry};
    pub use crate::storage::config::Config;

    pub use crate::utils::validation::{is_valid_latitude, is_valid_longitude};
}

/// Main architecture layers (dependency flow: CLI → Core → Storage)
pub mod cli; // Command-line interface
pub mod core; // Domain models and registration services
pub mod storage; // Configuration and address templates

/// Support modules (used across layers)
pub mod error; // Error handling
pub mod utils; // Validation patterns and verbose output

pub type Result<T> = std::result::Result<T, AppError>;

#[doc(hidden)]
pub use crate::core::services::registration_service::{
    RegistrationValidator, validate_latitude_and_longitude_if_necessary,
};
#[doc(hidden)]
pub use crate::core::services::traits::{ErrorCollector, PersonService};
#[doc(hidden)]
pub use utils::validation::{is_valid_latitude, is_valid_longitude};
