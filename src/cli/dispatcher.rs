use crate::cli::main_types::{Commands, ConfigCommands, OutputFormat};
use crate::core::models::{Person, PersonAddress, PersonAttribute, PersonAttributeType};
use crate::core::services::registration_service::{
    RegistrationValidator, validate_latitude_and_longitude_if_necessary,
};
use crate::core::services::traits::PersonService;
use crate::core::services::types::Rejections;
use crate::error::{AppError, CliError, ValidationError};
use crate::storage::config::Config;
use crate::utils::logging::VerboseLogger;
use crate::utils::validation::{is_valid_latitude, is_valid_longitude};
use std::path::PathBuf;

/// Whether the checked input passed; drives the process exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Passed,
    Failed,
}

impl CommandOutcome {
    fn from_passed(passed: bool) -> Self {
        if passed {
            CommandOutcome::Passed
        } else {
            CommandOutcome::Failed
        }
    }
}

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    logger: VerboseLogger,
}

impl Dispatcher {
    pub fn new(config: Config, config_path: Option<PathBuf>, verbose: bool) -> Self {
        Self {
            config,
            config_path,
            logger: VerboseLogger::new(verbose),
        }
    }

    pub fn dispatch(&self, command: Commands) -> Result<CommandOutcome, AppError> {
        match command {
            Commands::Latitude { value } => {
                self.logger
                    .log(&format!("Checking latitude {:?}", value));
                Ok(Self::print_check(is_valid_latitude(&value)))
            }
            Commands::Longitude { value } => {
                self.logger
                    .log(&format!("Checking longitude {:?}", value));
                Ok(Self::print_check(is_valid_longitude(&value)))
            }
            Commands::Address {
                latitude,
                longitude,
                format,
            } => self.handle_address_command(latitude, longitude, format),
            Commands::Attribute { type_uuid, attr } => {
                self.handle_attribute_command(&type_uuid, &attr)
            }
            Commands::Config { command } => self.handle_config_command(command),
        }
    }

    fn print_check(valid: bool) -> CommandOutcome {
        println!("{}", if valid { "valid" } else { "invalid" });
        CommandOutcome::from_passed(valid)
    }

    fn handle_address_command(
        &self,
        latitude: Option<String>,
        longitude: Option<String>,
        format: OutputFormat,
    ) -> Result<CommandOutcome, AppError> {
        let registry = self.config.address_template_registry();
        if let Some(template) = registry.default_template() {
            self.logger
                .log(&format!("Using address template '{}'", template.name));
        }

        let address = PersonAddress::with_coordinates(latitude.as_deref(), longitude.as_deref());
        let mut rejections = Rejections::new();
        validate_latitude_and_longitude_if_necessary(Some(&address), &registry, &mut rejections)?;

        match format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&rejections)
                    .map_err(|e| CliError::Output(e.to_string()))?;
                println!("{}", json);
            }
            OutputFormat::Text => {
                if rejections.is_empty() {
                    println!("ok");
                }
                for rejection in &rejections {
                    println!("{}", rejection.code);
                }
            }
        }

        Ok(CommandOutcome::from_passed(!rejections.has_errors()))
    }

    fn handle_attribute_command(
        &self,
        type_uuid: &str,
        attrs: &[String],
    ) -> Result<CommandOutcome, AppError> {
        let service = self.config.person_service();
        let person = build_person(&service, attrs)?;
        self.logger.log(&format!(
            "Built person with {} attribute(s)",
            person.attributes.len()
        ));

        let validator = RegistrationValidator::new(service);
        self.logger.log(&format!(
            "{} attribute type(s) known",
            validator.person_service().attribute_types().len()
        ));
        match validator.attribute(Some(&person), type_uuid) {
            Some(value) => {
                println!("{}", value);
                Ok(CommandOutcome::Passed)
            }
            None => {
                self.logger
                    .log(&format!("No attribute value for type {}", type_uuid));
                Ok(CommandOutcome::Failed)
            }
        }
    }

    fn handle_config_command(&self, command: ConfigCommands) -> Result<CommandOutcome, AppError> {
        match command {
            ConfigCommands::Path => {
                let path = Config::resolve_path(self.config_path.clone())?;
                println!("{}", path.display());
            }
            ConfigCommands::Show => {
                println!("Current Configuration:");
                println!("=====================");

                println!("\nAddress Templates:");
                if self.config.address_templates.is_empty() {
                    println!("  No address templates configured");
                }
                for (index, template) in self.config.address_templates.iter().enumerate() {
                    let marker = if index == 0 { " (default)" } else { "" };
                    println!("  [{}]{}", template.name, marker);
                    match &template.element_regex {
                        None => println!("    Element regex: (none)"),
                        Some(map) => {
                            let mut fields: Vec<_> = map.iter().collect();
                            fields.sort();
                            for (field, pattern) in fields {
                                if template.defers_to_default_format(field) {
                                    println!("    {}: (default format)", field);
                                    continue;
                                }
                                match template.element_regex_format_for(field) {
                                    Some(format) => {
                                        println!("    {}: {} (e.g. {})", field, pattern, format)
                                    }
                                    None => println!("    {}: {}", field, pattern),
                                }
                            }
                        }
                    }
                }

                println!("\nAttribute Types:");
                if self.config.attribute_types.is_empty() {
                    println!("  No attribute types configured");
                }
                for attribute_type in &self.config.attribute_types {
                    println!("  {} ({})", attribute_type.name, attribute_type.uuid);
                }
            }
        }

        Ok(CommandOutcome::Passed)
    }
}

/// Builds a person from `type-uuid=value` arguments. Types missing from the
/// service are kept under their UUID so lookups for them still resolve to `None`.
fn build_person<S: PersonService>(service: &S, attrs: &[String]) -> Result<Person, AppError> {
    let mut person = Person::new();

    for arg in attrs {
        let (uuid, value) = arg
            .split_once('=')
            .filter(|(uuid, _)| !uuid.is_empty())
            .ok_or_else(|| ValidationError::MalformedAttribute {
                argument: arg.clone(),
            })?;

        let attribute_type = service
            .attribute_type_by_uuid(uuid)
            .unwrap_or_else(|| PersonAttributeType::new(uuid, uuid));
        person.add_attribute(PersonAttribute::new(attribute_type, value));
    }

    Ok(person)
}
