use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
    #[error("ValidationError: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Output formatting failed: {0}")]
    Output(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No address template is registered")]
    NoAddressTemplate,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

/// Failures of the validation machinery itself. Bad user input is never an
/// error here; it surfaces as `false` or as a rejection.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid attribute argument '{argument}': expected UUID=VALUE")]
    MalformedAttribute { argument: String },
    #[error("Invalid override pattern for '{field}': {message}")]
    InvalidPattern { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorSeverity {
    High,
    Medium,
    Low,
}

impl ErrorSeverity {
    pub fn label(&self) -> &'static str {
        match self {
            ErrorSeverity::High => "error",
            ErrorSeverity::Medium => "warning",
            ErrorSeverity::Low => "notice",
        }
    }
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Config(ConfigError::NoAddressTemplate) => ErrorSeverity::High,
            AppError::Storage(storage_error) => match storage_error {
                StorageError::ConfigParseError { .. } => ErrorSeverity::High,
                StorageError::FileIo { .. } | StorageError::ConfigDirNotFound => {
                    ErrorSeverity::Medium
                }
            },
            AppError::Validation(ValidationError::InvalidPattern { .. }) => ErrorSeverity::High,
            AppError::Validation(ValidationError::MalformedAttribute { .. }) => ErrorSeverity::Low,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Config(ConfigError::NoAddressTemplate) => Some(
                "Add an [[address_templates]] entry to the configuration file".to_string(),
            ),
            AppError::Storage(StorageError::ConfigParseError { .. }) => {
                Some("'regapp-validate config path' shows which file was read".to_string())
            }
            AppError::Validation(ValidationError::MalformedAttribute { .. }) => {
                Some("Pass attributes as --attr <type-uuid>=<value>".to_string())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_display() {
        let cli_err = CliError::Output("broken pipe".to_string());
        assert_eq!(format!("{}", cli_err), "Output formatting failed: broken pipe");
    }

    #[test]
    fn test_config_error_display() {
        let config_err = ConfigError::NoAddressTemplate;
        assert_eq!(
            format!("{}", config_err),
            "No address template is registered"
        );
    }

    #[test]
    fn test_app_error_display_wraps_inner() {
        let app_err = AppError::Config(ConfigError::NoAddressTemplate);
        assert_eq!(
            format!("{}", app_err),
            "ConfigError: No address template is registered"
        );

        let app_err = AppError::Validation(ValidationError::MalformedAttribute {
            argument: "abc".to_string(),
        });
        assert_eq!(
            format!("{}", app_err),
            "ValidationError: Invalid attribute argument 'abc': expected UUID=VALUE"
        );
    }

    #[test]
    fn test_severity() {
        let app_err = AppError::Config(ConfigError::NoAddressTemplate);
        assert_eq!(app_err.severity(), ErrorSeverity::High);
        assert_eq!(app_err.severity().label(), "error");

        let app_err = AppError::Storage(StorageError::ConfigParseError {
            message: "bad".to_string(),
        });
        assert_eq!(app_err.severity(), ErrorSeverity::High);

        let app_err = AppError::Storage(StorageError::ConfigDirNotFound);
        assert_eq!(app_err.severity(), ErrorSeverity::Medium);

        let app_err = AppError::Cli(CliError::Output("broken pipe".to_string()));
        assert_eq!(app_err.severity(), ErrorSeverity::Medium);

        let app_err = AppError::Validation(ValidationError::MalformedAttribute {
            argument: "abc".to_string(),
        });
        assert_eq!(app_err.severity(), ErrorSeverity::Low);
        assert_eq!(app_err.severity().label(), "notice");
    }

    #[test]
    fn test_troubleshooting_hints() {
        let app_err = AppError::Config(ConfigError::NoAddressTemplate);
        assert!(app_err.troubleshooting_hint().is_some());

        let app_err = AppError::Storage(StorageError::ConfigDirNotFound);
        assert!(app_err.troubleshooting_hint().is_none());

        let app_err = AppError::Cli(CliError::Output("broken pipe".to_string()));
        assert!(app_err.troubleshooting_hint().is_none());
    }
}
