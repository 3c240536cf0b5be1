use thiserror::Error;

#[derive(Error, Debug)]
pub enum SweepError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Report serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Io,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SweepError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SweepError::IoError(_) => ErrorCategory::Io,
            SweepError::SerializationError(_) => ErrorCategory::Serialization,
            SweepError::ConfigValidationError { .. }
            | SweepError::InvalidConfigValueError { .. }
            | SweepError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            SweepError::IoError(_) => ErrorSeverity::Medium,
            SweepError::SerializationError(_) => ErrorSeverity::Low,
            SweepError::ConfigValidationError { .. }
            | SweepError::InvalidConfigValueError { .. }
            | SweepError::MissingConfigError { .. } => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SweepError::IoError(e) => format!("Filesystem operation failed: {}", e),
            SweepError::SerializationError(e) => format!("Could not serialize the report: {}", e),
            SweepError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            SweepError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for '{}': {}", value, field, reason),
            SweepError::MissingConfigError { field } => {
                format!("Required configuration '{}' was not provided", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SweepError::IoError(_) => {
                "Check that the paths exist and the process has permission to access them"
                    .to_string()
            }
            SweepError::SerializationError(_) => {
                "Re-run with --verbose to see what the report contained".to_string()
            }
            SweepError::ConfigValidationError { .. }
            | SweepError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and re-run; see --help for accepted values".to_string()
            }
            SweepError::MissingConfigError { field } => format!(
                "Provide '{}' via --targets, --preset, or a --manifest file",
                field
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, SweepError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = SweepError::MissingConfigError {
            field: "targets".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
    }

    #[test]
    fn test_io_error_is_medium_severity() {
        let err = SweepError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        assert_eq!(err.category(), ErrorCategory::Io);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_missing_config_suggestion_names_the_field() {
        let err = SweepError::MissingConfigError {
            field: "targets".to_string(),
        };
        assert!(err.recovery_suggestion().contains("targets"));
    }
}
