use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Fetching interrupted by user")]
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Storage,
    Configuration,
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl FetchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FetchError::HttpError(_) => ErrorCategory::Network,
            FetchError::IoError(_) | FetchError::SerializationError(_) => ErrorCategory::Storage,
            FetchError::TomlError(_) | FetchError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            FetchError::Interrupted => ErrorCategory::User,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::User => ErrorSeverity::Low,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FetchError::HttpError(e) if e.is_timeout() => {
                "Increase --timeout-secs or check the network connection"
            }
            FetchError::HttpError(_) => {
                "Check the base URL and network; use --insecure if the server certificate is self-signed"
            }
            FetchError::IoError(_) => "Check that the output directory is writable and the disk is not full",
            FetchError::SerializationError(_) => "Re-run the fetch; the output could not be encoded",
            FetchError::TomlError(_) => "Fix the TOML syntax in the configuration file",
            FetchError::InvalidConfigValueError { .. } => {
                "Review the configuration values and try again (see --help)"
            }
            FetchError::Interrupted => "Re-run to fetch again; enable --checkpoint-every to keep partial results",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Network problem: {}", self),
            ErrorCategory::Storage => format!("Could not save results: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::User => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = FetchError::InvalidConfigValueError {
            field: "run.start".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().starts_with("Invalid configuration"));
        assert!(err.to_string().contains("run.start"));
    }

    #[test]
    fn test_io_error_is_storage_failure() {
        let err: FetchError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into();
        assert_eq!(err.category(), ErrorCategory::Storage);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_interrupted_message() {
        let err = FetchError::Interrupted;
        assert_eq!(err.category(), ErrorCategory::User);
        assert_eq!(err.user_friendly_message(), "Fetching interrupted by user");
    }
}
