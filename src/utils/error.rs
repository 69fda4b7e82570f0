use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddressBookError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidFieldError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl AddressBookError {
    pub fn invalid_field(field: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidFieldError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Short message meant for the terminal rather than the log.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not access the contact file: {}", e),
            Self::TomlError(e) => format!("The contact file is not valid TOML: {}", e),
            Self::CsvError(_) | Self::SerializationError(_) => {
                "Could not render the matching contacts".to_string()
            }
            Self::InvalidFieldError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            Self::ConfigError { message } => format!("Invalid options: {}", message),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConfigError { .. } => 2,
            Self::InvalidFieldError { .. } | Self::TomlError(_) => 3,
            Self::IoError(_) | Self::CsvError(_) | Self::SerializationError(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AddressBookError>;
