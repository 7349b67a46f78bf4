use std::time::Duration;
use thiserror::Error;

/// Why a position could not be obtained. Always recovered locally: the
/// locator degrades to its specialty-only fallback and never surfaces this
/// to its caller.
#[derive(Error, Debug)]
pub enum PositionError {
    #[error("permission denied by positioning service")]
    Denied,

    #[error("no position fix within {0:?}")]
    Timeout(Duration),

    #[error("positioning unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum LocatorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Directory file error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Position error: {0}")]
    PositionError(#[from] PositionError),

    #[error("Navigation blocked: {message}")]
    NavigationError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, LocatorError>;

impl LocatorError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            LocatorError::ConfigError { message } | LocatorError::ValidationError { message } => {
                format!("Configuration problem: {}", message)
            }
            LocatorError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            LocatorError::TomlError(_) => {
                "The service-center directory file could not be parsed".to_string()
            }
            LocatorError::IoError(_) => {
                "The service-center directory file could not be read".to_string()
            }
            LocatorError::NavigationError { .. } => {
                "Could not open the directions URL automatically".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LocatorError::ConfigError { .. }
            | LocatorError::ValidationError { .. }
            | LocatorError::InvalidConfigValueError { .. } => {
                "Check the command-line flags and directory file against --help"
            }
            LocatorError::TomlError(_) => {
                "The directory file needs [[center]] tables with id, name, address, lat, lng, specialties and phone"
            }
            LocatorError::IoError(_) => "Check that the --directory path exists and is readable",
            LocatorError::UrlError(_) => "Check the --position-endpoint value",
            LocatorError::NavigationError { .. } => {
                "Copy the printed URL into a browser manually"
            }
            LocatorError::PositionError(_) => {
                "The locator falls back to directory order; pass --lat/--lng for an explicit position"
            }
        }
    }
}
