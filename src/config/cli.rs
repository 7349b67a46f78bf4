use crate::domain::model::PositionRequest;
use crate::utils::error::{LocatorError, Result};
use crate::utils::validation::{
    validate_latitude, validate_longitude, validate_positive_number, validate_url, Validate,
};
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "pitstop")]
#[command(about = "Find the nearest service center for a maintenance component")]
pub struct CliConfig {
    /// Maintenance component needing service, e.g. "Air Filter"
    pub component: String,

    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Fixed latitude, skips the positioning service"
    )]
    pub lat: Option<f64>,

    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Fixed longitude, skips the positioning service"
    )]
    pub lng: Option<f64>,

    #[arg(long, help = "TOML service-center directory; builtin seed when omitted")]
    pub directory: Option<String>,

    #[arg(long, default_value = "https://ipapi.co/json/")]
    pub position_endpoint: String,

    #[arg(long, default_value = "10")]
    pub timeout_seconds: u64,

    #[arg(
        long,
        default_value = "300",
        help = "Accept cached position fixes up to this many seconds old"
    )]
    pub max_age_seconds: u64,

    #[arg(long, help = "Ask the positioning service for a coarse fix")]
    pub low_accuracy: bool,

    #[arg(long, help = "Print the directions URL instead of opening it")]
    pub no_open: bool,

    #[arg(long, help = "Emit JSON-formatted logs")]
    pub log_json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn position_request(&self) -> PositionRequest {
        PositionRequest {
            high_accuracy: !self.low_accuracy,
            timeout: Duration::from_secs(self.timeout_seconds),
            max_age: Duration::from_secs(self.max_age_seconds),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.component.trim().is_empty() {
            return Err(LocatorError::ConfigError {
                message: "component name cannot be empty".to_string(),
            });
        }
        if self.lat.is_some() != self.lng.is_some() {
            return Err(LocatorError::ConfigError {
                message: "--lat and --lng must be given together".to_string(),
            });
        }
        if let Some(lat) = self.lat {
            validate_latitude("lat", lat)?;
        }
        if let Some(lng) = self.lng {
            validate_longitude("lng", lng)?;
        }
        validate_url("position_endpoint", &self.position_endpoint)?;
        validate_positive_number("timeout_seconds", self.timeout_seconds, 1)?;
        Ok(())
    }
}
