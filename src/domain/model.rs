use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::utils::error::{LocatorError, Result};

/// Wildcard specialty: a center carrying it qualifies for any component.
pub const GENERAL_MAINTENANCE: &str = "General Maintenance";

/// Latitude/longitude pair in degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCenter {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub location: Coordinates,
    pub specialties: Vec<String>,
    pub phone: String,
}

impl ServiceCenter {
    /// Exact membership test, no normalization.
    pub fn has_specialty(&self, name: &str) -> bool {
        self.specialties.iter().any(|s| s == name)
    }

    /// A center is relevant when it lists the component directly or carries
    /// the wildcard specialty.
    pub fn is_relevant_for(&self, component: &str) -> bool {
        self.has_specialty(component) || self.has_specialty(GENERAL_MAINTENANCE)
    }
}

/// Ordered, immutable directory of service centers. Directory order is
/// significant: ties and fallbacks resolve to the earliest entry.
#[derive(Debug, Clone)]
pub struct ServiceDirectory {
    centers: Vec<ServiceCenter>,
}

impl ServiceDirectory {
    /// Builds a directory, enforcing the invariants the locator relies on:
    /// non-empty, and at least one center carrying the wildcard specialty.
    pub fn new(centers: Vec<ServiceCenter>) -> Result<Self> {
        if centers.is_empty() {
            return Err(LocatorError::ValidationError {
                message: "service-center directory must not be empty".to_string(),
            });
        }
        if !centers.iter().any(|c| c.has_specialty(GENERAL_MAINTENANCE)) {
            return Err(LocatorError::ValidationError {
                message: format!(
                    "at least one center must list \"{}\" in its specialties",
                    GENERAL_MAINTENANCE
                ),
            });
        }
        Ok(Self { centers })
    }

    /// The seed directory shipped with the crate.
    pub fn builtin() -> Self {
        Self {
            centers: vec![
                ServiceCenter {
                    id: 1,
                    name: "Honda Service Center Downtown".to_string(),
                    address: "123 Main St, Downtown".to_string(),
                    location: Coordinates {
                        lat: 40.7589,
                        lng: -73.9851,
                    },
                    specialties: vec![
                        "Engine Oil System".to_string(),
                        "Brake System".to_string(),
                        GENERAL_MAINTENANCE.to_string(),
                    ],
                    phone: "(555) 123-4567".to_string(),
                },
                ServiceCenter {
                    id: 2,
                    name: "AutoCare Plus".to_string(),
                    address: "456 Oak Ave, Midtown".to_string(),
                    location: Coordinates {
                        lat: 40.7505,
                        lng: -73.9934,
                    },
                    specialties: vec![
                        "Air Filter".to_string(),
                        "Fuel Filter".to_string(),
                        "Engine Oil System".to_string(),
                    ],
                    phone: "(555) 234-5678".to_string(),
                },
                ServiceCenter {
                    id: 3,
                    name: "Quick Lube & Service".to_string(),
                    address: "789 Pine St, Uptown".to_string(),
                    location: Coordinates {
                        lat: 40.7614,
                        lng: -73.9776,
                    },
                    specialties: vec![
                        "Engine Oil System".to_string(),
                        "Air Filter".to_string(),
                        "Quick Service".to_string(),
                    ],
                    phone: "(555) 345-6789".to_string(),
                },
            ],
        }
    }

    pub fn centers(&self) -> &[ServiceCenter] {
        &self.centers
    }
}

/// A single position fix. Ephemeral: obtained per request, never persisted.
#[derive(Debug, Clone, Copy)]
pub struct PositionFix {
    pub coords: Coordinates,
    pub accuracy_m: Option<f64>,
    pub fixed_at: DateTime<Utc>,
}

/// Parameters handed to the positioning capability.
#[derive(Debug, Clone, Copy)]
pub struct PositionRequest {
    pub high_accuracy: bool,
    pub timeout: Duration,
    pub max_age: Duration,
}

impl Default for PositionRequest {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
            max_age: Duration::from_secs(300),
        }
    }
}

/// Result of a best-effort directions dispatch. On failure `url` still holds
/// the intended web URL so callers can present it for manual use.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionsOutcome {
    pub success: bool,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_directory_satisfies_invariants() {
        let directory = ServiceDirectory::builtin();
        assert!(!directory.centers().is_empty());
        assert!(directory
            .centers()
            .iter()
            .any(|c| c.has_specialty(GENERAL_MAINTENANCE)));
    }

    #[test]
    fn specialty_match_is_exact() {
        let directory = ServiceDirectory::builtin();
        let autocare = &directory.centers()[1];
        assert!(autocare.has_specialty("Air Filter"));
        assert!(!autocare.has_specialty("air filter"));
        assert!(!autocare.has_specialty("Air"));
    }

    #[test]
    fn wildcard_makes_center_relevant_for_anything() {
        let directory = ServiceDirectory::builtin();
        let honda = &directory.centers()[0];
        assert!(honda.is_relevant_for("Timing Belt"));
        let autocare = &directory.centers()[1];
        assert!(!autocare.is_relevant_for("Timing Belt"));
    }

    #[test]
    fn empty_directory_rejected() {
        assert!(ServiceDirectory::new(vec![]).is_err());
    }

    #[test]
    fn directory_without_wildcard_rejected() {
        let mut centers = ServiceDirectory::builtin().centers().to_vec();
        centers[0].specialties.retain(|s| s != GENERAL_MAINTENANCE);
        let err = ServiceDirectory::new(centers).unwrap_err();
        assert!(err.to_string().contains(GENERAL_MAINTENANCE));
    }
}
