use crate::domain::model::{Coordinates, ServiceCenter, ServiceDirectory};
use crate::utils::error::{LocatorError, Result};
use crate::utils::validation::{validate_latitude, validate_longitude, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk directory schema: a list of `[[center]]` tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryFile {
    #[serde(default, rename = "center")]
    pub centers: Vec<CenterEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CenterEntry {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    pub specialties: Vec<String>,
    pub phone: String,
}

impl DirectoryFile {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let file: DirectoryFile = toml::from_str(&raw)?;
        Ok(file)
    }

    pub fn into_directory(self) -> Result<ServiceDirectory> {
        self.validate()?;
        let centers = self
            .centers
            .into_iter()
            .map(|entry| ServiceCenter {
                id: entry.id,
                name: entry.name,
                address: entry.address,
                location: Coordinates {
                    lat: entry.lat,
                    lng: entry.lng,
                },
                specialties: entry.specialties,
                phone: entry.phone,
            })
            .collect();
        ServiceDirectory::new(centers)
    }
}

impl Validate for DirectoryFile {
    fn validate(&self) -> Result<()> {
        for entry in &self.centers {
            if entry.name.trim().is_empty() {
                return Err(LocatorError::InvalidConfigValueError {
                    field: "center.name".to_string(),
                    value: entry.name.clone(),
                    reason: format!("Center {} has an empty name", entry.id),
                });
            }
            validate_latitude(&format!("center[{}].lat", entry.id), entry.lat)?;
            validate_longitude(&format!("center[{}].lng", entry.id), entry.lng)?;
        }
        Ok(())
    }
}

/// Load and validate a service-center directory from a TOML file.
pub fn load_directory(path: impl AsRef<Path>) -> Result<ServiceDirectory> {
    DirectoryFile::from_file(path)?.into_directory()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_center_tables() {
        let raw = r#"
            [[center]]
            id = 1
            name = "Main Street Garage"
            address = "1 Main St"
            lat = 40.0
            lng = -73.0
            specialties = ["General Maintenance"]
            phone = "(555) 111-2222"
        "#;
        let file: DirectoryFile = toml::from_str(raw).unwrap();
        assert_eq!(file.centers.len(), 1);
        let directory = file.into_directory().unwrap();
        assert_eq!(directory.centers()[0].name, "Main Street Garage");
        assert_eq!(
            directory.centers()[0].location,
            Coordinates { lat: 40.0, lng: -73.0 }
        );
    }

    #[test]
    fn out_of_range_coordinates_rejected() {
        let raw = r#"
            [[center]]
            id = 1
            name = "Nowhere Garage"
            address = "1 Main St"
            lat = 123.0
            lng = -73.0
            specialties = ["General Maintenance"]
            phone = "(555) 111-2222"
        "#;
        let file: DirectoryFile = toml::from_str(raw).unwrap();
        assert!(file.into_directory().is_err());
    }
}
