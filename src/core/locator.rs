use crate::core::geo::haversine_miles;
use crate::domain::model::{
    Coordinates, PositionRequest, ServiceCenter, ServiceDirectory, GENERAL_MAINTENANCE,
};
use crate::domain::ports::PositionProvider;

/// Resolves which service center should handle maintenance on a component,
/// given the caller's position when one can be obtained.
pub struct ServiceLocator<P: PositionProvider> {
    directory: ServiceDirectory,
    positioner: P,
    request: PositionRequest,
}

impl<P: PositionProvider> ServiceLocator<P> {
    pub fn new(directory: ServiceDirectory, positioner: P) -> Self {
        Self {
            directory,
            positioner,
            request: PositionRequest::default(),
        }
    }

    pub fn with_request(mut self, request: PositionRequest) -> Self {
        self.request = request;
        self
    }

    /// Always produces a center: position failures are recovered with the
    /// specialty-only fallback, never surfaced to the caller. Each call
    /// re-queries position and re-filters from scratch.
    pub async fn find_nearest(&self, component: &str) -> ServiceCenter {
        let position = match self.positioner.current_position(&self.request).await {
            Ok(fix) => {
                tracing::debug!(
                    "position fix at {:.4},{:.4} (accuracy {:?} m)",
                    fix.coords.lat,
                    fix.coords.lng,
                    fix.accuracy_m
                );
                Some(fix.coords)
            }
            Err(e) => {
                tracing::warn!("position unavailable ({}), using directory-order fallback", e);
                None
            }
        };

        select_center(self.directory.centers(), component, position).clone()
    }
}

/// Pure selection over a non-empty directory slice.
///
/// With a position: among centers relevant for the component (direct
/// specialty or the wildcard), the one at minimum great-circle distance;
/// ties go to the earliest entry. Without a position: the first center
/// listing the component directly, then the first wildcard center, then
/// the first entry outright; no distances are computed.
pub fn select_center<'a>(
    centers: &'a [ServiceCenter],
    component: &str,
    position: Option<Coordinates>,
) -> &'a ServiceCenter {
    match position {
        Some(from) => {
            let relevant: Vec<&ServiceCenter> = centers
                .iter()
                .filter(|c| c.is_relevant_for(component))
                .collect();
            if relevant.is_empty() {
                // unreachable while the wildcard invariant holds
                return &centers[0];
            }

            let mut nearest = relevant[0];
            let mut min_distance = haversine_miles(from, nearest.location);
            for center in &relevant[1..] {
                let distance = haversine_miles(from, center.location);
                if distance < min_distance {
                    min_distance = distance;
                    nearest = center;
                }
            }
            tracing::debug!("nearest center for {}: {} ({:.2} mi)", component, nearest.name, min_distance);
            nearest
        }
        None => centers
            .iter()
            .find(|c| c.has_specialty(component))
            .or_else(|| centers.iter().find(|c| c.has_specialty(GENERAL_MAINTENANCE)))
            .unwrap_or(&centers[0]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::position::FixedPositionProvider;
    use crate::domain::model::{PositionFix, GENERAL_MAINTENANCE};
    use crate::utils::error::PositionError;
    use async_trait::async_trait;

    fn center(id: u32, name: &str, lat: f64, lng: f64, specialties: &[&str]) -> ServiceCenter {
        ServiceCenter {
            id,
            name: name.to_string(),
            address: format!("{} Test Rd", id),
            location: Coordinates { lat, lng },
            specialties: specialties.iter().map(|s| s.to_string()).collect(),
            phone: "(555) 000-0000".to_string(),
        }
    }

    struct DeniedPositioner;

    #[async_trait]
    impl PositionProvider for DeniedPositioner {
        async fn current_position(
            &self,
            _request: &PositionRequest,
        ) -> Result<PositionFix, PositionError> {
            Err(PositionError::Denied)
        }
    }

    #[tokio::test]
    async fn unique_qualifying_center_wins_regardless_of_distance() {
        let directory = ServiceDirectory::new(vec![
            center(1, "Far Transmission Shop", 10.0, 10.0, &["Transmission", GENERAL_MAINTENANCE]),
            center(2, "Close Brake Shop", 0.1, 0.1, &["Brake System"]),
            center(3, "Close Tire Shop", 0.2, 0.2, &["Tires"]),
        ])
        .unwrap();
        let positioner = FixedPositionProvider::new(Coordinates { lat: 0.0, lng: 0.0 });
        let locator = ServiceLocator::new(directory, positioner);

        let result = locator.find_nearest("Transmission").await;
        assert_eq!(result.name, "Far Transmission Shop");
    }

    #[tokio::test]
    async fn nearest_relevant_center_selected() {
        let positioner = FixedPositionProvider::new(Coordinates {
            lat: 40.7614,
            lng: -73.9776,
        });
        let locator = ServiceLocator::new(ServiceDirectory::builtin(), positioner);

        // From Quick Lube's own doorstep, Quick Lube beats the other two.
        let result = locator.find_nearest("Air Filter").await;
        assert_eq!(result.name, "Quick Lube & Service");
    }

    #[tokio::test]
    async fn equidistant_tie_goes_to_directory_order() {
        let directory = ServiceDirectory::new(vec![
            center(1, "North Shop", 1.0, 0.0, &[GENERAL_MAINTENANCE]),
            center(2, "South Shop", -1.0, 0.0, &[GENERAL_MAINTENANCE]),
        ])
        .unwrap();
        let positioner = FixedPositionProvider::new(Coordinates { lat: 0.0, lng: 0.0 });
        let locator = ServiceLocator::new(directory, positioner);

        let result = locator.find_nearest("Engine Oil System").await;
        assert_eq!(result.name, "North Shop");
    }

    #[tokio::test]
    async fn denied_position_prefers_direct_specialty_match() {
        let locator = ServiceLocator::new(ServiceDirectory::builtin(), DeniedPositioner);

        // Honda comes first and carries the wildcard, but AutoCare Plus is the
        // first center actually listing "Air Filter".
        let result = locator.find_nearest("Air Filter").await;
        assert_eq!(result.name, "AutoCare Plus");
    }

    #[tokio::test]
    async fn denied_position_with_unknown_component_falls_back_to_wildcard() {
        let locator = ServiceLocator::new(ServiceDirectory::builtin(), DeniedPositioner);

        let result = locator.find_nearest("Flux Capacitor").await;
        assert_eq!(result.name, "Honda Service Center Downtown");
    }

    #[test]
    fn fallback_path_never_computes_distances() {
        // Without a position the earliest direct match wins even when a later
        // qualifying center would be nearer to any conceivable position.
        let centers = vec![
            center(1, "First Oil Shop", 89.0, 0.0, &["Engine Oil System"]),
            center(2, "Second Oil Shop", 0.0, 0.0, &["Engine Oil System", GENERAL_MAINTENANCE]),
        ];
        let result = select_center(&centers, "Engine Oil System", None);
        assert_eq!(result.name, "First Oil Shop");
    }

    #[test]
    fn empty_filter_guard_returns_first_entry() {
        // Wildcard-free directory violates the invariant; the guard still
        // produces a deterministic answer.
        let centers = vec![
            center(1, "Brake Shop", 1.0, 1.0, &["Brake System"]),
            center(2, "Tire Shop", 2.0, 2.0, &["Tires"]),
        ];
        let with_position = select_center(
            &centers,
            "Air Filter",
            Some(Coordinates { lat: 2.0, lng: 2.0 }),
        );
        assert_eq!(with_position.name, "Brake Shop");

        let without_position = select_center(&centers, "Air Filter", None);
        assert_eq!(without_position.name, "Brake Shop");
    }
}
