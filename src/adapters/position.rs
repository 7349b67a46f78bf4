use crate::domain::model::{Coordinates, PositionFix, PositionRequest};
use crate::domain::ports::PositionProvider;
use crate::utils::error::PositionError;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tokio::sync::Mutex;

#[derive(Debug, Deserialize)]
struct PositionResponse {
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    accuracy: Option<f64>,
}

/// Positioning over a JSON geolocation endpoint. Keeps the last fix and
/// reuses it while younger than the request's max age, mirroring the
/// browser geolocation cache; the locator itself never caches.
pub struct HttpPositionProvider {
    endpoint: String,
    client: Client,
    last_fix: Mutex<Option<PositionFix>>,
}

impl HttpPositionProvider {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            client: Client::new(),
            last_fix: Mutex::new(None),
        }
    }
}

#[async_trait]
impl PositionProvider for HttpPositionProvider {
    async fn current_position(
        &self,
        request: &PositionRequest,
    ) -> std::result::Result<PositionFix, PositionError> {
        let mut last_fix = self.last_fix.lock().await;
        if let Some(fix) = *last_fix {
            let age = Utc::now().signed_duration_since(fix.fixed_at);
            // max_age of zero always forces a fresh fix
            if age.to_std().map(|age| age < request.max_age).unwrap_or(false) {
                tracing::debug!("reusing cached position fix ({}s old)", age.num_seconds());
                return Ok(fix);
            }
        }

        tracing::debug!("requesting position from {}", self.endpoint);
        let mut http_request = self
            .client
            .get(&self.endpoint)
            .timeout(request.timeout);
        if request.high_accuracy {
            http_request = http_request.query(&[("accuracy", "high")]);
        }

        let response = http_request.send().await.map_err(|e| {
            if e.is_timeout() {
                PositionError::Timeout(request.timeout)
            } else {
                PositionError::Unavailable(e.to_string())
            }
        })?;

        match response.status() {
            StatusCode::FORBIDDEN | StatusCode::UNAUTHORIZED => return Err(PositionError::Denied),
            status if !status.is_success() => {
                return Err(PositionError::Unavailable(format!(
                    "positioning endpoint returned {}",
                    status
                )))
            }
            _ => {}
        }

        let body: PositionResponse = response
            .json()
            .await
            .map_err(|e| PositionError::Unavailable(e.to_string()))?;

        let fix = PositionFix {
            coords: Coordinates {
                lat: body.latitude,
                lng: body.longitude,
            },
            accuracy_m: body.accuracy,
            fixed_at: Utc::now(),
        };
        *last_fix = Some(fix);
        Ok(fix)
    }
}

/// A position pinned at construction; always succeeds. Backs the CLI's
/// `--lat`/`--lng` override and deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedPositionProvider {
    coords: Coordinates,
}

impl FixedPositionProvider {
    pub fn new(coords: Coordinates) -> Self {
        Self { coords }
    }
}

#[async_trait]
impl PositionProvider for FixedPositionProvider {
    async fn current_position(
        &self,
        _request: &PositionRequest,
    ) -> std::result::Result<PositionFix, PositionError> {
        Ok(PositionFix {
            coords: self.coords,
            accuracy_m: None,
            fixed_at: Utc::now(),
        })
    }
}
