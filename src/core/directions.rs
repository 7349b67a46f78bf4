use crate::domain::model::{DirectionsOutcome, ServiceCenter};
use crate::domain::ports::NavigationHost;
use crate::utils::error::Result;
use regex::Regex;
use std::time::Duration;
use url::form_urlencoded::byte_serialize;
use url::Url;

/// The generic geo: fallback goes out this long after the Android deep link,
/// whether or not the deep link worked.
const GEO_FALLBACK_DELAY: Duration = Duration::from_millis(200);

/// Destination URLs for one center, coordinates first. The web URL is the
/// canonical one; the rest are mobile deep links tried only when a new
/// browsing context cannot be opened.
#[derive(Debug, Clone)]
pub struct DirectionsRequest {
    pub web: Url,
    pub apple: String,
    pub google_app: String,
    pub geo: String,
}

pub fn build_directions_request(center: &ServiceCenter) -> Result<DirectionsRequest> {
    let destination = format!("{},{}", center.location.lat, center.location.lng);
    let encoded: String = byte_serialize(destination.as_bytes()).collect();
    let encoded_name: String = byte_serialize(center.name.as_bytes()).collect();

    let mut web = Url::parse("https://www.google.com/maps/dir/")?;
    web.query_pairs_mut()
        .append_pair("api", "1")
        .append_pair("destination", &destination)
        .append_pair("travelmode", "driving");

    Ok(DirectionsRequest {
        web,
        apple: format!("https://maps.apple.com/?daddr={}&dirflg=d", encoded),
        google_app: format!("comgooglemaps://?daddr={}&directionsmode=driving", encoded),
        geo: format!("geo:{}?q={}({})", destination, encoded, encoded_name),
    })
}

/// Best-effort, non-retrying dispatch in priority order: web tab, then a
/// platform deep link, then manual-copy degradation. There is no confirmation
/// channel from the external map application, so the mobile paths report
/// success optimistically.
pub async fn dispatch<N: NavigationHost>(host: &N, request: &DirectionsRequest) -> DirectionsOutcome {
    if host.open_new_context(request.web.as_str()).is_ok() {
        return DirectionsOutcome {
            success: true,
            url: request.web.to_string(),
        };
    }
    tracing::debug!("new browsing context refused, trying platform deep links");

    let platform = host.platform();
    let ios = Regex::new(r"(?i)iphone|ipad|ipod").unwrap();
    let android = Regex::new(r"(?i)android").unwrap();

    if ios.is_match(&platform) {
        if host.redirect(&request.apple).is_ok() {
            return DirectionsOutcome {
                success: true,
                url: request.apple.clone(),
            };
        }
    } else if android.is_match(&platform) && host.redirect(&request.google_app).is_ok() {
        tokio::time::sleep(GEO_FALLBACK_DELAY).await;
        let _ = host.redirect(&request.geo);
        return DirectionsOutcome {
            success: true,
            url: request.google_app.clone(),
        };
    }

    tracing::warn!("all navigation attempts blocked, returning URL for manual use");
    DirectionsOutcome {
        success: false,
        url: request.web.to_string(),
    }
}

/// Convenience wrapper: build the request for a center and hand it to the host.
pub async fn open_directions<N: NavigationHost>(
    host: &N,
    center: &ServiceCenter,
) -> Result<DirectionsOutcome> {
    let request = build_directions_request(center)?;
    Ok(dispatch(host, &request).await)
}
