use crate::domain::Coordinate;

use super::error::LocationError;
use super::{Geolocation, Permission};

/// Where the map should center, and whether the device provided it.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationFix {
    pub coordinate: Coordinate,
    pub from_device: bool,
    /// Message for the screen when the device location was not used.
    pub error: Option<LocationError>,
}

impl LocationFix {
    /// Ask for permission, then read the device position. Falls back to
    /// `fallback` on denial or failure.
    pub async fn resolve(geo: &dyn Geolocation, fallback: Coordinate) -> Self {
        match locate(geo).await {
            Ok(coordinate) => Self {
                coordinate,
                from_device: true,
                error: None,
            },
            Err(error) => Self {
                coordinate: fallback,
                from_device: false,
                error: Some(error),
            },
        }
    }
}

/// Device position, after asking for permission.
pub async fn locate(geo: &dyn Geolocation) -> Result<Coordinate, LocationError> {
    if geo.request_permission().await == Permission::Denied {
        tracing::warn!("Location permission denied");
        return Err(LocationError::PermissionDenied);
    }
    let coordinate = geo.coordinates().await.inspect_err(|e| {
        tracing::warn!(error = %e, "Could not read device location");
    })?;
    if !coordinate.is_valid() {
        return Err(LocationError::Unavailable(format!(
            "out of range: {}, {}",
            coordinate.latitude, coordinate.longitude
        )));
    }
    Ok(coordinate)
}
