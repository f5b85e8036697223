//! The geolocation seam.
//!
//! Where the user's coordinates come from is an external concern (a browser
//! permission prompt, a GPS fix, a static configuration). The crate defines
//! only the contract and the bounded wait applied to every provider.

use crate::LatLon;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;

/// How long [`acquire_location`] waits for a provider before giving up.
pub const LOCATION_TIMEOUT: Duration = Duration::from_secs(10);

/// Yields the user's approximate coordinates, or the reason they are not
/// available. Implementations may suspend while waiting on user or OS
/// permission; the wait is bounded by [`acquire_location`].
pub trait LocationProvider {
    fn current_location(&self) -> impl Future<Output = Result<LatLon, LocationError>> + Send;
}

#[derive(Debug, Error)]
pub enum LocationError {
    /// The user declined the location request. Drives a different
    /// user-facing message than the other failures.
    #[error("location permission denied")]
    PermissionDenied,

    #[error("no location fix within {0:?}")]
    Timeout(Duration),

    #[error("location unavailable: {0}")]
    Unavailable(String),
}

/// Runs a provider under the bounded wait, mapping an elapsed timer to
/// [`LocationError::Timeout`].
pub async fn acquire_location(
    provider: &impl LocationProvider,
) -> Result<LatLon, LocationError> {
    match timeout(LOCATION_TIMEOUT, provider.current_location()).await {
        Ok(result) => result,
        Err(_) => Err(LocationError::Timeout(LOCATION_TIMEOUT)),
    }
}
