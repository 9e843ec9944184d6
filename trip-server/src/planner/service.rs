//! The trip planning entry point.

use tracing::{info, warn};

use crate::domain::{LocalZone, Trip, TripRequest};
use crate::tfnsw::{TfnswClient, TfnswError, TripQuery};

use super::normalize::normalize_journeys;

/// Everything needed to answer a trip request.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct TripPlanner {
    client: TfnswClient,
    zone: LocalZone,
}

impl TripPlanner {
    /// Create a planner using `client` for lookups and `zone` for display.
    pub fn new(client: TfnswClient, zone: LocalZone) -> Self {
        Self { client, zone }
    }

    /// The zone times are rendered in.
    pub fn zone(&self) -> &LocalZone {
        &self.zone
    }

    /// Plan trips departing now.
    pub async fn plan(&self, request: &TripRequest) -> Result<Vec<Trip>, TfnswError> {
        let query = TripQuery::new(request, self.zone.now());
        self.plan_query(&query).await
    }

    /// Plan trips for an already built query.
    pub async fn plan_query(&self, query: &TripQuery) -> Result<Vec<Trip>, TfnswError> {
        let response = self.client.fetch_trips(query).await.inspect_err(|e| {
            warn!(error = %e, timeout = e.is_timeout(), "trip planner call failed");
        })?;

        let trips = normalize_journeys(&response, &self.zone);
        info!(
            journeys = response.journeys().len(),
            trips = trips.len(),
            "normalized trip planner response"
        );
        Ok(trips)
    }
}
