//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Trip, TripRequest};

/// Body of `POST /api/trip`.
///
/// Fields are loose here; [`PlanTripRequest::validate`] enforces the rules.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanTripRequest {
    /// Free-text origin (stop name or stop ID)
    #[serde(default)]
    pub origin: String,

    /// Free-text destination (stop name or stop ID)
    #[serde(default)]
    pub destination: String,

    /// Number of trips wanted; absent or 0 means the default
    #[serde(default, alias = "counts")]
    pub result_count: Option<i64>,
}

impl PlanTripRequest {
    /// Convert into a validated domain request.
    pub fn validate(&self) -> Result<TripRequest, DomainError> {
        TripRequest::new(&self.origin, &self.destination, self.result_count)
    }
}

/// Response for `POST /api/trip`.
#[derive(Debug, Serialize)]
pub struct PlanTripResponse {
    /// One entry per journey, in planner order
    pub trips: Vec<Trip>,
}
