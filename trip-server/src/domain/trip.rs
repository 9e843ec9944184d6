//! Trip requests and the simplified trips returned to clients.

use serde::Serialize;

use super::error::DomainError;

/// Smallest number of trips a client may ask for.
pub const MIN_RESULT_COUNT: u8 = 1;

/// Largest number of trips a client may ask for.
pub const MAX_RESULT_COUNT: u8 = 10;

/// Number of trips requested when the client does not say.
pub const DEFAULT_RESULT_COUNT: u8 = 2;

/// A validated origin/destination request.
///
/// Origin and destination are trimmed and non-empty; the result count is
/// within `MIN_RESULT_COUNT..=MAX_RESULT_COUNT`. Any `TripRequest` value
/// is valid by construction.
///
/// # Examples
///
/// ```
/// use trip_server::domain::TripRequest;
///
/// let req = TripRequest::new(" Redfern ", "Town Hall", None).unwrap();
/// assert_eq!(req.origin(), "Redfern");
/// assert_eq!(req.result_count(), 2);
///
/// assert!(TripRequest::new("Redfern", "  ", None).is_err());
/// assert!(TripRequest::new("Redfern", "Town Hall", Some(11)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    origin: String,
    destination: String,
    result_count: u8,
}

impl TripRequest {
    /// Validate raw request fields.
    ///
    /// A missing or zero `result_count` means "use the default".
    pub fn new(
        origin: &str,
        destination: &str,
        result_count: Option<i64>,
    ) -> Result<Self, DomainError> {
        let origin = origin.trim();
        let destination = destination.trim();
        if origin.is_empty() || destination.is_empty() {
            return Err(DomainError::MissingEndpoints);
        }

        let result_count = match result_count {
            None | Some(0) => DEFAULT_RESULT_COUNT,
            Some(n) => u8::try_from(n)
                .ok()
                .filter(|n| (MIN_RESULT_COUNT..=MAX_RESULT_COUNT).contains(n))
                .ok_or(DomainError::ResultCountOutOfRange(n))?,
        };

        Ok(Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            result_count,
        })
    }

    /// Free-text origin, passed to the planner as-is.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Free-text destination, passed to the planner as-is.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Number of trips to ask the planner for.
    pub fn result_count(&self) -> u8 {
        self.result_count
    }
}

/// One trip as shown to the client.
///
/// All fields are display strings: names are cleaned and times are
/// already rendered in local time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
}
