//! Query parameters for the trip endpoint.

use chrono::NaiveDateTime;

use crate::domain::TripRequest;

/// Parameters the planner requires on every trip request.
const FIXED_PARAMS: [(&str, &str); 11] = [
    ("outputFormat", "rapidJSON"),
    ("coordOutputFormat", "EPSG:4326"),
    ("depArrMacro", "dep"),
    ("type_origin", "any"),
    ("type_destination", "any"),
    ("excludedMeans", "checkbox"),
    // Buses
    ("exclMOT_5", "1"),
    ("TfNSWTR", "true"),
    ("version", "10.2.1.42"),
    ("itOptionsActive", "1"),
    ("cycleSpeed", "16"),
];

/// A fully built trip planner query.
///
/// Departure searches start from `now`, which must already be the local
/// wall-clock time of the service's zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripQuery {
    params: Vec<(&'static str, String)>,
}

impl TripQuery {
    /// Build the query for a request departing at `now`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use trip_server::domain::TripRequest;
    /// use trip_server::tfnsw::TripQuery;
    ///
    /// let now = NaiveDate::from_ymd_opt(2026, 1, 17)
    ///     .unwrap()
    ///     .and_hms_opt(7, 5, 0)
    ///     .unwrap();
    /// let request = TripRequest::new("Redfern", "Town Hall", None).unwrap();
    /// let query = TripQuery::new(&request, now);
    ///
    /// assert_eq!(query.get("itdDate"), Some("20260117"));
    /// assert_eq!(query.get("itdTime"), Some("0705"));
    /// assert_eq!(query.get("calcNumberOfTrips"), Some("2"));
    /// ```
    pub fn new(request: &TripRequest, now: NaiveDateTime) -> Self {
        let mut params: Vec<(&'static str, String)> = FIXED_PARAMS
            .iter()
            .map(|&(key, value)| (key, value.to_string()))
            .collect();

        params.extend([
            ("itdDate", now.format("%Y%m%d").to_string()),
            ("itdTime", now.format("%H%M").to_string()),
            ("name_origin", request.origin().to_string()),
            ("name_destination", request.destination().to_string()),
            ("calcNumberOfTrips", request.result_count().to_string()),
        ]);

        Self { params }
    }

    /// Value of a single parameter.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// All parameters, ready for `RequestBuilder::query`.
    pub fn params(&self) -> &[(&'static str, String)] {
        &self.params
    }
}
