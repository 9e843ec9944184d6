//! Trip planner response DTOs.
//!
//! These types map directly to the `rapidJSON` trip response. Only the
//! fields the service reads are modelled; everything else is ignored.
//! They use `Option` liberally because the planner omits fields rather
//! than sending empty values in many cases. A `null` where an object is
//! expected decodes as that object's default.

use serde::{Deserialize, Deserializer};

/// Response from `/v1/tp/trip`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlanResponse {
    /// Proposed itineraries, best first.
    #[serde(default, deserialize_with = "nulls_as_default")]
    pub journeys: Option<Vec<Journey>>,
}

impl TripPlanResponse {
    /// Journeys in upstream order (empty if the field was absent).
    pub fn journeys(&self) -> &[Journey] {
        self.journeys.as_deref().unwrap_or(&[])
    }
}

/// One proposed itinerary.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    /// Segments of the itinerary, in travel order.
    #[serde(default, deserialize_with = "nulls_as_default")]
    pub legs: Option<Vec<Leg>>,
}

impl Journey {
    /// Legs in travel order (empty if the field was absent).
    pub fn legs(&self) -> &[Leg] {
        self.legs.as_deref().unwrap_or(&[])
    }
}

/// One continuous segment of a journey.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    /// Where this leg starts.
    #[serde(default, deserialize_with = "null_as_default")]
    pub origin: Waypoint,

    /// Where this leg ends.
    #[serde(default, deserialize_with = "null_as_default")]
    pub destination: Waypoint,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn nulls_as_default<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let items = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
    Ok(items.map(|items| items.into_iter().map(Option::unwrap_or_default).collect()))
}

/// A stop at either end of a leg.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    /// Short stop name, e.g. "Central Station, Platform 20".
    pub disassembled_name: Option<String>,

    /// Full stop name including locality.
    pub name: Option<String>,

    /// Real-time departure estimate.
    pub departure_time_estimated: Option<String>,

    /// Scheduled departure for today.
    pub departure_time_planned: Option<String>,

    /// Departure from the static timetable.
    pub departure_time_base_timetable: Option<String>,

    /// Real-time arrival estimate.
    pub arrival_time_estimated: Option<String>,

    /// Scheduled arrival for today.
    pub arrival_time_planned: Option<String>,

    /// Arrival from the static timetable.
    pub arrival_time_base_timetable: Option<String>,
}

impl Waypoint {
    /// Name to show for this stop.
    ///
    /// Prefers the short name; falls back to the full name, then to "".
    pub fn display_name(&self) -> &str {
        self.disassembled_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or(self.name.as_deref())
            .unwrap_or_default()
    }

    /// Departure times, most trusted first.
    pub fn departure_candidates(&self) -> [Option<&str>; 3] {
        [
            self.departure_time_estimated.as_deref(),
            self.departure_time_planned.as_deref(),
            self.departure_time_base_timetable.as_deref(),
        ]
    }

    /// Arrival times, most trusted first.
    pub fn arrival_candidates(&self) -> [Option<&str>; 3] {
        [
            self.arrival_time_estimated.as_deref(),
            self.arrival_time_planned.as_deref(),
            self.arrival_time_base_timetable.as_deref(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_rapid_json_journey() {
        let json = r#"{
            "version": "10.2.1.42",
            "systemMessages": [],
            "journeys": [{
                "rating": 0,
                "isAdditional": false,
                "legs": [{
                    "duration": 600,
                    "origin": {
                        "id": "2015133",
                        "name": "Redfern Station, Platform 1, Redfern",
                        "disassembledName": "Redfern Station, Platform 1",
                        "type": "platform",
                        "departureTimeEstimated": "2026-01-17T08:00:00Z",
                        "departureTimePlanned": "2026-01-17T08:00:00Z",
                        "departureTimeBaseTimetable": "2026-01-17T07:59:00Z"
                    },
                    "destination": {
                        "name": "Central Station, Platform 20, Sydney",
                        "disassembledName": "Central Station, Platform 20",
                        "arrivalTimePlanned": "2026-01-17T08:10:00Z",
                        "arrivalTimeBaseTimetable": "2026-01-17T08:11:00Z"
                    }
                }]
            }]
        }"#;

        let response: TripPlanResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.journeys().len(), 1);

        let leg = &response.journeys()[0].legs()[0];
        assert_eq!(leg.origin.display_name(), "Redfern Station, Platform 1");
        assert_eq!(
            leg.origin.departure_candidates(),
            [
                Some("2026-01-17T08:00:00Z"),
                Some("2026-01-17T08:00:00Z"),
                Some("2026-01-17T07:59:00Z"),
            ]
        );
        assert_eq!(
            leg.destination.arrival_candidates(),
            [
                None,
                Some("2026-01-17T08:10:00Z"),
                Some("2026-01-17T08:11:00Z"),
            ]
        );
    }

    #[test]
    fn missing_and_null_collections_are_empty() {
        let response: TripPlanResponse = serde_json::from_str("{}").unwrap();
        assert!(response.journeys().is_empty());

        let response: TripPlanResponse = serde_json::from_str(r#"{"journeys":null}"#).unwrap();
        assert!(response.journeys().is_empty());

        let response: TripPlanResponse =
            serde_json::from_str(r#"{"journeys":[{}, {"legs":[]}]}"#).unwrap();
        assert_eq!(response.journeys().len(), 2);
        assert!(response.journeys().iter().all(|j| j.legs().is_empty()));
    }

    #[test]
    fn null_objects_decode_as_empty() {
        let response: TripPlanResponse =
            serde_json::from_str(r#"{"journeys":[null, {"legs":[null]}]}"#).unwrap();
        assert_eq!(response.journeys().len(), 2);
        assert!(response.journeys()[0].legs().is_empty());
        assert_eq!(response.journeys()[1].legs().len(), 1);
        assert_eq!(response.journeys()[1].legs()[0].origin.display_name(), "");

        let leg: Leg = serde_json::from_str(
            r#"{"origin":null,"destination":{"disassembledName":"Central Station"}}"#,
        )
        .unwrap();
        assert_eq!(leg.origin.display_name(), "");
        assert_eq!(leg.origin.departure_candidates(), [None, None, None]);
        assert_eq!(leg.destination.display_name(), "Central Station");
    }

    #[test]
    fn null_times_are_missing() {
        let waypoint: Waypoint =
            serde_json::from_str(r#"{"disassembledName":"Museum","departureTimeEstimated":null}"#)
                .unwrap();
        assert_eq!(waypoint.departure_candidates(), [None, None, None]);
    }

    #[test]
    fn display_name_falls_back_to_full_name() {
        let waypoint = Waypoint {
            name: Some("Bondi Junction Station, Bondi Junction".into()),
            ..Waypoint::default()
        };
        assert_eq!(waypoint.display_name(), "Bondi Junction Station, Bondi Junction");

        let waypoint = Waypoint {
            disassembled_name: Some("".into()),
            name: Some("Museum Station, Sydney".into()),
            ..Waypoint::default()
        };
        assert_eq!(waypoint.display_name(), "Museum Station, Sydney");

        assert_eq!(Waypoint::default().display_name(), "");
    }

    #[test]
    fn wrong_shape_is_rejected() {
        assert!(serde_json::from_str::<TripPlanResponse>(r#"{"journeys":{}}"#).is_err());
        assert!(serde_json::from_str::<TripPlanResponse>(r#"{"journeys":[{"legs":7}]}"#).is_err());
    }
}
