use crate::error::{VisualizeError, VisualizeResult};
use crate::models::Network;
use indexmap::IndexMap;
use serde::Deserialize;

/// One station entry of the network file; fields other than `connections` are ignored
#[derive(Debug, Deserialize)]
struct StationRecord {
    #[serde(default)]
    connections: Vec<ConnectionRecord>,
}

#[derive(Debug, Deserialize)]
struct ConnectionRecord {
    to: Option<String>,
    distance: Option<f64>,
}

/// Parse the engine's network file into a [`Network`].
///
/// The file maps station codes to `{"connections": [{"to": .., "distance": ..}]}`.
/// Destinations are accepted whether or not the station registry knows them.
///
/// # Errors
///
/// - [`VisualizeError::Parse`] if the text is not a JSON object of station records
///   or a distance is negative
/// - [`VisualizeError::MissingField`] if a connection lacks `to` or `distance`
pub fn parse_network(file: &str, text: &str) -> VisualizeResult<Network> {
    let records: IndexMap<String, StationRecord> =
        serde_json::from_str(text).map_err(|e| VisualizeError::parse(file, e))?;

    let mut network = Network::new();
    for (from, record) in &records {
        for connection in &record.connections {
            let to = connection
                .to
                .as_deref()
                .ok_or_else(|| VisualizeError::missing_field(file, "to"))?;
            let distance = connection
                .distance
                .ok_or_else(|| VisualizeError::missing_field(file, "distance"))?;
            if distance < 0.0 {
                return Err(VisualizeError::parse(
                    file,
                    format!("negative distance {distance} for connection {from} -> {to}"),
                ));
            }
            network.add_connection(from, to, distance);
        }
    }

    crate::logging::log!(
        "Loaded network from {}: {} stations, {} connections",
        file,
        network.station_count(),
        network.connection_count()
    );

    Ok(network)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILE: &str = "network.json";

    #[test]
    fn test_parse_connections() {
        let text = r#"{
            "A": {"connections": [{"to": "B", "distance": 10}, {"to": "C", "distance": 7.5}]},
            "B": {"connections": [{"to": "A", "distance": 11}]}
        }"#;
        let network = parse_network(FILE, text).expect("valid network");

        assert_eq!(network.connection_count(), 3);
        assert_eq!(network.distance("A", "B"), Some(10.0));
        assert_eq!(network.distance("B", "A"), Some(11.0));
        assert_eq!(network.distance("A", "C"), Some(7.5));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let text = r#"{
            "A": {"name": "Alpha", "connections": [{"to": "B", "distance": 3, "time": 9}]},
            "B": {"platforms": 2}
        }"#;
        let network = parse_network(FILE, text).expect("valid network");

        assert_eq!(network.connection_count(), 1);
        assert_eq!(network.distance("A", "B"), Some(3.0));
    }

    #[test]
    fn test_station_without_connections_adds_no_node() {
        let network = parse_network(FILE, r#"{"A": {"connections": []}, "B": {}}"#)
            .expect("valid network");

        assert_eq!(network.station_count(), 0);
    }

    #[test]
    fn test_unknown_destination_is_kept() {
        let network = parse_network(FILE, r#"{"A": {"connections": [{"to": "NOWHERE", "distance": 4}]}}"#)
            .expect("valid network");

        assert_eq!(network.distance("A", "NOWHERE"), Some(4.0));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let error = parse_network(FILE, "{ not json").expect_err("malformed");
        assert!(matches!(error, VisualizeError::Parse { .. }));

        let error = parse_network(FILE, "[1, 2, 3]").expect_err("not an object");
        assert!(matches!(error, VisualizeError::Parse { .. }));
    }

    #[test]
    fn test_missing_connection_fields() {
        let error = parse_network(FILE, r#"{"A": {"connections": [{"distance": 4}]}}"#)
            .expect_err("no destination");
        assert_eq!(error, VisualizeError::missing_field(FILE, "to"));

        let error = parse_network(FILE, r#"{"A": {"connections": [{"to": "B"}]}}"#)
            .expect_err("no distance");
        assert_eq!(error, VisualizeError::missing_field(FILE, "distance"));
    }

    #[test]
    fn test_negative_distance_is_rejected() {
        let error = parse_network(FILE, r#"{"A": {"connections": [{"to": "B", "distance": -1}]}}"#)
            .expect_err("negative distance");
        assert!(matches!(error, VisualizeError::Parse { .. }));
    }

    #[test]
    fn test_reference_network_loads() {
        let text = include_str!("../../test-data/uttarakhand_railway.json");
        let network = parse_network(FILE, text).expect("reference network");

        assert_eq!(network.station_count(), 20);
        assert!(network.unknown_stations(&crate::models::StationRegistry::uttarakhand()).is_empty());
    }
}
