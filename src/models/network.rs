use super::StationRegistry;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationNode {
    pub code: String,
}

/// Directed connection weight, distance in km
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub distance: f64,
}

/// The railway network as loaded from the pathfinding engine's output.
///
/// Nodes exist only for stations that appear as an endpoint of some
/// connection. Codes are kept as-is; whether they resolve in the station
/// registry is decided at render time.
#[derive(Debug, Clone, Default)]
pub struct Network {
    pub graph: DiGraph<StationNode, Connection>,
    pub station_code_to_index: HashMap<String, NodeIndex>,
}

impl Network {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station node if it doesn't exist, return its `NodeIndex`
    pub fn add_or_get_station(&mut self, code: &str) -> NodeIndex {
        if let Some(&index) = self.station_code_to_index.get(code) {
            return index;
        }
        let index = self.graph.add_node(StationNode { code: code.to_string() });
        self.station_code_to_index.insert(code.to_string(), index);
        index
    }

    /// Add a directed connection. A repeated (from, to) pair keeps the last distance.
    pub fn add_connection(&mut self, from: &str, to: &str, distance: f64) -> EdgeIndex {
        let from_idx = self.add_or_get_station(from);
        let to_idx = self.add_or_get_station(to);
        self.graph.update_edge(from_idx, to_idx, Connection { distance })
    }

    #[must_use]
    pub fn get_station_index(&self, code: &str) -> Option<NodeIndex> {
        self.station_code_to_index.get(code).copied()
    }

    #[must_use]
    pub fn get_station_code(&self, index: NodeIndex) -> Option<&str> {
        self.graph.node_weight(index).map(|node| node.code.as_str())
    }

    /// Distance of the connection `from -> to`, if the network has one
    #[must_use]
    pub fn distance(&self, from: &str, to: &str) -> Option<f64> {
        let from_idx = self.get_station_index(from)?;
        let to_idx = self.get_station_index(to)?;
        let edge = self.graph.find_edge(from_idx, to_idx)?;
        self.graph.edge_weight(edge).map(|connection| connection.distance)
    }

    /// Station codes in the order they were first seen
    pub fn station_codes(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(|node| node.code.as_str())
    }

    /// Every connection as `(from, to, distance)`
    pub fn connections(&self) -> impl Iterator<Item = (&str, &str, f64)> {
        self.graph.edge_references().filter_map(|edge| {
            let from = self.get_station_code(edge.source())?;
            let to = self.get_station_code(edge.target())?;
            Some((from, to, edge.weight().distance))
        })
    }

    #[must_use]
    pub fn station_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn connection_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Codes referenced by the network that the registry cannot place
    #[must_use]
    pub fn unknown_stations(&self, registry: &StationRegistry) -> Vec<String> {
        self.station_codes()
            .filter(|code| !registry.contains(code))
            .map(ToString::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connections_are_directed() {
        let mut network = Network::new();
        network.add_connection("A", "B", 10.0);
        network.add_connection("B", "A", 12.0);

        assert_eq!(network.distance("A", "B"), Some(10.0));
        assert_eq!(network.distance("B", "A"), Some(12.0));
        assert_eq!(network.station_count(), 2);
        assert_eq!(network.connection_count(), 2);
    }

    #[test]
    fn test_missing_connection_has_no_distance() {
        let mut network = Network::new();
        network.add_connection("A", "B", 10.0);

        assert_eq!(network.distance("B", "C"), None);
        assert_eq!(network.distance("A", "C"), None);
        assert_eq!(network.distance("X", "Y"), None);
    }

    #[test]
    fn test_repeated_connection_keeps_last_distance() {
        let mut network = Network::new();
        network.add_connection("A", "B", 10.0);
        network.add_connection("A", "B", 15.0);

        assert_eq!(network.connection_count(), 1);
        assert_eq!(network.distance("A", "B"), Some(15.0));
    }

    #[test]
    fn test_stations_are_shared_between_connections() {
        let mut network = Network::new();
        network.add_connection("A", "B", 1.0);
        network.add_connection("B", "C", 2.0);

        let codes: Vec<&str> = network.station_codes().collect();
        assert_eq!(codes, vec!["A", "B", "C"]);

        let connections: Vec<_> = network.connections().collect();
        assert_eq!(connections, vec![("A", "B", 1.0), ("B", "C", 2.0)]);
    }

    #[test]
    fn test_unknown_stations() {
        let registry = StationRegistry::from_rows(&[
            ("A", "Alpha", (0.0, 0.0)),
            ("B", "Bravo", (1.0, 0.0)),
        ]);
        let mut network = Network::new();
        network.add_connection("A", "B", 1.0);
        network.add_connection("B", "ZZZ", 2.0);

        assert_eq!(network.unknown_stations(&registry), vec!["ZZZ".to_string()]);
    }
}
