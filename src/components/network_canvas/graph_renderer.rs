use super::style::StyleProfile;
use super::surface::{DrawingSurface, EdgeStroke, LabelWeight};
use crate::error::VisualizeError;
use crate::geometry::midpoint;
use crate::models::{Network, StationRegistry};
use crate::utils::distance_label;
use std::collections::BTreeSet;

/// A directed edge ready to draw; edges without a known distance get no label
#[derive(Debug, Clone, PartialEq)]
pub struct DrawableEdge {
    pub from: String,
    pub to: String,
    pub distance: Option<f64>,
}

/// The part of a network one rendering pass draws
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawableGraph {
    pub nodes: Vec<String>,
    pub edges: Vec<DrawableEdge>,
}

impl From<&Network> for DrawableGraph {
    fn from(network: &Network) -> Self {
        Self {
            nodes: network.station_codes().map(ToString::to_string).collect(),
            edges: network
                .connections()
                .map(|(from, to, distance)| DrawableEdge {
                    from: from.to_string(),
                    to: to.to_string(),
                    distance: Some(distance),
                })
                .collect(),
        }
    }
}

/// Draw `graph` onto `surface` with one style profile.
///
/// Both the background and the highlight pass go through here, so they share
/// the registry positions and the label format. Draw order is edges, nodes,
/// edge labels, node labels. Nodes and edges whose station is missing from
/// the registry are left out of the pass and reported once as a warning.
pub fn draw_graph<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    graph: &DrawableGraph,
    registry: &StationRegistry,
    style: &StyleProfile,
) {
    let mut unknown = BTreeSet::new();
    let mut resolve = |code: &str| {
        let position = registry.position(code);
        if position.is_none() {
            unknown.insert(code.to_string());
        }
        position
    };

    let edges: Vec<_> = graph
        .edges
        .iter()
        .filter_map(|edge| {
            let from = resolve(&edge.from);
            let to = resolve(&edge.to);
            Some((from?, to?, edge.distance))
        })
        .collect();
    let nodes: Vec<_> = graph
        .nodes
        .iter()
        .filter_map(|code| resolve(code).map(|position| (code, position)))
        .collect();

    let stroke = EdgeStroke {
        color: style.edge_color.to_string(),
        width: style.edge_width,
        arrow: style.draw_arrows,
        start_inset: style.node_size,
        end_inset: style.node_size,
    };
    for &(from, to, _) in &edges {
        surface.draw_edge(from, to, &stroke);
    }

    for &(_, position) in &nodes {
        surface.draw_node(position, style.node_size, style.node_color);
    }

    if style.draw_edge_labels {
        for &(from, to, distance) in &edges {
            if let Some(distance) = distance {
                surface.draw_label(midpoint(from, to), &distance_label(distance), LabelWeight::Regular, true);
            }
        }
    }

    if style.draw_node_labels {
        for &(code, position) in &nodes {
            surface.draw_label(position, code, LabelWeight::Bold, false);
        }
    }

    for code in unknown {
        leptos::logging::warn!("{}; omitted from this pass", VisualizeError::unknown_station(code));
    }
}
