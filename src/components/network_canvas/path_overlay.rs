use super::graph_renderer::{draw_graph, DrawableEdge, DrawableGraph};
use super::style::{BACKGROUND, HIGHLIGHT};
use super::surface::DrawingSurface;
use crate::models::{Network, PathResult, StationRegistry};

/// The stations and consecutive-pair edges of a path.
///
/// Distances come from the network's connection table; a pair the network
/// does not contain keeps its edge but has no distance, so it is drawn
/// without a label.
#[must_use]
pub fn path_subgraph(network: &Network, path: &PathResult) -> DrawableGraph {
    let mut nodes: Vec<String> = Vec::with_capacity(path.len());
    for code in &path.path {
        if !nodes.contains(code) {
            nodes.push(code.clone());
        }
    }

    let edges = path
        .pairs()
        .into_iter()
        .map(|(from, to)| {
            let distance = network.distance(from, to);
            if distance.is_none() {
                crate::logging::log!("Path edge {} -> {} is not in the network; drawing it unlabelled", from, to);
            }
            DrawableEdge {
                from: from.to_string(),
                to: to.to_string(),
                distance,
            }
        })
        .collect();

    DrawableGraph { nodes, edges }
}

/// Draw the muted network, then the highlighted path on top of it.
///
/// Both passes resolve positions through the same registry. Returns the
/// highlighted subgraph.
pub fn composite_path_overlay<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    network: &Network,
    path: &PathResult,
    registry: &StationRegistry,
) -> DrawableGraph {
    draw_graph(surface, &DrawableGraph::from(network), registry, &BACKGROUND);

    let highlight = path_subgraph(network, path);
    draw_graph(surface, &highlight, registry, &HIGHLIGHT);

    highlight
}
