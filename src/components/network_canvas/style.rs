/// Visual parameters applied uniformly to one rendering pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleProfile {
    pub node_color: &'static str,
    /// Node radius in pixels
    pub node_size: f64,
    pub edge_color: &'static str,
    /// Edge stroke width in pixels
    pub edge_width: f64,
    pub draw_arrows: bool,
    pub draw_edge_labels: bool,
    pub draw_node_labels: bool,
}

/// Whole network on its own (mode 1)
pub const NETWORK: StyleProfile = StyleProfile {
    node_color: "#87ceeb",
    node_size: 22.0,
    edge_color: "#808080",
    edge_width: 2.0,
    draw_arrows: true,
    draw_edge_labels: true,
    draw_node_labels: true,
};

/// Muted network behind a highlighted path
pub const BACKGROUND: StyleProfile = StyleProfile {
    node_color: "#d3d3d3",
    node_size: 18.0,
    edge_color: "#d3d3d3",
    edge_width: 1.0,
    draw_arrows: true,
    draw_edge_labels: false,
    draw_node_labels: true,
};

/// The path itself, drawn over [`BACKGROUND`]
pub const HIGHLIGHT: StyleProfile = StyleProfile {
    node_color: "#90ee90",
    node_size: 22.0,
    edge_color: "#008000",
    edge_width: 3.0,
    draw_arrows: true,
    draw_edge_labels: true,
    draw_node_labels: true,
};
