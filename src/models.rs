mod mode;
mod network;
mod path_result;
mod station;
mod visualizer_settings;

pub use mode::Mode;
pub use network::{Connection, Network, StationNode};
pub use path_result::PathResult;
pub use station::{Bounds, Station, StationRegistry};
pub use visualizer_settings::{PathResultKind, VisualizerSettings};
