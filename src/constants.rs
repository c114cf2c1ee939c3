/// Title of the full-network figure
pub const NETWORK_TITLE: &str = "Uttarakhand Railway Network";

/// Title of the path figure when no cost is available
pub const JOURNEY_TITLE: &str = "Train Journey";

/// Question shown by the mode prompt
pub const MODE_PROMPT: &str =
    "Enter 1 to visualize whole graph or 2 to visualize path from source to destination: ";

/// Message shown when the prompt answer is neither "1" nor "2"
pub const INVALID_CHOICE_MESSAGE: &str = "Invalid choice. Please enter 1 or 2.";

/// Lines of the scale caption box
pub const SCALE_CAPTION: [&str; 3] = ["Scale:", "1 unit = 25 km", "2 units = 50 km"];

/// Width the first legend column is padded to
pub const LEGEND_COLUMN_WIDTH: usize = 25;

/// Default network file written by the pathfinding engine
pub const DEFAULT_NETWORK_FILE: &str = "uttarakhand_railway.json";

/// Path result files written by the pathfinding engine
pub const DFS_RESULT_FILE: &str = "uttarakhand_dfs_result.json";
pub const DIJKSTRA_DISTANCE_RESULT_FILE: &str = "uttarakhand_dijkstra_distance_result.json";
pub const DIJKSTRA_TIME_RESULT_FILE: &str = "uttarakhand_dijkstra_time_result.json";

/// Default directory (or URL prefix) the data files are read from
pub const DEFAULT_DATA_DIR: &str = "data";

/// Settings file fetched next to the bundle
pub const SETTINGS_FILE: &str = "visualizer.json";

/// One animation tick per second
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 1000;

pub const DEFAULT_CANVAS_WIDTH: u32 = 1400;
pub const DEFAULT_CANVAS_HEIGHT: u32 = 800;

/// Train marker drawn by the animation
pub const MARKER_COLOR: &str = "#e31a1c";
pub const MARKER_RADIUS: f64 = 9.0;
