use crate::constants::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_DATA_DIR, DEFAULT_NETWORK_FILE,
    DEFAULT_TICK_INTERVAL_MS, DFS_RESULT_FILE, DIJKSTRA_DISTANCE_RESULT_FILE,
    DIJKSTRA_TIME_RESULT_FILE, JOURNEY_TITLE, SETTINGS_FILE,
};
use crate::utils::format_number;
use serde::{Deserialize, Serialize};

/// Which of the engine's result files the path overlay shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathResultKind {
    Dfs,
    #[default]
    DijkstraDistance,
    DijkstraTime,
}

impl PathResultKind {
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            PathResultKind::Dfs => DFS_RESULT_FILE,
            PathResultKind::DijkstraDistance => DIJKSTRA_DISTANCE_RESULT_FILE,
            PathResultKind::DijkstraTime => DIJKSTRA_TIME_RESULT_FILE,
        }
    }

    /// Figure title for a journey with the given cost.
    ///
    /// A missing or zero cost gives the bare title. Depth-first results carry
    /// no meaningful cost, so they always get the bare title.
    #[must_use]
    pub fn journey_title(self, cost: Option<f64>) -> String {
        let Some(cost) = cost.filter(|c| *c != 0.0) else {
            return JOURNEY_TITLE.to_string();
        };
        match self {
            PathResultKind::Dfs => JOURNEY_TITLE.to_string(),
            PathResultKind::DijkstraDistance => {
                format!("{JOURNEY_TITLE} (Total Distance: {} km)", format_number(cost))
            }
            PathResultKind::DijkstraTime => {
                format!("{JOURNEY_TITLE} (Total Time: {} min)", format_number(cost))
            }
        }
    }
}

/// Viewer settings, read from `visualizer.json` next to the bundle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerSettings {
    pub data_dir: String,
    pub network_file: String,
    pub path_result: PathResultKind,
    pub tick_interval_ms: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl Default for VisualizerSettings {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            network_file: DEFAULT_NETWORK_FILE.to_string(),
            path_result: PathResultKind::default(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
        }
    }
}

impl VisualizerSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings JSON; absent fields keep their defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid settings object
    pub fn from_json_str(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("Failed to parse settings: {e}"))
    }

    /// Path of the network file relative to the data directory
    #[must_use]
    pub fn network_path(&self) -> String {
        join_path(&self.data_dir, &self.network_file)
    }

    /// Path of the selected path result file relative to the data directory
    #[must_use]
    pub fn path_result_path(&self) -> String {
        join_path(&self.data_dir, self.path_result.file_name())
    }

    /// Fetch settings from the server, falling back to defaults.
    ///
    /// Settings never block a visualization, so any failure is only logged.
    pub async fn load() -> Self {
        match crate::import::fetch_text(SETTINGS_FILE).await {
            Ok(text) => Self::from_json_str(&text).unwrap_or_else(|e| {
                leptos::logging::warn!("{e}; using default settings");
                Self::default()
            }),
            Err(e) => {
                crate::logging::log!("No settings loaded ({e}); using defaults");
                Self::default()
            }
        }
    }
}

fn join_path(dir: &str, file: &str) -> String {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{dir}/{file}")
    }
}
