use serde::{Deserialize, Serialize};

/// Route computed by the external pathfinding engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    pub path: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

impl PathResult {
    #[must_use]
    pub fn new(path: Vec<String>, cost: Option<f64>) -> Self {
        Self { path, cost }
    }

    /// Consecutive station pairs; empty for a single-station path
    #[must_use]
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.path
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}
