use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A station with its fixed diagram position, in abstract grid units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub code: String,
    pub name: String,
    pub position: (f64, f64),
}

/// Axis-aligned extent of a set of positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Hand-curated lookup of station code to position and display name.
///
/// The registry is read-only once built and is passed explicitly to every
/// renderer, so tests can swap in a smaller table. Iteration follows
/// insertion order, which is also the legend order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationRegistry {
    stations: IndexMap<String, Station>,
}

impl StationRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from `(code, name, (x, y))` rows
    #[must_use]
    pub fn from_rows(rows: &[(&str, &str, (f64, f64))]) -> Self {
        let mut registry = Self::new();
        for &(code, name, position) in rows {
            registry.insert(code, name, position);
        }
        registry
    }

    /// Add a station, replacing any previous entry with the same code
    pub fn insert(&mut self, code: &str, name: &str, position: (f64, f64)) {
        self.stations.insert(
            code.to_string(),
            Station {
                code: code.to_string(),
                name: name.to_string(),
                position,
            },
        );
    }

    #[must_use]
    pub fn get(&self, code: &str) -> Option<&Station> {
        self.stations.get(code)
    }

    #[must_use]
    pub fn position(&self, code: &str) -> Option<(f64, f64)> {
        self.get(code).map(|station| station.position)
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.stations.contains_key(code)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.values()
    }

    /// Extent of every registered position, `None` for an empty registry.
    ///
    /// Both rendering passes project through these bounds, so it depends on
    /// the registry only and never on the graph being drawn.
    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        let mut positions = self.iter().map(|station| station.position);
        let (x, y) = positions.next()?;
        let initial = Bounds { min_x: x, min_y: y, max_x: x, max_y: y };

        Some(positions.fold(initial, |bounds, (x, y)| Bounds {
            min_x: bounds.min_x.min(x),
            min_y: bounds.min_y.min(y),
            max_x: bounds.max_x.max(x),
            max_y: bounds.max_y.max(y),
        }))
    }

    /// The Uttarakhand reference network the pathfinding engine works on
    #[must_use]
    pub fn uttarakhand() -> Self {
        Self::from_rows(&[
            ("DDN", "Dehradun", (0.0, 1.0)),
            ("HW", "Haridwar", (1.0, 1.0)),
            ("RK", "Roorkee", (0.0, 0.0)),
            ("KGM", "Kathgodam", (3.0, 0.5)),
            ("LD", "Laksar", (1.5, 0.5)),
            ("RMR", "Ramnagar", (2.0, 1.0)),
            ("TPZ", "Tanakpur", (2.5, 1.5)),
            ("KPV", "Kichha", (1.5, 0.0)),
            ("HLD", "Haldwani", (2.0, 0.0)),
            ("KPT", "Khatima", (3.0, 1.5)),
            ("LRJ", "Lalkuan", (3.5, 0.5)),
            ("UKA", "Udham Singh Nagar", (2.5, 0.5)),
            ("PBE", "Pauri", (1.0, 1.5)),
            ("SPE", "Srinagar", (0.5, 1.5)),
            ("CH", "Chamoli", (0.0, 1.5)),
            ("BHT", "Bharatpur", (0.5, 0.5)),
            ("ALM", "Almora", (3.5, 1.0)),
            ("NAE", "Nainital", (3.0, 1.0)),
            ("PTH", "Pithoragarh", (0.5, 2.0)),
            ("RUD", "Rudrapur", (3.0, 0.0)),
        ])
    }
}
