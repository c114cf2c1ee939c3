use crate::components::network_canvas::annotation_renderer::draw_annotations;
use crate::components::network_canvas::graph_renderer::{draw_graph, DrawableGraph};
use crate::components::network_canvas::path_overlay::composite_path_overlay;
use crate::components::network_canvas::style::NETWORK;
use crate::components::network_canvas::{DrawingSurface, TrainAnimation};
use crate::constants::NETWORK_TITLE;
use crate::error::{VisualizeError, VisualizeResult};
use crate::import::{parse_network, parse_path_result, DataSource};
use crate::models::{Mode, Network, PathResult, PathResultKind, StationRegistry, VisualizerSettings};

/// Files one attempt in `mode` reads, in load order
#[must_use]
pub fn required_files(mode: Mode, settings: &VisualizerSettings) -> Vec<String> {
    match mode {
        Mode::FullNetwork => vec![settings.network_path()],
        Mode::PathOverlay => vec![settings.network_path(), settings.path_result_path()],
    }
}

/// Every input of one attempt, loaded and parsed, nothing drawn yet
#[derive(Debug, Clone)]
pub struct PreparedFigure {
    pub mode: Mode,
    pub network: Network,
    pub path: Option<PathResult>,
    pub kind: PathResultKind,
}

/// What a finished draw left behind
#[derive(Debug)]
pub struct Figure {
    pub mode: Mode,
    pub title: String,
    /// Armed only in path overlay mode; not yet ticked
    pub animation: Option<TrainAnimation>,
    /// Stations left out of the drawing because the registry cannot place them
    pub warnings: Vec<VisualizeError>,
}

/// Load and parse every input `mode` needs.
///
/// # Errors
///
/// The first [`VisualizeError`] hit while reading or parsing an input file
pub fn prepare(
    mode: Mode,
    source: &impl DataSource,
    settings: &VisualizerSettings,
) -> VisualizeResult<PreparedFigure> {
    let network_file = settings.network_path();
    let network = parse_network(&network_file, &source.read_text(&network_file)?)?;

    let path = match mode {
        Mode::FullNetwork => None,
        Mode::PathOverlay => {
            let path_file = settings.path_result_path();
            Some(parse_path_result(&path_file, &source.read_text(&path_file)?)?)
        }
    };

    crate::logging::log!(
        "Loaded {} stations and {} connections for {}",
        network.station_count(),
        network.connection_count(),
        mode.label()
    );

    Ok(PreparedFigure {
        mode,
        network,
        path,
        kind: settings.path_result,
    })
}

impl PreparedFigure {
    /// Draw the figure: graph layers, title, then annotations
    pub fn render<S: DrawingSurface + ?Sized>(&self, surface: &mut S, registry: &StationRegistry) -> Figure {
        let (title, animation) = match &self.path {
            Some(path) => {
                composite_path_overlay(surface, &self.network, path, registry);
                (
                    self.kind.journey_title(path.cost),
                    Some(TrainAnimation::for_path(path, registry)),
                )
            }
            None => {
                draw_graph(surface, &DrawableGraph::from(&self.network), registry, &NETWORK);
                (NETWORK_TITLE.to_string(), None)
            }
        };

        surface.set_title(&title);
        draw_annotations(surface, registry);

        Figure {
            mode: self.mode,
            title,
            animation,
            warnings: self.unknown_stations(registry),
        }
    }

    fn unknown_stations(&self, registry: &StationRegistry) -> Vec<VisualizeError> {
        let mut codes = self.network.unknown_stations(registry);
        if let Some(path) = &self.path {
            for code in &path.path {
                if !registry.contains(code) && !codes.contains(code) {
                    codes.push(code.clone());
                }
            }
        }
        codes.into_iter().map(VisualizeError::unknown_station).collect()
    }
}

/// One visualization attempt: load everything, then draw.
///
/// Nothing touches `surface` unless every input loaded, so a failed attempt
/// leaves no partial figure behind.
///
/// # Errors
///
/// Any [`VisualizeError`] from loading the inputs
pub fn run_visualization<S: DrawingSurface + ?Sized>(
    mode: Mode,
    source: &impl DataSource,
    settings: &VisualizerSettings,
    registry: &StationRegistry,
    surface: &mut S,
) -> VisualizeResult<Figure> {
    let prepared = prepare(mode, source, settings).inspect_err(|e| {
        leptos::logging::error!("Visualization ({}) aborted: {e}", mode.label());
    })?;
    let figure = prepared.render(surface, registry);
    crate::logging::log!("Drew '{}' with {} warnings", figure.title, figure.warnings.len());
    Ok(figure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::network_canvas::style::HIGHLIGHT;
    use crate::components::network_canvas::surface::{DrawCommand, RecordingSurface, TextBoxSlot};
    use crate::import::PrefetchedSource;

    const NETWORK_JSON: &str = r#"{
        "A": {"connections": [{"to": "B", "distance": 10}]},
        "B": {"connections": [{"to": "C", "distance": 20}]},
        "C": {"connections": [{"to": "ZZZ", "distance": 5}]}
    }"#;

    fn registry() -> StationRegistry {
        StationRegistry::from_rows(&[
            ("A", "Alpha", (0.0, 0.0)),
            ("B", "Bravo", (1.0, 0.0)),
            ("C", "Charlie", (1.0, 1.0)),
            ("X", "Xray", (0.0, 1.0)),
        ])
    }

    fn source_with_path(settings: &VisualizerSettings, path_json: &str) -> PrefetchedSource {
        PrefetchedSource::new()
            .with_file(settings.network_path(), NETWORK_JSON)
            .with_file(settings.path_result_path(), path_json)
    }

    fn highlighted_edges(commands: &[DrawCommand]) -> usize {
        commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Edge { stroke, .. } if stroke.color == HIGHLIGHT.edge_color))
            .count()
    }

    #[test]
    fn test_required_files() {
        let settings = VisualizerSettings::default();
        assert_eq!(required_files(Mode::FullNetwork, &settings), vec![settings.network_path()]);
        assert_eq!(
            required_files(Mode::PathOverlay, &settings),
            vec![settings.network_path(), settings.path_result_path()]
        );
    }

    #[test]
    fn test_missing_network_file_draws_nothing() {
        let settings = VisualizerSettings::default();
        let mut surface = RecordingSurface::new();

        let error = run_visualization(Mode::FullNetwork, &PrefetchedSource::new(), &settings, &registry(), &mut surface)
            .expect_err("network file is missing");

        assert_eq!(error, VisualizeError::file_missing(settings.network_path()));
        assert!(surface.is_empty());
    }

    #[test]
    fn test_missing_path_field_draws_nothing() {
        let settings = VisualizerSettings::default();
        let source = source_with_path(&settings, r#"{"cost": 3}"#);
        let mut surface = RecordingSurface::new();

        let error = run_visualization(Mode::PathOverlay, &source, &settings, &registry(), &mut surface)
            .expect_err("path field is missing");

        assert_eq!(error, VisualizeError::missing_field(settings.path_result_path(), "path"));
        assert!(surface.is_empty());
    }

    #[test]
    fn test_full_network_mode() {
        let settings = VisualizerSettings::default();
        let source = PrefetchedSource::new().with_file(settings.network_path(), NETWORK_JSON);
        let mut surface = RecordingSurface::new();

        let figure = run_visualization(Mode::FullNetwork, &source, &settings, &registry(), &mut surface)
            .expect("inputs load");

        assert_eq!(figure.title, NETWORK_TITLE);
        assert_eq!(surface.title(), Some(NETWORK_TITLE));
        assert!(figure.animation.is_none());
        assert_eq!(figure.warnings, vec![VisualizeError::unknown_station("ZZZ")]);

        // C -> ZZZ is omitted; the other two edges are drawn
        let edges = surface
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Edge { .. }))
            .count();
        assert_eq!(edges, 2);
    }

    #[test]
    fn test_path_overlay_with_cost() {
        let settings = VisualizerSettings::default();
        let source = source_with_path(&settings, r#"{"path": ["A", "B", "C"], "cost": 30}"#);
        let mut surface = RecordingSurface::new();

        let figure = run_visualization(Mode::PathOverlay, &source, &settings, &registry(), &mut surface)
            .expect("inputs load");

        assert!(figure.title.contains("30"), "{}", figure.title);
        assert_eq!(highlighted_edges(&surface.commands), 2);

        let labels: Vec<&str> = surface
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Label { text, boxed: true, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(labels, vec!["10 km", "20 km"]);

        let animation = figure.animation.expect("path overlay animates");
        assert_eq!(animation.len(), 3);
        assert_eq!(animation.index(), 0);
        assert_eq!(surface.marker, None);
    }

    #[test]
    fn test_single_station_path() {
        let settings = VisualizerSettings::default();
        let source = source_with_path(&settings, r#"{"path": ["X"]}"#);
        let mut surface = RecordingSurface::new();

        let figure = run_visualization(Mode::PathOverlay, &source, &settings, &registry(), &mut surface)
            .expect("inputs load");

        assert_eq!(highlighted_edges(&surface.commands), 0);
        assert_eq!(figure.title, crate::constants::JOURNEY_TITLE);
        assert!(!figure.title.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_annotations_follow_the_title() {
        let settings = VisualizerSettings::default();
        let source = PrefetchedSource::new().with_file(settings.network_path(), NETWORK_JSON);
        let mut surface = RecordingSurface::new();

        run_visualization(Mode::FullNetwork, &source, &settings, &registry(), &mut surface).expect("inputs load");

        let tail: Vec<_> = surface.commands.iter().rev().take(3).collect();
        assert!(matches!(tail[0], DrawCommand::TextBox { slot: TextBoxSlot::Legend, .. }));
        assert!(matches!(tail[1], DrawCommand::TextBox { slot: TextBoxSlot::Scale, .. }));
        assert!(matches!(tail[2], DrawCommand::Title(_)));
    }

    #[test]
    fn test_reference_data_end_to_end() {
        let settings = VisualizerSettings::default();
        let source = PrefetchedSource::new()
            .with_file(settings.network_path(), include_str!("../test-data/uttarakhand_railway.json"))
            .with_file(
                settings.path_result_path(),
                include_str!("../test-data/uttarakhand_dijkstra_distance_result.json"),
            );
        let mut surface = RecordingSurface::new();

        let figure = run_visualization(
            Mode::PathOverlay,
            &source,
            &settings,
            &StationRegistry::uttarakhand(),
            &mut surface,
        )
        .expect("reference data loads");

        assert_eq!(figure.title, "Train Journey (Total Distance: 170 km)");
        assert!(figure.warnings.is_empty());
        assert_eq!(highlighted_edges(&surface.commands), 5);
        assert_eq!(figure.animation.map(|a| a.len()), Some(6));
    }
}
