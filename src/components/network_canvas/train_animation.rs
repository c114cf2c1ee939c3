use super::surface::DrawingSurface;
use crate::constants::{MARKER_COLOR, MARKER_RADIUS};
use crate::error::VisualizeError;
use crate::models::{PathResult, StationRegistry};

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Marker drawn at the station with this path index
    Moved { index: usize },
    /// Past the last station: marker removed, animation over
    Cleared,
    /// Tick after the end; nothing changed
    Finished,
}

/// Marker that walks a path one station per tick, exactly once.
///
/// `next_index` is the station the next tick draws. It starts at 0 with no
/// marker shown, and stops at `len()`, where the marker is cleared. Ticks
/// after that are no-ops, so an `L`-station path takes `L + 1` ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainAnimation {
    positions: Vec<(f64, f64)>,
    next_index: usize,
    finished: bool,
}

impl TrainAnimation {
    #[must_use]
    pub fn from_positions(positions: Vec<(f64, f64)>) -> Self {
        Self {
            positions,
            next_index: 0,
            finished: false,
        }
    }

    /// Resolve every path station through the registry.
    ///
    /// Stations the registry cannot place are skipped with a warning.
    #[must_use]
    pub fn for_path(path: &PathResult, registry: &StationRegistry) -> Self {
        let positions = path
            .path
            .iter()
            .filter_map(|code| {
                let position = registry.position(code);
                if position.is_none() {
                    leptos::logging::warn!("{}; train skips it", VisualizeError::unknown_station(code.as_str()));
                }
                position
            })
            .collect();
        Self::from_positions(positions)
    }

    /// Advance by one frame
    pub fn tick<S: DrawingSurface + ?Sized>(&mut self, surface: &mut S) -> TickOutcome {
        if self.finished {
            return TickOutcome::Finished;
        }

        if let Some(&position) = self.positions.get(self.next_index) {
            let index = self.next_index;
            surface.show_marker(position, MARKER_RADIUS, MARKER_COLOR);
            self.next_index += 1;
            return TickOutcome::Moved { index };
        }

        surface.clear_marker();
        self.finished = true;
        TickOutcome::Cleared
    }

    /// Index of the station the next tick draws; equals `len()` once done
    #[must_use]
    pub fn index(&self) -> usize {
        self.next_index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn positions(&self) -> &[(f64, f64)] {
        &self.positions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::network_canvas::surface::{DrawCommand, RecordingSurface};

    fn registry() -> StationRegistry {
        StationRegistry::from_rows(&[
            ("A", "Alpha", (0.0, 0.0)),
            ("B", "Bravo", (1.0, 0.0)),
            ("C", "Charlie", (1.0, 1.0)),
        ])
    }

    fn path(codes: &[&str]) -> PathResult {
        PathResult::new(codes.iter().map(ToString::to_string).collect(), None)
    }

    #[test]
    fn test_walks_path_then_clears() {
        let mut animation = TrainAnimation::for_path(&path(&["A", "B", "C"]), &registry());
        let mut surface = RecordingSurface::new();

        assert_eq!(animation.index(), 0);
        assert_eq!(animation.tick(&mut surface), TickOutcome::Moved { index: 0 });
        assert_eq!(surface.marker, Some((0.0, 0.0)));
        assert_eq!(animation.tick(&mut surface), TickOutcome::Moved { index: 1 });
        assert_eq!(animation.tick(&mut surface), TickOutcome::Moved { index: 2 });
        assert_eq!(surface.marker, Some((1.0, 1.0)));
        assert_eq!(animation.tick(&mut surface), TickOutcome::Cleared);
        assert_eq!(surface.marker, None);
        assert!(animation.is_finished());
        assert_eq!(animation.index(), 3);
    }

    #[test]
    fn test_ticks_after_the_end_change_nothing() {
        let mut animation = TrainAnimation::for_path(&path(&["A"]), &registry());
        let mut surface = RecordingSurface::new();

        animation.tick(&mut surface);
        animation.tick(&mut surface);
        let recorded = surface.commands.len();

        for _ in 0..5 {
            assert_eq!(animation.tick(&mut surface), TickOutcome::Finished);
        }
        assert_eq!(surface.commands.len(), recorded);
        assert_eq!(animation.index(), 1);
    }

    #[test]
    fn test_path_of_length_l_takes_l_plus_one_ticks() {
        for length in 1..=3 {
            let codes = &["A", "B", "C"][..length];
            let mut animation = TrainAnimation::for_path(&path(codes), &registry());
            let mut surface = RecordingSurface::new();

            let mut ticks = 0;
            while animation.tick(&mut surface) != TickOutcome::Finished {
                ticks += 1;
                assert!(animation.index() <= length);
            }

            assert_eq!(ticks, length + 1);
            let shows = surface
                .commands
                .iter()
                .filter(|c| matches!(c, DrawCommand::ShowMarker { .. }))
                .count();
            assert_eq!(shows, length);
            assert_eq!(surface.commands.last(), Some(&DrawCommand::ClearMarker));
        }
    }

    #[test]
    fn test_unknown_stations_are_skipped() {
        let animation = TrainAnimation::for_path(&path(&["A", "NOWHERE", "C"]), &registry());
        assert_eq!(animation.positions(), &[(0.0, 0.0), (1.0, 1.0)]);
    }

    #[test]
    fn test_empty_animation_clears_on_first_tick() {
        let mut animation = TrainAnimation::from_positions(Vec::new());
        let mut surface = RecordingSurface::new();

        assert!(animation.is_empty());
        assert_eq!(animation.tick(&mut surface), TickOutcome::Cleared);
        assert_eq!(animation.tick(&mut surface), TickOutcome::Finished);
    }
}
