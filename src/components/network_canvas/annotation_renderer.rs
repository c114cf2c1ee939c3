use super::surface::{DrawingSurface, TextBoxSlot};
use crate::constants::{LEGEND_COLUMN_WIDTH, SCALE_CAPTION};
use crate::models::StationRegistry;

/// Legend rows pairing station names with codes, in two columns.
///
/// The first column takes the first half of the registry (rounded down) and
/// is padded so the second column lines up in a monospace font.
#[must_use]
pub fn legend_lines(registry: &StationRegistry) -> Vec<String> {
    let entries: Vec<String> = registry
        .iter()
        .map(|station| format!("{} → {}", station.name, station.code))
        .collect();
    let (left, right) = entries.split_at(entries.len() / 2);

    (0..left.len().max(right.len()))
        .map(|row| {
            let mut line = String::new();
            if let Some(entry) = left.get(row) {
                line.push_str(&format!("{entry:<width$}", width = LEGEND_COLUMN_WIDTH));
            }
            if let Some(entry) = right.get(row) {
                line.push_str(entry);
            }
            line
        })
        .collect()
}

#[must_use]
pub fn scale_lines() -> Vec<String> {
    SCALE_CAPTION.iter().map(ToString::to_string).collect()
}

/// Draw the scale caption and the station legend
pub fn draw_annotations<S: DrawingSurface + ?Sized>(surface: &mut S, registry: &StationRegistry) {
    surface.draw_text_box(TextBoxSlot::Scale, &scale_lines());
    surface.draw_text_box(TextBoxSlot::Legend, &legend_lines(registry));
}
