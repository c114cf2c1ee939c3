use crate::models::Bounds;

/// Pixel rectangle the diagram is drawn into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Maps abstract grid positions to canvas pixels.
///
/// The grid's y axis points up and the canvas y axis points down, so y is
/// flipped. Each axis is scaled independently to fill the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    bounds: Bounds,
    plot: PlotArea,
}

impl Projection {
    #[must_use]
    pub fn fit(bounds: Bounds, plot: PlotArea) -> Self {
        Self { bounds, plot }
    }

    /// Convert a grid position to canvas pixels.
    ///
    /// A zero-extent axis maps every position to the centre of the plot area.
    #[must_use]
    pub fn to_screen(&self, (x, y): (f64, f64)) -> (f64, f64) {
        let fx = axis_fraction(x, self.bounds.min_x, self.bounds.width());
        let fy = axis_fraction(y, self.bounds.min_y, self.bounds.height());
        (
            self.plot.x + fx * self.plot.width,
            self.plot.y + (1.0 - fy) * self.plot.height,
        )
    }
}

fn axis_fraction(value: f64, min: f64, extent: f64) -> f64 {
    if extent == 0.0 {
        0.5
    } else {
        (value - min) / extent
    }
}

/// Midpoint of a segment, where edge labels are anchored
#[must_use]
pub fn midpoint(a: (f64, f64), b: (f64, f64)) -> (f64, f64) {
    ((a.0 + b.0) / 2.0, (a.1 + b.1) / 2.0)
}

/// Pull both ends of a segment inwards, so an edge stops at the node rims.
///
/// Returns `None` when the insets leave nothing to draw.
#[must_use]
pub fn shorten_segment(
    from: (f64, f64),
    to: (f64, f64),
    start_inset: f64,
    end_inset: f64,
) -> Option<((f64, f64), (f64, f64))> {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let len = (dx * dx + dy * dy).sqrt();
    if len <= start_inset + end_inset {
        return None;
    }
    let ux = dx / len;
    let uy = dy / len;
    Some((
        (from.0 + ux * start_inset, from.1 + uy * start_inset),
        (to.0 - ux * end_inset, to.1 - uy * end_inset),
    ))
}

/// Triangle of an arrow head pointing at `tip`, coming from `from`.
///
/// # Arguments
/// * `length` - Distance from the tip to the base of the head
/// * `half_width` - Distance from the shaft axis to each base corner
#[must_use]
pub fn arrow_head(
    from: (f64, f64),
    tip: (f64, f64),
    length: f64,
    half_width: f64,
) -> [(f64, f64); 3] {
    let dx = tip.0 - from.0;
    let dy = tip.1 - from.1;
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        return [tip, tip, tip];
    }
    let ux = dx / len;
    let uy = dy / len;
    let base = (tip.0 - ux * length, tip.1 - uy * length);
    // Perpendicular to the shaft
    let (px, py) = (-uy, ux);
    [
        tip,
        (base.0 + px * half_width, base.1 + py * half_width),
        (base.0 - px * half_width, base.1 - py * half_width),
    ]
}
