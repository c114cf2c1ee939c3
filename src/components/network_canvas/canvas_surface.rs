use super::surface::{DrawingSurface, EdgeStroke, LabelWeight, TextBoxSlot};
use crate::geometry::{arrow_head, shorten_segment, PlotArea, Projection};
use crate::models::{Bounds, StationRegistry};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const CANVAS_BACKGROUND_COLOR: &str = "#ffffff";
const TITLE_COLOR: &str = "#222";
const TITLE_FONT: &str = "18px sans-serif";
const TITLE_BAND_HEIGHT: f64 = 50.0;

const PLOT_MARGIN_LEFT: f64 = 60.0;
const PLOT_MARGIN_TOP: f64 = 70.0;
const PLOT_MARGIN_BOTTOM: f64 = 50.0;
const ANNOTATION_PANEL_WIDTH: f64 = 360.0;
const ANNOTATION_GAP: f64 = 40.0;

const LABEL_COLOR: &str = "#000";
const LABEL_FONT_SIZE: f64 = 12.0;
const LABEL_BOX_COLOR: &str = "#ffffff";
const LABEL_BOX_PADDING: f64 = 3.0;

const ARROW_LENGTH: f64 = 10.0;
const ARROW_HALF_WIDTH: f64 = 4.0;

const TEXT_BOX_FONT: &str = "12px monospace";
const TEXT_BOX_LINE_HEIGHT: f64 = 16.0;
const TEXT_BOX_PADDING: f64 = 8.0;
const TEXT_BOX_FILL: &str = "rgba(255, 255, 255, 0.8)";
const TEXT_BOX_BORDER: &str = "#808080";
const TEXT_BOX_TEXT_COLOR: &str = "#000";

/// Grid extent used when the registry is empty
const FALLBACK_BOUNDS: Bounds = Bounds { min_x: 0.0, min_y: 0.0, max_x: 1.0, max_y: 1.0 };

/// Drawing surface backed by two stacked canvases.
///
/// The scene canvas holds the network, title and annotation boxes. The train
/// marker lives on its own transparent canvas on top, so moving or clearing it
/// never repaints the scene.
pub struct CanvasSurface {
    scene: CanvasRenderingContext2d,
    marker_layer: CanvasRenderingContext2d,
    projection: Projection,
    plot: PlotArea,
    width: f64,
    height: f64,
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, String> {
    let Ok(Some(context)) = canvas.get_context("2d") else {
        return Err("Failed to get 2D context".to_string());
    };
    context
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| "Failed to cast to 2D rendering context".to_string())
}

impl CanvasSurface {
    /// Size both canvases, clear them and fit the registry into the plot area
    ///
    /// # Errors
    ///
    /// Returns an error if either canvas has no 2D context
    pub fn new(
        scene_canvas: &HtmlCanvasElement,
        marker_canvas: &HtmlCanvasElement,
        (width, height): (u32, u32),
        registry: &StationRegistry,
    ) -> Result<Self, String> {
        for canvas in [scene_canvas, marker_canvas] {
            canvas.set_width(width);
            canvas.set_height(height);
        }
        let scene = context_2d(scene_canvas)?;
        let marker_layer = context_2d(marker_canvas)?;

        let width = f64::from(width);
        let height = f64::from(height);
        let plot = PlotArea {
            x: PLOT_MARGIN_LEFT,
            y: PLOT_MARGIN_TOP,
            width: (width - PLOT_MARGIN_LEFT - ANNOTATION_PANEL_WIDTH - ANNOTATION_GAP).max(1.0),
            height: (height - PLOT_MARGIN_TOP - PLOT_MARGIN_BOTTOM).max(1.0),
        };
        let projection = Projection::fit(registry.bounds().unwrap_or(FALLBACK_BOUNDS), plot);

        scene.set_fill_style_str(CANVAS_BACKGROUND_COLOR);
        scene.fill_rect(0.0, 0.0, width, height);
        marker_layer.clear_rect(0.0, 0.0, width, height);

        Ok(Self {
            scene,
            marker_layer,
            projection,
            plot,
            width,
            height,
        })
    }

    fn label_font(weight: LabelWeight) -> String {
        match weight {
            LabelWeight::Regular => format!("{LABEL_FONT_SIZE}px sans-serif"),
            LabelWeight::Bold => format!("bold {LABEL_FONT_SIZE}px sans-serif"),
        }
    }

    fn text_box_top(&self, slot: TextBoxSlot, box_height: f64) -> f64 {
        let anchor = match slot {
            TextBoxSlot::Scale => self.plot.y + self.plot.height * 0.1,
            TextBoxSlot::Legend => self.plot.y + self.plot.height * 0.5,
        };
        (anchor - box_height / 2.0).max(0.0)
    }
}

impl DrawingSurface for CanvasSurface {
    fn draw_node(&mut self, position: (f64, f64), radius: f64, color: &str) {
        let (x, y) = self.projection.to_screen(position);
        self.scene.set_fill_style_str(color);
        self.scene.begin_path();
        let _ = self.scene.arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0);
        self.scene.fill();
    }

    fn draw_edge(&mut self, from: (f64, f64), to: (f64, f64), stroke: &EdgeStroke) {
        let from = self.projection.to_screen(from);
        let to = self.projection.to_screen(to);
        let Some((start, end)) = shorten_segment(from, to, stroke.start_inset, stroke.end_inset) else {
            return;
        };

        let ctx = &self.scene;
        ctx.set_stroke_style_str(&stroke.color);
        ctx.set_line_width(stroke.width);
        ctx.begin_path();
        ctx.move_to(start.0, start.1);
        ctx.line_to(end.0, end.1);
        ctx.stroke();

        if stroke.arrow {
            let [tip, left, right] = arrow_head(start, end, ARROW_LENGTH + stroke.width, ARROW_HALF_WIDTH + stroke.width);
            ctx.set_fill_style_str(&stroke.color);
            ctx.begin_path();
            ctx.move_to(tip.0, tip.1);
            ctx.line_to(left.0, left.1);
            ctx.line_to(right.0, right.1);
            ctx.close_path();
            ctx.fill();
        }
    }

    fn draw_label(&mut self, position: (f64, f64), text: &str, weight: LabelWeight, boxed: bool) {
        let (x, y) = self.projection.to_screen(position);
        let ctx = &self.scene;
        ctx.set_font(&Self::label_font(weight));
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");

        if boxed {
            let text_width = ctx.measure_text(text).map_or(0.0, |m| m.width());
            ctx.set_fill_style_str(LABEL_BOX_COLOR);
            ctx.fill_rect(
                x - text_width / 2.0 - LABEL_BOX_PADDING,
                y - LABEL_FONT_SIZE / 2.0 - LABEL_BOX_PADDING,
                text_width + LABEL_BOX_PADDING * 2.0,
                LABEL_FONT_SIZE + LABEL_BOX_PADDING * 2.0,
            );
        }

        ctx.set_fill_style_str(LABEL_COLOR);
        let _ = ctx.fill_text(text, x, y);
    }

    fn set_title(&mut self, title: &str) {
        let ctx = &self.scene;
        ctx.set_fill_style_str(CANVAS_BACKGROUND_COLOR);
        ctx.fill_rect(0.0, 0.0, self.width, TITLE_BAND_HEIGHT);
        ctx.set_fill_style_str(TITLE_COLOR);
        ctx.set_font(TITLE_FONT);
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        let _ = ctx.fill_text(title, self.plot.x + self.plot.width / 2.0, TITLE_BAND_HEIGHT / 2.0);
    }

    #[allow(clippy::cast_precision_loss)]
    fn draw_text_box(&mut self, slot: TextBoxSlot, lines: &[String]) {
        let ctx = &self.scene;
        ctx.set_font(TEXT_BOX_FONT);
        let text_width = lines
            .iter()
            .filter_map(|line| ctx.measure_text(line).ok())
            .map(|metrics| metrics.width())
            .fold(0.0, f64::max);

        let box_width = text_width + TEXT_BOX_PADDING * 2.0;
        let box_height = lines.len() as f64 * TEXT_BOX_LINE_HEIGHT + TEXT_BOX_PADDING * 2.0;
        let left = self.plot.x + self.plot.width + ANNOTATION_GAP;
        let top = self.text_box_top(slot, box_height).min((self.height - box_height).max(0.0));

        ctx.set_fill_style_str(TEXT_BOX_FILL);
        ctx.fill_rect(left, top, box_width, box_height);
        ctx.set_stroke_style_str(TEXT_BOX_BORDER);
        ctx.set_line_width(1.0);
        ctx.stroke_rect(left, top, box_width, box_height);

        ctx.set_fill_style_str(TEXT_BOX_TEXT_COLOR);
        ctx.set_text_align("left");
        ctx.set_text_baseline("top");
        for (row, line) in lines.iter().enumerate() {
            let _ = ctx.fill_text(
                line,
                left + TEXT_BOX_PADDING,
                top + TEXT_BOX_PADDING + row as f64 * TEXT_BOX_LINE_HEIGHT,
            );
        }
    }

    fn show_marker(&mut self, position: (f64, f64), radius: f64, color: &str) {
        self.clear_marker();
        let (x, y) = self.projection.to_screen(position);
        self.marker_layer.set_fill_style_str(color);
        self.marker_layer.begin_path();
        let _ = self.marker_layer.arc(x, y, radius, 0.0, std::f64::consts::PI * 2.0);
        self.marker_layer.fill();
    }

    fn clear_marker(&mut self) {
        self.marker_layer.clear_rect(0.0, 0.0, self.width, self.height);
    }
}
