/// Font weight of a text label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelWeight {
    Regular,
    Bold,
}

/// Fixed slots for the annotation boxes, right of the diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBoxSlot {
    Scale,
    Legend,
}

/// How one edge is stroked
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeStroke {
    pub color: String,
    pub width: f64,
    pub arrow: bool,
    /// Pixels to leave free at the source end (the source node's radius)
    pub start_inset: f64,
    /// Pixels to leave free at the target end (the target node's radius)
    pub end_inset: f64,
}

/// The display surface every renderer draws into.
///
/// Positions are in station grid units; the surface owns the projection to
/// pixels, so the same grid position always lands on the same pixel no matter
/// which pass draws it. Sizes and widths are in pixels.
pub trait DrawingSurface {
    fn draw_node(&mut self, position: (f64, f64), radius: f64, color: &str);

    fn draw_edge(&mut self, from: (f64, f64), to: (f64, f64), stroke: &EdgeStroke);

    /// Draw text centred on `position`; `boxed` puts it on a white backing box
    fn draw_label(&mut self, position: (f64, f64), text: &str, weight: LabelWeight, boxed: bool);

    fn set_title(&mut self, title: &str);

    fn draw_text_box(&mut self, slot: TextBoxSlot, lines: &[String]);

    /// Show the single train marker at `position`, replacing any previous one
    fn show_marker(&mut self, position: (f64, f64), radius: f64, color: &str);

    fn clear_marker(&mut self);
}

/// One recorded call on a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Node {
        position: (f64, f64),
        radius: f64,
        color: String,
    },
    Edge {
        from: (f64, f64),
        to: (f64, f64),
        stroke: EdgeStroke,
    },
    Label {
        position: (f64, f64),
        text: String,
        weight: LabelWeight,
        boxed: bool,
    },
    Title(String),
    TextBox {
        slot: TextBoxSlot,
        lines: Vec<String>,
    },
    ShowMarker {
        position: (f64, f64),
    },
    ClearMarker,
}

/// Surface that records draw calls instead of painting.
///
/// Used by tests and benches to inspect exactly what a pass drew.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    pub marker: Option<(f64, f64)>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands recorded from index `start` onwards, to isolate one pass
    #[must_use]
    pub fn since(&self, start: usize) -> &[DrawCommand] {
        self.commands.get(start..).unwrap_or_default()
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|command| match command {
            DrawCommand::Title(title) => Some(title.as_str()),
            _ => None,
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl DrawingSurface for RecordingSurface {
    fn draw_node(&mut self, position: (f64, f64), radius: f64, color: &str) {
        self.commands.push(DrawCommand::Node {
            position,
            radius,
            color: color.to_string(),
        });
    }

    fn draw_edge(&mut self, from: (f64, f64), to: (f64, f64), stroke: &EdgeStroke) {
        self.commands.push(DrawCommand::Edge {
            from,
            to,
            stroke: stroke.clone(),
        });
    }

    fn draw_label(&mut self, position: (f64, f64), text: &str, weight: LabelWeight, boxed: bool) {
        self.commands.push(DrawCommand::Label {
            position,
            text: text.to_string(),
            weight,
            boxed,
        });
    }

    fn set_title(&mut self, title: &str) {
        self.commands.push(DrawCommand::Title(title.to_string()));
    }

    fn draw_text_box(&mut self, slot: TextBoxSlot, lines: &[String]) {
        self.commands.push(DrawCommand::TextBox {
            slot,
            lines: lines.to_vec(),
        });
    }

    fn show_marker(&mut self, position: (f64, f64), _radius: f64, _color: &str) {
        self.marker = Some(position);
        self.commands.push(DrawCommand::ShowMarker { position });
    }

    fn clear_marker(&mut self) {
        self.marker = None;
        self.commands.push(DrawCommand::ClearMarker);
    }
}
