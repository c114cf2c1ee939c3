pub mod annotation_renderer;
pub mod graph_renderer;
pub mod path_overlay;
pub mod style;
pub mod surface;
pub mod ticker;
pub mod train_animation;
mod canvas_surface;

pub use canvas_surface::CanvasSurface;
pub use surface::{DrawCommand, DrawingSurface, RecordingSurface};
pub use ticker::{drive_animation, IntervalTicker, ManualTicker, TickSource};
pub use train_animation::{TickOutcome, TrainAnimation};
