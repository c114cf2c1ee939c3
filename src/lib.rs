#![allow(clippy::implicit_hasher)]

pub mod models;
pub mod components;
pub mod import;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod utils;
pub mod visualize;

pub use components::app::App;
pub use error::{VisualizeError, VisualizeResult};
