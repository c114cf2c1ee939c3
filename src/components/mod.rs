#![allow(clippy::needless_pass_by_value)]

pub mod app;
pub mod mode_prompt;
pub mod network_canvas;
pub mod network_view;
