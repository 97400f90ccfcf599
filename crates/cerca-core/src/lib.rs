pub mod blend;
pub mod config;
pub mod constants;
pub mod content;
pub mod error;
pub mod geometry;
pub mod nav;
pub mod palette;
pub mod panel;
pub mod sim;

pub use blend::{blend_target, caption_alpha, step_blend};
pub use config::*;
pub use content::{section, Section, SECTIONS};
pub use error::CercaError;
pub use geometry::{polar_to_viewport, Frame};
pub use panel::*;
pub use sim::*;
