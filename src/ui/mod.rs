//! Frame rendering for prompts.

pub mod renderer;

pub use renderer::{Frame, Renderer};
