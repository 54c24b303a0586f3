//! Render pipelines for the scrolling backdrop
//!
//! - [`ScrollPipeline`] draws the full-screen quad with the scroll and
//!   distortion shaders.
//! - [`BlitPipeline`] copies an offscreen virtual-resolution target onto the
//!   letterboxed surface when the pixel-exact path is enabled.

mod blit_pipeline;
mod scroll_pipeline;
mod types;

pub use blit_pipeline::BlitPipeline;
pub use scroll_pipeline::ScrollPipeline;
pub use types::{QuadVertex, ScrollUniforms, QUAD_INDICES, QUAD_VERTICES};
