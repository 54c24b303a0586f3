//! GPU rendering for the Skyroll demo
//!
//! This crate provides the wgpu-based rendering path for the scrolling
//! backdrop.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`texture::BackdropTexture`] - the static backdrop image on the GPU
//! - [`pipeline::ScrollPipeline`] - full-screen quad with the scroll/distortion shaders
//! - [`pipeline::BlitPipeline`] - offscreen-to-surface copy for the pixel-exact path
//! - [`viewport::Viewport`] - integer-scaled letterbox placement inside the window

pub mod context;
pub mod pipeline;
pub mod texture;
pub mod viewport;

// Re-export the pipeline types for convenience
pub use pipeline::{BlitPipeline, ScrollPipeline, ScrollUniforms};
pub use texture::BackdropTexture;
pub use viewport::Viewport;
