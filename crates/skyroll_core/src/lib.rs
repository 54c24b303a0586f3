//! Core simulation state for the Skyroll demo
//!
//! This crate provides the CPU side of the demo:
//!
//! - [`ScrollState`] - the backdrop offsets and their clamped accelerations
//! - [`ScrollParams`] - tuning values for the scroll kinematics
//! - [`FrameStats`] - per-second frame counting with a shutdown report
//!
//! It is deliberately free of windowing and GPU dependencies so the update
//! rules can be tested headlessly.

mod frame_stats;
mod scroll;

pub use frame_stats::{FpsReport, FrameStats};
pub use scroll::{ScrollParams, ScrollState};
