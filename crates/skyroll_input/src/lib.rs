//! Keyboard input for the Skyroll demo
//!
//! This crate turns held arrow keys into a horizontal drive value for the
//! backdrop scroll.

mod scroll_controller;

pub use scroll_controller::ScrollController;
