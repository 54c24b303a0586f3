//! Skyroll - parallax backdrop demo
//!
//! A small real-time rendering demo: a static backdrop texture scrolls
//! horizontally under keyboard control while a self-driven oscillation
//! bobs it vertically, with a parabolic distortion applied per pixel.
//!
//! The binary in `main.rs` wires these modules together:
//!
//! - [`config`] - layered TOML/env configuration
//! - [`input`] - mapping of special keys to semantic actions
//! - [`systems`] - window, render, and simulation systems

pub mod config;
pub mod input;
pub mod systems;
