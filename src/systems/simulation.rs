//! Demo simulation system
//!
//! Manages the per-frame update:
//! - Delta time calculation
//! - Input -> horizontal scroll drive
//! - Scroll kinematics stepping
//! - Frame statistics

use std::time::Instant;

use skyroll_core::{FrameStats, ScrollState};
use skyroll_input::ScrollController;

/// Manages the per-frame simulation step
pub struct SimulationSystem {
    last_frame: Instant,
}

impl SimulationSystem {
    /// Create a new simulation system
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    /// Run one simulation frame
    ///
    /// # Arguments
    /// * `scroll` - Scroll state to advance
    /// * `controller` - Input controller supplying the horizontal drive
    /// * `stats` - Frame statistics fed with this frame's dt
    ///
    /// # Returns
    /// The delta time used for this frame, in seconds
    pub fn update(
        &mut self,
        scroll: &mut ScrollState,
        controller: &ScrollController,
        stats: &mut FrameStats,
    ) -> f32 {
        // Cap dt to prevent huge steps on the first frame or after the
        // window regains focus.
        let now = Instant::now();
        let raw_dt = (now - self.last_frame).as_secs_f32();
        let dt = raw_dt.min(0.25);
        self.last_frame = now;

        scroll.update(controller.drive(), dt);
        stats.record_frame(dt);

        dt
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyroll_core::ScrollParams;

    #[test]
    fn test_update_advances_scroll_and_stats() {
        let mut sim = SimulationSystem::new();
        let mut scroll = ScrollState::new(ScrollParams::default());
        let mut controller = ScrollController::new();
        let mut stats = FrameStats::new();

        controller.process_keyboard(
            winit::keyboard::KeyCode::ArrowRight,
            winit::event::ElementState::Pressed,
        );
        std::thread::sleep(std::time::Duration::from_millis(5));
        let dt = sim.update(&mut scroll, &controller, &mut stats);

        assert!(dt > 0.0);
        assert!(dt <= 0.25);
        assert!(scroll.x_velocity() > 0.0);
    }

    #[test]
    fn test_default_construction() {
        let sim = SimulationSystem::default();
        assert!(sim.last_frame.elapsed().as_millis() < 100);
    }
}
