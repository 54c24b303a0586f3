//! Backdrop scroll kinematics
//!
//! Two independent axes drive the parallax effect:
//!
//! - Horizontal: keyboard-driven acceleration with a clamped top speed and
//!   velocity damping while no key is held.
//! - Vertical: a self-driven oscillation. A constant acceleration pushes the
//!   offset through a band; crossing a band edge flips the acceleration sign,
//!   so the velocity decays, reverses, and the offset swings back.
//!
//! All offsets and speeds are in texture pixels and pixels per second.

/// Tuning parameters for [`ScrollState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollParams {
    /// Horizontal acceleration while a direction key is held (px/s^2)
    pub x_accel: f32,
    /// Horizontal speed limit (px/s)
    pub x_max_speed: f32,
    /// Damping factor applied per second while no key is held
    pub x_damping: f32,
    /// Vertical acceleration magnitude (px/s^2)
    pub y_accel: f32,
    /// Vertical speed limit (px/s)
    pub y_max_speed: f32,
    /// Lower edge of the vertical oscillation band (px)
    pub y_min: f32,
    /// Upper edge of the vertical oscillation band (px)
    pub y_max: f32,
}

impl Default for ScrollParams {
    fn default() -> Self {
        Self {
            x_accel: 64.0,
            x_max_speed: 128.0,
            x_damping: 0.05,
            y_accel: 16.0,
            y_max_speed: 128.0,
            y_min: 256.0,
            y_max: 512.0,
        }
    }
}

/// Scroll offsets of the backdrop and their velocities.
///
/// The state is advanced once per frame with [`update`](Self::update). The
/// horizontal offset is unbounded; the sampler wraps the texture. The
/// vertical offset oscillates through `[y_min, y_max]` with some overshoot
/// past the edges while the velocity reverses.
#[derive(Debug, Clone)]
pub struct ScrollState {
    params: ScrollParams,
    x_offset: f32,
    x_velocity: f32,
    y_offset: f32,
    y_velocity: f32,
    y_accel: f32,
}

impl ScrollState {
    /// Create a scroll state at rest, with the vertical offset at the lower
    /// band edge and the oscillation accelerating upward through the band.
    pub fn new(params: ScrollParams) -> Self {
        Self {
            params,
            x_offset: 0.0,
            x_velocity: 0.0,
            y_offset: params.y_min,
            y_velocity: 0.0,
            y_accel: params.y_accel,
        }
    }

    /// Advance the scroll by `dt` seconds.
    ///
    /// `drive` is the horizontal input direction, normally -1.0, 0.0 or 1.0
    /// (see `ScrollController::drive`).
    pub fn update(&mut self, drive: f32, dt: f32) {
        // Horizontal: accelerate while driven, coast toward zero otherwise.
        if drive != 0.0 {
            self.x_velocity += drive * self.params.x_accel * dt;
        } else {
            self.x_velocity /= 1.0 + self.params.x_damping * dt;
        }
        self.x_velocity = self
            .x_velocity
            .clamp(-self.params.x_max_speed, self.params.x_max_speed);
        self.x_offset += self.x_velocity * dt;

        // Vertical: constant acceleration, sign flipped at the band edges.
        self.y_velocity += self.y_accel * dt;
        self.y_velocity = self
            .y_velocity
            .clamp(-self.params.y_max_speed, self.params.y_max_speed);
        self.y_offset += self.y_velocity * dt;
        if self.y_offset > self.params.y_max {
            self.y_accel = -self.params.y_accel;
        } else if self.y_offset < self.params.y_min {
            self.y_accel = self.params.y_accel;
        }
    }

    /// Restore the initial offsets and velocities.
    pub fn reset(&mut self) {
        let params = self.params;
        *self = Self::new(params);
        log::debug!("Scroll state reset");
    }

    /// Current (x, y) offsets in texture pixels.
    pub fn offsets(&self) -> (f32, f32) {
        (self.x_offset, self.y_offset)
    }

    /// Current horizontal offset in texture pixels.
    pub fn x_offset(&self) -> f32 {
        self.x_offset
    }

    /// Current vertical offset in texture pixels.
    pub fn y_offset(&self) -> f32 {
        self.y_offset
    }

    /// Current horizontal velocity in pixels per second.
    pub fn x_velocity(&self) -> f32 {
        self.x_velocity
    }

    /// Parameters this state was built with.
    pub fn params(&self) -> &ScrollParams {
        &self.params
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(ScrollParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_starts_at_rest_on_lower_band_edge() {
        let state = ScrollState::default();
        assert_eq!(state.x_offset(), 0.0);
        assert_eq!(state.x_velocity(), 0.0);
        assert_eq!(state.y_offset(), ScrollParams::default().y_min);
    }

    #[test]
    fn test_drive_accelerates_horizontally() {
        let mut state = ScrollState::default();
        state.update(1.0, 0.1);
        // vx = 64 * 0.1 = 6.4, x = 6.4 * 0.1 = 0.64
        assert!((state.x_velocity() - 6.4).abs() < 1e-4);
        assert!((state.x_offset() - 0.64).abs() < 1e-4);

        state.update(-1.0, 0.1);
        assert!(state.x_velocity() < 6.4);
    }

    #[test]
    fn test_horizontal_speed_is_clamped() {
        let mut state = ScrollState::default();
        // One huge step would exceed the limit many times over.
        state.update(1.0, 100.0);
        assert_eq!(state.x_velocity(), ScrollParams::default().x_max_speed);

        state.update(-1.0, 200.0);
        assert_eq!(state.x_velocity(), -ScrollParams::default().x_max_speed);
    }

    #[test]
    fn test_coasting_decays_without_sign_flip() {
        let mut state = ScrollState::default();
        for _ in 0..60 {
            state.update(1.0, DT);
        }
        let peak = state.x_velocity();
        assert!(peak > 0.0);

        for _ in 0..600 {
            state.update(0.0, DT);
            assert!(state.x_velocity() >= 0.0);
        }
        assert!(state.x_velocity() < peak);
    }

    #[test]
    fn test_vertical_rises_from_lower_edge() {
        let mut state = ScrollState::default();
        state.update(0.0, DT);
        assert!(state.y_offset() > ScrollParams::default().y_min);
    }

    #[test]
    fn test_vertical_oscillation_turns_around() {
        let params = ScrollParams::default();
        let mut state = ScrollState::new(params);
        let mut above = false;
        let mut returned = false;
        // Two minutes of simulated frames covers several full swings.
        for _ in 0..(120 * 60) {
            state.update(0.0, DT);
            if state.y_offset() > params.y_max {
                above = true;
            }
            if above && state.y_offset() < params.y_min + 1.0 {
                returned = true;
            }
        }
        assert!(above, "oscillation never reached the upper band edge");
        assert!(returned, "oscillation never swung back down");
    }

    #[test]
    fn test_vertical_overshoot_is_bounded() {
        let params = ScrollParams::default();
        let mut state = ScrollState::new(params);
        // The turnaround happens after the edge is crossed; the worst case
        // overshoot is v^2 / (2 * a) with v bounded by the speed clamp.
        let slack = params.y_max_speed * params.y_max_speed / (2.0 * params.y_accel)
            + params.y_max_speed * DT;
        for _ in 0..(120 * 60) {
            state.update(0.0, DT);
            assert!(state.y_offset() <= params.y_max + slack);
            assert!(state.y_offset() >= params.y_min - slack);
        }
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut state = ScrollState::default();
        for _ in 0..120 {
            state.update(1.0, DT);
        }
        assert_ne!(state.x_offset(), 0.0);

        state.reset();
        assert_eq!(state.x_offset(), 0.0);
        assert_eq!(state.x_velocity(), 0.0);
        assert_eq!(state.y_offset(), ScrollParams::default().y_min);
    }

    #[test]
    fn test_zero_dt_is_a_no_op() {
        let mut state = ScrollState::default();
        let before = state.offsets();
        state.update(1.0, 0.0);
        assert_eq!(state.offsets(), before);
    }
}
