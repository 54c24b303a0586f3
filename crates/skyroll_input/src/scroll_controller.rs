//! Scroll controller for keyboard-driven horizontal scrolling
//!
//! Controls:
//! - Left/Right arrows: scroll the backdrop horizontally
//!
//! The controller only tracks pressed-key state; the acceleration and
//! damping live in the scroll kinematics.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Tracks the held scroll keys and exposes a normalized drive direction.
pub struct ScrollController {
    left: bool,
    right: bool,
}

impl Default for ScrollController {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollController {
    pub fn new() -> Self {
        Self {
            left: false,
            right: false,
        }
    }

    /// Process keyboard input
    ///
    /// Returns `true` when the key was consumed (it was a scroll key).
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;

        match key {
            KeyCode::ArrowLeft => {
                self.left = pressed;
                true
            }
            KeyCode::ArrowRight => {
                self.right = pressed;
                true
            }
            _ => false,
        }
    }

    /// Horizontal drive direction in -1.0, 0.0 or 1.0 (right minus left).
    pub fn drive(&self) -> f32 {
        (self.right as i32 - self.left as i32) as f32
    }

    /// Check if any scroll key is pressed
    pub fn is_scrolling(&self) -> bool {
        self.left || self.right
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_controller_has_no_drive() {
        let controller = ScrollController::new();
        assert_eq!(controller.drive(), 0.0);
        assert!(!controller.is_scrolling());
    }

    #[test]
    fn test_right_drives_positive() {
        let mut controller = ScrollController::new();
        assert!(controller.process_keyboard(KeyCode::ArrowRight, ElementState::Pressed));
        assert_eq!(controller.drive(), 1.0);
        assert!(controller.is_scrolling());
    }

    #[test]
    fn test_left_drives_negative() {
        let mut controller = ScrollController::new();
        controller.process_keyboard(KeyCode::ArrowLeft, ElementState::Pressed);
        assert_eq!(controller.drive(), -1.0);
    }

    #[test]
    fn test_both_held_cancel_out() {
        let mut controller = ScrollController::new();
        controller.process_keyboard(KeyCode::ArrowLeft, ElementState::Pressed);
        controller.process_keyboard(KeyCode::ArrowRight, ElementState::Pressed);
        assert_eq!(controller.drive(), 0.0);
        assert!(controller.is_scrolling());
    }

    #[test]
    fn test_release_clears_drive() {
        let mut controller = ScrollController::new();
        controller.process_keyboard(KeyCode::ArrowRight, ElementState::Pressed);
        controller.process_keyboard(KeyCode::ArrowRight, ElementState::Released);
        assert_eq!(controller.drive(), 0.0);
        assert!(!controller.is_scrolling());
    }

    #[test]
    fn test_unrelated_keys_not_consumed() {
        let mut controller = ScrollController::new();
        for key in [KeyCode::KeyW, KeyCode::Escape, KeyCode::ArrowUp] {
            assert!(
                !controller.process_keyboard(key, ElementState::Pressed),
                "Key {:?} should not be consumed",
                key
            );
        }
        assert_eq!(controller.drive(), 0.0);
    }
}
