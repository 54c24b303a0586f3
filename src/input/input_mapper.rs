//! Input mapping from raw events to semantic actions
//!
//! Maps keyboard input to high-level actions like Exit or ResetScroll.
//! Scroll keys (Left/Right arrows) are NOT mapped here - they go directly
//! to the ScrollController.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by special input (not scrolling)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit the application (Escape)
    Exit,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Reset scroll offsets to their starting values (R key)
    ResetScroll,
}

/// Maps raw input events to semantic actions
///
/// Scroll keys are NOT mapped here - they go directly to the
/// ScrollController. This mapper handles "special" keys only.
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for special keys, `None` for scroll keys
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::KeyR => Some(InputAction::ResetScroll),
            _ => None, // Scroll keys handled by controller
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_exits() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Pressed);
        assert_eq!(action, Some(InputAction::Exit));
    }

    #[test]
    fn test_scroll_keys_not_mapped() {
        // Arrows should return None (handled by controller)
        for key in [KeyCode::ArrowLeft, KeyCode::ArrowRight] {
            let action = InputMapper::map_keyboard(key, ElementState::Pressed);
            assert_eq!(action, None, "Key {:?} should not be mapped", key);
        }
    }

    #[test]
    fn test_key_release_ignored() {
        let action = InputMapper::map_keyboard(KeyCode::Escape, ElementState::Released);
        assert_eq!(action, None);
    }

    #[test]
    fn test_special_keys() {
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyF, ElementState::Pressed),
            Some(InputAction::ToggleFullscreen)
        );
        assert_eq!(
            InputMapper::map_keyboard(KeyCode::KeyR, ElementState::Pressed),
            Some(InputAction::ResetScroll)
        );
    }
}
