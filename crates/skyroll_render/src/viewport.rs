//! Integer-scaled letterbox placement
//!
//! The demo renders a fixed virtual resolution. Inside the window it is
//! scaled by the largest whole-number magnification that fits and centered,
//! leaving letterbox bars in the clear color.

/// Placement of the virtual-resolution image inside the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub magnification: u32,
}

impl Viewport {
    /// Compute the placement for `virtual_size` inside `window_size`.
    ///
    /// The magnification is clamped to a minimum of 1; if the window is
    /// smaller than the virtual resolution, the rectangle is clipped to the
    /// window so it stays a valid render-pass viewport.
    pub fn compute(virtual_size: (u32, u32), window_size: (u32, u32)) -> Self {
        let (vw, vh) = virtual_size;
        let (ww, wh) = window_size;

        let virtual_aspect = vw as f64 / vh as f64;
        let window_aspect = ww as f64 / wh.max(1) as f64;

        // Base magnification on the largest whole multiple that fits.
        let magnification = if window_aspect > virtual_aspect {
            wh / vh
        } else {
            ww / vw
        }
        .max(1);

        let width = (vw * magnification) as f32;
        let height = (vh * magnification) as f32;
        let x = ((ww as f64 - width as f64) / 2.0).floor() as f32;
        let y = ((wh as f64 - height as f64) / 2.0).floor() as f32;

        // Clip to the window; wgpu rejects viewports outside the target.
        let x = x.max(0.0);
        let y = y.max(0.0);
        let width = width.min(ww as f32 - x);
        let height = height.min(wh as f32 - y);

        Self {
            x,
            y,
            width,
            height,
            magnification,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIRTUAL: (u32, u32) = (512, 288);

    #[test]
    fn test_exact_fit_is_magnification_one() {
        let vp = Viewport::compute(VIRTUAL, VIRTUAL);
        assert_eq!(vp.magnification, 1);
        assert_eq!(vp.x, 0.0);
        assert_eq!(vp.y, 0.0);
        assert_eq!(vp.width, 512.0);
        assert_eq!(vp.height, 288.0);
    }

    #[test]
    fn test_magnification_floors_to_whole_multiple() {
        // 3.9x horizontally, so only 3x fits.
        let vp = Viewport::compute(VIRTUAL, (2000, 2000));
        assert_eq!(vp.magnification, 3);
        assert_eq!(vp.width, 1536.0);
        assert_eq!(vp.height, 864.0);
    }

    #[test]
    fn test_wide_window_is_height_limited() {
        // Window much wider than the virtual aspect: height decides.
        let vp = Viewport::compute(VIRTUAL, (5000, 600));
        assert_eq!(vp.magnification, 2);
        assert_eq!(vp.width, 1024.0);
        assert_eq!(vp.height, 576.0);
    }

    #[test]
    fn test_result_is_centered() {
        let vp = Viewport::compute(VIRTUAL, (1200, 700));
        // 2x: 1024x576 inside 1200x700.
        assert_eq!(vp.magnification, 2);
        assert_eq!(vp.x, 88.0);
        assert_eq!(vp.y, 62.0);
    }

    #[test]
    fn test_small_window_clamps_to_magnification_one() {
        let vp = Viewport::compute(VIRTUAL, (400, 300));
        assert_eq!(vp.magnification, 1);
        // Clipped to the window bounds.
        assert_eq!(vp.x, 0.0);
        assert!(vp.width <= 400.0);
        assert!(vp.height <= 300.0);
    }

    #[test]
    fn test_centering_floors_odd_remainders() {
        let vp = Viewport::compute(VIRTUAL, (513, 289));
        assert_eq!(vp.magnification, 1);
        assert_eq!(vp.x, 0.0);
        assert_eq!(vp.y, 0.0);
    }
}
