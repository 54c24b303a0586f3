//! GPU-compatible data types for the backdrop pipelines
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// A vertex of the full-screen quad
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct QuadVertex {
    /// Position in clip space
    pub position: [f32; 3],
}

/// The full-screen quad, two triangles spanning clip space.
pub const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex {
        position: [-1.0, -1.0, 0.0], // Lower left
    },
    QuadVertex {
        position: [1.0, -1.0, 0.0], // Lower right
    },
    QuadVertex {
        position: [1.0, 1.0, 0.0], // Upper right
    },
    QuadVertex {
        position: [-1.0, 1.0, 0.0], // Upper left
    },
];

pub const QUAD_INDICES: [u16; 6] = [0, 1, 3, 1, 2, 3];

/// Uniforms for the scroll pass
/// Layout: 32 bytes (must match scroll.wgsl ScrollUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ScrollUniforms {
    /// Virtual resolution in pixels (8 bytes)
    pub virtual_size: [f32; 2],
    /// Backdrop texture dimensions in pixels (8 bytes)
    pub texture_size: [f32; 2],
    /// Scroll offsets in texture pixels (8 bytes)
    pub offset: [f32; 2],
    /// Padding to 32 bytes
    pub _padding: [f32; 2],
}

impl Default for ScrollUniforms {
    fn default() -> Self {
        Self {
            virtual_size: [512.0, 288.0],
            texture_size: [512.0, 1024.0],
            offset: [0.0, 0.0],
            _padding: [0.0; 2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_quad_vertex_size() {
        // 3 floats = 12 bytes
        assert_eq!(size_of::<QuadVertex>(), 12);
    }

    #[test]
    fn test_scroll_uniforms_size() {
        // 8 floats = 32 bytes
        assert_eq!(size_of::<ScrollUniforms>(), 32);
    }

    #[test]
    fn test_quad_covers_clip_space() {
        assert_eq!(QUAD_INDICES.len(), 6);
        let min_x = QUAD_VERTICES.iter().map(|v| v.position[0]).fold(f32::MAX, f32::min);
        let max_y = QUAD_VERTICES.iter().map(|v| v.position[1]).fold(f32::MIN, f32::max);
        assert_eq!(min_x, -1.0);
        assert_eq!(max_y, 1.0);
    }

    #[test]
    fn test_alignment() {
        // All types should be 4-byte aligned (f32 alignment)
        assert_eq!(std::mem::align_of::<QuadVertex>(), 4);
        assert_eq!(std::mem::align_of::<ScrollUniforms>(), 4);
    }
}
