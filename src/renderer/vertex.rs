//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Straight RGBA color, components in 0..=1
pub type Rgba = [f32; 4];

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Rgba) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Size in bytes of one vertex in an upload buffer
    pub const fn stride() -> usize {
        std::mem::size_of::<Vertex>()
    }
}

/// Default hook line colors
pub mod colors {
    use super::Rgba;

    /// Hook reaches full length without hitting anything
    pub const NO_COLL: Rgba = [1.0, 0.0, 0.0, 1.0];
    /// Hook attaches to the map
    pub const HOOKABLE_COLL: Rgba = [0.51, 0.91, 0.62, 1.0];
    /// Hook attaches to a character
    pub const TEE_COLL: Rgba = [1.0, 0.99, 0.0, 1.0];
}

/// Flip RGB, keep alpha
#[inline]
pub fn invert_color(color: Rgba) -> Rgba {
    [1.0 - color[0], 1.0 - color[1], 1.0 - color[2], color[3]]
}

/// Replace the alpha component
#[inline]
pub fn with_alpha(color: Rgba, alpha: f32) -> Rgba {
    [color[0], color[1], color[2], alpha]
}
