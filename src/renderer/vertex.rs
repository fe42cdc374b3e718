//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    #[inline]
    pub fn at(p: Vec2, color: [f32; 4]) -> Self {
        Self::new(p.x, p.y, color)
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::from_array(self.position)
    }
}

/// Colors for game elements
pub mod colors {
    pub const SHIP: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const THRUST_FLAME: [f32; 4] = [1.0, 0.55, 0.1, 1.0];
    pub const ASTEROID: [f32; 4] = [0.75, 0.75, 0.8, 1.0];
    pub const BULLET: [f32; 4] = [1.0, 1.0, 0.6, 1.0];
}
