//! Draw list generation
//!
//! Turns a finished `GameState` into plain colored vertices. Outlines go in
//! a line list, filled shapes in a triangle list; any backend can upload
//! both with `bytemuck::cast_slice`.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};

use crate::sim::GameState;

/// Segments used to tessellate a bullet disc
const BULLET_SEGMENTS: u32 = 8;

/// Everything needed to draw one frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    /// Vertex pairs, one per line segment
    pub lines: Vec<Vertex>,
    /// Vertex triples, one per triangle
    pub triangles: Vec<Vertex>,
}

impl DrawList {
    /// Raw bytes of the line list
    pub fn line_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.lines)
    }

    /// Raw bytes of the triangle list
    pub fn triangle_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }
}

/// Build the draw list for a state snapshot
pub fn draw_list(state: &GameState) -> DrawList {
    let mut list = DrawList::default();

    list.lines.extend(shapes::ship(&state.ship, colors::SHIP, colors::THRUST_FLAME));

    for asteroid in &state.asteroids {
        list.lines.extend(shapes::asteroid(asteroid, colors::ASTEROID));
    }

    for bullet in &state.bullets {
        list.triangles.extend(shapes::circle(
            bullet.body.pos,
            bullet.body.size,
            colors::BULLET,
            BULLET_SEGMENTS,
        ));
    }

    list
}
