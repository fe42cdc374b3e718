//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::{Asteroid, Ship};

/// Line-list vertices for a closed outline (one pair per edge)
pub fn line_loop(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity(points.len() * 2);
    for (i, p) in points.iter().enumerate() {
        let next = points[(i + 1) % points.len()];
        vertices.push(Vertex::at(*p, color));
        vertices.push(Vertex::at(next, color));
    }
    vertices
}

/// Ship hull corners in world space: nose, then the two rear corners
pub fn ship_hull(ship: &Ship) -> [Vec2; 3] {
    let s = ship.body.size;
    transform(
        ship.body.pos,
        ship.body.rotation,
        [Vec2::new(s, 0.0), Vec2::new(-s / 2.0, s / 2.0), Vec2::new(-s / 2.0, -s / 2.0)],
    )
}

/// Flame behind the ship, open at the hull
pub fn ship_flame(ship: &Ship) -> [Vec2; 3] {
    let s = ship.body.size;
    transform(
        ship.body.pos,
        ship.body.rotation,
        [Vec2::new(-s / 2.0, s / 4.0), Vec2::new(-s, 0.0), Vec2::new(-s / 2.0, -s / 4.0)],
    )
}

/// Ship outline, plus the flame while thrusting
pub fn ship(ship: &Ship, hull_color: [f32; 4], flame_color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = line_loop(&ship_hull(ship), hull_color);
    if ship.thrusting {
        let [a, tip, b] = ship_flame(ship);
        vertices.extend([
            Vertex::at(a, flame_color),
            Vertex::at(tip, flame_color),
            Vertex::at(tip, flame_color),
            Vertex::at(b, flame_color),
        ]);
    }
    vertices
}

/// Asteroid polygon outline in world space
pub fn asteroid(asteroid: &Asteroid, color: [f32; 4]) -> Vec<Vertex> {
    let points: Vec<Vec2> = asteroid.world_vertices().collect();
    line_loop(&points, color)
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

fn transform<const N: usize>(origin: Vec2, rotation: f32, local: [Vec2; N]) -> [Vec2; N] {
    let rot = Vec2::from_angle(rotation);
    local.map(|p| origin + rot.rotate(p))
}
