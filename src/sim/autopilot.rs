//! Demo-mode pilot
//!
//! Produces a `TickInput` from the current state: turn toward the nearest
//! asteroid (measured across the wrap seams), shoot when lined up, and close
//! the distance when the target is far away.

use glam::Vec2;

use super::state::{Arena, GameState};
use super::tick::TickInput;
use crate::normalize_angle;

/// Heading error (radians) below which the pilot fires
const AIM_TOLERANCE: f32 = 0.15;
/// Distance beyond which the pilot thrusts toward its target
const CHASE_DISTANCE: f32 = 250.0;

/// Shortest offset from `from` to `to` on the torus
pub fn toroidal_offset(from: Vec2, to: Vec2, arena: &Arena) -> Vec2 {
    let shortest = |d: f32, size: f32| {
        let d = d.rem_euclid(size);
        if d > size / 2.0 { d - size } else { d }
    };
    let delta = to - from;
    Vec2::new(shortest(delta.x, arena.width), shortest(delta.y, arena.height))
}

/// Pick inputs for this tick
pub fn autopilot(state: &GameState) -> TickInput {
    let ship = &state.ship.body;

    let target = state
        .asteroids
        .iter()
        .map(|a| toroidal_offset(ship.pos, a.body.pos, &state.arena))
        .min_by(|a, b| {
            a.length_squared()
                .partial_cmp(&b.length_squared())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

    let Some(offset) = target else {
        return TickInput::default();
    };

    let desired = offset.y.atan2(offset.x);
    let error = normalize_angle(desired - ship.rotation);

    TickInput {
        rotate_left: error < -AIM_TOLERANCE / 2.0,
        rotate_right: error > AIM_TOLERANCE / 2.0,
        thrust: error.abs() < AIM_TOLERANCE && offset.length() > CHASE_DISTANCE,
        fire: error.abs() < AIM_TOLERANCE,
    }
}
