//! Asteroids Lite - A wraparound arena arcade game
//!
//! Core modules:
//! - `sim`: Simulation (entity factory, motion integration, collisions, game state)
//! - `driver`: Frame timing, held-key snapshot and fire cooldown around the sim
//! - `renderer`: Renderer-agnostic draw list built from a state snapshot
//! - `settings`: Arena size and gameplay policies

pub mod driver;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::{Game, InputState, Key};
pub use settings::{BulletHitPolicy, MotionScaling, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Wall-clock length of one nominal (60 fps) frame in milliseconds
    pub const NOMINAL_FRAME_MS: f64 = 16.67;

    /// Ship defaults
    pub const SHIP_SIZE: f32 = 20.0;
    pub const THRUST_POWER: f32 = 0.1;
    pub const FRICTION: f32 = 0.99;
    pub const MAX_SPEED: f32 = 5.0;
    /// Radians per nominal frame while a rotate key is held
    pub const ROTATION_SPEED: f32 = 0.1;
    pub const START_LIVES: u32 = 3;

    /// Asteroid defaults
    pub const ASTEROID_MIN_SIZE: f32 = 20.0;
    pub const ASTEROID_MAX_SIZE: f32 = 50.0;
    pub const ASTEROID_MIN_VERTICES: usize = 7;
    pub const ASTEROID_MAX_VERTICES: usize = 11;
    pub const ASTEROID_MIN_VARIANCE: f32 = 0.8;
    pub const ASTEROID_MAX_VARIANCE: f32 = 1.2;
    pub const ASTEROID_MAX_DRIFT: f32 = 1.0;
    /// Spin per tick (radians)
    pub const ASTEROID_SPIN: f32 = 0.02;
    /// Field size at start and after every clear
    pub const ASTEROID_COUNT: usize = 5;
    pub const ASTEROID_SCORE: u64 = 100;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 7.0;
    pub const BULLET_SIZE: f32 = 2.0;
    pub const BULLET_LIFESPAN: i32 = 60;
    /// Minimum time between shots, enforced by the driver
    pub const FIRE_COOLDOWN_MS: f64 = 250.0;
}

/// Wrap a coordinate into `[0, dimension)`
///
/// Works for any finite input, including values several arena widths out
/// of range in either direction.
#[inline]
pub fn wrap(value: f32, dimension: f32) -> f32 {
    let wrapped = value.rem_euclid(dimension);
    // rem_euclid can round up to exactly `dimension` for tiny negative inputs
    if wrapped >= dimension { 0.0 } else { wrapped }
}

/// Wrap both axes of a point into the arena
#[inline]
pub fn wrap_point(pos: Vec2, width: f32, height: f32) -> Vec2 {
    Vec2::new(wrap(pos.x, width), wrap(pos.y, height))
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let a = (angle + PI).rem_euclid(TAU) - PI;
    // rem_euclid can round up to TAU for tiny negative inputs
    if a >= PI { -PI } else { a }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Unit heading vector for a rotation
#[inline]
pub fn heading(rotation: f32) -> Vec2 {
    polar_to_cartesian(1.0, rotation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_in_range() {
        assert_eq!(wrap(10.0, 800.0), 10.0);
        assert_eq!(wrap(0.0, 800.0), 0.0);
    }

    #[test]
    fn test_wrap_edges() {
        assert_eq!(wrap(800.0, 800.0), 0.0);
        assert!((wrap(-1.0, 800.0) - 799.0).abs() < 1e-4);
        assert!((wrap(805.0, 800.0) - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_far_out_of_range() {
        assert!((wrap(-2405.0, 800.0) - 795.0).abs() < 1e-3);
        assert!((wrap(4010.0, 800.0) - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_wrap_tiny_negative_stays_below_dimension() {
        let w = wrap(-1e-9, 600.0);
        assert!((0.0..600.0).contains(&w));
    }

    #[test]
    fn test_normalize_angle() {
        use std::f32::consts::PI;
        assert!((normalize_angle(2.5 * PI) - 0.5 * PI).abs() < 1e-4);
        assert!((normalize_angle(-0.5) - (-0.5)).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_angle_huge_input() {
        use std::f32::consts::PI;
        for angle in [1.0e30, -1.0e30, 3.0e9, f32::MAX] {
            let a = normalize_angle(angle);
            assert!((-PI..PI).contains(&a), "{} -> {}", angle, a);
        }
        assert!(normalize_angle(-1.0e-9).abs() < 1e-6);
    }
}
