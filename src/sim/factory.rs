//! Entity construction
//!
//! The ship and bullets are deterministic; asteroids draw every attribute
//! from the caller's RNG so a seeded `Pcg32` reproduces a whole field.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::state::{Arena, Asteroid, Bullet, GameObject, Ship};
use crate::consts::*;
use crate::{heading, polar_to_cartesian};

/// Ship at rest at `(x, y)`, facing along +x
pub fn create_ship(x: f32, y: f32) -> Ship {
    Ship {
        body: GameObject::at(Vec2::new(x, y), SHIP_SIZE),
        thrusting: false,
    }
}

/// Random asteroid somewhere inside a `width` x `height` arena
pub fn create_asteroid<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Asteroid {
    let size = rng.random_range(ASTEROID_MIN_SIZE..ASTEROID_MAX_SIZE);
    let count = rng.random_range(ASTEROID_MIN_VERTICES..=ASTEROID_MAX_VERTICES);

    // Star-convex outline: even angular steps, jittered radius
    let vertices = (0..count)
        .map(|i| {
            let angle = TAU * i as f32 / count as f32;
            let variance = rng.random_range(ASTEROID_MIN_VARIANCE..ASTEROID_MAX_VARIANCE);
            polar_to_cartesian(size * variance, angle)
        })
        .collect();

    let pos = Vec2::new(rng.random_range(0.0..width), rng.random_range(0.0..height));
    let vel = Vec2::new(
        rng.random_range(-ASTEROID_MAX_DRIFT..ASTEROID_MAX_DRIFT),
        rng.random_range(-ASTEROID_MAX_DRIFT..ASTEROID_MAX_DRIFT),
    );
    let rotation = rng.random_range(0.0..TAU);

    Asteroid {
        body: GameObject {
            pos,
            vel,
            rotation,
            size,
        },
        vertices,
    }
}

/// A batch of `count` asteroids for the given arena
pub fn create_asteroid_field<R: Rng + ?Sized>(
    rng: &mut R,
    arena: &Arena,
    count: usize,
) -> Vec<Asteroid> {
    (0..count)
        .map(|_| create_asteroid(rng, arena.width, arena.height))
        .collect()
}

/// Bullet leaving the ship's nose along its heading
pub fn create_bullet(ship: &Ship) -> Bullet {
    Bullet {
        body: GameObject {
            pos: ship.body.pos,
            vel: heading(ship.body.rotation) * BULLET_SPEED,
            rotation: 0.0,
            size: BULLET_SIZE,
        },
        lifespan: BULLET_LIFESPAN,
    }
}
