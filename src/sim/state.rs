//! Game state and core simulation types
//!
//! Everything a renderer needs to draw a frame lives here, and the whole
//! state (RNG included) serializes so a run can be snapshotted and replayed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::factory::{create_asteroid_field, create_ship};
use crate::consts::*;

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ship flying, simulation advancing
    Active,
    /// All lives lost; terminal until reset
    GameOver,
}

/// Rectangular wraparound play area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Ship spawn and respawn point
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Wrap a position onto the torus
    #[inline]
    pub fn wrap(&self, pos: Vec2) -> Vec2 {
        crate::wrap_point(pos, self.width, self.height)
    }
}

/// Kinematic state shared by every physical entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameObject {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Radians
    pub rotation: f32,
    /// Collision (and visual) radius
    pub size: f32,
}

impl GameObject {
    pub fn at(pos: Vec2, size: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            rotation: 0.0,
            size,
        }
    }
}

/// Anything with a `GameObject` body
pub trait Body {
    fn body(&self) -> &GameObject;
}

impl Body for GameObject {
    fn body(&self) -> &GameObject {
        self
    }
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub body: GameObject,
    /// Forward thrust held this tick
    pub thrusting: bool,
}

impl Ship {
    /// Move back to `pos` at rest, facing along +x
    pub fn reset_to(&mut self, pos: Vec2) {
        self.body.pos = pos;
        self.body.vel = Vec2::ZERO;
        self.body.rotation = 0.0;
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.body.vel.length()
    }
}

impl Body for Ship {
    fn body(&self) -> &GameObject {
        &self.body
    }
}

/// A drifting rock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub body: GameObject,
    /// Outline offsets in local space (unrotated, relative to `pos`)
    pub vertices: Vec<Vec2>,
}

impl Asteroid {
    /// Outline in world space, rotated and translated
    pub fn world_vertices(&self) -> impl Iterator<Item = Vec2> + '_ {
        let rot = Vec2::from_angle(self.body.rotation);
        self.vertices.iter().map(move |v| self.body.pos + rot.rotate(*v))
    }
}

impl Body for Asteroid {
    fn body(&self) -> &GameObject {
        &self.body
    }
}

/// A shot fired by the ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub body: GameObject,
    /// Ticks left before the bullet expires
    pub lifespan: i32,
}

impl Body for Bullet {
    fn body(&self) -> &GameObject {
        &self.body
    }
}

/// Complete game state (serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving every random spawn
    pub rng: Pcg32,
    /// Play area
    pub arena: Arena,
    /// Player ship (exactly one)
    pub ship: Ship,
    /// Live asteroids (order irrelevant)
    pub asteroids: Vec<Asteroid>,
    /// Live bullets (insertion order)
    pub bullets: Vec<Bullet>,
    /// Score
    pub score: u64,
    /// Player lives
    pub lives: u32,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, arena: Arena) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let center = arena.center();
        let asteroids = create_asteroid_field(&mut rng, &arena, ASTEROID_COUNT);

        log::info!(
            "New game (seed {}, arena {}x{}, {} asteroids)",
            seed,
            arena.width,
            arena.height,
            asteroids.len()
        );

        Self {
            seed,
            rng,
            arena,
            ship: create_ship(center.x, center.y),
            asteroids,
            bullets: Vec::new(),
            score: 0,
            lives: START_LIVES,
            phase: GamePhase::Active,
            time_ticks: 0,
        }
    }

    /// Full replacement with a fresh round on the same arena
    ///
    /// The new seed is drawn from the current RNG so consecutive rounds
    /// differ while a whole session stays reproducible from its first seed.
    pub fn reset(mut self) -> Self {
        let seed = self.rng.random::<u64>();
        Self::new(seed, self.arena)
    }

    /// True once all lives are lost
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
