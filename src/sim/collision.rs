//! Collision detection and response
//!
//! Every entity is treated as a circle of radius `size`. Asteroid outlines
//! are only for drawing; hits use the circle.

use super::factory::create_asteroid_field;
use super::state::{Body, GamePhase, GameState};
use crate::consts::*;
use crate::settings::BulletHitPolicy;

/// Whether two bodies overlap (strictly closer than the sum of their sizes)
#[inline]
pub fn collides<A: Body + ?Sized, B: Body + ?Sized>(a: &A, b: &B) -> bool {
    let (a, b) = (a.body(), b.body());
    a.pos.distance(b.pos) < a.size + b.size
}

/// What happened during one resolve pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveEvents {
    /// Ship touched an asteroid and lost a life
    pub ship_hit: bool,
    /// Asteroids shot this pass
    pub asteroids_destroyed: u32,
    /// Field was cleared and regenerated
    pub field_refilled: bool,
    /// This pass ended the game
    pub game_over: bool,
}

/// Resolve ship and bullet collisions for one tick
///
/// Ship respawns and field refills use `state.arena`.
pub fn resolve(state: GameState, policy: BulletHitPolicy) -> GameState {
    resolve_with_events(state, policy).0
}

/// Same as [`resolve`], also reporting what happened
pub fn resolve_with_events(
    mut state: GameState,
    policy: BulletHitPolicy,
) -> (GameState, ResolveEvents) {
    let mut events = ResolveEvents::default();
    let arena = state.arena;

    // Callers stop ticking at game over; nothing may change afterwards
    if state.is_game_over() {
        return (state, events);
    }

    // --- SHIP vs ASTEROIDS ---
    if state.asteroids.iter().any(|a| collides(&state.ship, a)) {
        events.ship_hit = true;
        state.lives = state.lives.saturating_sub(1);

        if state.lives == 0 {
            state.phase = GamePhase::GameOver;
            events.game_over = true;
            log::info!("Game over (score {})", state.score);
        } else {
            state.ship.reset_to(arena.center());
            log::debug!("Ship hit, {} lives left", state.lives);
        }
    }

    // --- BULLETS vs ASTEROIDS ---
    let before = state.asteroids.len();
    match policy {
        BulletHitPolicy::Pierce => {
            let bullets = &state.bullets;
            state
                .asteroids
                .retain(|a| !bullets.iter().any(|b| collides(a, b)));
        }
        BulletHitPolicy::Consume => {
            let mut spent = vec![false; state.bullets.len()];
            let bullets = &state.bullets;
            state.asteroids.retain(|a| {
                let hit = bullets
                    .iter()
                    .enumerate()
                    .position(|(i, b)| !spent[i] && collides(a, b));
                match hit {
                    Some(i) => {
                        spent[i] = true;
                        false
                    }
                    None => true,
                }
            });
            let mut spent = spent.into_iter();
            state.bullets.retain(|_| !spent.next().unwrap_or(false));
        }
    }

    let destroyed = before - state.asteroids.len();
    if destroyed > 0 {
        events.asteroids_destroyed = destroyed as u32;
        state.score += ASTEROID_SCORE * destroyed as u64;
        log::debug!("{} asteroid(s) destroyed, score {}", destroyed, state.score);
    }

    // --- FIELD REFILL ---
    if state.asteroids.is_empty() {
        state.asteroids = create_asteroid_field(&mut state.rng, &arena, ASTEROID_COUNT);
        events.field_refilled = true;
        log::info!(
            "Field cleared at score {}, spawning {} asteroids",
            state.score,
            ASTEROID_COUNT
        );
    }

    (state, events)
}
