//! Simulation tick
//!
//! Applies one input snapshot, then integrates motion and resolves
//! collisions. State goes in by value and comes back out.

use super::collision::{ResolveEvents, resolve_with_events};
use super::factory::create_bullet;
use super::integrate::integrate;
use super::state::GameState;
use crate::consts::*;
use crate::settings::Settings;

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Rotate counter-clockwise (screen space)
    pub rotate_left: bool,
    /// Rotate clockwise (screen space)
    pub rotate_right: bool,
    /// Forward thrust
    pub thrust: bool,
    /// Spawn a bullet this tick (cooldown is the caller's job)
    pub fire: bool,
}

/// Advance the game by one tick
///
/// `dt` is elapsed time in nominal 60 fps frames. The state's own arena
/// bounds the motion; `settings` only supplies the policies. Game-over
/// states are returned unchanged.
pub fn tick(state: GameState, input: &TickInput, dt: f32, settings: &Settings) -> GameState {
    tick_with_events(state, input, dt, settings).0
}

/// Same as [`tick`], also reporting collision events
pub fn tick_with_events(
    mut state: GameState,
    input: &TickInput,
    dt: f32,
    settings: &Settings,
) -> (GameState, ResolveEvents) {
    if state.is_game_over() {
        return (state, ResolveEvents::default());
    }

    let ship = &mut state.ship;
    if input.rotate_left {
        ship.body.rotation -= ROTATION_SPEED * dt;
    }
    if input.rotate_right {
        ship.body.rotation += ROTATION_SPEED * dt;
    }
    ship.thrusting = input.thrust;

    if input.fire {
        let bullet = create_bullet(&state.ship);
        state.bullets.push(bullet);
    }

    let state = integrate(state, dt, settings.motion_scaling);
    let (mut state, events) = resolve_with_events(state, settings.bullet_hit);
    state.time_ticks += 1;

    (state, events)
}
