//! Motion integration
//!
//! Advances ship, asteroids and bullets by one tick: thrust, friction,
//! speed clamp, position step, screen wrap and bullet expiry.

use super::state::{Arena, GameState, Ship};
use crate::consts::*;
use crate::heading;
use crate::settings::MotionScaling;

/// Advance every moving entity by one tick inside `state.arena`
///
/// With `MotionScaling::RotationOnly` the step is fixed per call and `dt` is
/// ignored here (it only affects input rotation, applied before this call).
/// With `MotionScaling::Uniform` thrust, friction, position and asteroid
/// spin all scale by `dt`. Bullet lifespans always count calls.
pub fn integrate(mut state: GameState, dt: f32, scaling: MotionScaling) -> GameState {
    let arena = state.arena;
    let step = match scaling {
        MotionScaling::RotationOnly => 1.0,
        MotionScaling::Uniform => dt,
    };

    integrate_ship(&mut state.ship, &arena, step);

    for asteroid in &mut state.asteroids {
        let body = &mut asteroid.body;
        body.pos = arena.wrap(body.pos + body.vel * step);
        body.rotation += ASTEROID_SPIN * step;
    }

    state.bullets.retain_mut(|bullet| {
        let body = &mut bullet.body;
        body.pos = arena.wrap(body.pos + body.vel * step);
        bullet.lifespan -= 1;
        bullet.lifespan > 0
    });

    state
}

fn integrate_ship(ship: &mut Ship, arena: &Arena, step: f32) {
    let body = &mut ship.body;

    if ship.thrusting {
        body.vel += heading(body.rotation) * THRUST_POWER * step;
    }

    body.vel *= if step == 1.0 { FRICTION } else { FRICTION.powf(step) };

    let speed = body.vel.length();
    if speed > MAX_SPEED {
        body.vel *= MAX_SPEED / speed;
    }

    body.pos = arena.wrap(body.pos + body.vel * step);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Bullet, GameObject};
    use glam::Vec2;
    use proptest::prelude::*;

    fn empty_state() -> GameState {
        let mut state = GameState::new(1, Arena::default());
        state.asteroids.clear();
        state
    }

    fn bullet(lifespan: i32) -> Bullet {
        Bullet {
            body: GameObject {
                pos: Vec2::new(100.0, 100.0),
                vel: Vec2::new(7.0, 0.0),
                rotation: 0.0,
                size: BULLET_SIZE,
            },
            lifespan,
        }
    }

    fn tick_once(state: GameState) -> GameState {
        integrate(state, 1.0, MotionScaling::RotationOnly)
    }

    #[test]
    fn test_thrust_then_friction() {
        let mut state = empty_state();
        state.ship.thrusting = true;
        let state = tick_once(state);

        // (0 + 0.1) * 0.99 along +x
        assert!((state.ship.body.vel.x - 0.099).abs() < 1e-6);
        assert!(state.ship.body.vel.y.abs() < 1e-6);
        assert!((state.ship.body.pos.x - 400.099).abs() < 1e-4);
    }

    #[test]
    fn test_speed_clamped_to_max() {
        let mut state = empty_state();
        state.ship.body.vel = Vec2::new(30.0, 40.0);
        let state = tick_once(state);
        assert!((state.ship.speed() - MAX_SPEED).abs() < 1e-4);
        // Direction preserved
        assert!((state.ship.body.vel.x / state.ship.body.vel.y - 0.75).abs() < 1e-4);
    }

    #[test]
    fn test_ship_wraps_left_edge() {
        let mut state = empty_state();
        state.ship.body.pos = Vec2::new(1.0, 300.0);
        state.ship.body.vel = Vec2::new(-4.0, 0.0);
        let state = tick_once(state);
        // 1 + (-4 * 0.99) = -2.96 -> 797.04
        assert!((state.ship.body.pos.x - 797.04).abs() < 1e-3);
    }

    #[test]
    fn test_asteroid_drifts_and_spins() {
        let mut state = GameState::new(5, Arena::default());
        let before = state.asteroids[0].clone();
        state.asteroids.truncate(1);
        let state = tick_once(state);
        let after = &state.asteroids[0];

        let expected = Arena::default().wrap(before.body.pos + before.body.vel);
        assert!((after.body.pos - expected).length() < 1e-4);
        assert!((after.body.rotation - (before.body.rotation + 0.02)).abs() < 1e-6);
        // No friction on asteroids
        assert_eq!(after.body.vel, before.body.vel);
    }

    #[test]
    fn test_asteroid_ignores_dt_by_default() {
        let mut state = GameState::new(5, Arena::default());
        state.asteroids.truncate(1);
        let before = state.asteroids[0].clone();
        let state = integrate(state, 3.0, MotionScaling::RotationOnly);
        assert!((state.asteroids[0].body.rotation - (before.body.rotation + 0.02)).abs() < 1e-6);
    }

    #[test]
    fn test_uniform_scaling_moves_further() {
        let mut state = empty_state();
        state.ship.body.vel = Vec2::new(2.0, 0.0);
        let state = integrate(state, 2.0, MotionScaling::Uniform);
        // v = 2 * 0.99^2, x = 400 + 2v
        let v = 2.0 * 0.99f32.powf(2.0);
        assert!((state.ship.body.vel.x - v).abs() < 1e-5);
        assert!((state.ship.body.pos.x - (400.0 + 2.0 * v)).abs() < 1e-4);
    }

    #[test]
    fn test_bullet_lifespan_one_removed_after_one_tick() {
        let mut state = empty_state();
        state.bullets.push(bullet(1));
        let state = tick_once(state);
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_bullet_lifespan_sixty() {
        let mut state = empty_state();
        state.bullets.push(bullet(60));
        for _ in 0..59 {
            state = tick_once(state);
        }
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.bullets[0].lifespan, 1);
        state = tick_once(state);
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_bullet_order_preserved() {
        let mut state = empty_state();
        state.bullets.push(bullet(5));
        state.bullets.push(bullet(1));
        state.bullets.push(bullet(9));
        let state = tick_once(state);
        let lifespans: Vec<i32> = state.bullets.iter().map(|b| b.lifespan).collect();
        assert_eq!(lifespans, vec![4, 8]);
    }

    proptest! {
        #[test]
        fn positions_stay_in_arena(
            x in -1.0e5f32..1.0e5,
            y in -1.0e5f32..1.0e5,
            vx in -50.0f32..50.0,
            vy in -50.0f32..50.0,
            ax in -1.0e5f32..1.0e5,
            ay in -1.0e5f32..1.0e5,
            thrusting in any::<bool>(),
        ) {
            let arena = Arena::default();
            let mut state = GameState::new(1, arena);
            state.asteroids.truncate(1);
            state.asteroids[0].body.pos = Vec2::new(ax, ay);
            state.asteroids[0].body.vel = Vec2::new(vy, -vx);
            state.ship.body.pos = Vec2::new(x, y);
            state.ship.body.vel = Vec2::new(vx, vy);
            state.ship.thrusting = thrusting;
            let mut b = bullet(10);
            b.body.pos = Vec2::new(y, x);
            b.body.vel = Vec2::new(vy, vx);
            state.bullets.push(b);

            let state = integrate(state, 1.0, MotionScaling::RotationOnly);
            let p = state.ship.body.pos;
            prop_assert!(p.x >= 0.0 && p.x < arena.width);
            prop_assert!(p.y >= 0.0 && p.y < arena.height);
            let q = state.bullets[0].body.pos;
            prop_assert!(q.x >= 0.0 && q.x < arena.width);
            prop_assert!(q.y >= 0.0 && q.y < arena.height);
            let r = state.asteroids[0].body.pos;
            prop_assert!(r.x >= 0.0 && r.x < arena.width);
            prop_assert!(r.y >= 0.0 && r.y < arena.height);
        }

        #[test]
        fn ship_speed_never_exceeds_max(
            vx in -100.0f32..100.0,
            vy in -100.0f32..100.0,
            rotation in -10.0f32..10.0,
            thrusting in any::<bool>(),
        ) {
            let mut state = empty_state();
            state.ship.body.vel = Vec2::new(vx, vy);
            state.ship.body.rotation = rotation;
            state.ship.thrusting = thrusting;
            let state = tick_once(state);
            prop_assert!(state.ship.speed() <= MAX_SPEED + 1e-4);
        }
    }
}
