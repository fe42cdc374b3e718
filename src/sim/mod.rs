//! Simulation module
//!
//! All gameplay logic lives here:
//! - Seeded RNG only (stored in the state)
//! - State passed by value through each stage
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod factory;
pub mod integrate;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use collision::{ResolveEvents, collides, resolve, resolve_with_events};
pub use factory::{create_asteroid, create_asteroid_field, create_bullet, create_ship};
pub use integrate::integrate;
pub use state::{Arena, Asteroid, Body, Bullet, GameObject, GamePhase, GameState, Ship};
pub use tick::{TickInput, tick, tick_with_events};
