//! Deterministic race simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Driver-owned time only (no component reads the clock)
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod boss;
pub mod collision;
pub mod driver;
pub mod events;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{aabb_overlap, off_screen};
pub use driver::RaceEngine;
pub use events::RaceEvent;
pub use snapshot::FrameSnapshot;
pub use state::{
    Boss, BossPhase, Gate, Obstacle, ObstacleKind, Particle, Powerup, PowerupKind, Projectile,
    RaceState, RunPhase, Ship, Viewport,
};
pub use tick::{TickInput, tick};
