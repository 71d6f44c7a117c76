//! Pure-data frame snapshot
//!
//! The render contract: everything a presentation layer needs to draw one
//! frame, borrowed straight from the simulation state. No drawing happens in
//! this crate, so the simulation stays headless-testable.

use super::state::{Boss, Gate, Obstacle, Particle, Powerup, Projectile, RaceState, Ship, Viewport};
use crate::profile::TrackTheme;

/// Read-only view over one tick's simulation results.
#[derive(Debug)]
pub struct FrameSnapshot<'a> {
    pub viewport: Viewport,
    pub ship: &'a Ship,
    pub obstacles: &'a [Obstacle],
    pub gates: &'a [Gate],
    pub projectiles: &'a [Projectile],
    pub powerups: &'a [Powerup],
    pub particles: &'a [Particle],
    pub boss: Option<&'a Boss>,
    /// Visual treatment flags
    pub boosting: bool,
    pub invincible: bool,
    /// Respawn blink phase in seconds (rendering only)
    pub flash_timer: f32,
    /// Decaying shake magnitude, 0.0 to 1.0
    pub screen_shake: f32,
    pub distance: f32,
    pub theme: &'a TrackTheme,
}

impl<'a> FrameSnapshot<'a> {
    pub fn capture(state: &'a RaceState, theme: &'a TrackTheme) -> Self {
        Self {
            viewport: state.viewport,
            ship: &state.ship,
            obstacles: &state.obstacles,
            gates: &state.gates,
            projectiles: &state.projectiles,
            powerups: &state.powerups,
            particles: &state.particles,
            boss: state.boss.as_ref(),
            boosting: state.boosting,
            invincible: state.is_invincible(),
            flash_timer: state.flash_timer,
            screen_shake: state.screen_shake,
            distance: state.distance,
            theme,
        }
    }
}
