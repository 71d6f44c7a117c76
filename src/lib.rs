//! Comet Run - a side-scrolling math race engine
//!
//! Core modules:
//! - `engine`: Deterministic race simulation (ship, spawner, collisions, boss)
//! - `problem`: Math challenge collaborator interface + adaptive difficulty
//! - `profile`: Caller-supplied player stats and track theme
//! - `session`: Caller-side per-run aggregate built from engine events
//! - `tuning`: Data-driven game feel constants

pub mod engine;
pub mod problem;
pub mod profile;
pub mod session;
pub mod tuning;

pub use engine::{FrameSnapshot, RaceEngine, RaceEvent, TickInput, Viewport};
pub use problem::{MathProblem, ProblemProvider, adjust_difficulty};
pub use profile::{PlayerStats, TrackTheme};
pub use session::RaceSession;
pub use tuning::Tuning;

/// Engine-wide configuration constants
pub mod consts {
    /// Upper bound on a single frame's delta time in seconds.
    /// Protects the simulation after a stall (tab backgrounding).
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Maximum live cosmetic particles
    pub const MAX_PARTICLES: usize = 256;

    /// Discrete steering lanes across the playfield
    pub const LANE_COUNT: u32 = 3;

    /// Difficulty bounds for the adaptive scaler
    pub const MIN_DIFFICULTY: u8 = 1;
    pub const MAX_DIFFICULTY: u8 = 10;
}

/// Exponential approach toward a target: moves `current` a `rate * dt`
/// fraction of the remaining distance (saturating at the target).
#[inline]
pub fn approach(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    current + (target - current) * (rate * dt).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approach_converges() {
        let mut x = 0.0;
        for _ in 0..200 {
            x = approach(x, 100.0, 8.0, 1.0 / 60.0);
        }
        assert!((x - 100.0).abs() < 1.0);
    }

    #[test]
    fn test_approach_saturates_on_large_dt() {
        // rate * dt > 1 must land exactly on the target, never overshoot
        let x = approach(0.0, 50.0, 8.0, 1.0);
        assert_eq!(x, 50.0);
    }
}
