//! Engine driver: lifecycle, time ownership, and the re-entry surface
//!
//! The driver is the sole owner of time. The host calls `step` once per
//! animation frame with the wall-clock delta; the driver clamps it, refuses to
//! advance while stopped or while a boss math overlay holds the run, and
//! queues events for the caller to drain.

use super::boss;
use super::events::RaceEvent;
use super::snapshot::FrameSnapshot;
use super::state::{Boss, RaceState, RunPhase, Viewport};
use super::tick::{self, TickInput};
use crate::consts::MAX_FRAME_DT;
use crate::problem::ProblemProvider;
use crate::profile::{PlayerStats, TrackTheme};
use crate::tuning::Tuning;

/// The race simulation engine.
///
/// Single-threaded and cooperative: nothing advances outside `step`, and the
/// caller is the only reader of emitted events. `stop`/`start` bracket
/// external overlays; `cleanup` ends the run for good and is safe to repeat.
pub struct RaceEngine {
    state: RaceState,
    tuning: Tuning,
    stats: PlayerStats,
    theme: TrackTheme,
    provider: Box<dyn ProblemProvider>,
    events: Vec<RaceEvent>,
    running: bool,
}

impl RaceEngine {
    pub fn new(
        viewport: Viewport,
        stats: PlayerStats,
        theme: TrackTheme,
        tuning: Tuning,
        seed: u64,
        provider: Box<dyn ProblemProvider>,
    ) -> Self {
        log::info!("engine created, seed {seed}, viewport {}x{}", viewport.width, viewport.height);
        Self {
            state: RaceState::new(seed, viewport),
            tuning,
            stats,
            theme,
            provider,
            events: Vec::new(),
            running: false,
        }
    }

    /// Begin advancing on subsequent `step` calls. Idempotent.
    pub fn start(&mut self) {
        if !self.running {
            log::debug!("engine started");
        }
        self.running = true;
    }

    /// Halt all simulation advancement. Idempotent.
    pub fn stop(&mut self) {
        if self.running {
            log::debug!("engine stopped");
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance one frame. `wall_dt` is seconds since the previous frame,
    /// clamped to keep the simulation stable after a host stall. No-op while
    /// stopped or while the boss math overlay holds the run.
    pub fn step(&mut self, input: &TickInput, wall_dt: f32) {
        if !self.running {
            return;
        }
        if self.state.phase == RunPhase::AwaitingBossMath {
            return;
        }
        let dt = wall_dt.clamp(0.0, MAX_FRAME_DT);
        tick::tick(
            &mut self.state,
            input,
            &self.stats,
            &self.tuning,
            self.provider.as_mut(),
            &mut self.events,
            dt,
        );
    }

    /// Update playfield bounds and re-clamp the ship inside them.
    pub fn resize(&mut self, viewport: Viewport) {
        self.state.viewport = viewport;
        let band = self.tuning.ship_band_frac;
        self.state.ship.clamp_to(&viewport, band);
        log::debug!("resized to {}x{}", viewport.width, viewport.height);
    }

    pub fn set_boost_state(&mut self, boosting: bool) {
        self.state.boosting = boosting;
    }

    /// Resolve a gate challenge. Unknown or stale gate ids no-op silently.
    pub fn set_gate_result(&mut self, gate_id: u32, correct: bool) {
        tick::resolve_gate(&mut self.state, &mut self.events, gate_id, correct);
    }

    /// Resolve the boss math challenge and resume the run.
    pub fn set_boss_math_result(&mut self, correct: bool) {
        boss::resolve_math(&mut self.state, &self.tuning, &mut self.events, correct);
    }

    /// Open the post-respawn invincibility window.
    pub fn trigger_respawn(&mut self) {
        tick::trigger_respawn(&mut self.state, &self.tuning, &mut self.events);
    }

    pub fn set_difficulty(&mut self, level: u8) {
        self.state.difficulty = level.clamp(crate::consts::MIN_DIFFICULTY, crate::consts::MAX_DIFFICULTY);
    }

    pub fn distance(&self) -> f32 {
        self.state.distance
    }

    pub fn boss(&self) -> Option<&Boss> {
        self.state.boss.as_ref()
    }

    pub fn phase(&self) -> RunPhase {
        self.state.phase
    }

    /// Take all events queued since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<RaceEvent> {
        std::mem::take(&mut self.events)
    }

    /// Produce this frame's render contract.
    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        FrameSnapshot::capture(&self.state, &self.theme)
    }

    /// Stop the loop and discard all live entities. Safe to call repeatedly;
    /// host-side input bindings are the caller's to detach.
    pub fn cleanup(&mut self) {
        self.stop();
        self.state.obstacles.clear();
        self.state.gates.clear();
        self.state.projectiles.clear();
        self.state.powerups.clear();
        self.state.particles.clear();
        self.state.boss = None;
        self.state.phase = RunPhase::Running;
        self.events.clear();
        log::debug!("engine cleaned up");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::state::{Boss, BossPhase};
    use crate::problem::ArithmeticProvider;
    use glam::Vec2;

    fn engine(seed: u64) -> RaceEngine {
        RaceEngine::new(
            Viewport::default(),
            PlayerStats::default(),
            TrackTheme::default(),
            Tuning::default(),
            seed,
            Box::new(ArithmeticProvider::new(seed)),
        )
    }

    #[test]
    fn test_step_is_inert_until_started() {
        let mut e = engine(1);
        e.step(&TickInput::default(), 1.0 / 60.0);
        assert_eq!(e.distance(), 0.0);

        e.start();
        e.step(&TickInput::default(), 1.0 / 60.0);
        assert!(e.distance() > 0.0);

        // stop/start are idempotent both ways
        e.stop();
        e.stop();
        let frozen = e.distance();
        e.step(&TickInput::default(), 1.0 / 60.0);
        assert_eq!(e.distance(), frozen);
        e.start();
        e.start();
        assert!(e.is_running());
    }

    #[test]
    fn test_frame_delta_is_clamped() {
        let mut e = engine(2);
        e.start();
        // A 5-second stall advances at most MAX_FRAME_DT worth of distance
        e.step(&TickInput::default(), 5.0);
        let expected = 180.0 * MAX_FRAME_DT;
        assert!((e.distance() - expected).abs() < 1e-3);
        // Negative deltas (clock weirdness) advance nothing
        let frozen = e.distance();
        e.step(&TickInput::default(), -1.0);
        assert_eq!(e.distance(), frozen);
    }

    #[test]
    fn test_resize_reclamps_ship() {
        let mut e = engine(3);
        e.resize(Viewport::new(300.0, 400.0));
        let snap = e.snapshot();
        let half = snap.ship.size.x / 2.0;
        assert!(snap.ship.pos.x >= half && snap.ship.pos.x <= 300.0 - half);
        assert_eq!(snap.viewport.width, 300.0);
    }

    #[test]
    fn test_boss_math_hard_pauses_until_answered() {
        let mut e = engine(4);
        e.start();
        // Force a boss straight into its math phase
        let id = 1000;
        e.state.boss = Some(Boss {
            id,
            pos: Vec2::new(400.0, 108.0),
            target_y: 108.0,
            size: Vec2::new(120.0, 90.0),
            health: 40.0,
            max_health: 100.0,
            phase: BossPhase::Math,
            shoot_timer: 0.0,
            move_dir: 1.0,
            flash_timer: 0.0,
            reward: 50,
            math_triggered: true,
            defeat_timer: 0.0,
        });
        e.state.phase = RunPhase::AwaitingBossMath;

        let frozen = e.distance();
        e.step(&TickInput::default(), 1.0 / 60.0);
        assert_eq!(e.distance(), frozen);

        e.set_boss_math_result(true);
        assert_eq!(e.phase(), RunPhase::Running);
        e.step(&TickInput::default(), 1.0 / 60.0);
        assert!(e.distance() > frozen);
    }

    #[test]
    fn test_set_boss_math_result_without_boss_is_noop() {
        let mut e = engine(5);
        e.set_boss_math_result(true);
        assert!(e.drain_events().is_empty());
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut e = engine(6);
        e.start();
        e.step(&TickInput::default(), 1.0 / 60.0);
        assert!(!e.drain_events().is_empty());
        assert!(e.drain_events().is_empty());
    }

    #[test]
    fn test_cleanup_is_repeatable() {
        let mut e = engine(7);
        e.start();
        for _ in 0..300 {
            e.step(&TickInput::default(), 1.0 / 60.0);
        }
        e.cleanup();
        assert!(!e.is_running());
        {
            let snap = e.snapshot();
            assert!(snap.obstacles.is_empty());
            assert!(snap.projectiles.is_empty());
            assert!(snap.boss.is_none());
        }
        // Second cleanup must be safe
        e.cleanup();
    }

    #[test]
    fn test_difficulty_is_clamped() {
        let mut e = engine(8);
        e.set_difficulty(0);
        assert_eq!(e.state.difficulty, 1);
        e.set_difficulty(200);
        assert_eq!(e.state.difficulty, 10);
    }
}
