//! Discrete simulation events
//!
//! One closed tagged set emitted through a single channel, drained by the
//! caller each frame. This replaces a bag of independent callbacks: callers
//! pattern-match on the variant, and tests can assert on event sequences
//! exhaustively.

use serde::{Deserialize, Serialize};

use super::state::PowerupKind;
use crate::problem::MathProblem;

/// Everything the engine reports to the outside world.
///
/// The engine owns all entity state; callers only ever consume these deltas
/// and answer through the narrow re-entry methods on the driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RaceEvent {
    /// In-run currency collected (crystals, rock bonuses)
    ShardsCollected { amount: u32 },
    /// Ship hit a hazard (rock or boss projectile). The caller decides
    /// whether this depletes the shield and answers via `trigger_respawn`.
    ObstacleHit,
    /// A gate entered the approach band; the overlay should be shown
    GateApproached { gate_id: u32, problem: MathProblem },
    /// A gate resolved, by answer or by the auto-fail
    GatePassed { gate_id: u32, correct: bool },
    /// Distance advanced this tick
    DistanceDelta { delta: f32 },
    /// Emitted each tick while boost is active
    BoostTick { dt: f32 },
    /// A respawn invincibility window opened
    Respawned,
    BossSpawned { boss_id: u32, health: f32 },
    /// Boss crossed the health threshold into its one-shot math phase
    BossMathStarted { problem: MathProblem },
    BossDefeated { reward: u32 },
    /// A rock was shot down (shard bonus arrives as `ShardsCollected`)
    RockDestroyed,
    PowerupCollected { kind: PowerupKind },
}
