//! Caller-side per-run aggregate
//!
//! The engine reports deltas; this is the bookkeeping a host keeps on its side
//! of the boundary. It also owns the shield rule: hazard hits count up against
//! the player's shield capacity, and the hit that exhausts it resets the
//! counter and signals that a respawn is needed (the host then calls
//! `trigger_respawn` on the engine).

use serde::{Deserialize, Serialize};

use crate::engine::RaceEvent;

/// Per-run totals accumulated from drained engine events.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RaceSession {
    pub distance: f32,
    pub shards: u32,
    pub gates_attempted: u32,
    pub gates_passed: u32,
    pub correct_answers: u32,
    pub shield_hits: u32,
    pub rocks_destroyed: u32,
    pub bosses_defeated: u32,
    pub powerups_collected: u32,
    pub boost_time: f32,
}

impl RaceSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one engine event into the session. Returns `true` when the event
    /// was the hazard hit that exhausted the shield and a respawn is needed.
    pub fn apply(&mut self, event: &RaceEvent, shield: u32) -> bool {
        match event {
            RaceEvent::ShardsCollected { amount } => self.shards += amount,
            RaceEvent::ObstacleHit => {
                self.shield_hits += 1;
                if self.shield_hits >= shield.max(1) {
                    self.shield_hits = 0;
                    return true;
                }
            }
            RaceEvent::GateApproached { .. } => {}
            RaceEvent::GatePassed { correct, .. } => {
                self.gates_attempted += 1;
                if *correct {
                    self.gates_passed += 1;
                    self.correct_answers += 1;
                }
            }
            RaceEvent::DistanceDelta { delta } => self.distance += delta,
            RaceEvent::BoostTick { dt } => self.boost_time += dt,
            RaceEvent::Respawned => {}
            RaceEvent::BossSpawned { .. } => {}
            RaceEvent::BossMathStarted { .. } => {}
            RaceEvent::BossDefeated { reward } => {
                self.bosses_defeated += 1;
                self.shards += reward;
            }
            RaceEvent::RockDestroyed => self.rocks_destroyed += 1,
            RaceEvent::PowerupCollected { .. } => self.powerups_collected += 1,
        }
        false
    }

    /// Answer accuracy over attempted gates, 0.0 when none were attempted.
    pub fn accuracy(&self) -> f64 {
        if self.gates_attempted == 0 {
            0.0
        } else {
            self.correct_answers as f64 / self.gates_attempted as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shield_sequence_resets_on_third_hit() {
        let mut session = RaceSession::new();
        let shield = 3;

        assert!(!session.apply(&RaceEvent::ObstacleHit, shield));
        assert_eq!(session.shield_hits, 1);
        assert!(!session.apply(&RaceEvent::ObstacleHit, shield));
        assert_eq!(session.shield_hits, 2);
        // Third hit exhausts the shield: counter resets, respawn signaled
        assert!(session.apply(&RaceEvent::ObstacleHit, shield));
        assert_eq!(session.shield_hits, 0);
    }

    #[test]
    fn test_zero_shield_still_signals() {
        let mut session = RaceSession::new();
        assert!(session.apply(&RaceEvent::ObstacleHit, 0));
        assert_eq!(session.shield_hits, 0);
    }

    #[test]
    fn test_gate_tallies_and_accuracy() {
        let mut session = RaceSession::new();
        session.apply(&RaceEvent::GatePassed { gate_id: 1, correct: true }, 3);
        session.apply(&RaceEvent::GatePassed { gate_id: 2, correct: false }, 3);
        session.apply(&RaceEvent::GatePassed { gate_id: 3, correct: true }, 3);
        assert_eq!(session.gates_attempted, 3);
        assert_eq!(session.gates_passed, 2);
        assert!((session.accuracy() - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_boss_reward_lands_in_shards() {
        let mut session = RaceSession::new();
        session.apply(&RaceEvent::ShardsCollected { amount: 5 }, 3);
        session.apply(&RaceEvent::BossDefeated { reward: 50 }, 3);
        assert_eq!(session.shards, 55);
        assert_eq!(session.bosses_defeated, 1);
    }

    #[test]
    fn test_distance_and_boost_accumulate() {
        let mut session = RaceSession::new();
        session.apply(&RaceEvent::DistanceDelta { delta: 3.0 }, 3);
        session.apply(&RaceEvent::DistanceDelta { delta: 4.5 }, 3);
        session.apply(&RaceEvent::BoostTick { dt: 0.016 }, 3);
        assert!((session.distance - 7.5).abs() < 1e-6);
        assert!((session.boost_time - 0.016).abs() < 1e-6);
    }
}
