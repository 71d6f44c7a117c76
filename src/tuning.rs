//! Data-driven game feel constants
//!
//! The forgiveness margin, spawn cadences, and probability constants are tuned
//! by feel, not derived. They live here as configuration rather than
//! hard-coded invariants so a host can rebalance without touching the engine.

use serde::{Deserialize, Serialize};

/// All feel-level tunables consumed by the simulation.
///
/// Every field has a playable default; hosts typically load overrides from
/// JSON via [`Tuning::from_json`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Scrolling / distance ===
    /// Base track scroll speed in px/s (before stat and boost multipliers)
    pub base_scroll_speed: f32,
    /// Scroll speed multiplier while boosting
    pub boost_multiplier: f32,

    // === Ship steering ===
    /// Lerp rate toward the target while actively dragging
    pub drag_lerp_rate: f32,
    /// Lerp rate while drifting toward a keyboard/lane target
    pub drift_lerp_rate: f32,
    /// Keyboard steering speed in px/s
    pub keyboard_speed: f32,
    /// Fraction of viewport height above which the ship cannot fly
    /// (freeform steering is confined to a band near the bottom)
    pub ship_band_frac: f32,

    // === Spawning ===
    /// Seconds of simulated time between obstacle spawns
    pub obstacle_interval: f32,
    /// Probability that a spawned obstacle is a crystal (vs a rock)
    pub crystal_probability: f64,
    /// Seconds between gate spawns
    pub gate_interval: f32,
    /// Seconds between powerup spawns
    pub powerup_interval: f32,
    /// Distance since the last boss before another may spawn
    pub boss_spawn_distance: f32,
    /// Minimum run distance before the first boss
    pub min_boss_distance: f32,

    // === Collisions / combat ===
    /// Pixels subtracted from summed half-extents in overlap tests
    /// (generous-feeling hitboxes)
    pub forgiveness_margin: f32,
    /// Seconds between ship auto-fire shots at weapon level 1
    pub fire_interval: f32,
    /// Ship projectile speed in px/s
    pub projectile_speed: f32,
    /// Ship projectile damage at weapon level 1
    pub projectile_damage: f32,
    /// Shards awarded for collecting a crystal
    pub crystal_shards: u32,
    /// Shard bonus for shooting a rock
    pub rock_shards: u32,

    // === Boss ===
    pub boss_base_health: f32,
    /// Extra health per boss already spawned this run
    pub boss_health_step: f32,
    pub boss_base_reward: u32,
    /// Extra reward per boss already spawned this run
    pub boss_reward_step: u32,
    /// Health fraction at which the one-shot math phase triggers
    pub boss_math_threshold: f32,
    /// Bonus damage (fraction of max health) for a correct math answer
    pub boss_bonus_damage: f32,
    /// Heal (fraction of max health) for an incorrect math answer
    pub boss_heal_fraction: f32,
    /// Seconds between boss shots while attacking
    pub boss_fire_interval: f32,
    /// Boss projectile speed in px/s
    pub boss_projectile_speed: f32,
    /// Random angular spread applied to boss aim, in radians
    pub boss_fire_spread: f32,
    /// Horizontal oscillation speed while attacking, px/s
    pub boss_move_speed: f32,
    /// Fraction of viewport height the boss settles at while entering
    pub boss_target_y_frac: f32,
    /// Seconds the defeated boss lingers before removal
    pub boss_defeat_delay: f32,

    // === Gates / respawn ===
    /// Fraction of viewport height a gate must scroll past to count as
    /// "approached"
    pub gate_approach_frac: f32,
    /// Post-respawn invincibility window in seconds
    pub respawn_invincibility: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_scroll_speed: 180.0,
            boost_multiplier: 1.8,

            drag_lerp_rate: 14.0,
            drift_lerp_rate: 7.0,
            keyboard_speed: 420.0,
            ship_band_frac: 0.6,

            obstacle_interval: 1.2,
            crystal_probability: 0.55,
            gate_interval: 24.0,
            powerup_interval: 18.0,
            boss_spawn_distance: 4200.0,
            min_boss_distance: 1500.0,

            forgiveness_margin: 6.0,
            fire_interval: 0.45,
            projectile_speed: 620.0,
            projectile_damage: 10.0,
            crystal_shards: 5,
            rock_shards: 2,

            boss_base_health: 100.0,
            boss_health_step: 50.0,
            boss_base_reward: 50,
            boss_reward_step: 25,
            boss_math_threshold: 0.5,
            boss_bonus_damage: 0.30,
            boss_heal_fraction: 0.15,
            boss_fire_interval: 1.4,
            boss_projectile_speed: 260.0,
            boss_fire_spread: 0.25,
            boss_move_speed: 140.0,
            boss_target_y_frac: 0.18,
            boss_defeat_delay: 1.2,

            gate_approach_frac: 0.25,
            respawn_invincibility: 2.0,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
