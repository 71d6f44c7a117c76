//! Caller-supplied player stats and track theming
//!
//! Both structs are plain data handed in at engine construction. Stats scale
//! simulation behavior; the theme is colors only and has no gameplay effect.

use serde::{Deserialize, Serialize};

/// Upgrade-derived stat bundle for the current run.
///
/// Owned by the caller's profile store; the engine only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerStats {
    /// Multiplier on the base scroll speed
    pub speed_multiplier: f32,
    /// Hazard hits absorbed before a respawn is needed
    pub shield: u32,
    /// Boost duration in seconds (caller-side bookkeeping; the engine only
    /// multiplies speed while `set_boost_state(true)` is in effect)
    pub boost_duration: f32,
    /// Auto-fire weapon level (scales cadence and damage)
    pub weapon_level: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            speed_multiplier: 1.0,
            shield: 3,
            boost_duration: 3.0,
            weapon_level: 1,
        }
    }
}

/// Track color descriptor, 0xRRGGBB. Presentation only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackTheme {
    pub name: String,
    pub background: u32,
    pub primary: u32,
    pub accent: u32,
}

impl Default for TrackTheme {
    fn default() -> Self {
        Self {
            name: "nebula".to_string(),
            background: 0x0b1026,
            primary: 0x7de2ff,
            accent: 0xffb347,
        }
    }
}
