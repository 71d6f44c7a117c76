//! Accumulator-driven entity spawning
//!
//! Obstacles, gates, and powerups each run a simulated-time accumulator that
//! triggers creation once it exceeds its interval, then resets. Bosses are the
//! exception: they spawn on distance thresholds so they scale with player
//! progress, not wall-clock time. All randomness comes from the state's
//! seeded RNG, so spawn sequences reproduce under a fixed seed.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::events::RaceEvent;
use super::state::{
    Boss, BossPhase, Obstacle, ObstacleKind, Gate, Powerup, PowerupKind, RaceState,
};
use crate::tuning::Tuning;

/// Advance every spawn accumulator by `dt` and create whatever came due.
pub fn run_spawners(state: &mut RaceState, tuning: &Tuning, events: &mut Vec<RaceEvent>, dt: f32) {
    state.obstacle_timer += dt;
    if state.obstacle_timer >= tuning.obstacle_interval {
        state.obstacle_timer = 0.0;
        spawn_obstacle(state, tuning);
    }

    state.gate_timer += dt;
    if state.gate_timer >= tuning.gate_interval {
        state.gate_timer = 0.0;
        spawn_gate(state);
    }

    state.powerup_timer += dt;
    if state.powerup_timer >= tuning.powerup_interval {
        state.powerup_timer = 0.0;
        spawn_powerup(state);
    }

    try_spawn_boss(state, tuning, events);
}

fn spawn_obstacle(state: &mut RaceState, tuning: &Tuning) {
    let side = state.rng.random_range(24.0..44.0_f32);
    let size = Vec2::splat(side);
    let half = side / 2.0;
    let x = state
        .rng
        .random_range(half..(state.viewport.width - half).max(half + 1.0));

    let kind = if state.rng.random_bool(tuning.crystal_probability) {
        ObstacleKind::Crystal
    } else {
        ObstacleKind::Rock
    };

    let shape = match kind {
        ObstacleKind::Rock => Some(rock_silhouette(&mut state.rng, half)),
        ObstacleKind::Crystal => None,
    };
    let rotation_speed = match kind {
        ObstacleKind::Rock => state.rng.random_range(-1.5..1.5),
        ObstacleKind::Crystal => state.rng.random_range(0.5..1.2),
    };

    let id = state.next_entity_id();
    state.obstacles.push(Obstacle {
        id,
        pos: Vec2::new(x, -half),
        size,
        kind,
        rotation: 0.0,
        rotation_speed,
        shape,
    });
}

/// Irregular rock outline: 7-10 vertices with the radius jittered ±35%.
/// Used for silhouette rendering; collision stays on the bounding box.
pub fn rock_silhouette(rng: &mut Pcg32, radius: f32) -> Vec<Vec2> {
    let vertices = rng.random_range(7..=10u32);
    let mut shape = Vec::with_capacity(vertices as usize);
    for i in 0..vertices {
        let angle = std::f32::consts::TAU * (i as f32 / vertices as f32);
        let r = radius * rng.random_range(0.65..1.35);
        shape.push(Vec2::new(angle.cos() * r, angle.sin() * r));
    }
    shape
}

fn spawn_gate(state: &mut RaceState) {
    let id = state.next_entity_id();
    state.gates.push(Gate {
        id,
        y: -20.0,
        approached: false,
        solved: None,
        problem: None,
    });
    log::debug!("gate {id} spawned at distance {:.0}", state.distance);
}

fn spawn_powerup(state: &mut RaceState) {
    let size = Vec2::splat(26.0);
    let half = size.x / 2.0;
    let x = state
        .rng
        .random_range(half..(state.viewport.width - half).max(half + 1.0));
    let kind = match state.rng.random_range(0..3u32) {
        0 => PowerupKind::Shield,
        1 => PowerupKind::Boost,
        _ => PowerupKind::DoubleShards,
    };
    let id = state.next_entity_id();
    state.powerups.push(Powerup {
        id,
        pos: Vec2::new(x, -size.y / 2.0),
        size,
        kind,
        rotation: 0.0,
    });
}

/// Spawn a boss once enough distance has passed since the last one, and never
/// while another boss is alive.
fn try_spawn_boss(state: &mut RaceState, tuning: &Tuning, events: &mut Vec<RaceEvent>) {
    if state.boss.is_some() {
        return;
    }
    if state.distance <= tuning.min_boss_distance {
        return;
    }
    if state.distance - state.last_boss_distance < tuning.boss_spawn_distance {
        return;
    }

    let max_health = tuning.boss_base_health + tuning.boss_health_step * state.bosses_spawned as f32;
    let reward = tuning.boss_base_reward + tuning.boss_reward_step * state.bosses_spawned;
    let size = Vec2::new(120.0, 90.0);
    let id = state.next_entity_id();

    let boss = Boss {
        id,
        pos: Vec2::new(state.viewport.width / 2.0, -size.y),
        target_y: state.viewport.height * tuning.boss_target_y_frac,
        size,
        health: max_health,
        max_health,
        phase: BossPhase::Entering,
        shoot_timer: 0.0,
        move_dir: if state.rng.random_bool(0.5) { 1.0 } else { -1.0 },
        flash_timer: 0.0,
        reward,
        math_triggered: false,
        defeat_timer: 0.0,
    };

    log::info!(
        "boss {id} spawned at distance {:.0} (health {max_health})",
        state.distance
    );
    state.last_boss_distance = state.distance;
    state.bosses_spawned += 1;
    events.push(RaceEvent::BossSpawned {
        boss_id: id,
        health: max_health,
    });
    state.boss = Some(boss);
}
