//! Per-tick simulation advancement
//!
//! Ordering within a tick is fixed: render-only decays, ship steering,
//! distance, spawners, entity motion, auto-fire, boss, collisions, gates,
//! particles, culling. Everything uses this tick's `dt`, never a stale one.

use glam::Vec2;

use super::boss::{damage_boss, update_boss};
use super::collision::{aabb_overlap, off_screen};
use super::events::RaceEvent;
use super::spawn::run_spawners;
use super::state::{BossPhase, ObstacleKind, Projectile, RaceState, RunPhase};
use crate::approach;
use crate::problem::ProblemProvider;
use crate::profile::PlayerStats;
use crate::tuning::Tuning;

const CRYSTAL_COLOR: u32 = 0x7de2ff;
const DEBRIS_COLOR: u32 = 0x9a8f85;
const GATE_COLOR: u32 = 0xffd966;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer/touch target while dragging (freeform steering)
    pub drag_target: Option<Vec2>,
    /// Whether the pointer is actively held (tighter smoothing)
    pub dragging: bool,
    /// Keyboard steering direction, -1.0 to 1.0
    pub steer: f32,
    /// Discrete tap-to-lane selection
    pub lane_tap: Option<u32>,
}

/// Advance the race by one tick.
///
/// The driver owns the clock and clamps `dt` before calling; this function
/// also refuses to advance while the boss math overlay holds the run.
pub fn tick(
    state: &mut RaceState,
    input: &TickInput,
    stats: &PlayerStats,
    tuning: &Tuning,
    provider: &mut dyn ProblemProvider,
    events: &mut Vec<RaceEvent>,
    dt: f32,
) {
    if state.phase == RunPhase::AwaitingBossMath {
        return;
    }

    state.time_ticks += 1;

    // Render-only decays
    state.screen_shake *= 0.9;
    if state.screen_shake < 0.01 {
        state.screen_shake = 0.0;
    }
    if state.invincibility_timer > 0.0 {
        state.invincibility_timer = (state.invincibility_timer - dt).max(0.0);
        state.flash_timer += dt;
    } else {
        state.flash_timer = 0.0;
    }

    update_ship(state, input, stats, tuning, dt);

    // Distance accumulates from scroll speed; everything scrolls by the same
    // delta so the world stays consistent with the reported distance.
    let speed = tuning.base_scroll_speed
        * stats.speed_multiplier
        * if state.boosting { tuning.boost_multiplier } else { 1.0 };
    let scroll = speed * dt;
    state.distance += scroll;
    events.push(RaceEvent::DistanceDelta { delta: scroll });
    if state.boosting {
        events.push(RaceEvent::BoostTick { dt });
    }

    run_spawners(state, tuning, events, dt);

    for ob in &mut state.obstacles {
        ob.pos.y += scroll;
        ob.rotation += ob.rotation_speed * dt;
    }
    for gate in &mut state.gates {
        gate.y += scroll;
    }
    for powerup in &mut state.powerups {
        powerup.pos.y += scroll;
        powerup.rotation += 2.0 * dt;
    }
    for projectile in &mut state.projectiles {
        let vel = projectile.vel;
        projectile.pos += vel * dt;
    }

    auto_fire(state, stats, tuning, dt);
    update_boss(state, tuning, dt);
    resolve_collisions(state, tuning, provider, events);
    update_gates(state, tuning, provider, events);

    // Cosmetic particles: drift, drag, fade, shrink
    for particle in state.particles.iter_mut() {
        let vel = particle.vel;
        particle.pos += vel * dt;
        particle.vel *= 0.98;
        particle.life -= dt * 1.5;
        particle.size *= 0.995;
    }
    state.particles.retain(|p| p.life > 0.0);

    cull(state);
    state.normalize_order();
}

/// Steering: lane taps and pointer drags set the target, keyboard nudges it;
/// position chases the target with exponential smoothing (tighter while
/// dragging) and both are clamped inside the viewport band.
fn update_ship(
    state: &mut RaceState,
    input: &TickInput,
    stats: &PlayerStats,
    tuning: &Tuning,
    dt: f32,
) {
    let viewport = state.viewport;
    let ship = &mut state.ship;

    if let Some(lane) = input.lane_tap {
        ship.target.x = viewport.lane_center(lane);
    }
    if let Some(target) = input.drag_target {
        ship.target = target;
    }
    if input.steer != 0.0 {
        ship.target.x +=
            input.steer.clamp(-1.0, 1.0) * tuning.keyboard_speed * stats.speed_multiplier * dt;
    }

    let rate = if input.dragging {
        tuning.drag_lerp_rate
    } else {
        tuning.drift_lerp_rate
    };
    ship.pos.x = approach(ship.pos.x, ship.target.x, rate, dt);
    ship.pos.y = approach(ship.pos.y, ship.target.y, rate, dt);
    ship.clamp_to(&viewport, tuning.ship_band_frac);
}

/// The ship fires on its own cadence for the whole run, independent of input.
fn auto_fire(state: &mut RaceState, stats: &PlayerStats, tuning: &Tuning, dt: f32) {
    let level = stats.weapon_level.max(1);
    let interval = tuning.fire_interval / (1.0 + 0.2 * (level - 1) as f32);

    state.fire_timer += dt;
    if state.fire_timer < interval {
        return;
    }
    state.fire_timer = 0.0;

    let muzzle = state.ship.pos - Vec2::new(0.0, state.ship.size.y / 2.0);
    let id = state.next_entity_id();
    state.projectiles.push(Projectile {
        id,
        pos: muzzle,
        vel: Vec2::new(0.0, -tuning.projectile_speed),
        size: Vec2::new(6.0, 14.0),
        damage: tuning.projectile_damage * level as f32,
        from_boss: false,
    });
}

/// Per-tick intersection tests and their consequences.
///
/// Hazard tests against the ship use the forgiveness margin (near-misses stay
/// misses); beneficial tests (collection, landing shots) use the raw boxes.
fn resolve_collisions(
    state: &mut RaceState,
    tuning: &Tuning,
    provider: &mut dyn ProblemProvider,
    events: &mut Vec<RaceEvent>,
) {
    let ship_pos = state.ship.pos;
    let ship_size = state.ship.size;
    let margin = tuning.forgiveness_margin;
    let invincible = state.is_invincible();

    // --- Ship vs obstacles ---
    let mut collected: Vec<u32> = Vec::new();
    let mut struck: Vec<u32> = Vec::new();
    for ob in &state.obstacles {
        match ob.kind {
            ObstacleKind::Crystal => {
                // Always collectible, invincibility never blocks collection
                if aabb_overlap(ship_pos, ship_size, ob.pos, ob.size, 0.0) {
                    collected.push(ob.id);
                }
            }
            ObstacleKind::Rock => {
                if !invincible && aabb_overlap(ship_pos, ship_size, ob.pos, ob.size, margin) {
                    struck.push(ob.id);
                }
            }
        }
    }
    for id in collected {
        if let Some(idx) = state.obstacles.iter().position(|o| o.id == id) {
            let pos = state.obstacles[idx].pos;
            state.obstacles.remove(idx);
            state.spawn_burst(pos, CRYSTAL_COLOR, 12, 140.0);
            events.push(RaceEvent::ShardsCollected {
                amount: tuning.crystal_shards,
            });
        }
    }
    for id in struck {
        if let Some(idx) = state.obstacles.iter().position(|o| o.id == id) {
            let pos = state.obstacles[idx].pos;
            state.obstacles.remove(idx);
            state.spawn_burst(pos, DEBRIS_COLOR, 16, 180.0);
            state.add_shake(0.4);
            events.push(RaceEvent::ObstacleHit);
        }
    }

    // --- Ship vs powerups ---
    let mut grabbed: Vec<u32> = Vec::new();
    for powerup in &state.powerups {
        if aabb_overlap(ship_pos, ship_size, powerup.pos, powerup.size, 0.0) {
            grabbed.push(powerup.id);
        }
    }
    for id in grabbed {
        if let Some(idx) = state.powerups.iter().position(|p| p.id == id) {
            let kind = state.powerups[idx].kind;
            let pos = state.powerups[idx].pos;
            state.powerups.remove(idx);
            state.spawn_burst(pos, GATE_COLOR, 10, 120.0);
            events.push(RaceEvent::PowerupCollected { kind });
        }
    }

    // --- Player projectiles vs rocks and boss ---
    let boss_box = state
        .boss
        .as_ref()
        .filter(|b| b.phase == BossPhase::Attack)
        .map(|b| (b.pos, b.size));

    let mut spent: Vec<u32> = Vec::new();
    let mut shattered: Vec<u32> = Vec::new();
    let mut boss_damage: Vec<f32> = Vec::new();
    for projectile in state.projectiles.iter().filter(|p| !p.from_boss) {
        let rock = state.obstacles.iter().find(|o| {
            o.kind == ObstacleKind::Rock
                && !shattered.contains(&o.id)
                && aabb_overlap(projectile.pos, projectile.size, o.pos, o.size, 0.0)
        });
        if let Some(rock) = rock {
            shattered.push(rock.id);
            spent.push(projectile.id);
            continue;
        }
        if let Some((pos, size)) = boss_box {
            if aabb_overlap(projectile.pos, projectile.size, pos, size, 0.0) {
                spent.push(projectile.id);
                boss_damage.push(projectile.damage);
            }
        }
    }
    for id in shattered {
        if let Some(idx) = state.obstacles.iter().position(|o| o.id == id) {
            let pos = state.obstacles[idx].pos;
            state.obstacles.remove(idx);
            state.spawn_burst(pos, DEBRIS_COLOR, 20, 200.0);
            events.push(RaceEvent::RockDestroyed);
            events.push(RaceEvent::ShardsCollected {
                amount: tuning.rock_shards,
            });
        }
    }
    state.projectiles.retain(|p| !spent.contains(&p.id));
    for damage in boss_damage {
        // The first hit past the threshold flips the boss to its math phase;
        // damage_boss ignores anything queued behind it.
        damage_boss(state, tuning, events, provider, damage);
    }

    // --- Boss projectiles vs ship ---
    if !invincible {
        let mut landed: Vec<u32> = Vec::new();
        for projectile in state.projectiles.iter().filter(|p| p.from_boss) {
            if aabb_overlap(projectile.pos, projectile.size, ship_pos, ship_size, margin) {
                landed.push(projectile.id);
            }
        }
        if !landed.is_empty() {
            state.projectiles.retain(|p| !landed.contains(&p.id));
            for _ in 0..landed.len() {
                state.add_shake(0.4);
                events.push(RaceEvent::ObstacleHit);
            }
            let pos = state.ship.pos;
            state.spawn_burst(pos, DEBRIS_COLOR, 16, 180.0);
        }
    }
}

/// Gate approach detection and the auto-fail that keeps runs from stalling.
fn update_gates(
    state: &mut RaceState,
    tuning: &Tuning,
    provider: &mut dyn ProblemProvider,
    events: &mut Vec<RaceEvent>,
) {
    let approach_y = state.viewport.height * tuning.gate_approach_frac;
    let ship_y = state.ship.pos.y;
    let difficulty = state.difficulty;

    for gate in &mut state.gates {
        if !gate.approached && gate.y >= approach_y {
            gate.approached = true;
            let problem = provider.next_problem(difficulty);
            gate.problem = Some(problem.clone());
            events.push(RaceEvent::GateApproached {
                gate_id: gate.id,
                problem,
            });
            if state.phase == RunPhase::Running {
                state.phase = RunPhase::AwaitingGate { gate_id: gate.id };
            }
        }

        // A gate that drifts past the ship unresolved counts as failed, so no
        // ignored challenge can stall a run.
        if gate.approached && gate.solved.is_none() && gate.y >= ship_y {
            gate.solved = Some(false);
            events.push(RaceEvent::GatePassed {
                gate_id: gate.id,
                correct: false,
            });
            if state.phase == (RunPhase::AwaitingGate { gate_id: gate.id }) {
                state.phase = RunPhase::Running;
            }
        }
    }
}

/// Caller re-entry: resolve a gate after its overlay closes. Unknown or
/// already-resolved gates are silent no-ops.
pub fn resolve_gate(state: &mut RaceState, events: &mut Vec<RaceEvent>, gate_id: u32, correct: bool) {
    let Some(idx) = state.gates.iter().position(|g| g.id == gate_id) else {
        log::debug!("gate {gate_id} already gone, ignoring result");
        return;
    };
    if state.gates[idx].solved.is_some() {
        return;
    }
    state.gates[idx].solved = Some(correct);
    let y = state.gates[idx].y;
    events.push(RaceEvent::GatePassed { gate_id, correct });
    if correct {
        let center = Vec2::new(state.viewport.width / 2.0, y);
        state.spawn_burst(center, GATE_COLOR, 24, 180.0);
    }
    if state.phase == (RunPhase::AwaitingGate { gate_id }) {
        state.phase = RunPhase::Running;
    }
}

/// Caller re-entry: open the post-respawn invincibility window.
pub fn trigger_respawn(
    state: &mut RaceState,
    tuning: &Tuning,
    events: &mut Vec<RaceEvent>,
) {
    state.invincibility_timer = tuning.respawn_invincibility;
    state.flash_timer = 0.0;
    let center_x = state.viewport.width / 2.0;
    state.ship.pos.x = center_x;
    state.ship.target.x = center_x;
    events.push(RaceEvent::Respawned);
}

fn cull(state: &mut RaceState) {
    let width = state.viewport.width;
    let height = state.viewport.height;
    state
        .obstacles
        .retain(|o| !off_screen(o.pos, o.size, width, height, 60.0));
    state.gates.retain(|g| g.y <= height + 40.0);
    state
        .projectiles
        .retain(|p| !off_screen(p.pos, p.size, width, height, 30.0));
    state
        .powerups
        .retain(|p| !off_screen(p.pos, p.size, width, height, 40.0));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::state::{Gate, Obstacle, Viewport};
    use crate::problem::ArithmeticProvider;
    use proptest::prelude::*;

    const DT: f32 = 1.0 / 60.0;

    struct Rig {
        state: RaceState,
        stats: PlayerStats,
        tuning: Tuning,
        provider: ArithmeticProvider,
        events: Vec<RaceEvent>,
    }

    impl Rig {
        fn new(seed: u64) -> Self {
            Self {
                state: RaceState::new(seed, Viewport::default()),
                stats: PlayerStats::default(),
                tuning: Tuning::default(),
                provider: ArithmeticProvider::new(seed),
                events: Vec::new(),
            }
        }

        fn tick(&mut self, input: &TickInput, dt: f32) {
            tick(
                &mut self.state,
                input,
                &self.stats,
                &self.tuning,
                &mut self.provider,
                &mut self.events,
                dt,
            );
        }

        fn push_gate(&mut self, y: f32) -> u32 {
            let id = self.state.next_entity_id();
            self.state.gates.push(Gate {
                id,
                y,
                approached: false,
                solved: None,
                problem: None,
            });
            id
        }

        fn push_rock_at_ship(&mut self) -> u32 {
            let pos = self.state.ship.pos;
            let id = self.state.next_entity_id();
            self.state.obstacles.push(Obstacle {
                id,
                pos,
                size: Vec2::new(30.0, 30.0),
                kind: ObstacleKind::Rock,
                rotation: 0.0,
                rotation_speed: 0.0,
                shape: None,
            });
            id
        }

        fn count<F: Fn(&RaceEvent) -> bool>(&self, f: F) -> usize {
            self.events.iter().filter(|e| f(e)).count()
        }
    }

    #[test]
    fn test_distance_accumulates_exactly() {
        let mut rig = Rig::new(1);
        rig.tick(&TickInput::default(), 1.0);
        assert!((rig.state.distance - 180.0).abs() < 1e-3);
        let delta = rig.events.iter().find_map(|e| match e {
            RaceEvent::DistanceDelta { delta } => Some(*delta),
            _ => None,
        });
        assert!((delta.unwrap() - 180.0).abs() < 1e-3);
    }

    #[test]
    fn test_boost_scales_distance_and_ticks() {
        let mut rig = Rig::new(1);
        rig.state.boosting = true;
        rig.tick(&TickInput::default(), 1.0);
        let expected = 180.0 * rig.tuning.boost_multiplier;
        assert!((rig.state.distance - expected).abs() < 1e-3);
        assert_eq!(rig.count(|e| matches!(e, RaceEvent::BoostTick { .. })), 1);
    }

    #[test]
    fn test_gate_approached_fires_once() {
        let mut rig = Rig::new(2);
        let gate_id = rig.push_gate(0.0);
        for _ in 0..600 {
            rig.tick(&TickInput::default(), DT);
        }
        let approaches = rig.count(
            |e| matches!(e, RaceEvent::GateApproached { gate_id: id, .. } if *id == gate_id),
        );
        assert_eq!(approaches, 1);
    }

    #[test]
    fn test_unresolved_gate_auto_fails_exactly_once() {
        let mut rig = Rig::new(3);
        let gate_id = rig.push_gate(0.0);
        for _ in 0..1200 {
            rig.tick(&TickInput::default(), DT);
        }
        let passes: Vec<_> = rig
            .events
            .iter()
            .filter_map(|e| match e {
                RaceEvent::GatePassed { gate_id: id, correct } if *id == gate_id => Some(*correct),
                _ => None,
            })
            .collect();
        assert_eq!(passes, vec![false]);
        // Awaiting state cleared once the gate resolved
        assert_eq!(rig.state.phase, RunPhase::Running);
    }

    #[test]
    fn test_resolved_gate_is_not_auto_failed() {
        let mut rig = Rig::new(4);
        let gate_id = rig.push_gate(0.0);
        // Run until the approach event shows up, then answer correctly
        while rig.count(|e| matches!(e, RaceEvent::GateApproached { .. })) == 0 {
            rig.tick(&TickInput::default(), DT);
        }
        resolve_gate(&mut rig.state, &mut rig.events, gate_id, true);
        for _ in 0..1200 {
            rig.tick(&TickInput::default(), DT);
        }
        let passes: Vec<_> = rig
            .events
            .iter()
            .filter_map(|e| match e {
                RaceEvent::GatePassed { correct, .. } => Some(*correct),
                _ => None,
            })
            .collect();
        assert_eq!(passes, vec![true]);
    }

    #[test]
    fn test_resolve_gate_is_defensive() {
        let mut rig = Rig::new(5);
        // Unknown gate id: silent no-op
        resolve_gate(&mut rig.state, &mut rig.events, 999, true);
        assert!(rig.events.is_empty());

        // Double resolution: second call is ignored
        let gate_id = rig.push_gate(200.0);
        resolve_gate(&mut rig.state, &mut rig.events, gate_id, false);
        resolve_gate(&mut rig.state, &mut rig.events, gate_id, true);
        assert_eq!(rig.count(|e| matches!(e, RaceEvent::GatePassed { .. })), 1);
        assert_eq!(rig.state.gates[0].solved, Some(false));
    }

    #[test]
    fn test_lane_tap_retargets_ship_to_lane_center() {
        let mut rig = Rig::new(12);
        let input = TickInput {
            lane_tap: Some(0),
            ..Default::default()
        };
        rig.tick(&input, DT);
        let center = rig.state.viewport.lane_center(0);
        assert_eq!(rig.state.ship.target.x, center);
        // The ship drifts onto the new target over the following ticks
        for _ in 0..300 {
            rig.tick(&TickInput::default(), DT);
        }
        assert!((rig.state.ship.pos.x - center).abs() < 1.0);
    }

    #[test]
    fn test_rock_hit_emits_event_and_shake() {
        let mut rig = Rig::new(6);
        rig.push_rock_at_ship();
        rig.tick(&TickInput::default(), DT);
        assert_eq!(rig.count(|e| matches!(e, RaceEvent::ObstacleHit)), 1);
        assert!(rig.state.screen_shake > 0.0);
        assert!(rig.state.obstacles.is_empty());
    }

    #[test]
    fn test_invincibility_ignores_rocks_but_not_crystals() {
        let mut rig = Rig::new(7);
        trigger_respawn(&mut rig.state, &rig.tuning, &mut rig.events);
        rig.push_rock_at_ship();
        let crystal_id = rig.state.next_entity_id();
        let ship_pos = rig.state.ship.pos;
        rig.state.obstacles.push(Obstacle {
            id: crystal_id,
            pos: ship_pos,
            size: Vec2::new(30.0, 30.0),
            kind: ObstacleKind::Crystal,
            rotation: 0.0,
            rotation_speed: 0.0,
            shape: None,
        });

        rig.tick(&TickInput::default(), DT);
        assert_eq!(rig.count(|e| matches!(e, RaceEvent::ObstacleHit)), 0);
        assert_eq!(
            rig.count(|e| matches!(e, RaceEvent::ShardsCollected { .. })),
            1
        );
        // The rock scrolls on, untouched
        assert_eq!(rig.state.obstacles.len(), 1);
    }

    #[test]
    fn test_invincibility_window_expires() {
        let mut rig = Rig::new(8);
        let tuning = rig.tuning.clone();
        trigger_respawn(&mut rig.state, &tuning, &mut rig.events);
        assert!(rig.state.is_invincible());
        assert_eq!(rig.count(|e| matches!(e, RaceEvent::Respawned)), 1);

        let ticks = (tuning.respawn_invincibility / DT) as usize + 2;
        for _ in 0..ticks {
            rig.tick(&TickInput::default(), DT);
        }
        assert!(!rig.state.is_invincible());
        assert_eq!(rig.state.flash_timer, 0.0);
    }

    #[test]
    fn test_auto_fire_cadence() {
        let mut rig = Rig::new(9);
        // 1 simulated second at weapon level 1 with a 0.45 s interval
        for _ in 0..60 {
            rig.tick(&TickInput::default(), DT);
        }
        let shots = rig
            .state
            .projectiles
            .iter()
            .filter(|p| !p.from_boss)
            .count();
        assert_eq!(shots, 2);
    }

    #[test]
    fn test_projectile_destroys_rock_with_bonus() {
        let mut rig = Rig::new(10);
        let ship = rig.state.ship.pos;
        let rock_id = rig.state.next_entity_id();
        rig.state.obstacles.push(Obstacle {
            id: rock_id,
            pos: ship - Vec2::new(0.0, 120.0),
            size: Vec2::new(36.0, 36.0),
            kind: ObstacleKind::Rock,
            rotation: 0.0,
            rotation_speed: 0.0,
            shape: None,
        });
        let id = rig.state.next_entity_id();
        rig.state.projectiles.push(Projectile {
            id,
            pos: ship - Vec2::new(0.0, 110.0),
            vel: Vec2::new(0.0, -620.0),
            size: Vec2::new(6.0, 14.0),
            damage: 10.0,
            from_boss: false,
        });

        rig.tick(&TickInput::default(), DT);
        assert_eq!(rig.count(|e| matches!(e, RaceEvent::RockDestroyed)), 1);
        assert_eq!(
            rig.count(|e| matches!(
                e,
                RaceEvent::ShardsCollected { amount } if *amount == rig.tuning.rock_shards
            )),
            1
        );
    }

    #[test]
    fn test_determinism_under_fixed_seed() {
        let mut a = Rig::new(4242);
        let mut b = Rig::new(4242);
        let input = TickInput {
            drag_target: Some(Vec2::new(300.0, 520.0)),
            dragging: true,
            ..Default::default()
        };
        for i in 0..1200 {
            let step = if i % 3 == 0 { &input } else { &TickInput::default() };
            a.tick(step, DT);
            b.tick(step, DT);
        }
        assert_eq!(a.state.distance, b.state.distance);
        assert_eq!(a.state.obstacles.len(), b.state.obstacles.len());
        assert_eq!(a.state.ship.pos, b.state.ship.pos);
        assert_eq!(a.events, b.events);
    }

    #[test]
    fn test_entities_cull_off_screen() {
        let mut rig = Rig::new(11);
        rig.push_gate(0.0);
        let id = rig.state.next_entity_id();
        rig.state.projectiles.push(Projectile {
            id,
            pos: Vec2::new(400.0, 500.0),
            vel: Vec2::new(0.0, -620.0),
            size: Vec2::new(6.0, 14.0),
            damage: 10.0,
            from_boss: false,
        });
        for _ in 0..1200 {
            rig.tick(&TickInput::default(), DT);
        }
        assert!(rig.state.gates.is_empty());
        assert!(rig.state.projectiles.iter().all(|p| p.pos.y > -100.0));
    }

    proptest! {
        /// After every tick the ship stays inside
        /// [half_width, viewport_width - half_width] horizontally.
        #[test]
        fn prop_ship_stays_clamped(
            targets in prop::collection::vec((0f32..2000.0, -500f32..1500.0), 1..80),
            steer in -1.0f32..1.0,
        ) {
            let mut rig = Rig::new(99);
            for (x, y) in targets {
                let input = TickInput {
                    drag_target: Some(Vec2::new(x, y)),
                    dragging: true,
                    steer,
                    lane_tap: None,
                };
                rig.tick(&input, DT);
                let half = rig.state.ship.size.x / 2.0;
                prop_assert!(rig.state.ship.pos.x >= half);
                prop_assert!(rig.state.ship.pos.x <= rig.state.viewport.width - half);
            }
        }
    }
}
