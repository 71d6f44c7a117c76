//! Boss state machine
//!
//! entering -> attack -> (math, once) -> attack -> defeated. Combat collisions
//! only apply during `Attack`; the math phase hard-pauses the run until the
//! caller answers through `set_boss_math_result`.

use glam::Vec2;
use rand::Rng;

use super::events::RaceEvent;
use super::state::{Boss, BossPhase, Projectile, RaceState, RunPhase};
use crate::problem::ProblemProvider;
use crate::tuning::Tuning;
use crate::approach;

const EXPLOSION_COLOR: u32 = 0xff8c42;

/// Advance the boss by one tick: entering glide, attack oscillation + fire,
/// defeat drift and eventual removal. No-op when no boss is alive.
pub fn update_boss(state: &mut RaceState, tuning: &Tuning, dt: f32) {
    let Some(mut boss) = state.boss.take() else {
        return;
    };

    boss.flash_timer = (boss.flash_timer - dt).max(0.0);

    match boss.phase {
        BossPhase::Entering => {
            boss.pos.y = approach(boss.pos.y, boss.target_y, 3.0, dt);
            if (boss.target_y - boss.pos.y).abs() < 4.0 {
                boss.pos.y = boss.target_y;
                boss.phase = BossPhase::Attack;
            }
        }
        BossPhase::Attack => {
            boss.pos.x += boss.move_dir * tuning.boss_move_speed * dt;
            let half = boss.size.x / 2.0;
            if boss.pos.x <= half {
                boss.pos.x = half;
                boss.move_dir = 1.0;
            } else if boss.pos.x >= state.viewport.width - half {
                boss.pos.x = state.viewport.width - half;
                boss.move_dir = -1.0;
            }

            boss.shoot_timer += dt;
            if boss.shoot_timer >= tuning.boss_fire_interval {
                boss.shoot_timer = 0.0;
                fire_at_ship(state, &boss, tuning);
            }
        }
        // Inert: waiting on the external challenge overlay
        BossPhase::Math => {}
        BossPhase::Defeated => {
            boss.pos.y -= 60.0 * dt;
            boss.defeat_timer -= dt;
            if boss.defeat_timer <= 0.0 {
                log::debug!("boss {} removed after defeat animation", boss.id);
                return;
            }
        }
    }

    state.boss = Some(boss);
}

/// Aim roughly at the ship's current position with a randomized spread.
fn fire_at_ship(state: &mut RaceState, boss: &Boss, tuning: &Tuning) {
    let aim = (state.ship.pos - boss.pos).normalize_or_zero();
    let spread = tuning.boss_fire_spread;
    let dir = if spread > 0.0 {
        let angle = state.rng.random_range(-spread..spread);
        Vec2::from_angle(angle).rotate(aim)
    } else {
        aim
    };

    let id = state.next_entity_id();
    state.projectiles.push(Projectile {
        id,
        pos: boss.pos + Vec2::new(0.0, boss.size.y / 2.0),
        vel: dir * tuning.boss_projectile_speed,
        size: Vec2::new(10.0, 10.0),
        damage: 1.0,
        from_boss: true,
    });
}

/// Apply projectile damage during the attack phase. Crossing the health
/// threshold trips the one-shot math phase; reaching zero defeats the boss.
pub fn damage_boss(
    state: &mut RaceState,
    tuning: &Tuning,
    events: &mut Vec<RaceEvent>,
    provider: &mut dyn ProblemProvider,
    amount: f32,
) {
    let Some(mut boss) = state.boss.take() else {
        return;
    };
    if boss.phase != BossPhase::Attack {
        state.boss = Some(boss);
        return;
    }

    boss.health = (boss.health - amount).max(0.0);
    boss.flash_timer = 0.15;

    if boss.health <= 0.0 {
        defeat(state, &mut boss, tuning, events);
    } else if !boss.math_triggered
        && boss.health <= boss.max_health * tuning.boss_math_threshold
    {
        boss.math_triggered = true;
        boss.phase = BossPhase::Math;
        state.phase = RunPhase::AwaitingBossMath;
        let problem = provider.next_problem(state.difficulty);
        log::info!("boss {} math phase: {}", boss.id, problem.prompt);
        events.push(RaceEvent::BossMathStarted { problem });
    }

    state.boss = Some(boss);
}

/// Resolve the math phase. Correct answers land a bonus-damage hit that can
/// finish the boss; incorrect ones heal it by a smaller bounded fraction.
/// Either way the run resumes.
pub fn resolve_math(
    state: &mut RaceState,
    tuning: &Tuning,
    events: &mut Vec<RaceEvent>,
    correct: bool,
) {
    let Some(mut boss) = state.boss.take() else {
        return;
    };
    if boss.phase != BossPhase::Math {
        state.boss = Some(boss);
        return;
    }

    if correct {
        boss.health = (boss.health - boss.max_health * tuning.boss_bonus_damage).max(0.0);
        if boss.health <= 0.0 {
            defeat(state, &mut boss, tuning, events);
        } else {
            boss.phase = BossPhase::Attack;
        }
    } else {
        boss.health = (boss.health + boss.max_health * tuning.boss_heal_fraction)
            .min(boss.max_health);
        boss.phase = BossPhase::Attack;
    }

    if state.phase == RunPhase::AwaitingBossMath {
        state.phase = RunPhase::Running;
    }
    state.boss = Some(boss);
}

fn defeat(state: &mut RaceState, boss: &mut Boss, tuning: &Tuning, events: &mut Vec<RaceEvent>) {
    boss.phase = BossPhase::Defeated;
    boss.defeat_timer = tuning.boss_defeat_delay;
    // Defeat clears everything the boss still has in flight
    state.projectiles.retain(|p| !p.from_boss);
    state.spawn_burst(boss.pos, EXPLOSION_COLOR, 48, 240.0);
    state.add_shake(0.6);
    log::info!("boss {} defeated, reward {}", boss.id, boss.reward);
    events.push(RaceEvent::BossDefeated { reward: boss.reward });
}
