//! Race state and core simulation types
//!
//! All simulation state lives here. The module is pure data: no clocks, no
//! rendering, no platform dependencies. Determinism rules:
//! - Seeded RNG only (`Pcg32` owned by the state)
//! - Stable iteration order (entities kept sorted by id)
//! - The driver is the sole owner of time

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{LANE_COUNT, MAX_PARTICLES};
use crate::problem::MathProblem;

/// Current playfield bounds. Updated only through `resize()`; every position
/// calculation threads through this value rather than ambient globals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Horizontal center of a discrete steering lane
    pub fn lane_center(&self, lane: u32) -> f32 {
        let lane = lane.min(LANE_COUNT - 1);
        let lane_width = self.width / LANE_COUNT as f32;
        lane_width * (lane as f32 + 0.5)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// The player's ship. Position chases `target` with exponential smoothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub target: Vec2,
    pub size: Vec2,
}

impl Ship {
    pub fn new(viewport: &Viewport) -> Self {
        let start = Vec2::new(viewport.width / 2.0, viewport.height * 0.85);
        Self {
            pos: start,
            target: start,
            size: Vec2::new(42.0, 48.0),
        }
    }

    /// Clamp position and target into the viewport. Horizontal bounds are the
    /// half-width band; vertical bounds are the freeform band near the bottom.
    pub fn clamp_to(&mut self, viewport: &Viewport, band_frac: f32) {
        let half = self.size * 0.5;
        let min_x = half.x;
        let max_x = (viewport.width - half.x).max(min_x);
        let min_y = viewport.height * band_frac + half.y;
        let max_y = (viewport.height - half.y).max(min_y);

        self.pos.x = self.pos.x.clamp(min_x, max_x);
        self.pos.y = self.pos.y.clamp(min_y, max_y);
        self.target.x = self.target.x.clamp(min_x, max_x);
        self.target.y = self.target.y.clamp(min_y, max_y);
    }
}

/// Obstacle flavors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Collectible - always awards shards, never damage
    Crystal,
    /// Hazard - costs a shield hit unless invincible
    Rock,
}

/// A scrolling obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: ObstacleKind,
    pub rotation: f32,
    pub rotation_speed: f32,
    /// Irregular silhouette, rocks only (local-space vertices)
    pub shape: Option<Vec<Vec2>>,
}

/// A math-challenge checkpoint spanning the playfield width.
///
/// `approached` flips false -> true exactly once; `solved` flips
/// `None -> Some(_)` exactly once (via the caller or the auto-fail).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gate {
    pub id: u32,
    pub y: f32,
    pub approached: bool,
    pub solved: Option<bool>,
    /// Generated lazily when the gate is approached
    pub problem: Option<MathProblem>,
}

/// A projectile from the ship's auto-fire or the boss
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub damage: f32,
    pub from_boss: bool,
}

/// Boss combat phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossPhase {
    /// Sliding down from above the viewport toward `target_y`
    Entering,
    /// Oscillating and firing; the only phase where combat collisions apply
    Attack,
    /// Inert, awaiting `set_boss_math_result`
    Math,
    /// Drifting away; removed after the defeat delay
    Defeated,
}

/// The boss. At most one exists at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boss {
    pub id: u32,
    pub pos: Vec2,
    pub target_y: f32,
    pub size: Vec2,
    pub health: f32,
    pub max_health: f32,
    pub phase: BossPhase,
    pub shoot_timer: f32,
    /// Horizontal oscillation direction, +1 or -1
    pub move_dir: f32,
    /// Damage flash countdown (rendering only)
    pub flash_timer: f32,
    pub reward: u32,
    /// One-shot guard for the 50%-health math phase
    pub math_triggered: bool,
    /// Counts down in `Defeated`; boss is discarded at zero
    pub defeat_timer: f32,
}

/// Powerup flavors (no engine-side effect beyond the collection event)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerupKind {
    Shield,
    Boost,
    DoubleShards,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Powerup {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub kind: PowerupKind,
    pub rotation: f32,
}

/// A cosmetic particle. Never read by gameplay logic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32,
    pub max_life: f32,
    pub color: u32,
    pub size: f32,
}

/// Engine-visible run phase.
///
/// `AwaitingGate` keeps simulating (the auto-fail guarantee needs the gate to
/// keep scrolling); `AwaitingBossMath` hard-pauses the driver until
/// `set_boss_math_result` arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    Running,
    AwaitingGate { gate_id: u32 },
    AwaitingBossMath,
}

/// Complete race state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub viewport: Viewport,
    pub phase: RunPhase,
    pub ship: Ship,

    pub obstacles: Vec<Obstacle>,
    pub gates: Vec<Gate>,
    pub projectiles: Vec<Projectile>,
    pub powerups: Vec<Powerup>,
    pub boss: Option<Boss>,
    /// Visual particles (not gameplay-affecting)
    #[serde(skip)]
    pub particles: Vec<Particle>,

    pub distance: f32,
    pub last_boss_distance: f32,
    pub bosses_spawned: u32,
    pub boosting: bool,
    /// Hazard collisions are ignored while positive
    pub invincibility_timer: f32,
    /// Drives the respawn blink (rendering only)
    pub flash_timer: f32,
    /// Decaying shake magnitude (rendering only)
    pub screen_shake: f32,
    /// Current math difficulty bucket handed to the problem provider
    pub difficulty: u8,
    pub time_ticks: u64,

    // Per-category spawn accumulators, reset on trigger
    pub obstacle_timer: f32,
    pub gate_timer: f32,
    pub powerup_timer: f32,
    pub fire_timer: f32,

    next_id: u32,
}

impl RaceState {
    pub fn new(seed: u64, viewport: Viewport) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            ship: Ship::new(&viewport),
            viewport,
            phase: RunPhase::Running,
            obstacles: Vec::new(),
            gates: Vec::new(),
            projectiles: Vec::new(),
            powerups: Vec::new(),
            boss: None,
            particles: Vec::new(),
            distance: 0.0,
            last_boss_distance: 0.0,
            bosses_spawned: 0,
            boosting: false,
            invincibility_timer: 0.0,
            flash_timer: 0.0,
            screen_shake: 0.0,
            difficulty: 1,
            time_ticks: 0,
            obstacle_timer: 0.0,
            gate_timer: 0.0,
            powerup_timer: 0.0,
            fire_timer: 0.0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_invincible(&self) -> bool {
        self.invincibility_timer > 0.0
    }

    /// Nudge the decaying screen shake (clamped to 1.0)
    pub fn add_shake(&mut self, amount: f32) {
        self.screen_shake = (self.screen_shake + amount).min(1.0);
    }

    /// Spawn a radial particle burst at `pos`. Oldest particles are evicted
    /// past the cap so bursts can never grow the buffer unbounded.
    pub fn spawn_burst(&mut self, pos: Vec2, color: u32, count: usize, speed: f32) {
        for _ in 0..count {
            if self.particles.len() >= MAX_PARTICLES {
                self.particles.remove(0);
            }
            let angle = self.rng.random_range(0.0..std::f32::consts::TAU);
            let magnitude = speed * self.rng.random_range(0.4..1.0);
            let life = self.rng.random_range(0.4..0.9);
            let id = self.next_entity_id();
            self.particles.push(Particle {
                id,
                pos,
                vel: Vec2::new(angle.cos(), angle.sin()) * magnitude,
                life,
                max_life: life,
                color,
                size: self.rng.random_range(2.0..6.0),
            });
        }
    }

    /// Ensure entity vectors stay sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.obstacles.sort_by_key(|o| o.id);
        self.gates.sort_by_key(|g| g.id);
        self.projectiles.sort_by_key(|p| p.id);
        self.powerups.sort_by_key(|p| p.id);
    }
}
