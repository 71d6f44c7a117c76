//! Headless demo run
//!
//! Drives the engine for a couple of simulated minutes with a synthetic
//! player: weaving steering, boost bursts, and math answers that are right
//! about three quarters of the time. Prints the session summary as JSON.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use comet_run::engine::{RaceEngine, TickInput, Viewport};
use comet_run::problem::{ArithmeticProvider, adjust_difficulty};
use comet_run::{PlayerStats, RaceEvent, RaceSession, TrackTheme, Tuning};

const FRAME_DT: f32 = 1.0 / 60.0;
const RUN_SECONDS: f32 = 120.0;
const PLAYER_ACCURACY: f64 = 0.75;

fn main() {
    env_logger::init();

    let seed = 20260831;
    let stats = PlayerStats::default();
    let mut engine = RaceEngine::new(
        Viewport::new(800.0, 600.0),
        stats.clone(),
        TrackTheme::default(),
        Tuning::default(),
        seed,
        Box::new(ArithmeticProvider::new(seed)),
    );
    let mut session = RaceSession::new();
    let mut player_rng = Pcg32::seed_from_u64(seed ^ 0xdead);
    let mut difficulty: u8 = 1;
    engine.set_difficulty(difficulty);
    engine.start();

    let frames = (RUN_SECONDS / FRAME_DT) as u32;
    for frame in 0..frames {
        let t = frame as f32 * FRAME_DT;

        // Weave across the playfield; boost for two seconds every twenty
        let input = TickInput {
            drag_target: Some(Vec2::new(400.0 + (t * 0.7).sin() * 300.0, 520.0)),
            dragging: true,
            ..Default::default()
        };
        engine.set_boost_state(t % 20.0 < 2.0);
        engine.step(&input, FRAME_DT);

        for event in engine.drain_events() {
            let respawn_needed = session.apply(&event, stats.shield);
            match &event {
                RaceEvent::GateApproached { gate_id, problem } => {
                    let correct = player_rng.random_bool(PLAYER_ACCURACY);
                    let answer = if correct { problem.answer } else { problem.answer + 1.0 };
                    engine.set_gate_result(*gate_id, problem.check(answer));
                }
                RaceEvent::BossMathStarted { problem } => {
                    let correct = player_rng.random_bool(PLAYER_ACCURACY);
                    let answer = if correct { problem.answer } else { problem.answer + 1.0 };
                    engine.set_boss_math_result(problem.check(answer));
                }
                RaceEvent::BossSpawned { boss_id, health } => {
                    log::info!("boss {boss_id} incoming with {health} health");
                }
                RaceEvent::BossDefeated { reward } => {
                    log::info!("boss down, reward {reward}");
                }
                _ => {}
            }
            if respawn_needed {
                engine.trigger_respawn();
            }
        }
    }

    difficulty = adjust_difficulty(difficulty, session.gates_attempted, session.correct_answers);
    engine.cleanup();

    log::info!(
        "run over: {:.0} px, {} shards, next difficulty {difficulty}",
        session.distance,
        session.shards
    );
    match serde_json::to_string_pretty(&session) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("failed to serialize session: {err}"),
    }
}
