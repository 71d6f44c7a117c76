//! Math challenge collaborator interface
//!
//! The engine consumes problems through [`ProblemProvider`] and never looks
//! inside them beyond handing them to the caller's overlay. A small arithmetic
//! provider is included so the crate is playable and testable stand-alone.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::{MAX_DIFFICULTY, MIN_DIFFICULTY};

/// How the overlay should collect the answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    /// Numeric keypad entry
    Keypad,
    /// Drag-and-merge manipulatives
    DragMerge,
}

/// A displayable math challenge with its validator data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathProblem {
    pub prompt: String,
    pub answer: f64,
    /// Accepted absolute error when validating
    pub tolerance: f64,
    pub mode: InteractionMode,
    pub difficulty: u8,
}

impl MathProblem {
    /// Validate a numeric answer within tolerance.
    pub fn check(&self, answer: f64) -> bool {
        (answer - self.answer).abs() <= self.tolerance
    }

    /// Validate raw overlay text. Non-numeric input is rejected at the
    /// boundary and counts as an incorrect answer, never an error.
    pub fn check_text(&self, text: &str) -> bool {
        match text.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => self.check(value),
            _ => false,
        }
    }
}

/// Source of math problems, bucketed by difficulty level.
pub trait ProblemProvider {
    fn next_problem(&mut self, difficulty: u8) -> MathProblem;
}

/// Default provider: integer arithmetic scaled by difficulty.
///
/// Levels 1-3 are addition/subtraction with small operands, 4-6 introduce
/// multiplication, 7+ mixes all three with larger operands.
#[derive(Debug, Clone)]
pub struct ArithmeticProvider {
    rng: Pcg32,
}

impl ArithmeticProvider {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl ProblemProvider for ArithmeticProvider {
    fn next_problem(&mut self, difficulty: u8) -> MathProblem {
        let level = difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY) as i64;
        let max_operand = 5 + level * 5;

        let a = self.rng.random_range(1..=max_operand);
        let b = self.rng.random_range(1..=max_operand);
        let op = match level {
            1..=3 => self.rng.random_range(0..2),
            4..=6 => self.rng.random_range(0..3),
            _ => self.rng.random_range(0..3),
        };

        let (prompt, answer) = match op {
            0 => (format!("{a} + {b}"), (a + b) as f64),
            // Keep subtraction non-negative for young players
            1 => (format!("{} - {}", a.max(b), a.min(b)), (a.max(b) - a.min(b)) as f64),
            _ => {
                let a = self.rng.random_range(2..=(2 + level));
                let b = self.rng.random_range(2..=(2 + level));
                (format!("{a} x {b}"), (a * b) as f64)
            }
        };

        let mode = if level <= 2 && self.rng.random_bool(0.4) {
            InteractionMode::DragMerge
        } else {
            InteractionMode::Keypad
        };

        MathProblem {
            prompt,
            answer,
            tolerance: 1e-6,
            mode,
            difficulty: level as u8,
        }
    }
}

/// Adaptive difficulty scaler applied between runs.
///
/// Accuracy above 0.8 steps the level up (capped), below 0.4 steps it down
/// (floored at 1). Runs with no attempted gates leave the level unchanged.
pub fn adjust_difficulty(level: u8, gates_attempted: u32, correct_answers: u32) -> u8 {
    if gates_attempted == 0 {
        return level.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY);
    }
    let accuracy = correct_answers as f64 / gates_attempted as f64;
    let level = level.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY);
    if accuracy > 0.8 {
        (level + 1).min(MAX_DIFFICULTY)
    } else if accuracy < 0.4 {
        (level - 1).max(MIN_DIFFICULTY)
    } else {
        level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keypad_problem(answer: f64, tolerance: f64) -> MathProblem {
        MathProblem {
            prompt: "test".to_string(),
            answer,
            tolerance,
            mode: InteractionMode::Keypad,
            difficulty: 1,
        }
    }

    #[test]
    fn test_check_within_tolerance() {
        let p = keypad_problem(12.0, 0.01);
        assert!(p.check(12.0));
        assert!(p.check(12.005));
        assert!(!p.check(12.5));
    }

    #[test]
    fn test_check_text_rejects_garbage() {
        let p = keypad_problem(7.0, 1e-6);
        assert!(p.check_text("7"));
        assert!(p.check_text("  7.0 "));
        assert!(!p.check_text("seven"));
        assert!(!p.check_text(""));
        assert!(!p.check_text("NaN"));
        assert!(!p.check_text("inf"));
    }

    #[test]
    fn test_provider_answers_match_prompts() {
        let mut provider = ArithmeticProvider::new(42);
        for difficulty in 1..=10 {
            let p = provider.next_problem(difficulty);
            // Prompt must evaluate to the stored answer
            let parts: Vec<&str> = p.prompt.split_whitespace().collect();
            let a: f64 = parts[0].parse().unwrap();
            let b: f64 = parts[2].parse().unwrap();
            let expected = match parts[1] {
                "+" => a + b,
                "-" => a - b,
                "x" => a * b,
                other => panic!("unexpected operator {other}"),
            };
            assert_eq!(p.answer, expected, "prompt {}", p.prompt);
            assert!(p.answer >= 0.0);
        }
    }

    #[test]
    fn test_provider_is_deterministic() {
        let mut a = ArithmeticProvider::new(7);
        let mut b = ArithmeticProvider::new(7);
        for _ in 0..20 {
            assert_eq!(a.next_problem(5), b.next_problem(5));
        }
    }

    #[test]
    fn test_adjust_difficulty_bounds() {
        // High accuracy increases, capped
        assert_eq!(adjust_difficulty(3, 10, 9), 4);
        assert_eq!(adjust_difficulty(10, 10, 10), 10);
        // Low accuracy decreases, floored at 1
        assert_eq!(adjust_difficulty(3, 10, 3), 2);
        assert_eq!(adjust_difficulty(1, 10, 0), 1);
        // Middling accuracy holds
        assert_eq!(adjust_difficulty(5, 10, 6), 5);
        // No gates attempted holds
        assert_eq!(adjust_difficulty(5, 0, 0), 5);
    }
}
