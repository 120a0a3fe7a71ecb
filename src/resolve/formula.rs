//! Success-chance and duration formulas.
//!
//! Both curves are pure functions of the player's skill level, the door's
//! required level, and the knobs in `EngineConfig`. Nothing here mutates
//! state or draws randomness; `resolve_action` does the single roll.

use serde::{Deserialize, Serialize};

use crate::core::config::{ChanceCurve, TimeCurve};

/// Upper clamp for success chances, and the chance of actions that cannot
/// fail (inspection).
pub const MAX_CHANCE: f32 = 100.0;

/// Chance above which a door reads as "easy for your level".
///
/// Exactly 80 is deliberately not easy: the band is an exclusive bound.
pub const EASY_THRESHOLD: f32 = 80.0;

/// Success chance in percent, clamped to `[0, 100]`.
///
/// A player far enough below the required level bottoms out at exactly 0,
/// which the bands report as impossible.
#[must_use]
pub fn chance_for_success(curve: &ChanceCurve, skill_level: u8, required_level: u8) -> f32 {
    let delta = i32::from(skill_level) - i32::from(required_level);
    let raw = curve.base_chance + delta as f32 * curve.per_level;
    raw.clamp(0.0, MAX_CHANCE)
}

/// Duration scale factor, clamped to `[min_factor, max_factor]`.
///
/// Monotonically increasing in the level deficit `required - skill`; the
/// positive `min_factor` keeps results strictly positive.
#[must_use]
pub fn duration_factor(curve: &TimeCurve, skill_level: u8, required_level: u8) -> f32 {
    let deficit = i32::from(required_level) - i32::from(skill_level);
    let raw = 1.0 + deficit as f32 * curve.penalty_per_level;
    raw.clamp(curve.min_factor, curve.max_factor)
}

/// Full action duration in seconds: `base_time * duration_factor`.
#[must_use]
pub fn action_duration(
    curve: &TimeCurve,
    base_time: f32,
    skill_level: u8,
    required_level: u8,
) -> f32 {
    base_time * duration_factor(curve, skill_level, required_level)
}

/// Player-facing difficulty classification of a computed success chance.
///
/// These are presentation thresholds on top of the continuous chance value:
/// above 80 reads easy, exactly 0 reads impossible, and everything between,
/// including exactly 80, reads hard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifficultyBand {
    /// Chance strictly above 80.
    Easy,
    /// Chance in `(0, 80]`.
    Hard,
    /// Chance of exactly 0.
    Impossible,
}

impl DifficultyBand {
    /// Classify a success chance.
    #[must_use]
    pub fn classify(chance: f32) -> Self {
        if chance > EASY_THRESHOLD {
            DifficultyBand::Easy
        } else if chance == 0.0 {
            DifficultyBand::Impossible
        } else {
            DifficultyBand::Hard
        }
    }
}

impl std::fmt::Display for DifficultyBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            DifficultyBand::Easy => "easy for your level",
            DifficultyBand::Hard => "hard for your level",
            DifficultyBand::Impossible => "impossible for your level",
        };
        write!(f, "{text}")
    }
}
