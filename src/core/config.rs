//! Engine configuration with documented tuning knobs.
//!
//! All policy numbers are collected here. The defaults are a tuned baseline;
//! hosts load their own values from data files (the types deserialize with
//! serde) and should call `validate()` after loading.

use serde::{Deserialize, Serialize};

use super::error::{EngineError, Result};

/// Success-chance curve.
///
/// The chance to succeed is a base value shifted by how far the player's
/// skill level sits from the door's required level:
///
/// `chance = base_chance + (skill - required) * per_level`, clamped to
/// `[0, 100]`.
///
/// With the defaults (40, 8) a player exactly at the required level has a
/// 40% chance, a player five levels under is at exactly 0 ("impossible for
/// your level"), and a player eight or more levels over saturates at 100.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChanceCurve {
    /// Chance in percent when skill equals the required level.
    pub base_chance: f32,

    /// Percent gained (or lost) per level above (or below) the requirement.
    pub per_level: f32,
}

impl Default for ChanceCurve {
    fn default() -> Self {
        Self {
            base_chance: 40.0,
            per_level: 8.0,
        }
    }
}

/// Action duration curve.
///
/// Durations scale with how under-leveled the player is:
///
/// `duration = base_time * factor`, where
/// `factor = 1 + (required - skill) * penalty_per_level`, clamped to
/// `[min_factor, max_factor]`.
///
/// The factor is monotonically increasing in the level deficit and the
/// `min_factor` floor keeps durations strictly positive even for heavily
/// over-leveled players.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeCurve {
    /// Extra duration factor per level the player is under the requirement.
    pub penalty_per_level: f32,

    /// Lower bound on the duration factor. Must be positive.
    pub min_factor: f32,

    /// Upper bound on the duration factor.
    pub max_factor: f32,
}

impl Default for TimeCurve {
    fn default() -> Self {
        Self {
            penalty_per_level: 0.2,
            min_factor: 0.25,
            max_factor: 3.0,
        }
    }
}

/// Complete engine configuration.
///
/// Hosts provide this at startup, typically deserialized from their own data
/// files alongside the difficulty table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Base duration of a lock-pick attempt, in seconds.
    pub pick_base_time: f32,

    /// Base duration of a terminal-hack attempt, in seconds.
    pub hack_base_time: f32,

    /// Base duration of a lock inspection, in seconds.
    pub inspect_base_time: f32,

    /// Failed attempts a door tolerates before it is permanently broken for
    /// the session. A door with more failures than this rejects all further
    /// actions.
    pub break_threshold: u32,

    /// Success-chance curve knobs.
    pub chance: ChanceCurve,

    /// Duration curve knobs.
    pub timing: TimeCurve,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pick_base_time: 6.0,
            hack_base_time: 10.0,
            inspect_base_time: 4.0,
            break_threshold: 3,
            chance: ChanceCurve::default(),
            timing: TimeCurve::default(),
        }
    }
}

impl EngineConfig {
    /// Create a config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency.
    pub fn validate(&self) -> Result<()> {
        if self.pick_base_time <= 0.0 || self.hack_base_time <= 0.0 || self.inspect_base_time <= 0.0
        {
            return Err(EngineError::InvalidConfig(
                "base times must be positive".into(),
            ));
        }

        if !(0.0..=100.0).contains(&self.chance.base_chance) {
            return Err(EngineError::InvalidConfig(format!(
                "base_chance ({}) must be within [0, 100]",
                self.chance.base_chance
            )));
        }

        if self.chance.per_level < 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "per_level ({}) must be non-negative",
                self.chance.per_level
            )));
        }

        if self.timing.min_factor <= 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "min_factor ({}) must be positive",
                self.timing.min_factor
            )));
        }

        if self.timing.min_factor > self.timing.max_factor {
            return Err(EngineError::InvalidConfig(format!(
                "min_factor ({}) must be <= max_factor ({})",
                self.timing.min_factor, self.timing.max_factor
            )));
        }

        if self.timing.penalty_per_level < 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "penalty_per_level ({}) must be non-negative",
                self.timing.penalty_per_level
            )));
        }

        Ok(())
    }
}
