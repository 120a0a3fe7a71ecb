//! Weighted reward pool.

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::rng::SessionRng;

/// One item in a reward tier, with its drop chance in percent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardEntry {
    /// Host item template id.
    pub item: String,

    /// Chance in percent for this item to drop once its tier is selected.
    pub chance: f32,
}

/// A tier of rewards selected by weight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardTier {
    /// Tier rank, carried through to the drop for host display.
    pub tier: u32,

    /// Selection weight relative to the other tiers. Weights do not need to
    /// sum to any particular total.
    pub weight: f32,

    /// Items this tier can drop.
    pub rewards: Vec<RewardEntry>,
}

/// Static reward configuration, loaded once from host data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardPool {
    /// Master switch; a disabled pool never rolls anything.
    pub progression_enabled: bool,

    /// Flat currency reward granted alongside any item drops.
    pub base_currency_reward: u32,

    /// Reward tiers.
    pub tiers: Vec<RewardTier>,
}

/// Result of one reward roll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewardDrop {
    /// The tier that was selected.
    pub tier: u32,

    /// Item template ids that passed their chance roll. May be empty.
    pub items: Vec<String>,

    /// Flat currency reward.
    pub currency: u32,
}

impl RewardPool {
    /// Load a pool from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Roll the pool once.
    ///
    /// Selects one tier by weight, then rolls each of the tier's items
    /// independently against its chance. Returns `None` when progression is
    /// disabled, the pool has no tiers, or all weights are zero.
    pub fn roll(&self, rng: &mut SessionRng) -> Option<RewardDrop> {
        if !self.progression_enabled {
            return None;
        }

        let weights: Vec<f32> = self.tiers.iter().map(|t| t.weight).collect();
        let index = rng.choose_weighted(&weights)?;
        let tier = &self.tiers[index];

        let items = tier
            .rewards
            .iter()
            .filter(|entry| rng.roll_percent() < entry.chance)
            .map(|entry| entry.item.clone())
            .collect();

        Some(RewardDrop {
            tier: tier.tier,
            items,
            currency: self.base_currency_reward,
        })
    }
}
