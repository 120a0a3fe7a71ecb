//! Skill progression rewards.
//!
//! Hosts that tie lock-picking progression to loot define a `RewardPool`:
//! weighted tiers, each holding items with an individual drop chance. The
//! pool is static host data like the difficulty table; the engine only
//! rolls against it.

pub mod pool;

pub use pool::{RewardDrop, RewardEntry, RewardPool, RewardTier};
