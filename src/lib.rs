//! # tumbler
//!
//! A stateful lock-picking and terminal-hacking resolution engine for game
//! hosts.
//!
//! The host game owns doors, timers, input, and UI. This crate owns the
//! rules: per-door attempt tracking, success-chance and duration curves,
//! inspection state, and reward rolls. The host asks the engine to plan an
//! action, runs its own real-time minigame or cast bar, and reports back only
//! if the timed action actually completed.
//!
//! ## Design Principles
//!
//! 1. **Host-Driven**: The engine never owns timers, cancellation, or
//!    presentation. It returns plans and outcomes; the host decides what to
//!    do with them.
//!
//! 2. **Plan/Resolve Split**: `begin_action` is pure and side-effect-free.
//!    Only `resolve_action` and `mark_inspected` mutate session state, so an
//!    interrupted action can be abandoned with zero cleanup.
//!
//! 3. **Configuration Over Convention**: All tuning lives in `EngineConfig`.
//!    Door difficulty is external data loaded once into a read-only
//!    `DifficultyTable`; the engine never hardcodes a door or a curve.
//!
//! ## Modules
//!
//! - `core`: Door/map ids, session RNG, engine configuration, per-session
//!   door state, error types
//! - `doors`: Static difficulty registry keyed by `(map, door)`
//! - `resolve`: The resolution engine, chance/time formulas, difficulty bands
//! - `rewards`: Weighted reward tiers rolled on successful actions

pub mod core;
pub mod doors;
pub mod resolve;
pub mod rewards;

// Re-export commonly used types
pub use crate::core::{
    ChanceCurve, DoorId, DoorRecord, EngineConfig, EngineError, MapId, Result, SessionRng,
    SessionRngState, SessionState, TimeCurve,
};

pub use crate::doors::{DifficultyEntry, DifficultyTable};

pub use crate::resolve::{ActionKind, ActionOutcome, ActionPlan, DifficultyBand, LockEngine};

pub use crate::rewards::{RewardDrop, RewardEntry, RewardPool, RewardTier};
