//! The lock resolution engine.
//!
//! `LockEngine` owns the engine config, the read-only difficulty table, and
//! the mutable per-session door state. All operations are invoked from one
//! logical caller (the host's interaction path); the engine holds no locks
//! and no timers.
//!
//! The contract with the host:
//!
//! 1. Host gates on its own preconditions (player stationary, tool in
//!    inventory), then calls `begin_action` for a plan.
//! 2. Host runs the timed action. If it is interrupted, the plan is dropped
//!    and nothing in the engine changed.
//! 3. If the timer completed, host calls `resolve_action` with the plan's
//!    success chance and its session RNG. For inspections the host calls
//!    `mark_inspected` instead.

use tracing::{debug, error};

use crate::core::config::EngineConfig;
use crate::core::door::{DoorId, MapId};
use crate::core::error::{EngineError, Result};
use crate::core::rng::SessionRng;
use crate::core::state::SessionState;
use crate::doors::{DifficultyEntry, DifficultyTable};

use super::formula::{self, DifficultyBand};

/// The kind of timed interaction being planned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// Pick a physical lock with a lock pick.
    PickLock,
    /// Hack a keycard terminal with a hacking tool.
    HackTerminal,
    /// Inspect a lock to reveal its key and difficulty. Non-destructive and
    /// cannot fail, only be interrupted.
    Inspect,
}

/// A planned (not yet resolved) timed action.
///
/// Producing a plan mutates nothing, so a cancelled or interrupted action
/// leaves no trace in the session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ActionPlan {
    /// What the player is about to do.
    pub kind: ActionKind,

    /// How long the host's timed action should run, in seconds. Always
    /// strictly positive.
    pub duration_secs: f32,

    /// Success chance in percent, within `[0, 100]`.
    pub success_chance: f32,
}

impl ActionPlan {
    /// Player-facing difficulty classification of this plan.
    #[must_use]
    pub fn band(&self) -> DifficultyBand {
        DifficultyBand::classify(self.success_chance)
    }
}

/// Outcome of a resolved action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Whether the pick or hack succeeded.
    pub success: bool,

    /// Whether this failure just pushed the door over the break threshold.
    pub broken_now: bool,
}

/// Stateful lock-picking and hacking resolution engine.
///
/// ## Example
///
/// ```
/// use tumbler::core::{DoorId, EngineConfig, MapId, SessionRng};
/// use tumbler::doors::{DifficultyEntry, DifficultyTable};
/// use tumbler::resolve::{ActionKind, LockEngine};
///
/// let mut table = DifficultyTable::new();
/// table.register(
///     MapId::new("customs"),
///     DoorId::new("marked-room"),
///     DifficultyEntry::new(9),
/// );
///
/// let mut engine = LockEngine::new(EngineConfig::default(), table).unwrap();
/// let mut rng = SessionRng::new(42);
///
/// let door = DoorId::new("marked-room");
/// let plan = engine
///     .begin_action(&MapId::new("customs"), &door, ActionKind::PickLock, 12)
///     .unwrap();
///
/// // ... host runs its timed minigame for plan.duration_secs ...
/// let outcome = engine.resolve_action(&door, plan.success_chance, &mut rng);
/// # let _ = outcome;
/// ```
#[derive(Clone, Debug)]
pub struct LockEngine {
    config: EngineConfig,
    table: DifficultyTable,
    session: SessionState,
}

impl LockEngine {
    /// Create an engine from a validated config and a loaded difficulty
    /// table. The session starts empty.
    pub fn new(config: EngineConfig, table: DifficultyTable) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            table,
            session: SessionState::new(),
        })
    }

    /// Whether any action can still be attempted on this door.
    ///
    /// Returns false once the door has accumulated more failures than the
    /// break threshold. No side effects.
    #[must_use]
    pub fn is_action_available(&self, door: &DoorId) -> bool {
        self.session.attempts(door) <= self.config.break_threshold
    }

    /// Plan a timed action against a door.
    ///
    /// Looks up the door's difficulty, rejects picks and hacks on broken
    /// doors, and computes the duration and success chance for the player's
    /// skill level. Mutates nothing: the action is planned, not resolved, so
    /// the host can abandon it (movement interrupt, cancelled minigame) with
    /// zero cleanup.
    ///
    /// # Errors
    ///
    /// - `DoorNotFound` if the `(map, door)` pair has no difficulty entry.
    ///   This is a data gap; it is logged at error level and the host should
    ///   surface it as a diagnostic rather than retry.
    /// - `DoorBroken` for a pick or hack on a lock already broken this
    ///   session. Inspection stays possible: looking at a broken lock is
    ///   harmless.
    pub fn begin_action(
        &self,
        map: &MapId,
        door: &DoorId,
        kind: ActionKind,
        skill_level: u8,
    ) -> Result<ActionPlan> {
        let entry = self.table.get(map, door).ok_or_else(|| {
            error!(
                map = %map,
                door = %door,
                "door not found in the difficulty table, report this to the data maintainer"
            );
            EngineError::DoorNotFound {
                map: map.clone(),
                door: door.clone(),
            }
        })?;

        if matches!(kind, ActionKind::PickLock | ActionKind::HackTerminal)
            && !self.is_action_available(door)
        {
            return Err(EngineError::DoorBroken { door: door.clone() });
        }

        let base_time = match kind {
            ActionKind::PickLock => self.config.pick_base_time,
            ActionKind::HackTerminal => self.config.hack_base_time,
            ActionKind::Inspect => self.config.inspect_base_time,
        };

        let duration_secs = formula::action_duration(
            &self.config.timing,
            base_time,
            skill_level,
            entry.required_level,
        );

        let success_chance = match kind {
            ActionKind::Inspect => formula::MAX_CHANCE,
            ActionKind::PickLock | ActionKind::HackTerminal => {
                formula::chance_for_success(&self.config.chance, skill_level, entry.required_level)
            }
        };

        Ok(ActionPlan {
            kind,
            duration_secs,
            success_chance,
        })
    }

    /// Resolve a completed action with one random draw.
    ///
    /// Success iff the draw from `[0, 100)` is strictly below
    /// `success_chance`. On failure the door's attempt count goes up by one;
    /// `broken_now` is set when the new count exceeds the break threshold.
    /// A success leaves the attempt count as it is: a picked lock stays
    /// picked, no further action needed.
    pub fn resolve_action(
        &mut self,
        door: &DoorId,
        success_chance: f32,
        rng: &mut SessionRng,
    ) -> ActionOutcome {
        let roll = rng.roll_percent();

        if roll < success_chance {
            debug!(door = %door, roll, success_chance, "action succeeded");
            return ActionOutcome {
                success: true,
                broken_now: false,
            };
        }

        let attempts = self.session.record_failure(door);
        let broken_now = attempts > self.config.break_threshold;
        debug!(door = %door, roll, success_chance, attempts, broken_now, "action failed");

        ActionOutcome {
            success: false,
            broken_now,
        }
    }

    /// Mark a door as inspected. Idempotent; once true, stays true.
    pub fn mark_inspected(&mut self, door: &DoorId) {
        self.session.mark_inspected(door);
    }

    /// Whether inspection has already revealed this door's information.
    #[must_use]
    pub fn is_inspected(&self, door: &DoorId) -> bool {
        self.session.is_inspected(door)
    }

    /// What a completed inspection reveals: the door's difficulty entry.
    ///
    /// # Errors
    ///
    /// `DoorNotFound` if the pair has no difficulty entry.
    pub fn inspect_info(&self, map: &MapId, door: &DoorId) -> Result<&DifficultyEntry> {
        self.table.get(map, door).ok_or_else(|| EngineError::DoorNotFound {
            map: map.clone(),
            door: door.clone(),
        })
    }

    /// Failed attempts recorded against a door this session.
    #[must_use]
    pub fn attempts(&self, door: &DoorId) -> u32 {
        self.session.attempts(door)
    }

    /// Clear all per-door session state. Call when the host starts a new
    /// session; the difficulty table and config are kept.
    pub fn reset_session(&mut self) {
        self.session.reset();
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The static difficulty table.
    #[must_use]
    pub fn table(&self) -> &DifficultyTable {
        &self.table
    }

    /// Read access to the per-session door state.
    #[must_use]
    pub fn session(&self) -> &SessionState {
        &self.session
    }
}
