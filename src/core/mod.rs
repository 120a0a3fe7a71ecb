//! Core engine types: ids, RNG, configuration, session state, errors.
//!
//! This module contains the fundamental building blocks shared by the
//! difficulty registry and the resolution engine. Hosts configure these via
//! `EngineConfig` rather than modifying the core.

pub mod config;
pub mod door;
pub mod error;
pub mod rng;
pub mod state;

pub use config::{ChanceCurve, EngineConfig, TimeCurve};
pub use door::{DoorId, MapId};
pub use error::{EngineError, Result};
pub use rng::{SessionRng, SessionRngState};
pub use state::{DoorRecord, SessionState};
