//! Engine error taxonomy.
//!
//! Two of these are part of normal play: `DoorBroken` is an expected
//! business-rule rejection the host presents as ordinary feedback, while
//! `DoorNotFound` signals a gap in the difficulty data and must be surfaced
//! loudly (the engine also logs it at error level) rather than silently
//! defaulted.

use thiserror::Error;

use super::door::{DoorId, MapId};

/// Errors surfaced by the resolution engine and its data loaders.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The door has no entry in the difficulty table. Configuration gap;
    /// report upstream, do not retry.
    #[error("door {door} on map {map} not found in the difficulty table")]
    DoorNotFound { map: MapId, door: DoorId },

    /// The lock is permanently broken for this session.
    #[error("lock on door {door} is broken")]
    DoorBroken { door: DoorId },

    /// Engine configuration failed validation.
    #[error("invalid engine config: {0}")]
    InvalidConfig(String),

    /// Difficulty table or reward pool file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Difficulty table or reward pool data could not be parsed.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_door() {
        let err = EngineError::DoorNotFound {
            map: MapId::new("customs"),
            door: DoorId::new("X99"),
        };
        let text = err.to_string();
        assert!(text.contains("customs"));
        assert!(text.contains("X99"));
    }

    #[test]
    fn test_parse_errors_convert() {
        let parse_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: EngineError = parse_err.into();
        assert!(matches!(err, EngineError::Parse(_)));
    }
}
