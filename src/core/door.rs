//! Door and map identification.
//!
//! Hosts identify every interactive locked object (a physical lock or a
//! keycard terminal) by a stable id within a map. The engine never interprets
//! these ids; they are opaque keys into the difficulty table and the session
//! state. Most hosts hand us engine-level GUID strings, so both newtypes are
//! string-backed.

use serde::{Deserialize, Serialize};

/// Opaque identifier for a map (location) known to the host.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MapId(String);

impl MapId {
    /// Create a new map id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MapId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for MapId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for MapId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier for a single lock instance within a map.
///
/// Unique per physical lock in the current session. The same id keys both the
/// static difficulty entry and the mutable per-session `DoorRecord`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DoorId(String);

impl DoorId {
    /// Create a new door id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DoorId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for DoorId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for DoorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
