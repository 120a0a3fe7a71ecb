//! Per-door difficulty data.

use serde::{Deserialize, Serialize};

/// Static difficulty row for one door.
///
/// `required_level` is the skill tier needed for a baseline chance of
/// success. `key_id` names the key or keycard that opens the door normally;
/// inspection reveals it to the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyEntry {
    /// Skill tier needed for a baseline chance of success.
    pub required_level: u8,

    /// Id of the key item that opens this door, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
}

impl DifficultyEntry {
    /// Create an entry with the given required level.
    #[must_use]
    pub fn new(required_level: u8) -> Self {
        Self {
            required_level,
            key_id: None,
        }
    }

    /// Set the key id revealed by inspection.
    #[must_use]
    pub fn with_key(mut self, key_id: impl Into<String>) -> Self {
        self.key_id = Some(key_id.into());
        self
    }
}
