//! Difficulty table: `(map, door)` to difficulty lookup.
//!
//! The table is a registry in the same spirit as a card registry: built once
//! (in code or from JSON), then queried immutably for the rest of the
//! session.
//!
//! ## Example
//!
//! ```
//! use tumbler::core::{DoorId, MapId};
//! use tumbler::doors::{DifficultyEntry, DifficultyTable};
//!
//! let mut table = DifficultyTable::new();
//! table.register(
//!     MapId::new("customs"),
//!     DoorId::new("marked-room"),
//!     DifficultyEntry::new(9).with_key("marked_key"),
//! );
//!
//! let entry = table
//!     .get(&MapId::new("customs"), &DoorId::new("marked-room"))
//!     .unwrap();
//! assert_eq!(entry.required_level, 9);
//! ```

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::door::{DoorId, MapId};
use crate::core::error::Result;

use super::entry::DifficultyEntry;

/// Registry of door difficulty entries, keyed by map then door.
///
/// Serializes as a nested JSON object:
///
/// ```json
/// { "customs": { "marked-room": { "required_level": 9 } } }
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DifficultyTable {
    maps: FxHashMap<MapId, FxHashMap<DoorId, DifficultyEntry>>,
}

impl DifficultyTable {
    /// Create a new empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a table from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a table from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Register a door's difficulty entry.
    ///
    /// Panics if the door is already registered on that map: duplicate rows
    /// are a data bug, not a runtime condition.
    pub fn register(&mut self, map: MapId, door: DoorId, entry: DifficultyEntry) {
        let doors = self.maps.entry(map).or_default();
        if doors.contains_key(&door) {
            panic!("door {door} already registered");
        }
        doors.insert(door, entry);
    }

    /// Look up a door's difficulty entry.
    #[must_use]
    pub fn get(&self, map: &MapId, door: &DoorId) -> Option<&DifficultyEntry> {
        self.maps.get(map)?.get(door)
    }

    /// Check whether a door is known on a map.
    #[must_use]
    pub fn contains(&self, map: &MapId, door: &DoorId) -> bool {
        self.get(map, door).is_some()
    }

    /// Total number of registered doors across all maps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.maps.values().map(FxHashMap::len).sum()
    }

    /// Check if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.maps.values().all(FxHashMap::is_empty)
    }

    /// Iterate over all registered doors.
    pub fn iter(&self) -> impl Iterator<Item = (&MapId, &DoorId, &DifficultyEntry)> {
        self.maps
            .iter()
            .flat_map(|(map, doors)| doors.iter().map(move |(door, entry)| (map, door, entry)))
    }

    /// Iterate over the doors registered on one map.
    pub fn doors_on(&self, map: &MapId) -> impl Iterator<Item = (&DoorId, &DifficultyEntry)> {
        self.maps.get(map).into_iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customs() -> MapId {
        MapId::new("customs")
    }

    #[test]
    fn test_register_and_get() {
        let mut table = DifficultyTable::new();
        table.register(customs(), DoorId::new("d1"), DifficultyEntry::new(5));

        let found = table.get(&customs(), &DoorId::new("d1"));
        assert_eq!(found.map(|e| e.required_level), Some(5));

        assert!(table.get(&customs(), &DoorId::new("missing")).is_none());
        assert!(table.get(&MapId::new("woods"), &DoorId::new("d1")).is_none());
    }

    #[test]
    #[should_panic(expected = "already registered")]
    fn test_duplicate_door_panics() {
        let mut table = DifficultyTable::new();
        table.register(customs(), DoorId::new("d1"), DifficultyEntry::new(5));
        table.register(customs(), DoorId::new("d1"), DifficultyEntry::new(8));
    }

    #[test]
    fn test_same_door_id_on_two_maps() {
        let mut table = DifficultyTable::new();
        table.register(customs(), DoorId::new("gate"), DifficultyEntry::new(5));
        table.register(MapId::new("woods"), DoorId::new("gate"), DifficultyEntry::new(20));

        assert_eq!(
            table.get(&customs(), &DoorId::new("gate")).unwrap().required_level,
            5
        );
        assert_eq!(
            table
                .get(&MapId::new("woods"), &DoorId::new("gate"))
                .unwrap()
                .required_level,
            20
        );
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_from_json_str() {
        let table = DifficultyTable::from_json_str(
            r#"{
                "customs": {
                    "marked-room": { "required_level": 9, "key_id": "marked_key" },
                    "crackhouse": { "required_level": 4 }
                },
                "labs": {
                    "arsenal": { "required_level": 30 }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(table.len(), 3);
        let entry = table.get(&customs(), &DoorId::new("marked-room")).unwrap();
        assert_eq!(entry.required_level, 9);
        assert_eq!(entry.key_id.as_deref(), Some("marked_key"));

        assert_eq!(table.doors_on(&customs()).count(), 2);
        assert_eq!(table.doors_on(&MapId::new("shoreline")).count(), 0);
    }

    #[test]
    fn test_bad_json_is_a_parse_error() {
        let err = DifficultyTable::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, crate::core::EngineError::Parse(_)));
    }

    #[test]
    fn test_round_trip() {
        let mut table = DifficultyTable::new();
        table.register(customs(), DoorId::new("d1"), DifficultyEntry::new(5).with_key("k1"));

        let json = serde_json::to_string(&table).unwrap();
        let back = DifficultyTable::from_json_str(&json).unwrap();
        assert_eq!(
            back.get(&customs(), &DoorId::new("d1")),
            table.get(&customs(), &DoorId::new("d1"))
        );
    }
}
