//! Persistence adapter for the room list.
//!
//! The whole room list is stored as one JSON array under a fixed key of a
//! [`KeyValueStore`]. The layout mirrors the entity model exactly:
//!
//! ```json
//! [{ "id": "1", "name": "Main Room", "tables": [
//!     { "id": "T-01", "x": 100.0, "y": 100.0, "name": "T-01",
//!       "minCovers": 1, "maxCovers": 4, "active": true,
//!       "width": 100.0, "height": 100.0, "rotation": 0 } ] }]
//! ```
//!
//! There is no version field and no migration.

use floorkit_core::{KeyValueStore, Result};

use crate::model::{table_number, Room};

/// Key the room list is stored under.
pub const ROOMS_KEY: &str = "rooms";

/// Reads and writes room snapshots.
pub struct RoomPersistence;

impl RoomPersistence {
    /// Serialize the room list to a JSON string.
    pub fn to_json(rooms: &[Room]) -> Result<String> {
        Ok(serde_json::to_string(rooms)?)
    }

    /// Parse a room list from a JSON string. Table rotations are wrapped
    /// into `[0, 360)`.
    pub fn from_json(json: &str) -> Result<Vec<Room>> {
        let mut rooms: Vec<Room> = serde_json::from_str(json)?;
        for table in rooms.iter_mut().flat_map(|room| room.tables.iter_mut()) {
            table.set_rotation(i64::from(table.rotation));
        }
        Ok(rooms)
    }

    /// Writes the full room list under [`ROOMS_KEY`].
    pub fn save(store: &mut dyn KeyValueStore, rooms: &[Room]) -> Result<()> {
        let json = Self::to_json(rooms)?;
        store.set(ROOMS_KEY, &json)
    }

    /// Reads the stored room list.
    ///
    /// Returns `Ok(None)` when nothing was saved yet, or when the snapshot
    /// holds no rooms at all (there would be no room to select).
    pub fn load(store: &dyn KeyValueStore) -> Result<Option<Vec<Room>>> {
        let Some(json) = store.get(ROOMS_KEY)? else {
            return Ok(None);
        };
        let rooms = Self::from_json(&json)?;
        if rooms.is_empty() {
            tracing::warn!("Stored room list is empty, ignoring it");
            return Ok(None);
        }
        Ok(Some(rooms))
    }

    /// Highest table sequence number found in `rooms`, or 0.
    ///
    /// Identifiers without a numeric suffix are ignored.
    pub fn max_table_number(rooms: &[Room]) -> u64 {
        rooms
            .iter()
            .flat_map(|room| room.tables.iter())
            .filter_map(|table| table_number(&table.id))
            .max()
            .unwrap_or(0)
    }
}
