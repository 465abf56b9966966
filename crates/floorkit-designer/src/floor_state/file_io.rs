//! Save/load operations for floor state.

use floorkit_core::{KeyValueStore, Result};

use super::FloorState;
use crate::model::Room;
use crate::serialization::RoomPersistence;

impl FloorState {
    /// Writes the full room list to `store`.
    pub fn save_rooms(&mut self, store: &mut dyn KeyValueStore) -> Result<()> {
        RoomPersistence::save(store, &self.rooms)?;
        self.is_modified = false;
        tracing::info!(
            "Saved {} room(s), {} table(s)",
            self.rooms.len(),
            self.rooms.iter().map(|r| r.tables.len()).sum::<usize>()
        );
        Ok(())
    }

    /// Replaces the rooms with the snapshot in `store`, if there is one.
    ///
    /// Returns `Ok(true)` when a snapshot was applied and `Ok(false)` when
    /// none exists, in which case the state is left untouched.
    pub fn load_rooms(&mut self, store: &dyn KeyValueStore) -> Result<bool> {
        match RoomPersistence::load(store)? {
            Some(rooms) => {
                self.restore(rooms);
                tracing::info!(
                    "Loaded {} room(s), next table number {}",
                    self.rooms.len(),
                    self.table_count + 1
                );
                Ok(true)
            }
            None => {
                tracing::info!("No saved rooms found");
                Ok(false)
            }
        }
    }

    /// Swaps in a whole room list. Ignored (returns false) if `rooms` is empty.
    pub(crate) fn restore(&mut self, rooms: Vec<Room>) -> bool {
        if rooms.is_empty() {
            return false;
        }
        self.table_count = RoomPersistence::max_table_number(&rooms);
        self.rooms = rooms;
        self.selected_room = 0;
        self.selected_table = None;
        self.is_modified = false;
        true
    }
}
