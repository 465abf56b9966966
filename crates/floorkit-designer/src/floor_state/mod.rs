//! Floor state container for UI integration.
//! Holds the rooms, the current selection, and the table id counter.
//!
//! This module is split into submodules:
//! - `tables`: table creation, movement, rotation, deletion, updates
//! - `rooms`: room creation and switching
//! - `selection`: table selection toggling
//! - `file_io`: save/load through the persistence adapter
//!
//! The selected room is an index into the single room list, and the
//! selected table is an id looked up in that room, so there is never a
//! second copy of a room to keep in sync.

mod file_io;
mod rooms;
mod selection;
mod tables;

use crate::actions::FloorAction;
use crate::model::{Room, RoomSummary, Table};

/// Identifier of the room present in a fresh state.
pub const INITIAL_ROOM_ID: &str = "1";
/// Name of the room present in a fresh state.
pub const INITIAL_ROOM_NAME: &str = "Main Room";

/// Floor plan editor state.
#[derive(Debug, Clone)]
pub struct FloorState {
    /// Never empty; rooms are never removed.
    rooms: Vec<Room>,
    selected_room: usize,
    selected_table: Option<String>,
    table_count: u64,
    is_modified: bool,
}

impl FloorState {
    /// Creates the initial state: one empty "Main Room", nothing selected.
    pub fn new() -> Self {
        Self {
            rooms: vec![Room::new(INITIAL_ROOM_ID, INITIAL_ROOM_NAME)],
            selected_room: 0,
            selected_table: None,
            table_count: 0,
            is_modified: false,
        }
    }

    /// Builds a state from an existing room list, as a load would.
    ///
    /// Returns `None` if `rooms` is empty.
    pub fn from_rooms(rooms: Vec<Room>) -> Option<Self> {
        let mut state = Self::new();
        state.restore(rooms).then_some(state)
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn selected_room(&self) -> &Room {
        &self.rooms[self.selected_room]
    }

    pub(crate) fn selected_room_mut(&mut self) -> &mut Room {
        &mut self.rooms[self.selected_room]
    }

    pub fn selected_room_id(&self) -> &str {
        &self.selected_room().id
    }

    /// The selected table, resolved against the selected room.
    pub fn selected_table(&self) -> Option<&Table> {
        let id = self.selected_table.as_deref()?;
        self.selected_room().table(id)
    }

    pub fn selected_table_id(&self) -> Option<&str> {
        self.selected_table.as_deref()
    }

    pub fn is_table_selected(&self, id: &str) -> bool {
        self.selected_table.as_deref() == Some(id)
    }

    /// Looks up a table in the selected room.
    pub fn table(&self, id: &str) -> Option<&Table> {
        self.selected_room().table(id)
    }

    /// Number of table ids handed out so far.
    pub fn table_count(&self) -> u64 {
        self.table_count
    }

    pub fn room_summary(&self) -> RoomSummary {
        self.selected_room().summary()
    }

    /// Whether the rooms changed since the last save or load.
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    pub(crate) fn mark_modified(&mut self) {
        self.is_modified = true;
    }

    /// Applies a single action.
    pub fn dispatch(&mut self, action: FloorAction) {
        tracing::debug!("Dispatching {}", action.name());
        match action {
            FloorAction::AddTable => {
                self.add_table();
            }
            FloorAction::AddRoom => {
                self.add_room();
            }
            FloorAction::UpdateTablePosition {
                table_id,
                delta_x,
                delta_y,
            } => self.update_table_position(&table_id, delta_x, delta_y),
            FloorAction::SelectTable(id) => self.select_table(&id),
            FloorAction::SelectRoom(id) => self.select_room(&id),
            FloorAction::RotateTable(id) => self.rotate_table(&id),
            FloorAction::DeleteTable(id) => self.delete_table(&id),
            FloorAction::ToggleTableActive(id) => self.toggle_table_active(&id),
            FloorAction::UpdateTable { table_id, update } => self.update_table(&table_id, &update),
            FloorAction::DuplicateTable(id) => {
                self.duplicate_table(&id);
            }
        }
    }
}

impl Default for FloorState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = FloorState::new();
        assert_eq!(state.rooms().len(), 1);
        assert_eq!(state.selected_room().name, "Main Room");
        assert_eq!(state.selected_room_id(), "1");
        assert!(state.selected_table().is_none());
        assert_eq!(state.table_count(), 0);
        assert!(!state.is_modified());
    }

    #[test]
    fn test_from_rooms_rejects_empty() {
        assert!(FloorState::from_rooms(Vec::new()).is_none());
    }

    #[test]
    fn test_dispatch_routes_actions() {
        let mut state = FloorState::new();
        state.dispatch(FloorAction::AddTable);
        state.dispatch(FloorAction::RotateTable("T-01".into()));
        state.dispatch(FloorAction::SelectTable("T-01".into()));

        let table = state.selected_table().unwrap();
        assert_eq!(table.rotation, 90);
        assert!(state.is_modified());
    }
}
