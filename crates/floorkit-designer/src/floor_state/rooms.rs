//! Room operations (add, select).

use super::FloorState;
use crate::model::Room;

impl FloorState {
    /// Appends a new room named after the room count and selects it.
    /// Returns the new room id.
    pub fn add_room(&mut self) -> String {
        let number = self.rooms.len() + 1;
        let mut id_number = number;
        // Loaded snapshots may carry arbitrary ids
        while self.rooms.iter().any(|r| r.id == id_number.to_string()) {
            id_number += 1;
        }

        let room = Room::new(id_number.to_string(), format!("Room {}", number));
        let id = room.id.clone();
        tracing::debug!("Adding room {} ({})", room.name, id);

        self.rooms.push(room);
        self.selected_room = self.rooms.len() - 1;
        self.selected_table = None;
        self.mark_modified();
        id
    }

    /// Switches to another room and clears the table selection.
    pub fn select_room(&mut self, room_id: &str) {
        let Some(index) = self.rooms.iter().position(|r| r.id == room_id) else {
            tracing::debug!("Select ignored, no room {}", room_id);
            return;
        };
        self.selected_room = index;
        self.selected_table = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_room_selects_it() {
        let mut state = FloorState::new();
        state.add_table();
        state.select_table("T-01");

        let id = state.add_room();
        assert_eq!(id, "2");
        assert_eq!(state.selected_room().name, "Room 2");
        assert!(state.selected_room().tables.is_empty());
        assert!(state.selected_table().is_none());
        assert_eq!(state.rooms().len(), 2);
    }

    #[test]
    fn test_select_room() {
        let mut state = FloorState::new();
        state.add_room();
        state.select_room("1");
        assert_eq!(state.selected_room().name, "Main Room");

        state.select_room("nope");
        assert_eq!(state.selected_room_id(), "1");
    }

    #[test]
    fn test_select_room_clears_table_selection() {
        let mut state = FloorState::new();
        state.add_table();
        state.select_table("T-01");
        state.select_room("1");
        assert!(state.selected_table().is_none());
    }

    #[test]
    fn test_tables_follow_selected_room() {
        let mut state = FloorState::new();
        state.add_table();
        state.add_room();
        state.add_table();

        assert_eq!(state.rooms()[0].tables.len(), 1);
        assert_eq!(state.rooms()[1].tables[0].id, "T-02");
        // T-01 lives in another room
        state.rotate_table("T-01");
        assert_eq!(state.rooms()[0].tables[0].rotation, 0);
    }

    #[test]
    fn test_add_room_skips_taken_id() {
        let mut state = FloorState::from_rooms(vec![Room::new("2", "Patio")]).unwrap();
        let id = state.add_room();
        assert_eq!(id, "3");
        assert_eq!(state.selected_room().name, "Room 2");
    }
}
