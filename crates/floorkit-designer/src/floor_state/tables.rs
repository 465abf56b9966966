//! Table operations (add, move, rotate, delete, toggle, update, duplicate).
//!
//! Every operation targets tables of the selected room. Unknown ids are
//! silent no-ops.

use super::FloorState;
use crate::model::{table_id, Table, TableUpdate};

impl FloorState {
    /// Hands out the next table sequence number whose id is not already
    /// used in any room. Wraps back to 1 when the counter is exhausted.
    fn next_table_number(&mut self) -> u64 {
        loop {
            self.table_count = self.table_count.checked_add(1).unwrap_or(1);
            let id = table_id(self.table_count);
            if !self.rooms.iter().any(|room| room.table(&id).is_some()) {
                return self.table_count;
            }
        }
    }

    /// Appends a default table to the selected room and returns its id.
    pub fn add_table(&mut self) -> String {
        let table = Table::new(self.next_table_number());
        let id = table.id.clone();
        tracing::debug!("Adding table {} to room {}", id, self.selected_room_id());
        self.selected_room_mut().tables.push(table);
        self.mark_modified();
        id
    }

    /// Moves a table by the given deltas.
    pub fn update_table_position(&mut self, table_id: &str, delta_x: f64, delta_y: f64) {
        let Some(table) = self.selected_room_mut().table_mut(table_id) else {
            tracing::debug!("Move ignored, no table {}", table_id);
            return;
        };
        table.translate(delta_x, delta_y);
        self.mark_modified();
    }

    /// Rotates a table a quarter turn clockwise.
    pub fn rotate_table(&mut self, table_id: &str) {
        let Some(table) = self.selected_room_mut().table_mut(table_id) else {
            tracing::debug!("Rotate ignored, no table {}", table_id);
            return;
        };
        table.rotate_step();
        self.mark_modified();
    }

    /// Removes a table from the selected room.
    ///
    /// The table selection is cleared whether or not the removed table was
    /// the selected one.
    pub fn delete_table(&mut self, table_id: &str) {
        if self.selected_room_mut().remove_table(table_id).is_some() {
            tracing::debug!("Deleted table {}", table_id);
            self.mark_modified();
        }
        self.selected_table = None;
    }

    /// Flips a table between active (online) and inactive.
    pub fn toggle_table_active(&mut self, table_id: &str) {
        let Some(table) = self.selected_room_mut().table_mut(table_id) else {
            tracing::debug!("Toggle ignored, no table {}", table_id);
            return;
        };
        table.active = !table.active;
        self.mark_modified();
    }

    /// Merges the set fields of `update` into a table.
    pub fn update_table(&mut self, table_id: &str, update: &TableUpdate) {
        if update.is_empty() {
            return;
        }
        let Some(table) = self.selected_room_mut().table_mut(table_id) else {
            tracing::debug!("Update ignored, no table {}", table_id);
            return;
        };
        table.apply(update);
        self.mark_modified();
    }

    /// Copies a table under a fresh id, offset from the original, and
    /// selects the copy. Returns the new id, or `None` if the source is unknown.
    pub fn duplicate_table(&mut self, table_id: &str) -> Option<String> {
        let source = self.selected_room().table(table_id)?.clone();
        let copy = source.duplicate(self.next_table_number());
        let id = copy.id.clone();
        tracing::debug!("Duplicated table {} as {}", table_id, id);

        self.selected_room_mut().tables.push(copy);
        self.selected_table = Some(id.clone());
        self.mark_modified();
        Some(id)
    }
}
