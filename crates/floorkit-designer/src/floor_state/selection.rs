//! Table selection.

use super::FloorState;

impl FloorState {
    /// Toggles selection of a table in the selected room.
    ///
    /// Selecting the already-selected table clears the selection; any other
    /// known table replaces it. Unknown ids leave the selection untouched.
    pub fn select_table(&mut self, table_id: &str) {
        if self.is_table_selected(table_id) {
            self.selected_table = None;
            return;
        }
        if self.selected_room().table(table_id).is_none() {
            tracing::debug!("Select ignored, no table {}", table_id);
            return;
        }
        self.selected_table = Some(table_id.to_string());
    }
}
