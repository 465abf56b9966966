//! Actions accepted by [`FloorState::dispatch`](crate::FloorState::dispatch).
//!
//! UI widgets build these instead of calling state methods directly, so a
//! single place sees every mutation.

use crate::model::TableUpdate;

/// A single user intent against the floor plan.
#[derive(Debug, Clone, PartialEq)]
pub enum FloorAction {
    AddTable,
    AddRoom,
    UpdateTablePosition {
        table_id: String,
        delta_x: f64,
        delta_y: f64,
    },
    SelectTable(String),
    SelectRoom(String),
    RotateTable(String),
    DeleteTable(String),
    ToggleTableActive(String),
    UpdateTable {
        table_id: String,
        update: TableUpdate,
    },
    DuplicateTable(String),
}

impl FloorAction {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddTable => "add_table",
            Self::AddRoom => "add_room",
            Self::UpdateTablePosition { .. } => "update_table_position",
            Self::SelectTable(_) => "select_table",
            Self::SelectRoom(_) => "select_room",
            Self::RotateTable(_) => "rotate_table",
            Self::DeleteTable(_) => "delete_table",
            Self::ToggleTableActive(_) => "toggle_table_active",
            Self::UpdateTable { .. } => "update_table",
            Self::DuplicateTable(_) => "duplicate_table",
        }
    }

    pub fn move_table(table_id: impl Into<String>, delta_x: f64, delta_y: f64) -> Self {
        Self::UpdateTablePosition {
            table_id: table_id.into(),
            delta_x,
            delta_y,
        }
    }

    pub fn update_table(table_id: impl Into<String>, update: TableUpdate) -> Self {
        Self::UpdateTable {
            table_id: table_id.into(),
            update,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(FloorAction::AddTable.name(), "add_table");
        assert_eq!(FloorAction::move_table("T-01", 1.0, 2.0).name(), "update_table_position");
        assert_eq!(FloorAction::DuplicateTable("T-01".into()).name(), "duplicate_table");
    }
}
