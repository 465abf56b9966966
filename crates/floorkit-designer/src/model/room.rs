use serde::{Deserialize, Serialize};

use super::Table;

/// A named seating area holding tables in paint order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl Room {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tables: Vec::new(),
        }
    }

    pub fn table(&self, id: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.id == id)
    }

    pub fn table_mut(&mut self, id: &str) -> Option<&mut Table> {
        self.tables.iter_mut().find(|t| t.id == id)
    }

    /// Removes and returns the table with `id`.
    pub fn remove_table(&mut self, id: &str) -> Option<Table> {
        let index = self.tables.iter().position(|t| t.id == id)?;
        Some(self.tables.remove(index))
    }

    pub fn summary(&self) -> RoomSummary {
        let mut summary = RoomSummary {
            table_count: self.tables.len(),
            ..RoomSummary::default()
        };
        for table in &self.tables {
            let (min, max) = (u64::from(table.min_covers), u64::from(table.max_covers));
            summary.min_covers += min;
            summary.max_covers += max;
            if table.active {
                summary.online_min_covers += min;
                summary.online_max_covers += max;
            }
        }
        summary
    }
}

/// Capacity figures for one room, shown in the status bar.
///
/// Totals are `u64` so summing `u32` covers cannot overflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoomSummary {
    pub table_count: usize,
    pub min_covers: u64,
    pub max_covers: u64,
    /// Cover range over active tables only.
    pub online_min_covers: u64,
    pub online_max_covers: u64,
}
