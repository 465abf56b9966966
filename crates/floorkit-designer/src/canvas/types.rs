//! Canvas type definitions: DragSession, TableView, ClusterButton, ActionCluster.

use crate::actions::FloorAction;
use crate::model::{rotate_point, Point, Rect, Table};

/// Size of one square action button.
pub const CLUSTER_BUTTON_SIZE: f64 = 28.0;
/// Horizontal space between action buttons.
pub const CLUSTER_BUTTON_GAP: f64 = 8.0;
/// Padding inside the cluster background.
pub const CLUSTER_PADDING: f64 = 8.0;
/// Vertical distance between a table and its action cluster.
pub const CLUSTER_OFFSET: f64 = 12.0;
/// Spacing of the background dot grid.
pub const DEFAULT_GRID_SPACING: f64 = 20.0;
/// Opacity of tables that are not active.
pub const INACTIVE_OPACITY: f64 = 0.5;

/// An in-progress drag of one table.
///
/// The offset is visual only until the session ends.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    pub table_id: String,
    pub start: Point,
    pub current: Point,
}

impl DragSession {
    pub fn new(table_id: impl Into<String>, start: Point) -> Self {
        Self {
            table_id: table_id.into(),
            start,
            current: start,
        }
    }

    pub fn offset(&self) -> (f64, f64) {
        (self.current.x - self.start.x, self.current.y - self.start.y)
    }

    pub fn has_moved(&self) -> bool {
        let (dx, dy) = self.offset();
        dx != 0.0 || dy != 0.0
    }
}

/// A table as it should be painted right now.
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    pub table: &'a Table,
    pub offset_x: f64,
    pub offset_y: f64,
    pub selected: bool,
}

impl<'a> TableView<'a> {
    pub fn new(table: &'a Table) -> Self {
        Self {
            table,
            offset_x: 0.0,
            offset_y: 0.0,
            selected: false,
        }
    }

    /// Footprint including any live drag offset, before rotation.
    pub fn bounds(&self) -> Rect {
        let b = self.table.bounds();
        Rect::new(b.x + self.offset_x, b.y + self.offset_y, b.width, b.height)
    }

    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    pub fn rotation(&self) -> f64 {
        self.table.rotation as f64
    }

    pub fn opacity(&self) -> f64 {
        if self.table.active {
            1.0
        } else {
            INACTIVE_OPACITY
        }
    }

    /// Hit test in the table's rotated local frame.
    pub fn contains_point(&self, p: Point) -> bool {
        let local = rotate_point(p, self.center(), -self.rotation());
        self.bounds().contains(local)
    }

    /// Axis-aligned box around the rotated footprint.
    pub fn rotated_bounds(&self) -> Rect {
        let b = self.bounds();
        let center = b.center();
        let corners = [
            Point::new(b.x, b.y),
            Point::new(b.x + b.width, b.y),
            Point::new(b.x, b.y + b.height),
            Point::new(b.x + b.width, b.y + b.height),
        ]
        .map(|c| rotate_point(c, center, self.rotation()));

        let min_x = corners.iter().map(|c| c.x).fold(f64::INFINITY, f64::min);
        let max_x = corners.iter().map(|c| c.x).fold(f64::NEG_INFINITY, f64::max);
        let min_y = corners.iter().map(|c| c.y).fold(f64::INFINITY, f64::min);
        let max_y = corners.iter().map(|c| c.y).fold(f64::NEG_INFINITY, f64::max);
        Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}

/// One of the buttons shown under a selected table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClusterButton {
    Rotate,
    Duplicate,
    Delete,
}

impl ClusterButton {
    pub const ALL: [ClusterButton; 3] = [Self::Rotate, Self::Duplicate, Self::Delete];

    /// Symbolic icon drawn on the button.
    pub fn icon_name(&self) -> &'static str {
        match self {
            Self::Rotate => "object-rotate-right-symbolic",
            Self::Duplicate => "edit-copy-symbolic",
            Self::Delete => "user-trash-symbolic",
        }
    }

    pub fn tooltip(&self) -> &'static str {
        match self {
            Self::Rotate => "Rotate",
            Self::Duplicate => "Duplicate",
            Self::Delete => "Delete",
        }
    }

    pub fn action(&self, table_id: &str) -> FloorAction {
        let id = table_id.to_string();
        match self {
            Self::Rotate => FloorAction::RotateTable(id),
            Self::Duplicate => FloorAction::DuplicateTable(id),
            Self::Delete => FloorAction::DeleteTable(id),
        }
    }
}

/// Laid-out action buttons for the selected table.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionCluster {
    pub table_id: String,
    /// Background rectangle enclosing all buttons.
    pub bounds: Rect,
    pub buttons: Vec<(ClusterButton, Rect)>,
}

impl ActionCluster {
    /// Centres the cluster horizontally under `anchor`, which should be the
    /// rotated footprint of the table.
    pub fn layout(table_id: impl Into<String>, anchor: Rect) -> Self {
        let count = ClusterButton::ALL.len() as f64;
        let width = count * CLUSTER_BUTTON_SIZE
            + (count - 1.0) * CLUSTER_BUTTON_GAP
            + 2.0 * CLUSTER_PADDING;
        let height = CLUSTER_BUTTON_SIZE + 2.0 * CLUSTER_PADDING;
        let x = anchor.center().x - width / 2.0;
        let y = anchor.y + anchor.height + CLUSTER_OFFSET;

        let buttons = ClusterButton::ALL
            .iter()
            .enumerate()
            .map(|(i, button)| {
                let bx = x + CLUSTER_PADDING + i as f64 * (CLUSTER_BUTTON_SIZE + CLUSTER_BUTTON_GAP);
                let rect = Rect::new(bx, y + CLUSTER_PADDING, CLUSTER_BUTTON_SIZE, CLUSTER_BUTTON_SIZE);
                (*button, rect)
            })
            .collect();

        Self {
            table_id: table_id.into(),
            bounds: Rect::new(x, y, width, height),
            buttons,
        }
    }

    pub fn button_at(&self, p: Point) -> Option<ClusterButton> {
        self.buttons
            .iter()
            .find(|(_, rect)| rect.contains(p))
            .map(|(button, _)| *button)
    }
}
