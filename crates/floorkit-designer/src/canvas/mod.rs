//! Canvas interaction model for the floor plan.
//!
//! Everything here is toolkit-free: the UI forwards pointer events in
//! canvas coordinates and paints what [`FloorCanvas::paint_order`] and
//! [`FloorCanvas::action_cluster`] describe.

mod types;

pub use types::{
    ActionCluster, ClusterButton, DragSession, TableView, CLUSTER_BUTTON_GAP, CLUSTER_BUTTON_SIZE,
    CLUSTER_OFFSET, CLUSTER_PADDING, DEFAULT_GRID_SPACING, INACTIVE_OPACITY,
};

use crate::actions::FloorAction;
use crate::floor_state::FloorState;
use crate::model::Point;

/// Pointer interaction state layered over a [`FloorState`].
#[derive(Debug, Clone)]
pub struct FloorCanvas {
    drag: Option<DragSession>,
    grid_spacing: f64,
}

impl FloorCanvas {
    pub fn new() -> Self {
        Self::with_grid_spacing(DEFAULT_GRID_SPACING)
    }

    pub fn with_grid_spacing(grid_spacing: f64) -> Self {
        Self {
            drag: None,
            grid_spacing,
        }
    }

    pub fn grid_spacing(&self) -> f64 {
        self.grid_spacing
    }

    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Tables of the selected room in paint order, with the live drag offset
    /// applied. The selected table comes last so it is drawn on top.
    pub fn paint_order<'a>(&self, state: &'a FloorState) -> Vec<TableView<'a>> {
        let mut views: Vec<TableView<'a>> = state
            .selected_room()
            .tables
            .iter()
            .map(|table| {
                let mut view = TableView::new(table);
                view.selected = state.is_table_selected(&table.id);
                if let Some(drag) = self.drag.as_ref().filter(|d| d.table_id == table.id) {
                    (view.offset_x, view.offset_y) = drag.offset();
                }
                view
            })
            .collect();

        if let Some(index) = views.iter().position(|v| v.selected) {
            let selected = views.remove(index);
            views.push(selected);
        }
        views
    }

    /// Id of the topmost table under `p`.
    pub fn table_at(&self, state: &FloorState, p: Point) -> Option<String> {
        self.paint_order(state)
            .iter()
            .rev()
            .find(|view| view.contains_point(p))
            .map(|view| view.table.id.clone())
    }

    /// Action buttons for the selected table, if any.
    pub fn action_cluster(&self, state: &FloorState) -> Option<ActionCluster> {
        let table = state.selected_table()?;
        let anchor = TableView::new(table).rotated_bounds();
        Some(ActionCluster::layout(table.id.clone(), anchor))
    }

    /// Starts dragging the table under `p`.
    ///
    /// Returns false when there is no table there or it is the selected one,
    /// which stays put while its action cluster is shown.
    pub fn begin_drag(&mut self, state: &FloorState, p: Point) -> bool {
        let Some(table_id) = self.table_at(state, p) else {
            return false;
        };
        if state.is_table_selected(&table_id) {
            return false;
        }
        tracing::trace!("Drag started on {}", table_id);
        self.drag = Some(DragSession::new(table_id, p));
        true
    }

    /// Moves the live drag offset. Committed state is untouched.
    pub fn update_drag(&mut self, p: Point) {
        if let Some(drag) = self.drag.as_mut() {
            drag.current = p;
        }
    }

    /// Ends the drag and commits its final offset as one position update.
    ///
    /// Returns true if a move was applied.
    pub fn end_drag(&mut self, state: &mut FloorState) -> bool {
        let Some(drag) = self.drag.take() else {
            return false;
        };
        if !drag.has_moved() {
            return false;
        }
        let (dx, dy) = drag.offset();
        state.dispatch(FloorAction::move_table(drag.table_id, dx, dy));
        true
    }

    /// Drops the drag without touching state.
    pub fn cancel_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            tracing::trace!("Drag cancelled on {}", drag.table_id);
        }
    }

    /// Toggles selection of the table under `p`.
    pub fn handle_double_click(&mut self, state: &mut FloorState, p: Point) -> bool {
        self.drag = None;
        let Some(table_id) = self.table_at(state, p) else {
            return false;
        };
        state.dispatch(FloorAction::SelectTable(table_id));
        true
    }

    /// Dispatches the cluster action under `p`, if any.
    pub fn handle_click(&mut self, state: &mut FloorState, p: Point) -> Option<ClusterButton> {
        let cluster = self.action_cluster(state)?;
        let button = cluster.button_at(p)?;
        state.dispatch(button.action(&cluster.table_id));
        Some(button)
    }

    /// Dot positions covering a `width` x `height` area.
    pub fn grid_points(&self, width: f64, height: f64) -> Vec<Point> {
        if self.grid_spacing.is_nan() || self.grid_spacing <= 0.0 {
            return Vec::new();
        }
        let mut points = Vec::new();
        let mut y = 0.0;
        while y <= height {
            let mut x = 0.0;
            while x <= width {
                points.push(Point::new(x, y));
                x += self.grid_spacing;
            }
            y += self.grid_spacing;
        }
        points
    }
}

impl Default for FloorCanvas {
    fn default() -> Self {
        Self::new()
    }
}
