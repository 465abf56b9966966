//! Pointer and keyboard handling for the floor canvas

use super::*;
use floorkit_designer::Point;

impl FloorCanvasView {
    /// Single presses hit the action cluster, double presses toggle selection.
    pub(super) fn handle_press(&self, n_press: i32, x: f64, y: f64) {
        let point = Point::new(x, y);
        let changed = {
            let mut state = self.state.borrow_mut();
            let mut interaction = self.interaction.borrow_mut();
            match n_press {
                1 => interaction.handle_click(&mut state, point).is_some(),
                2 => interaction.handle_double_click(&mut state, point),
                _ => false,
            }
        };
        if changed {
            self.notify_changed();
        }
        self.widget.queue_draw();
    }

    pub(super) fn handle_drag_begin(&self, x: f64, y: f64) {
        let state = self.state.borrow();
        self.interaction
            .borrow_mut()
            .begin_drag(&state, Point::new(x, y));
    }

    pub(super) fn handle_drag_update(&self, offset_x: f64, offset_y: f64) {
        let mut interaction = self.interaction.borrow_mut();
        let Some(start) = interaction.drag().map(|d| d.start) else {
            return;
        };
        interaction.update_drag(Point::new(start.x + offset_x, start.y + offset_y));
        drop(interaction);
        self.widget.queue_draw();
    }

    pub(super) fn handle_drag_end(&self) {
        let committed = {
            let mut state = self.state.borrow_mut();
            self.interaction.borrow_mut().end_drag(&mut state)
        };
        if committed {
            self.notify_changed();
        }
        self.widget.queue_draw();
    }

    /// Returns true if a drag was cancelled.
    pub(super) fn handle_escape(&self) -> bool {
        let mut interaction = self.interaction.borrow_mut();
        if !interaction.is_dragging() {
            return false;
        }
        interaction.cancel_drag();
        drop(interaction);
        self.widget.queue_draw();
        true
    }
}
