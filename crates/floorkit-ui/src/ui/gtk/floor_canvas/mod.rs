//! Floor Canvas - Drawing area and interaction handling for the floor plan
//!
//! This module contains the FloorCanvasView struct which handles:
//! - Rendering tables, the dot grid, and the action cluster
//! - Double-click selection, dragging, and cluster button clicks
//! - Escape to cancel a drag in progress

mod input;
mod rendering;

use floorkit_core::{shared, shared_none, Shared, UiCallback};
use floorkit_designer::{FloorCanvas, FloorState};
use floorkit_settings::UiSettings;
use gtk4::prelude::*;
use gtk4::{DrawingArea, EventControllerKey, GestureClick, GestureDrag};
use std::rc::Rc;

pub struct FloorCanvasView {
    pub widget: DrawingArea,
    pub state: Shared<FloorState>,
    pub(crate) interaction: Shared<FloorCanvas>,
    pub(crate) show_grid: bool,
    on_changed: UiCallback,
}

impl FloorCanvasView {
    pub fn new(state: Shared<FloorState>, ui: &UiSettings) -> Rc<Self> {
        let widget = DrawingArea::builder()
            .hexpand(true)
            .vexpand(true)
            .focusable(true)
            .css_classes(vec!["floor-canvas"])
            .build();

        let canvas = Rc::new(Self {
            widget: widget.clone(),
            state,
            interaction: shared(FloorCanvas::with_grid_spacing(ui.grid_spacing)),
            show_grid: ui.show_grid,
            on_changed: shared_none(),
        });

        let canvas_draw = canvas.clone();
        widget.set_draw_func(move |drawing_area, cr, width, height| {
            let state = canvas_draw.state.borrow();
            let interaction = canvas_draw.interaction.borrow();
            let style_context = drawing_area.style_context();
            Self::draw(
                cr,
                &state,
                &interaction,
                width as f64,
                height as f64,
                canvas_draw.show_grid,
                &style_context,
            );
        });

        // Interaction controllers
        let click_gesture = GestureClick::new();
        click_gesture.set_button(1); // Left click only
        let canvas_click = canvas.clone();
        click_gesture.connect_pressed(move |_gesture, n_press, x, y| {
            canvas_click.widget.grab_focus();
            canvas_click.handle_press(n_press, x, y);
        });
        widget.add_controller(click_gesture);

        let drag_gesture = GestureDrag::new();
        drag_gesture.set_button(1); // Left click only
        let canvas_drag = canvas.clone();
        drag_gesture.connect_drag_begin(move |_gesture, x, y| {
            canvas_drag.handle_drag_begin(x, y);
        });

        let canvas_drag_update = canvas.clone();
        drag_gesture.connect_drag_update(move |_gesture, offset_x, offset_y| {
            canvas_drag_update.handle_drag_update(offset_x, offset_y);
        });

        let canvas_drag_end = canvas.clone();
        drag_gesture.connect_drag_end(move |_gesture, _offset_x, _offset_y| {
            canvas_drag_end.handle_drag_end();
        });
        widget.add_controller(drag_gesture);

        // Escape cancels a drag in progress
        let key_controller = EventControllerKey::new();
        let canvas_key = canvas.clone();
        key_controller.connect_key_pressed(move |_controller, keyval, _keycode, _modifier| {
            if keyval == gtk4::gdk::Key::Escape && canvas_key.handle_escape() {
                return glib::Propagation::Stop;
            }
            glib::Propagation::Proceed
        });
        widget.add_controller(key_controller);

        canvas
    }

    /// Registers the handler run after every committed change.
    pub fn connect_changed<F: Fn() + 'static>(&self, f: F) {
        *self.on_changed.borrow_mut() = Some(Box::new(f));
    }

    pub fn refresh(&self) {
        self.widget.queue_draw();
    }

    pub(crate) fn notify_changed(&self) {
        if let Some(callback) = self.on_changed.borrow().as_ref() {
            callback();
        }
    }
}
