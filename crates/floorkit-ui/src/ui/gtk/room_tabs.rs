//! Room tab strip: one button per room, the selected room highlighted.

use floorkit_core::{shared_none, Shared, UiCallback};
use floorkit_designer::{FloorAction, FloorState};
use gtk4::prelude::*;
use gtk4::{Box, Button, Orientation};
use std::rc::Rc;

pub struct RoomTabs {
    pub widget: Box,
    state: Shared<FloorState>,
    on_changed: UiCallback,
}

impl RoomTabs {
    pub fn new(state: Shared<FloorState>) -> Rc<Self> {
        let widget = Box::new(Orientation::Horizontal, 4);
        widget.add_css_class("room-tabs");
        widget.set_margin_start(8);
        widget.set_margin_end(8);
        widget.set_margin_top(4);
        widget.set_margin_bottom(4);

        let tabs = Rc::new(Self {
            widget,
            state,
            on_changed: shared_none(),
        });
        tabs.refresh();
        tabs
    }

    /// Registers the handler run after the selected room changes.
    pub fn connect_changed<F: Fn() + 'static>(&self, f: F) {
        *self.on_changed.borrow_mut() = Some(std::boxed::Box::new(f));
    }

    /// Rebuilds the buttons from the current room list.
    pub fn refresh(&self) {
        while let Some(child) = self.widget.first_child() {
            self.widget.remove(&child);
        }

        let state = self.state.borrow();
        let selected = state.selected_room_id().to_string();
        for room in state.rooms() {
            let button = Button::with_label(&room.name);
            button.add_css_class("room-tab");
            if room.id == selected {
                button.add_css_class("room-tab-selected");
            }

            let room_id = room.id.clone();
            let state_click = self.state.clone();
            let on_changed = self.on_changed.clone();
            button.connect_clicked(move |_| {
                state_click
                    .borrow_mut()
                    .dispatch(FloorAction::SelectRoom(room_id.clone()));
                if let Some(callback) = on_changed.borrow().as_ref() {
                    callback();
                }
            });
            self.widget.append(&button);
        }
    }
}
