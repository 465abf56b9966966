use floorkit_designer::{FloorState, RoomSummary};
use gtk4::prelude::*;
use gtk4::{Align, Box, Label, Orientation};

#[derive(Clone)]
pub struct StatusBar {
    pub widget: Box,
    room_label: Label,
    tables_label: Label,
    covers_label: Label,
    online_label: Label,
    modified_label: Label,
}

impl StatusBar {
    pub fn new() -> Self {
        let widget = Box::new(Orientation::Horizontal, 0);
        widget.set_height_request(30);
        widget.add_css_class("status-bar");
        widget.set_margin_start(5);
        widget.set_margin_end(5);
        widget.set_margin_top(2);
        widget.set_margin_bottom(2);

        // Left side container
        let left_box = Box::new(Orientation::Horizontal, 10);
        left_box.set_hexpand(true);
        left_box.set_halign(Align::Start);
        left_box.set_valign(Align::Center);

        let room_label = Label::new(None);
        room_label.add_css_class("status-text");
        left_box.append(&room_label);

        left_box.append(&Label::new(Some("|")));

        let tables_label = Label::new(None);
        tables_label.add_css_class("status-text");
        left_box.append(&tables_label);

        left_box.append(&Label::new(Some("|")));

        let covers_label = Label::new(None);
        covers_label.add_css_class("status-text");
        left_box.append(&covers_label);

        left_box.append(&Label::new(Some("|")));

        let online_label = Label::new(None);
        online_label.add_css_class("status-text");
        left_box.append(&online_label);

        widget.append(&left_box);

        // Right side container
        let right_box = Box::new(Orientation::Horizontal, 10);
        right_box.set_halign(Align::End);
        right_box.set_valign(Align::Center);

        let modified_label = Label::new(None);
        modified_label.add_css_class("status-text");
        modified_label.add_css_class("dim-label");
        right_box.append(&modified_label);

        widget.append(&right_box);

        Self {
            widget,
            room_label,
            tables_label,
            covers_label,
            online_label,
            modified_label,
        }
    }

    pub fn update(&self, state: &FloorState) {
        let summary = state.room_summary();
        self.room_label.set_text(&state.selected_room().name);
        self.tables_label.set_text(&tables_text(&summary));
        self.covers_label.set_text(&covers_text(&summary));
        self.online_label.set_text(&online_text(&summary));
        self.modified_label.set_text(if state.is_modified() {
            "Unsaved changes"
        } else {
            ""
        });
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

fn tables_text(summary: &RoomSummary) -> String {
    match summary.table_count {
        1 => "1 table".to_string(),
        n => format!("{} tables", n),
    }
}

fn covers_text(summary: &RoomSummary) -> String {
    format!("Covers: {}-{}", summary.min_covers, summary.max_covers)
}

fn online_text(summary: &RoomSummary) -> String {
    format!(
        "Online: {}-{}",
        summary.online_min_covers, summary.online_max_covers
    )
}
