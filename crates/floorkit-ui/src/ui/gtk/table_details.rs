//! Detail panel for the selected table.
//!
//! Name and cover fields are validated on Save and errors are shown under
//! each field. Steppers and the active switch apply immediately.

use floorkit_core::{shared, shared_none, Shared, UiCallback};
use floorkit_designer::{step_covers, FloorAction, FloorState, FormErrors, FormField, TableForm};
use gtk4::prelude::*;
use gtk4::{Align, Box, Button, Entry, Frame, Grid, Label, Orientation, Switch};
use std::cell::RefCell;
use std::rc::Rc;

/// Entry plus inline error label for one form field.
struct FieldRow {
    entry: Entry,
    error: Label,
}

impl FieldRow {
    fn new() -> Self {
        let entry = Entry::new();
        entry.set_hexpand(true);
        let error = Label::new(None);
        error.set_halign(Align::Start);
        error.set_wrap(true);
        error.add_css_class("error");
        error.add_css_class("caption");
        error.set_visible(false);
        Self { entry, error }
    }

    fn show_error(&self, message: Option<String>) {
        match message {
            Some(text) => {
                self.error.set_text(&text);
                self.error.set_visible(true);
                self.entry.add_css_class("error");
            }
            None => {
                self.error.set_text("");
                self.error.set_visible(false);
                self.entry.remove_css_class("error");
            }
        }
    }
}

pub struct TableDetailsPanel {
    pub widget: Frame,
    state: Shared<FloorState>,
    name: FieldRow,
    min_covers: FieldRow,
    max_covers: FieldRow,
    active_switch: Switch,
    /// Id of the table the fields were last filled from.
    bound_table: RefCell<Option<String>>,
    updating: Shared<bool>,
    on_changed: UiCallback,
}

impl TableDetailsPanel {
    pub fn new(state: Shared<FloorState>) -> Rc<Self> {
        let widget = Frame::new(Some("Table Details"));
        widget.set_width_request(280);
        widget.set_margin_start(8);
        widget.set_margin_end(8);
        widget.set_margin_top(8);
        widget.set_valign(Align::Start);

        let grid = Grid::builder()
            .row_spacing(8)
            .column_spacing(8)
            .margin_start(8)
            .margin_end(8)
            .margin_top(8)
            .margin_bottom(8)
            .build();

        let name = FieldRow::new();
        let min_covers = FieldRow::new();
        let max_covers = FieldRow::new();
        let (min_dec, min_inc) = (Button::with_label("−"), Button::with_label("+"));
        let (max_dec, max_inc) = (Button::with_label("−"), Button::with_label("+"));

        attach_row(&grid, 0, "Name:", &name, None);
        attach_row(&grid, 2, "Min covers:", &min_covers, Some((&min_dec, &min_inc)));
        attach_row(&grid, 4, "Max covers:", &max_covers, Some((&max_dec, &max_inc)));

        let active_label = Label::new(Some("Online:"));
        active_label.set_halign(Align::Start);
        let active_switch = Switch::builder().halign(Align::Start).build();
        grid.attach(&active_label, 0, 6, 1, 1);
        grid.attach(&active_switch, 1, 6, 3, 1);

        let save_btn = Button::with_label("Save");
        save_btn.add_css_class("suggested-action");
        save_btn.set_halign(Align::End);
        grid.attach(&save_btn, 0, 7, 4, 1);

        widget.set_child(Some(&grid));
        widget.set_visible(false);

        let panel = Rc::new(Self {
            widget,
            state,
            name,
            min_covers,
            max_covers,
            active_switch,
            bound_table: RefCell::new(None),
            updating: shared(false),
            on_changed: shared_none(),
        });

        let panel_save = panel.clone();
        save_btn.connect_clicked(move |_| panel_save.submit());

        // Enter in any field submits
        for row in [&panel.name, &panel.min_covers, &panel.max_covers] {
            let panel_activate = panel.clone();
            row.entry.connect_activate(move |_| panel_activate.submit());
        }

        for (button, field, step) in [
            (&min_dec, FormField::MinCovers, -1),
            (&min_inc, FormField::MinCovers, 1),
            (&max_dec, FormField::MaxCovers, -1),
            (&max_inc, FormField::MaxCovers, 1),
        ] {
            let panel_step = panel.clone();
            button.connect_clicked(move |_| panel_step.step(field, step));
        }

        let panel_active = panel.clone();
        panel.active_switch.connect_active_notify(move |_| {
            if *panel_active.updating.borrow() {
                return;
            }
            panel_active.toggle_active();
        });

        panel
    }

    /// Registers the handler run after the panel changes a table.
    pub fn connect_changed<F: Fn() + 'static>(&self, f: F) {
        *self.on_changed.borrow_mut() = Some(std::boxed::Box::new(f));
    }

    /// Shows the panel for the selected table, or hides it.
    ///
    /// Text fields are only refilled when a different table gets selected,
    /// so unsaved typing survives unrelated changes elsewhere.
    pub fn refresh(&self) {
        let state = self.state.borrow();
        let Some(table) = state.selected_table() else {
            self.widget.set_visible(false);
            *self.bound_table.borrow_mut() = None;
            return;
        };

        let rebind = self.bound_table.borrow().as_deref() != Some(table.id.as_str());
        if rebind {
            self.fill(&TableForm::from_table(table));
            *self.bound_table.borrow_mut() = Some(table.id.clone());
        }
        self.set_active(table.active);
        self.widget.set_visible(true);
    }

    fn fill(&self, form: &TableForm) {
        *self.updating.borrow_mut() = true;
        self.name.entry.set_text(&form.name);
        self.min_covers.entry.set_text(&form.min_covers);
        self.max_covers.entry.set_text(&form.max_covers);
        *self.updating.borrow_mut() = false;
        self.show_errors(&FormErrors::default());
    }

    fn set_active(&self, active: bool) {
        if self.active_switch.is_active() == active {
            return;
        }
        *self.updating.borrow_mut() = true;
        self.active_switch.set_active(active);
        *self.updating.borrow_mut() = false;
    }

    fn read_form(&self) -> Option<TableForm> {
        let table_id = self.bound_table.borrow().clone()?;
        Some(TableForm {
            table_id,
            name: self.name.entry.text().to_string(),
            min_covers: self.min_covers.entry.text().to_string(),
            max_covers: self.max_covers.entry.text().to_string(),
            active: self.active_switch.is_active(),
        })
    }

    fn submit(&self) {
        let Some(form) = self.read_form() else {
            return;
        };
        match form.submit() {
            Ok(update) => {
                self.show_errors(&FormErrors::default());
                self.state
                    .borrow_mut()
                    .dispatch(FloorAction::update_table(form.table_id, update));
                self.notify_changed();
            }
            Err(errors) => {
                tracing::debug!("Table form rejected: {}", errors);
                self.show_errors(&errors);
            }
        }
    }

    fn step(&self, field: FormField, step: i64) {
        let Some(table_id) = self.bound_table.borrow().clone() else {
            return;
        };
        let value = {
            let mut state = self.state.borrow_mut();
            let Some(update) = state.table(&table_id).and_then(|t| step_covers(t, field, step))
            else {
                return;
            };
            state.dispatch(FloorAction::update_table(table_id.clone(), update));
            state.table(&table_id).map(|t| match field {
                FormField::MinCovers => t.min_covers,
                _ => t.max_covers,
            })
        };

        if let Some(value) = value {
            let row = match field {
                FormField::MinCovers => &self.min_covers,
                _ => &self.max_covers,
            };
            *self.updating.borrow_mut() = true;
            row.entry.set_text(&value.to_string());
            *self.updating.borrow_mut() = false;
            row.show_error(None);
        }
        self.notify_changed();
    }

    fn toggle_active(&self) {
        let Some(table_id) = self.bound_table.borrow().clone() else {
            return;
        };
        self.state
            .borrow_mut()
            .dispatch(FloorAction::ToggleTableActive(table_id));
        self.notify_changed();
    }

    fn show_errors(&self, errors: &FormErrors) {
        for (field, row) in [
            (FormField::Name, &self.name),
            (FormField::MinCovers, &self.min_covers),
            (FormField::MaxCovers, &self.max_covers),
        ] {
            row.show_error(errors.for_field(field).map(|e| e.to_string()));
        }
    }

    fn notify_changed(&self) {
        if let Some(callback) = self.on_changed.borrow().as_ref() {
            callback();
        }
    }
}

fn attach_row(
    grid: &Grid,
    row: i32,
    title: &str,
    field: &FieldRow,
    steppers: Option<(&Button, &Button)>,
) {
    let label = Label::new(Some(title));
    label.set_halign(Align::Start);
    grid.attach(&label, 0, row, 1, 1);

    match steppers {
        Some((dec, inc)) => {
            let entry_box = Box::new(Orientation::Horizontal, 4);
            field.entry.set_width_chars(4);
            entry_box.append(&field.entry);
            entry_box.append(dec);
            entry_box.append(inc);
            grid.attach(&entry_box, 1, row, 3, 1);
        }
        None => grid.attach(&field.entry, 1, row, 3, 1),
    }
    grid.attach(&field.error, 1, row + 1, 3, 1);
}
