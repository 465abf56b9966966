use anyhow::Context;
use floorkit_core::constants::APPLICATION_ID;
use floorkit_core::{shared, FileStore, KeyValueStore, Shared};
use floorkit_designer::{FloorAction, FloorState};
use floorkit_settings::{Config, SettingsManager, StorageSettings, Theme};
use gtk4::prelude::*;
use gtk4::{ApplicationWindow, Box, Button, CssProvider, HeaderBar, Orientation};
use libadwaita::prelude::*;
use libadwaita::{Application as AdwApplication, ColorScheme, StyleManager, Toast, ToastOverlay};
use std::rc::Rc;

use crate::ui::gtk::{FloorCanvasView, RoomTabs, StatusBar, TableDetailsPanel};

const SAVE_SUCCESS_MESSAGE: &str = "Room saved successfully!";
const WINDOW_TITLE: &str = "FloorKit";

pub fn main() {
    let app = AdwApplication::builder()
        .application_id(APPLICATION_ID)
        .build();

    app.connect_startup(|_| {
        load_css();
    });

    app.connect_activate(|app| {
        let config = SettingsManager::load();
        apply_theme(config.ui.theme);
        build_window(app, &config);
    });

    app.run();
}

/// Opens the store floor plans are saved to.
pub fn open_store(settings: &StorageSettings) -> anyhow::Result<FileStore> {
    match &settings.directory {
        Some(dir) => Ok(FileStore::new(dir)),
        None => FileStore::in_data_dir().context("Failed to locate floor plan storage"),
    }
}

/// Restores saved rooms into `state` if configured to. Failures are logged
/// and leave the initial state in place.
pub fn restore_rooms(state: &mut FloorState, store: &dyn KeyValueStore, settings: &StorageSettings) {
    if !settings.load_on_startup {
        return;
    }
    if let Err(e) = state.load_rooms(store) {
        tracing::warn!("Failed to load saved rooms: {}", e);
    }
}

fn apply_theme(theme: Theme) {
    let scheme = match theme {
        Theme::System => ColorScheme::Default,
        Theme::Light => ColorScheme::ForceLight,
        Theme::Dark => ColorScheme::ForceDark,
    };
    StyleManager::default().set_color_scheme(scheme);
}

fn build_window(app: &AdwApplication, config: &Config) {
    let state = shared(FloorState::new());

    let store: Option<Shared<FileStore>> = match open_store(&config.storage) {
        Ok(store) => {
            tracing::info!("Floor plans stored in {}", store.dir().display());
            restore_rooms(&mut state.borrow_mut(), &store, &config.storage);
            Some(shared(store))
        }
        Err(e) => {
            tracing::error!("{:#}", e);
            None
        }
    };

    // Build UI
    let window = ApplicationWindow::builder()
        .application(app)
        .title(WINDOW_TITLE)
        .default_width(config.ui.window_width as i32)
        .default_height(config.ui.window_height as i32)
        .build();

    // Header Bar
    let header = HeaderBar::new();
    let add_table_btn = Button::with_label("Add Table");
    let add_room_btn = Button::with_label("Add Room");
    let save_btn = Button::with_label("Save Room");
    save_btn.add_css_class("suggested-action");
    header.pack_start(&add_table_btn);
    header.pack_start(&add_room_btn);
    header.pack_end(&save_btn);
    window.set_titlebar(Some(&header));

    let room_tabs = RoomTabs::new(state.clone());
    let canvas = FloorCanvasView::new(state.clone(), &config.ui);
    let details = TableDetailsPanel::new(state.clone());
    let status_bar = StatusBar::new();

    // Content Area
    let main_box = Box::new(Orientation::Vertical, 0);
    main_box.append(&room_tabs.widget);
    let content_box = Box::new(Orientation::Horizontal, 0);
    content_box.append(&canvas.widget);
    content_box.append(&details.widget);
    main_box.append(&content_box);
    main_box.append(&status_bar.widget);

    let toast_overlay = ToastOverlay::new();
    toast_overlay.set_child(Some(&main_box));
    window.set_child(Some(&toast_overlay));

    let refresh: Rc<dyn Fn()> = {
        let state = state.clone();
        let window = window.clone();
        let room_tabs = room_tabs.clone();
        let canvas = canvas.clone();
        let details = details.clone();
        let status_bar = status_bar.clone();
        Rc::new(move || {
            room_tabs.refresh();
            canvas.refresh();
            details.refresh();
            let state = state.borrow();
            status_bar.update(&state);
            let title = if state.is_modified() {
                format!("{} *", WINDOW_TITLE)
            } else {
                WINDOW_TITLE.to_string()
            };
            window.set_title(Some(&title));
        })
    };

    let refresh_canvas = refresh.clone();
    canvas.connect_changed(move || refresh_canvas());
    let refresh_tabs = refresh.clone();
    room_tabs.connect_changed(move || refresh_tabs());
    let refresh_details = refresh.clone();
    details.connect_changed(move || refresh_details());

    let state_add = state.clone();
    let refresh_add = refresh.clone();
    add_table_btn.connect_clicked(move |_| {
        state_add.borrow_mut().dispatch(FloorAction::AddTable);
        refresh_add();
    });

    let state_room = state.clone();
    let refresh_room = refresh.clone();
    add_room_btn.connect_clicked(move |_| {
        state_room.borrow_mut().dispatch(FloorAction::AddRoom);
        refresh_room();
    });

    let state_save = state.clone();
    let refresh_save = refresh.clone();
    let overlay_save = toast_overlay.clone();
    save_btn.connect_clicked(move |_| {
        let message = match &store {
            Some(store) => match state_save.borrow_mut().save_rooms(&mut *store.borrow_mut()) {
                Ok(()) => SAVE_SUCCESS_MESSAGE.to_string(),
                Err(e) => {
                    tracing::error!("Failed to save rooms: {}", e);
                    format!("Could not save rooms: {}", e)
                }
            },
            None => "No storage location available".to_string(),
        };
        overlay_save.add_toast(Toast::new(&message));
        refresh_save();
    });

    // Ctrl+S saves
    let save_action = gtk4::gio::SimpleAction::new("save-room", None);
    let save_btn_action = save_btn.clone();
    save_action.connect_activate(move |_, _| {
        save_btn_action.emit_clicked();
    });
    window.add_action(&save_action);
    app.set_accels_for_action("win.save-room", &["<Control>s"]);

    refresh();
    window.present();
}

fn load_css() {
    let Some(display) = gtk4::gdk::Display::default() else {
        tracing::warn!("No display available, skipping stylesheet");
        return;
    };
    let provider = CssProvider::new();
    provider.load_from_data(include_str!("ui/gtk/style.css"));
    gtk4::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use floorkit_core::MemoryStore;
    use tempfile::TempDir;

    #[test]
    fn test_open_store_uses_override() {
        let temp_dir = TempDir::new().unwrap();
        let settings = StorageSettings {
            directory: Some(temp_dir.path().join("plans")),
            load_on_startup: true,
        };
        let store = open_store(&settings).unwrap();
        assert_eq!(store.dir(), temp_dir.path().join("plans"));
    }

    #[test]
    fn test_restore_rooms_respects_setting() {
        let mut saved = FloorState::new();
        saved.add_table();
        let mut store = MemoryStore::new();
        saved.save_rooms(&mut store).unwrap();

        let mut state = FloorState::new();
        let settings = StorageSettings {
            directory: None,
            load_on_startup: false,
        };
        restore_rooms(&mut state, &store, &settings);
        assert!(state.selected_room().tables.is_empty());

        restore_rooms(&mut state, &store, &StorageSettings::default());
        assert_eq!(state.selected_room().tables.len(), 1);
    }

    #[test]
    fn test_restore_rooms_survives_bad_snapshot() {
        let mut store = MemoryStore::new();
        store.set(floorkit_designer::ROOMS_KEY, "[{").unwrap();

        let mut state = FloorState::new();
        restore_rooms(&mut state, &store, &StorageSettings::default());
        assert_eq!(state.selected_room().name, "Main Room");
    }
}
