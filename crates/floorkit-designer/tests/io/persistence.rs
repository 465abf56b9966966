use floorkit_core::{FileStore, KeyValueStore, MemoryStore};
use floorkit_designer::{FloorState, RoomPersistence, TableUpdate, ROOMS_KEY};
use tempfile::TempDir;

fn populated_state() -> FloorState {
    let mut state = FloorState::new();
    state.add_table();
    state.update_table("T-01", &TableUpdate::new().with_name("Window").with_active(false));
    state.add_room();
    state.add_table();
    state.add_table();
    state.delete_table("T-02");
    state
}

#[test]
fn test_file_store_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = FileStore::new(temp_dir.path());

    let mut saved = populated_state();
    saved.save_rooms(&mut store).unwrap();
    assert!(temp_dir.path().join("rooms.json").exists());

    let mut loaded = FloorState::new();
    assert!(loaded.load_rooms(&store).unwrap());
    assert_eq!(loaded.rooms(), saved.rooms());
    assert_eq!(loaded.table_count(), 3);
    assert_eq!(loaded.selected_room_id(), "1");
}

#[test]
fn test_snapshot_uses_camel_case_fields() {
    let mut store = MemoryStore::new();
    populated_state().save_rooms(&mut store).unwrap();

    let json = store.get(ROOMS_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let table = &value[0]["tables"][0];
    assert_eq!(table["id"], "T-01");
    assert_eq!(table["name"], "Window");
    assert_eq!(table["minCovers"], 1);
    assert_eq!(table["maxCovers"], 4);
    assert_eq!(table["active"], false);
    assert_eq!(table["rotation"], 0);
    assert_eq!(value[1]["name"], "Room 2");
}

#[test]
fn test_counter_from_foreign_ids() {
    let mut store = MemoryStore::new();
    store
        .set(
            ROOMS_KEY,
            r#"[{"id":"1","name":"Main Room","tables":[
                {"id":"T-07","x":0,"y":0,"name":"a","minCovers":1,"maxCovers":2,"active":true,"width":100,"height":100,"rotation":0},
                {"id":"bar","x":0,"y":0,"name":"b","minCovers":1,"maxCovers":2,"active":true,"width":100,"height":100,"rotation":0}
            ]}]"#,
        )
        .unwrap();

    let mut state = FloorState::new();
    state.load_rooms(&store).unwrap();
    assert_eq!(state.table_count(), 7);
    assert_eq!(state.add_table(), "T-08");
}

#[test]
fn test_empty_snapshot_is_absent() {
    let mut store = MemoryStore::new();
    store.set(ROOMS_KEY, "[]").unwrap();
    assert!(RoomPersistence::load(&store).unwrap().is_none());

    let mut state = FloorState::new();
    assert!(!state.load_rooms(&store).unwrap());
    assert_eq!(state.selected_room().name, "Main Room");
}

#[test]
fn test_malformed_snapshot_keeps_state() {
    let mut store = MemoryStore::new();
    store.set(ROOMS_KEY, "{not json").unwrap();

    let mut state = FloorState::new();
    state.add_table();
    let err = state.load_rooms(&store).unwrap_err();
    assert!(err.is_json_error());
    assert_eq!(state.table_count(), 1);
    assert_eq!(state.selected_room().tables.len(), 1);
}

#[test]
fn test_counter_past_u32_range() {
    let mut store = MemoryStore::new();
    store
        .set(
            ROOMS_KEY,
            r#"[{"id":"1","name":"Main Room","tables":[
                {"id":"T-4294967295","x":0,"y":0,"name":"a","minCovers":1,"maxCovers":4294967295,"active":true,"width":100,"height":100,"rotation":0},
                {"id":"T-4294967296","x":0,"y":0,"name":"b","minCovers":1,"maxCovers":4294967295,"active":true,"width":100,"height":100,"rotation":0}
            ]}]"#,
        )
        .unwrap();

    let mut state = FloorState::new();
    state.load_rooms(&store).unwrap();
    assert_eq!(state.add_table(), "T-4294967297");
    assert_eq!(state.add_table(), "T-4294967298");

    let summary = state.selected_room().summary();
    assert_eq!(summary.max_covers, 2 * u64::from(u32::MAX) + 8);
    assert_eq!(summary.table_count, 4);
}
