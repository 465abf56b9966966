//! Floor state integration tests

use floorkit_core::MemoryStore;
use floorkit_designer::{FloorAction, FloorState};

#[test]
fn test_table_lifecycle() {
    let mut state = FloorState::new();

    state.dispatch(FloorAction::AddTable);
    let table = state.table("T-01").unwrap();
    assert_eq!((table.x, table.y), (100.0, 100.0));
    assert_eq!(state.table_count(), 1);

    state.dispatch(FloorAction::DuplicateTable("T-01".into()));
    let copy = state.selected_table().unwrap();
    assert_eq!(copy.id, "T-02");
    assert_eq!((copy.x, copy.y), (140.0, 140.0));

    state.dispatch(FloorAction::RotateTable("T-02".into()));
    assert_eq!(state.table("T-02").unwrap().rotation, 90);

    state.dispatch(FloorAction::DeleteTable("T-02".into()));
    let ids: Vec<_> = state.selected_room().tables.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["T-01"]);
    assert!(state.selected_table().is_none());
}

#[test]
fn test_rooms_save_and_reload() {
    let mut state = FloorState::new();
    state.dispatch(FloorAction::AddTable);
    state.dispatch(FloorAction::AddRoom);
    state.dispatch(FloorAction::AddTable);
    state.dispatch(FloorAction::move_table("T-02", 15.0, -5.0));
    assert!(state.is_modified());

    let mut store = MemoryStore::new();
    state.save_rooms(&mut store).unwrap();
    assert!(!state.is_modified());

    let mut restored = FloorState::new();
    restored.load_rooms(&store).unwrap();
    assert_eq!(restored.rooms().len(), 2);
    restored.dispatch(FloorAction::SelectRoom("2".into()));
    let table = restored.table("T-02").unwrap();
    assert_eq!((table.x, table.y), (115.0, 95.0));
    assert_eq!(restored.selected_room().name, "Room 2");
}
