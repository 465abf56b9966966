use floorkit_designer::{FloorAction, FloorState, TableUpdate};

#[test]
fn test_room_summary_tracks_active_tables() {
    let mut state = FloorState::new();
    state.add_table();
    state.add_table();
    state.update_table("T-02", &TableUpdate::new().with_covers(2, 6));
    state.toggle_table_active("T-01");

    let summary = state.room_summary();
    assert_eq!(summary.table_count, 2);
    assert_eq!(summary.min_covers, 3);
    assert_eq!(summary.max_covers, 10);
    assert_eq!(summary.online_min_covers, 2);
    assert_eq!(summary.online_max_covers, 6);
}

#[test]
fn test_update_table_merges_fields() {
    let mut state = FloorState::new();
    let id = state.add_table();
    state.dispatch(FloorAction::update_table(
        id.clone(),
        TableUpdate::new().with_name("Window").with_rotation(-90),
    ));

    let table = state.table(&id).unwrap();
    assert_eq!(table.name, "Window");
    assert_eq!(table.rotation, 270);
    assert_eq!(table.id, "T-01");
    assert_eq!((table.min_covers, table.max_covers), (1, 4));
    assert_eq!((table.x, table.y), (100.0, 100.0));
}

#[test]
fn test_delete_unselected_table_clears_selection() {
    let mut state = FloorState::new();
    state.add_table();
    state.add_table();
    state.select_table("T-01");
    state.delete_table("T-02");

    assert!(state.selected_table().is_none());
    assert!(state.table("T-01").is_some());
}

#[test]
fn test_duplicate_keeps_other_fields() {
    let mut state = FloorState::new();
    state.add_table();
    state.update_table(
        "T-01",
        &TableUpdate::new().with_covers(2, 8).with_active(false).with_rotation(90),
    );
    let copy_id = state.duplicate_table("T-01").unwrap();

    let original = state.table("T-01").unwrap().clone();
    let copy = state.table(&copy_id).unwrap();
    assert_eq!(copy.name, "T-02");
    assert_eq!((copy.x, copy.y), (original.x + 40.0, original.y + 40.0));
    assert_eq!((copy.min_covers, copy.max_covers), (2, 8));
    assert!(!copy.active);
    assert_eq!(copy.rotation, 90);
    assert_eq!(copy.width, original.width);
}

#[test]
fn test_selection_is_not_a_modification() {
    let mut state = FloorState::new();
    state.dispatch(FloorAction::SelectRoom("1".into()));
    state.dispatch(FloorAction::SelectTable("T-01".into()));
    assert!(!state.is_modified());
}

#[test]
fn test_actions_target_selected_room_only() {
    let mut state = FloorState::new();
    state.dispatch(FloorAction::AddTable);
    state.dispatch(FloorAction::AddRoom);
    state.dispatch(FloorAction::DeleteTable("T-01".into()));
    state.dispatch(FloorAction::SelectRoom("1".into()));

    assert_eq!(state.selected_room().tables.len(), 1);
}
