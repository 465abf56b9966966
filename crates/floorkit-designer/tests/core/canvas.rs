use floorkit_designer::{ClusterButton, FloorAction, FloorCanvas, FloorState, Point, TableUpdate};

fn state_with_tables(count: usize) -> FloorState {
    let mut state = FloorState::new();
    for _ in 0..count {
        state.add_table();
    }
    state
}

#[test]
fn test_table_at_picks_topmost() {
    let state = state_with_tables(2);
    let canvas = FloorCanvas::new();
    // Both default tables overlap at (100,100)
    assert_eq!(canvas.table_at(&state, Point::new(150.0, 150.0)).as_deref(), Some("T-02"));
    assert_eq!(canvas.table_at(&state, Point::new(50.0, 50.0)), None);
}

#[test]
fn test_selected_table_paints_last() {
    let mut state = state_with_tables(2);
    state.select_table("T-01");
    let canvas = FloorCanvas::new();

    let order: Vec<_> = canvas
        .paint_order(&state)
        .iter()
        .map(|v| v.table.id.clone())
        .collect();
    assert_eq!(order, vec!["T-02", "T-01"]);
    assert_eq!(canvas.table_at(&state, Point::new(150.0, 150.0)).as_deref(), Some("T-01"));
}

#[test]
fn test_hit_test_respects_rotation() {
    let mut state = FloorState::new();
    state.add_table();
    state.dispatch(FloorAction::update_table(
        "T-01",
        TableUpdate {
            width: Some(200.0),
            height: Some(50.0),
            ..TableUpdate::new().with_position(0.0, 0.0).with_rotation(90)
        },
    ));
    let canvas = FloorCanvas::new();

    // Rotated a quarter turn about (100, 25): spans x 75..125, y -75..125
    assert_eq!(canvas.table_at(&state, Point::new(100.0, 110.0)).as_deref(), Some("T-01"));
    assert_eq!(canvas.table_at(&state, Point::new(180.0, 25.0)), None);
}

#[test]
fn test_drag_commits_final_delta_once() {
    let mut state = state_with_tables(1);
    let mut canvas = FloorCanvas::new();

    assert!(canvas.begin_drag(&state, Point::new(120.0, 120.0)));
    canvas.update_drag(Point::new(130.0, 125.0));
    canvas.update_drag(Point::new(150.0, 140.0));

    // Live offset is visual only
    assert_eq!(state.table("T-01").unwrap().x, 100.0);
    let views = canvas.paint_order(&state);
    assert_eq!(views[0].bounds().x, 130.0);

    assert!(canvas.end_drag(&mut state));
    let table = state.table("T-01").unwrap();
    assert_eq!((table.x, table.y), (130.0, 120.0));
    assert!(!canvas.is_dragging());
    assert!(!canvas.end_drag(&mut state));
}

#[test]
fn test_cancel_drag_applies_nothing() {
    let mut state = state_with_tables(1);
    let mut canvas = FloorCanvas::new();
    canvas.begin_drag(&state, Point::new(120.0, 120.0));
    canvas.update_drag(Point::new(300.0, 300.0));
    canvas.cancel_drag();

    assert!(!canvas.end_drag(&mut state));
    assert_eq!(state.table("T-01").unwrap().x, 100.0);
}

#[test]
fn test_zero_drag_commits_nothing() {
    let mut state = state_with_tables(1);
    let before = state.rooms().to_vec();
    let mut canvas = FloorCanvas::new();
    canvas.begin_drag(&state, Point::new(120.0, 120.0));
    assert!(!canvas.end_drag(&mut state));
    assert_eq!(state.rooms(), before.as_slice());
}

#[test]
fn test_selected_table_cannot_be_dragged() {
    let mut state = state_with_tables(1);
    state.select_table("T-01");
    let mut canvas = FloorCanvas::new();
    assert!(!canvas.begin_drag(&state, Point::new(120.0, 120.0)));
    assert!(!canvas.begin_drag(&state, Point::new(10.0, 10.0)));
}

#[test]
fn test_double_click_toggles_selection() {
    let mut state = state_with_tables(1);
    let mut canvas = FloorCanvas::new();
    assert!(canvas.handle_double_click(&mut state, Point::new(150.0, 150.0)));
    assert_eq!(state.selected_table_id(), Some("T-01"));
    canvas.handle_double_click(&mut state, Point::new(150.0, 150.0));
    assert_eq!(state.selected_table_id(), None);
    assert!(!canvas.handle_double_click(&mut state, Point::new(5.0, 5.0)));
}

#[test]
fn test_cluster_only_for_selected_table() {
    let mut state = state_with_tables(1);
    let canvas = FloorCanvas::new();
    assert!(canvas.action_cluster(&state).is_none());

    state.select_table("T-01");
    let cluster = canvas.action_cluster(&state).unwrap();
    assert_eq!(cluster.table_id, "T-01");
    assert!(cluster.bounds.y > 200.0);
}

#[test]
fn test_cluster_buttons_dispatch() {
    let mut state = state_with_tables(1);
    state.select_table("T-01");
    let mut canvas = FloorCanvas::new();

    let rotate = button_center(&canvas, &state, ClusterButton::Rotate);
    assert_eq!(canvas.handle_click(&mut state, rotate), Some(ClusterButton::Rotate));
    assert_eq!(state.table("T-01").unwrap().rotation, 90);

    let duplicate = button_center(&canvas, &state, ClusterButton::Duplicate);
    canvas.handle_click(&mut state, duplicate);
    assert_eq!(state.selected_table_id(), Some("T-02"));

    let delete = button_center(&canvas, &state, ClusterButton::Delete);
    canvas.handle_click(&mut state, delete);
    assert!(state.table("T-02").is_none());
    assert!(state.selected_table().is_none());

    assert_eq!(canvas.handle_click(&mut state, delete), None);
}

fn button_center(canvas: &FloorCanvas, state: &FloorState, button: ClusterButton) -> Point {
    let cluster = canvas.action_cluster(state).unwrap();
    cluster
        .buttons
        .iter()
        .find(|(b, _)| *b == button)
        .map(|(_, rect)| rect.center())
        .unwrap()
}

#[test]
fn test_grid_points() {
    let canvas = FloorCanvas::new();
    let points = canvas.grid_points(40.0, 20.0);
    assert_eq!(points.len(), 6);
    assert_eq!(points[1], Point::new(20.0, 0.0));
    assert!(FloorCanvas::with_grid_spacing(0.0).grid_points(40.0, 40.0).is_empty());
}
