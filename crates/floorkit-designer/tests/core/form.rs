use floorkit_designer::{step_covers, FloorAction, FloorState, FormField, TableForm};

#[test]
fn test_submit_applies_through_dispatch() {
    let mut state = FloorState::new();
    state.add_table();
    state.select_table("T-01");

    let mut form = TableForm::from_table(state.selected_table().unwrap());
    form.set_value(FormField::Name, "Booth 1");
    form.set_value(FormField::MinCovers, "2");
    form.set_value(FormField::MaxCovers, "6");
    let update = form.submit().unwrap();
    state.dispatch(FloorAction::update_table(form.table_id.clone(), update));

    let table = state.selected_table().unwrap();
    assert_eq!(table.name, "Booth 1");
    assert_eq!((table.min_covers, table.max_covers), (2, 6));
}

#[test]
fn test_invalid_submit_reports_every_field() {
    let state = {
        let mut s = FloorState::new();
        s.add_table();
        s
    };
    let mut form = TableForm::from_table(state.table("T-01").unwrap());
    form.set_value(FormField::Name, "");
    form.set_value(FormField::MinCovers, "0");

    let errors = form.submit().unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(errors.for_field(FormField::Name).is_some());
    assert!(errors.for_field(FormField::MinCovers).is_some());
    assert!(errors.for_field(FormField::MaxCovers).is_none());
}

#[test]
fn test_steppers_can_cross_min_and_max() {
    let mut state = FloorState::new();
    state.add_table();
    for _ in 0..5 {
        let table = state.table("T-01").unwrap();
        let update = step_covers(table, FormField::MinCovers, 1).unwrap();
        state.update_table("T-01", &update);
    }
    let table = state.table("T-01").unwrap();
    assert_eq!((table.min_covers, table.max_covers), (6, 4));

    // Submitting the same values is rejected
    let errors = TableForm::from_table(table).submit().unwrap_err();
    assert!(errors.for_field(FormField::MaxCovers).is_some());
}

#[test]
fn test_stepper_decrement_floor() {
    let mut state = FloorState::new();
    state.add_table();
    for _ in 0..10 {
        let table = state.table("T-01").unwrap();
        let update = step_covers(table, FormField::MaxCovers, -1).unwrap();
        state.update_table("T-01", &update);
    }
    assert_eq!(state.table("T-01").unwrap().max_covers, 1);
}

#[test]
fn test_oversized_covers_never_reach_the_table() {
    let mut state = FloorState::new();
    state.add_table();
    let mut form = TableForm::from_table(state.table("T-01").unwrap());
    form.set_value(FormField::MinCovers, "5");
    form.set_value(FormField::MaxCovers, "4294967297");

    if let Ok(update) = form.submit() {
        state.update_table("T-01", &update);
    }
    let table = state.table("T-01").unwrap();
    assert!(table.min_covers >= 1);
    assert!(table.min_covers <= table.max_covers);
    assert_eq!((table.min_covers, table.max_covers), (1, 4));
}
