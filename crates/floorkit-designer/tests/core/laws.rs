use floorkit_designer::model::table_number;
use floorkit_designer::{FloorState, TableUpdate};
use proptest::prelude::*;

proptest! {
    #[test]
    fn rotate_four_times_is_identity(start in -720i64..720) {
        let mut state = FloorState::new();
        state.add_table();
        state.update_table("T-01", &TableUpdate::new().with_rotation(start));
        let before = state.table("T-01").unwrap().rotation;
        prop_assert!(before < 360);

        for _ in 0..4 {
            state.rotate_table("T-01");
        }
        prop_assert_eq!(state.table("T-01").unwrap().rotation, before);
    }

    #[test]
    fn table_ids_strictly_increase(count in 1usize..120) {
        let mut state = FloorState::new();
        let mut last = 0;
        for _ in 0..count {
            let id = state.add_table();
            let number = table_number(&id).unwrap();
            prop_assert!(number > last);
            prop_assert_eq!(number, state.table_count());
            if number < 100 {
                prop_assert_eq!(id.len(), 4);
            }
            last = number;
        }
    }

    #[test]
    fn select_twice_clears(count in 1usize..8, pick in 0usize..8) {
        let mut state = FloorState::new();
        for _ in 0..count {
            state.add_table();
        }
        let id = state.selected_room().tables[pick % count].id.clone();
        state.select_table(&id);
        state.select_table(&id);
        prop_assert!(state.selected_table().is_none());
    }

    #[test]
    fn duplicate_offsets_by_forty(dx in -500.0f64..500.0, dy in -500.0f64..500.0) {
        let mut state = FloorState::new();
        state.add_table();
        state.update_table_position("T-01", dx, dy);
        let copy = state.duplicate_table("T-01").unwrap();

        let original = state.table("T-01").unwrap();
        let dup = state.table(&copy).unwrap();
        prop_assert_eq!(dup.x, original.x + 40.0);
        prop_assert_eq!(dup.y, original.y + 40.0);
    }
}
