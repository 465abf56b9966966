//! # FloorKit Designer
//!
//! This crate holds everything about a restaurant floor plan that does not
//! depend on a GUI toolkit: the room and table model, the editor state and
//! its actions, persistence of the room list, the canvas interaction model,
//! and the detail form.
//!
//! ## Architecture
//!
//! ```text
//! FloorState (rooms, selection, table counter)
//!   ├── FloorAction (dispatched mutations)
//!   ├── RoomPersistence (KeyValueStore snapshot)
//!   ├── FloorCanvas (hit testing, drag sessions, action cluster)
//!   └── TableForm (detail form validation)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use floorkit_designer::{FloorAction, FloorState};
//!
//! let mut state = FloorState::new();
//! state.dispatch(FloorAction::AddTable);
//! state.dispatch(FloorAction::DuplicateTable("T-01".into()));
//!
//! assert_eq!(state.selected_table().map(|t| t.id.as_str()), Some("T-02"));
//! ```

pub mod actions;
pub mod canvas;
pub mod floor_state;
pub mod form;
pub mod model;
pub mod serialization;

pub use actions::FloorAction;
pub use canvas::{ActionCluster, ClusterButton, DragSession, FloorCanvas, TableView};
pub use floor_state::FloorState;
pub use form::{step_covers, FormError, FormErrors, FormField, TableForm};
pub use model::{Point, Rect, Room, RoomSummary, Table, TableUpdate};
pub use serialization::{RoomPersistence, ROOMS_KEY};
