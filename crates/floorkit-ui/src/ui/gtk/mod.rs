pub mod floor_canvas;
pub mod room_tabs;
pub mod status_bar;
pub mod table_details;

pub use floor_canvas::FloorCanvasView;
pub use room_tabs::RoomTabs;
pub use status_bar::StatusBar;
pub use table_details::TableDetailsPanel;
