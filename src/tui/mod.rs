//! Terminal front end of the app picker.

pub mod event;
pub mod picker;
pub mod ui;

pub use event::{Event, EventHandler};
pub use picker::{PickerItem, PickerState, Status};
