pub mod app;
pub mod event;

pub use app::{App, TuiReader};
pub use event::AppEvent;
