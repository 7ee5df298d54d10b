// UI reader component - pivot word rendering with ratatui

pub mod component;
pub mod view;

pub use component::{ReaderComponent, ReaderFrame};
