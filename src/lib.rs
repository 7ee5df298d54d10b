//! Focus Reader: rapid serial visual presentation for the terminal.
//!
//! - [`input`] turns a document (and optional selection) into words
//! - [`reading`] holds the word model, pivot formatting and pacing math
//! - [`engine`] is the reading state machine and its timer/render seams
//! - [`app`] and [`ui`] host the engine in a crossterm/ratatui terminal

pub mod app;
pub mod engine;
pub mod input;
pub mod reading;
pub mod ui;
