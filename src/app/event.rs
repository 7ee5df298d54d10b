use crate::engine::KeyCommand;

/// Application events
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AppEvent {
    /// Start or stop reading
    Toggle,
    Command(KeyCommand),
    /// Leave the program
    Exit,
    None,
}
