//! Key bindings for the terminal host.
//!
//! While reading:
//! - `Esc` → quit the session
//! - `Space` → pause / resume
//! - `↑` / `↓` → speed up / slow down
//! - `←` / `→` → skip back / forward
//!
//! Always:
//! - `Enter` or `t` → start / stop reading
//! - `Ctrl-C` → leave the program
//!
//! While idle, `q` or `Esc` leaves the program.

use crate::app::AppEvent;
use crate::engine::KeyCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Maps reading-mode keys onto reader commands.
pub fn key_command(code: KeyCode) -> Option<KeyCommand> {
    match code {
        KeyCode::Esc => Some(KeyCommand::Quit),
        KeyCode::Char(' ') => Some(KeyCommand::TogglePause),
        KeyCode::Up => Some(KeyCommand::SpeedUp),
        KeyCode::Down => Some(KeyCommand::SlowDown),
        KeyCode::Left => Some(KeyCommand::SeekBack),
        KeyCode::Right => Some(KeyCommand::SeekForward),
        _ => None,
    }
}

/// Translates a key press into an application event.
pub fn key_to_app_event(key: KeyEvent, is_reading: bool) -> AppEvent {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return AppEvent::Exit;
    }

    if matches!(key.code, KeyCode::Enter | KeyCode::Char('t')) {
        return AppEvent::Toggle;
    }

    if is_reading {
        key_command(key.code).map_or(AppEvent::None, AppEvent::Command)
    } else {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => AppEvent::Exit,
            _ => AppEvent::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_reading_keys_map_to_commands() {
        assert_eq!(key_command(KeyCode::Esc), Some(KeyCommand::Quit));
        assert_eq!(key_command(KeyCode::Char(' ')), Some(KeyCommand::TogglePause));
        assert_eq!(key_command(KeyCode::Up), Some(KeyCommand::SpeedUp));
        assert_eq!(key_command(KeyCode::Down), Some(KeyCommand::SlowDown));
        assert_eq!(key_command(KeyCode::Left), Some(KeyCommand::SeekBack));
        assert_eq!(key_command(KeyCode::Right), Some(KeyCommand::SeekForward));
        assert_eq!(key_command(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_toggle_keys() {
        assert_eq!(key_to_app_event(press(KeyCode::Enter), false), AppEvent::Toggle);
        assert_eq!(key_to_app_event(press(KeyCode::Char('t')), true), AppEvent::Toggle);
    }

    #[test]
    fn test_escape_quits_session_while_reading() {
        assert_eq!(
            key_to_app_event(press(KeyCode::Esc), true),
            AppEvent::Command(KeyCommand::Quit)
        );
    }

    #[test]
    fn test_escape_exits_while_idle() {
        assert_eq!(key_to_app_event(press(KeyCode::Esc), false), AppEvent::Exit);
        assert_eq!(key_to_app_event(press(KeyCode::Char('q')), false), AppEvent::Exit);
    }

    #[test]
    fn test_reading_keys_ignored_while_idle() {
        assert_eq!(key_to_app_event(press(KeyCode::Char(' ')), false), AppEvent::None);
        assert_eq!(key_to_app_event(press(KeyCode::Up), false), AppEvent::None);
    }

    #[test]
    fn test_q_does_nothing_while_reading() {
        assert_eq!(key_to_app_event(press(KeyCode::Char('q')), true), AppEvent::None);
    }

    #[test]
    fn test_ctrl_c_always_exits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_app_event(key, true), AppEvent::Exit);
        assert_eq!(key_to_app_event(key, false), AppEvent::Exit);
    }
}
