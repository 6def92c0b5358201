//! Input handling for the main loop.
//!
//! Maps raw terminal key events to the two things the shell understands:
//! quit, or an action forwarded to the core. The same physical key jumps
//! while running and restarts after a crash; the core decides which from
//! its own phase.

use crate::game::GameInput;
use crossterm::event::{KeyCode, KeyEvent};

/// What a key event means to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Forward to the core.
    Game(GameInput),
    /// Tear down the terminal and exit.
    Quit,
}

/// Map a key event to an action.
pub fn map_key(key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => InputAction::Quit,
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => InputAction::Game(GameInput::Primary),
        _ => InputAction::Game(GameInput::Other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('q'))), InputAction::Quit);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('Q'))), InputAction::Quit);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Esc)), InputAction::Quit);
    }

    #[test]
    fn test_action_keys() {
        for code in [KeyCode::Char(' '), KeyCode::Up, KeyCode::Enter] {
            assert_eq!(
                map_key(KeyEvent::from(code)),
                InputAction::Game(GameInput::Primary)
            );
        }
    }

    #[test]
    fn test_everything_else_is_other() {
        for code in [KeyCode::Char('x'), KeyCode::Down, KeyCode::Tab, KeyCode::F(1)] {
            assert_eq!(
                map_key(KeyEvent::from(code)),
                InputAction::Game(GameInput::Other)
            );
        }
    }
}
