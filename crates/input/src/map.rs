//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction, RESTART_KEY};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key press to a game action.
///
/// Arrow keys and WASD steer, `N` restarts. Unrecognised keys map to `None`
/// and are ignored by the caller.
pub fn map_key(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::Turn(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::Turn(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::Turn(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::Turn(Direction::Right))
        }
        KeyCode::Char(c) if c.to_ascii_lowercase() == RESTART_KEY => Some(GameAction::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::Turn(Direction::Up))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::Turn(Direction::Down))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::Turn(Direction::Left))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::Turn(Direction::Right))
        );
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('w'))),
            Some(GameAction::Turn(Direction::Up))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('A'))),
            Some(GameAction::Turn(Direction::Left))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('s'))),
            Some(GameAction::Turn(Direction::Down))
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('D'))),
            Some(GameAction::Turn(Direction::Right))
        );
    }

    #[test]
    fn test_restart_key() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('n'))),
            Some(GameAction::Restart)
        );
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('N'))),
            Some(GameAction::Restart)
        );
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char(' '))), None);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('n'))));
    }
}
