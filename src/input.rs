use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::engine::Command;
use crate::snake::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Command(Command),
    /// Ctrl+C, honoured in every state
    Interrupt,
    None,
}

pub fn map_key(key: &KeyEvent) -> KeyAction {
    if is_ctrl_c(key) {
        return KeyAction::Interrupt;
    }

    let command = match key.code {
        KeyCode::Up => Command::Move(Direction::Up),
        KeyCode::Down => Command::Move(Direction::Down),
        KeyCode::Left => Command::Move(Direction::Left),
        KeyCode::Right => Command::Move(Direction::Right),
        KeyCode::Char('p') | KeyCode::Char('P') => Command::TogglePause,
        KeyCode::Char(' ') => Command::Start,
        KeyCode::Char('q') | KeyCode::Char('Q') => Command::Quit,
        _ => return KeyAction::None,
    };

    KeyAction::Command(command)
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent { code, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn arrows_move() {
        assert_eq!(map_key(&key(KeyCode::Up)), KeyAction::Command(Command::Move(Direction::Up)));
        assert_eq!(map_key(&key(KeyCode::Down)), KeyAction::Command(Command::Move(Direction::Down)));
        assert_eq!(map_key(&key(KeyCode::Left)), KeyAction::Command(Command::Move(Direction::Left)));
        assert_eq!(map_key(&key(KeyCode::Right)), KeyAction::Command(Command::Move(Direction::Right)));
    }

    #[test]
    fn control_keys() {
        assert_eq!(map_key(&key(KeyCode::Char('p'))), KeyAction::Command(Command::TogglePause));
        assert_eq!(map_key(&key(KeyCode::Char(' '))), KeyAction::Command(Command::Start));
        assert_eq!(map_key(&key(KeyCode::Char('q'))), KeyAction::Command(Command::Quit));
    }

    #[test]
    fn ctrl_c_interrupts() {
        let ev = KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL };
        assert_eq!(map_key(&ev), KeyAction::Interrupt);
        assert_eq!(map_key(&key(KeyCode::Char('c'))), KeyAction::None);
    }

    #[test]
    fn other_keys_do_nothing() {
        assert_eq!(map_key(&key(KeyCode::Char('w'))), KeyAction::None);
        assert_eq!(map_key(&key(KeyCode::Esc)), KeyAction::None);
        assert_eq!(map_key(&key(KeyCode::Enter)), KeyAction::None);
    }
}
