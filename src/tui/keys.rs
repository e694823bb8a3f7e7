//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use passpick::pass::CharacterClass;

use super::widget::Action;

/// Map a key press to a widget action.
pub fn action(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => Some(Action::Shorter),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') | KeyCode::Char('=') => {
            Some(Action::Longer)
        }
        KeyCode::Char(c @ '1'..='4') => {
            let idx = (c as u8 - b'1') as usize;
            Some(Action::Toggle(CharacterClass::ALL[idx]))
        }
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('g') => Some(Action::Regenerate),
        KeyCode::Char('c') | KeyCode::Char('y') => Some(Action::Copy),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Quit),
        _ => None,
    }
}

/// Help lines shown under the widget.
pub const HELP: [&str; 3] = [
    "←/→ length   1-4 toggle class",
    "Enter generate   c copy",
    "q quit",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn number_keys_toggle_in_class_order() {
        assert_eq!(
            action(key(KeyCode::Char('1'))),
            Some(Action::Toggle(CharacterClass::Lowercase))
        );
        assert_eq!(
            action(key(KeyCode::Char('4'))),
            Some(Action::Toggle(CharacterClass::Special))
        );
        assert_eq!(action(key(KeyCode::Char('5'))), None);
    }

    #[test]
    fn arrows_move_length() {
        assert_eq!(action(key(KeyCode::Left)), Some(Action::Shorter));
        assert_eq!(action(key(KeyCode::Right)), Some(Action::Longer));
    }

    #[test]
    fn ctrl_c_quits_but_plain_c_copies() {
        assert_eq!(
            action(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(action(key(KeyCode::Char('c'))), Some(Action::Copy));
        assert_eq!(action(key(KeyCode::Esc)), Some(Action::Quit));
    }
}
