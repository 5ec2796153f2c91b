use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Action to take after processing a key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Submit this term to the dispatcher. The input is already cleared.
    Submit(String),
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') || key.code == KeyCode::Esc {
        app.request_quit();
        return InputAction::None;
    }

    if is_ctrl_char(key, 'u') {
        app.input_mut().clear();
        return InputAction::None;
    }

    // Empty terms are submitted too: the registry decides what they mean.
    if key.code == KeyCode::Enter {
        return InputAction::Submit(app.take_submission());
    }

    let input = app.input_mut();
    match key.code {
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            input.insert_char(ch)
        }
        _ => {}
    }
    InputAction::None
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            assert_eq!(handle_key(app, press(KeyCode::Char(ch))), InputAction::None);
        }
    }

    #[test]
    fn enter_submits_and_clears() {
        let mut app = App::new("registry");
        type_text(&mut app, "react");
        assert_eq!(
            handle_key(&mut app, press(KeyCode::Enter)),
            InputAction::Submit("react".into())
        );
        assert!(app.input().is_empty());
    }

    #[test]
    fn enter_on_empty_input_still_submits() {
        let mut app = App::new("registry");
        assert_eq!(
            handle_key(&mut app, press(KeyCode::Enter)),
            InputAction::Submit(String::new())
        );
    }

    #[test]
    fn ctrl_u_clears_line() {
        let mut app = App::new("registry");
        type_text(&mut app, "abc");
        handle_key(&mut app, ctrl('u'));
        assert!(app.input().is_empty());
    }

    #[test]
    fn ctrl_chars_are_not_typed() {
        let mut app = App::new("registry");
        handle_key(&mut app, ctrl('x'));
        assert!(app.input().is_empty());
        assert!(!app.should_quit());
    }

    #[test]
    fn esc_and_ctrl_q_quit() {
        let mut app = App::new("registry");
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(app.should_quit());

        let mut app = App::new("registry");
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new("registry");
        let mut key = press(KeyCode::Char('a'));
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert!(app.input().is_empty());
    }
}
