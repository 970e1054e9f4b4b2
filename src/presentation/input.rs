use crate::application::{App, AppMode};
use crate::domain::Key;
use crate::infrastructure::ClipboardService;
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Normal => Self::handle_normal_mode(app, key, modifiers),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_normal_mode(app: &mut App, key: KeyCode, _modifiers: KeyModifiers) {
        // Keep clipboard feedback visible through the copy key itself
        if !matches!(key, KeyCode::Char('y')) {
            app.status_message = None;
        }

        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                app.move_selection_up();
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.move_selection_down();
            }
            KeyCode::Left | KeyCode::Char('h') => {
                app.move_selection_left();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                app.move_selection_right();
            }
            KeyCode::Enter => {
                app.press_selected();
            }
            KeyCode::Backspace => {
                app.press_key(Key::Backspace);
            }
            KeyCode::Delete => {
                app.press_key(Key::Clear);
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.mode = AppMode::Help;
                app.help_scroll = 0;
            }
            KeyCode::Char('y') => {
                let result = ClipboardService::copy_text(&app.calculator.display);
                app.set_copy_result(result);
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            KeyCode::Char(c) => {
                if let Some(pressed) = Key::from_char(c) {
                    app.press_key(pressed);
                }
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.mode = AppMode::Normal;
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if app.help_scroll > 0 {
                    app.help_scroll -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{App, AppMode};

    fn type_chars(app: &mut App, chars: &str) {
        for c in chars.chars() {
            InputHandler::handle_key_event(app, KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    #[test]
    fn test_typed_digits_press_buttons() {
        let mut app = App::default();
        type_chars(&mut app, "42");
        assert_eq!(app.calculator.display, "42");
    }

    #[test]
    fn test_typed_expression_computes() {
        let mut app = App::default();
        type_chars(&mut app, "2+3=");
        assert_eq!(app.calculator.display, "5");
        assert_eq!(app.history.len(), 1);
    }

    #[test]
    fn test_typed_division_symbols() {
        let mut app = App::default();
        type_chars(&mut app, "8/2=");
        assert_eq!(app.calculator.display, "4");

        type_chars(&mut app, "c9÷3=");
        assert_eq!(app.calculator.display, "3");
    }

    #[test]
    fn test_enter_presses_highlighted_button() {
        let mut app = App::default();
        type_chars(&mut app, "2+2");

        // Default selection sits on the equals button
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.calculator.display, "4");
    }

    #[test]
    fn test_arrow_navigation() {
        let mut app = App::default();

        InputHandler::handle_key_event(&mut app, KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(app.selected_key(), Key::Digit(3));

        InputHandler::handle_key_event(&mut app, KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(app.selected_key(), Key::Digit(2));

        InputHandler::handle_key_event(&mut app, KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(app.selected_key(), Key::Dot);

        InputHandler::handle_key_event(&mut app, KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(app.selected_key(), Key::Equals);
    }

    #[test]
    fn test_vim_style_navigation() {
        let mut app = App::default();

        type_chars(&mut app, "k");
        assert_eq!(app.selected_key(), Key::Digit(3));

        type_chars(&mut app, "h");
        assert_eq!(app.selected_key(), Key::Digit(2));

        type_chars(&mut app, "j");
        assert_eq!(app.selected_key(), Key::Dot);

        type_chars(&mut app, "l");
        assert_eq!(app.selected_key(), Key::Equals);
    }

    #[test]
    fn test_backspace_key_deletes_digit() {
        let mut app = App::default();
        type_chars(&mut app, "123");

        InputHandler::handle_key_event(&mut app, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.calculator.display, "12");
    }

    #[test]
    fn test_delete_key_clears() {
        let mut app = App::default();
        type_chars(&mut app, "5+");

        InputHandler::handle_key_event(&mut app, KeyCode::Delete, KeyModifiers::NONE);
        assert_eq!(app.calculator.display, "0");
        assert!(app.calculator.pending_operator.is_none());
    }

    #[test]
    fn test_clear_via_c_key() {
        let mut app = App::default();
        type_chars(&mut app, "99C");
        assert_eq!(app.calculator.display, "0");
    }

    #[test]
    fn test_help_mode_open_and_close() {
        let mut app = App::default();
        assert!(matches!(app.mode, AppMode::Normal));

        InputHandler::handle_key_event(&mut app, KeyCode::Char('?'), KeyModifiers::NONE);
        assert!(matches!(app.mode, AppMode::Help));

        InputHandler::handle_key_event(&mut app, KeyCode::Esc, KeyModifiers::NONE);
        assert!(matches!(app.mode, AppMode::Normal));

        InputHandler::handle_key_event(&mut app, KeyCode::F(1), KeyModifiers::NONE);
        assert!(matches!(app.mode, AppMode::Help));

        InputHandler::handle_key_event(&mut app, KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(matches!(app.mode, AppMode::Normal));
    }

    #[test]
    fn test_help_scrolling() {
        let mut app = App::default();
        InputHandler::handle_key_event(&mut app, KeyCode::F(1), KeyModifiers::NONE);
        assert_eq!(app.help_scroll, 0);

        InputHandler::handle_key_event(&mut app, KeyCode::Down, KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(app.help_scroll, 2);

        InputHandler::handle_key_event(&mut app, KeyCode::PageDown, KeyModifiers::NONE);
        assert_eq!(app.help_scroll, 7);

        InputHandler::handle_key_event(&mut app, KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(app.help_scroll, 6);

        InputHandler::handle_key_event(&mut app, KeyCode::PageUp, KeyModifiers::NONE);
        assert_eq!(app.help_scroll, 1);

        InputHandler::handle_key_event(&mut app, KeyCode::Home, KeyModifiers::NONE);
        assert_eq!(app.help_scroll, 0);
    }

    #[test]
    fn test_typing_keeps_calculator_keys_out_of_help_mode() {
        let mut app = App::default();
        InputHandler::handle_key_event(&mut app, KeyCode::Char('?'), KeyModifiers::NONE);

        // Digits scroll nothing and press nothing while help is open
        type_chars(&mut app, "5");
        assert_eq!(app.calculator.display, "0");
    }

    #[test]
    fn test_status_message_cleared_on_key_press() {
        let mut app = App::default();
        app.status_message = Some("Copied 5 to clipboard".to_string());

        type_chars(&mut app, "1");
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_q_leaves_state_untouched() {
        let mut app = App::default();
        type_chars(&mut app, "12");

        InputHandler::handle_key_event(&mut app, KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(app.calculator.display, "12");
        assert!(matches!(app.mode, AppMode::Normal));
    }

    #[test]
    fn test_unmapped_key_ignored() {
        let mut app = App::default();
        type_chars(&mut app, "12z");
        assert_eq!(app.calculator.display, "12");
    }
}
