//! Keyboard input handling for the TUI.
//!
//! This module handles all keyboard events and translates them into
//! application state changes.

use crossterm::event::{KeyCode, KeyEvent};

use privytalk_core::models::{
    AssistantSettings, CallKind, CallState, Confirmation, MediaGallery, SettingsItem,
    SettingsPanel,
};
use privytalk_core::{ChatRoom, Screen};

use crate::app::{
    can_add_identifier_char, can_add_secret_char, App, AppState, LoginFocus, View, HOME_ITEMS,
};

/// What a screen handler wants done once it releases its borrow of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Handled,
    Unhandled,
    Navigate(Screen),
    ToggleTheme,
    ClearData,
    Logout,
}

/// Handle keyboard input. Returns true if the app should quit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    // Handle login overlay
    if matches!(app.state, AppState::LoggingIn) {
        return handle_login_input(app, key);
    }

    // Handle quit confirmation
    if matches!(app.state, AppState::ConfirmingQuit) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.state = AppState::Quitting;
                return true;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.state = AppState::Normal;
            }
            _ => {}
        }
        return false;
    }

    let action = match app.view {
        View::Home { ref mut selection } => handle_home_input(selection, key),
        View::Chat(ref mut room) => handle_chat_input(room, key),
        View::Call(ref mut call) => handle_call_input(call, key),
        View::Media(ref mut gallery) => handle_media_input(gallery, key),
        View::AiSettings(ref mut settings) => handle_assistant_input(settings, key),
        View::Settings(ref mut panel) => handle_settings_input(panel, key),
    };

    match action {
        Action::Handled => {}
        Action::Navigate(screen) => app.navigate(screen),
        Action::ToggleTheme => app.toggle_theme(),
        Action::ClearData => app.clear_data(),
        Action::Logout => app.logout(),
        Action::Unhandled => handle_global_input(app, key),
    }
    false
}

/// Keys that work on every screen that doesn't capture text.
fn handle_global_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => {
            app.state = AppState::ConfirmingQuit;
        }
        KeyCode::Char('t') => {
            app.toggle_theme();
        }
        KeyCode::Esc | KeyCode::Backspace => {
            if app.navigator.current() != Screen::Home {
                app.go_back();
            }
        }
        _ => {}
    }
}

fn handle_login_input(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => {
            // Quit if on login screen
            app.state = AppState::Quitting;
            return true;
        }
        KeyCode::Down | KeyCode::Tab => {
            app.login_focus = match app.login_focus {
                LoginFocus::Identifier => LoginFocus::Secret,
                LoginFocus::Secret => LoginFocus::Button,
                LoginFocus::Button => LoginFocus::Identifier,
            };
        }
        KeyCode::Up | KeyCode::BackTab => {
            app.login_focus = match app.login_focus {
                LoginFocus::Identifier => LoginFocus::Button,
                LoginFocus::Secret => LoginFocus::Identifier,
                LoginFocus::Button => LoginFocus::Secret,
            };
        }
        KeyCode::Enter => match app.login_focus {
            LoginFocus::Identifier => {
                app.login_focus = LoginFocus::Secret;
            }
            LoginFocus::Secret | LoginFocus::Button => {
                // On failure login_error is set and the overlay stays up
                app.attempt_login();
            }
        },
        KeyCode::Backspace => match app.login_focus {
            LoginFocus::Identifier => {
                app.login_identifier.pop();
            }
            LoginFocus::Secret => {
                app.login_secret.pop();
            }
            LoginFocus::Button => {}
        },
        KeyCode::Char(c) => match app.login_focus {
            LoginFocus::Identifier => {
                if can_add_identifier_char(app.login_identifier.chars().count(), c) {
                    app.login_identifier.push(c);
                }
            }
            LoginFocus::Secret => {
                if can_add_secret_char(app.login_secret.chars().count(), c) {
                    app.login_secret.push(c);
                }
            }
            LoginFocus::Button => {}
        },
        _ => {}
    }
    false
}

fn handle_home_input(selection: &mut usize, key: KeyEvent) -> Action {
    let max_index = HOME_ITEMS.len() - 1;
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            *selection = selection.saturating_sub(1);
            Action::Handled
        }
        KeyCode::Down | KeyCode::Char('j') => {
            *selection = (*selection + 1).min(max_index);
            Action::Handled
        }
        KeyCode::Enter => HOME_ITEMS
            .get(*selection)
            .map(|screen| Action::Navigate(*screen))
            .unwrap_or(Action::Handled),
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            Action::Navigate(HOME_ITEMS[index])
        }
        _ => Action::Unhandled,
    }
}

/// The chat captures typing, so only Esc falls through to the global keys.
fn handle_chat_input(room: &mut ChatRoom, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => {
            room.submit();
            Action::Handled
        }
        KeyCode::Backspace => {
            room.pop_char();
            Action::Handled
        }
        KeyCode::Tab => {
            room.cycle_quick_reply();
            Action::Handled
        }
        KeyCode::Char(c) => {
            room.push_char(c);
            Action::Handled
        }
        KeyCode::Esc => Action::Navigate(Screen::Home),
        _ => Action::Unhandled,
    }
}

fn handle_call_input(call: &mut CallState, key: KeyEvent) -> Action {
    if call.is_active() {
        match key.code {
            KeyCode::Char('m') => call.toggle_mic(),
            KeyCode::Char('c') => call.toggle_video(),
            KeyCode::Char('e') | KeyCode::Esc => call.end(),
            _ => return Action::Unhandled,
        }
        return Action::Handled;
    }

    match key.code {
        KeyCode::Char('v') => call.start(CallKind::Voice),
        KeyCode::Char('c') => call.start(CallKind::Video),
        _ => return Action::Unhandled,
    }
    Action::Handled
}

fn handle_media_input(gallery: &mut MediaGallery, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Left => gallery.set_filter(gallery.filter.prev()),
        KeyCode::Right => gallery.set_filter(gallery.filter.next()),
        KeyCode::Up | KeyCode::Char('k') => gallery.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => gallery.select_next(),
        _ => return Action::Unhandled,
    }
    Action::Handled
}

fn handle_assistant_input(settings: &mut AssistantSettings, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => settings.focus = settings.focus.prev(),
        KeyCode::Down | KeyCode::Char('j') => settings.focus = settings.focus.next(),
        KeyCode::Left => settings.adjust(false),
        KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => settings.adjust(true),
        _ => return Action::Unhandled,
    }
    Action::Handled
}

fn handle_settings_input(panel: &mut SettingsPanel, key: KeyEvent) -> Action {
    // Pending confirmation swallows every key
    if let Some(confirmation) = panel.confirming {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                panel.confirming = None;
                match confirmation {
                    Confirmation::ClearData => Action::ClearData,
                    Confirmation::Logout => Action::Logout,
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                panel.confirming = None;
                Action::Handled
            }
            _ => Action::Handled,
        };
    }

    if panel.editing_name {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => panel.editing_name = false,
            KeyCode::Backspace => {
                panel.display_name.pop();
            }
            KeyCode::Char(c) => panel.push_name_char(c),
            _ => {}
        }
        return Action::Handled;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => panel.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => panel.select_next(),
        KeyCode::Enter | KeyCode::Char(' ') => match panel.selected() {
            SettingsItem::DisplayName => panel.editing_name = true,
            SettingsItem::DarkMode => return Action::ToggleTheme,
            SettingsItem::Notifications => panel.notifications = !panel.notifications,
            SettingsItem::Encryption => {}
            SettingsItem::ClearData => panel.confirming = Some(Confirmation::ClearData),
            SettingsItem::Logout => panel.confirming = Some(Confirmation::Logout),
        },
        _ => return Action::Unhandled,
    }
    Action::Handled
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{fixture_app, signed_in_app};
    use crossterm::event::KeyModifiers;
    use privytalk_core::{MemoryStore, Theme};

    fn press(app: &mut App, code: KeyCode) -> bool {
        handle_input(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_login_form_flow() {
        let mut app = fixture_app(MemoryStore::shared());
        app.start_login();
        assert_eq!(app.login_focus, LoginFocus::Identifier);

        type_text(&mut app, "Rachit_14");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.login_focus, LoginFocus::Secret);

        type_text(&mut app, "wrong");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.login_error.as_deref(), Some("Access denied"));
        assert_eq!(app.state, AppState::LoggingIn);

        for _ in 0.."wrong".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_text(&mut app, "123456789");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Normal);
        assert!(app.is_authenticated());
    }

    #[test]
    fn test_login_fields_limit_characters_not_bytes() {
        let mut app = fixture_app(MemoryStore::shared());
        app.start_login();
        type_text(&mut app, &"é".repeat(60));
        assert_eq!(app.login_identifier.chars().count(), 50);

        press(&mut app, KeyCode::Tab);
        type_text(&mut app, &"ü".repeat(200));
        assert_eq!(app.login_secret.chars().count(), 128);
    }

    #[test]
    fn test_login_focus_cycle() {
        let mut app = fixture_app(MemoryStore::shared());
        app.start_login();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.login_focus, LoginFocus::Button);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.login_focus, LoginFocus::Identifier);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.login_focus, LoginFocus::Button);
    }

    #[test]
    fn test_esc_on_login_quits() {
        let mut app = fixture_app(MemoryStore::shared());
        app.start_login();
        assert!(press(&mut app, KeyCode::Esc));
        assert_eq!(app.state, AppState::Quitting);
    }

    #[test]
    fn test_home_shortcuts_and_back() {
        let mut app = signed_in_app();
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.navigator.current(), Screen::Media);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.navigator.current(), Screen::Home);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.navigator.current(), Screen::Call);
    }

    #[test]
    fn test_theme_key_outside_chat_only() {
        let mut app = signed_in_app();
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme(), Theme::Light);

        app.navigate(Screen::Chat);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.theme(), Theme::Light);
        match app.view {
            View::Chat(ref room) => assert_eq!(room.draft, "t"),
            _ => panic!("expected chat view"),
        }
    }

    #[test]
    fn test_quit_confirmation() {
        let mut app = signed_in_app();
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.state, AppState::ConfirmingQuit);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.state, AppState::Normal);
        press(&mut app, KeyCode::Char('q'));
        assert!(press(&mut app, KeyCode::Char('y')));
    }

    #[test]
    fn test_call_controls() {
        let mut app = signed_in_app();
        app.navigate(Screen::Call);
        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('m'));
        match app.view {
            View::Call(ref call) => {
                assert!(call.is_active());
                assert!(call.is_video_on());
                assert!(!call.is_mic_on());
            }
            _ => panic!("expected call view"),
        }

        // Esc ends an active call before leaving the screen
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.navigator.current(), Screen::Call);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.navigator.current(), Screen::Home);
    }

    #[test]
    fn test_settings_dark_mode_and_logout() {
        let mut app = signed_in_app();
        app.navigate(Screen::Settings);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.theme(), Theme::Light);

        for _ in 0..10 {
            press(&mut app, KeyCode::Down);
        }
        press(&mut app, KeyCode::Enter);
        // Confirmation swallows navigation keys
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.state, AppState::Normal);

        press(&mut app, KeyCode::Char('y'));
        assert!(!app.is_authenticated());
        assert_eq!(app.state, AppState::LoggingIn);
        assert_eq!(app.navigator.current(), Screen::Home);
    }

    #[test]
    fn test_settings_edit_display_name() {
        let mut app = signed_in_app();
        app.navigate(Screen::Settings);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('!'));
        press(&mut app, KeyCode::Enter);
        match app.view {
            View::Settings(ref panel) => {
                assert_eq!(panel.display_name, "Rachit!");
                assert!(!panel.editing_name);
            }
            _ => panic!("expected settings view"),
        }
    }
}
