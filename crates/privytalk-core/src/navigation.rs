//! Screen navigation and theme.
//!
//! Navigation is flat: any screen can be reached from any other, and "back"
//! always means home. There is no history stack.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Every screen the shell can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    Home,
    Chat,
    Call,
    Media,
    AiSettings,
    Settings,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::Home,
        Screen::Chat,
        Screen::Call,
        Screen::Media,
        Screen::AiSettings,
        Screen::Settings,
    ];

    /// Stable identifier, as used in logs.
    pub fn id(&self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Chat => "chat",
            Screen::Call => "call",
            Screen::Media => "media",
            Screen::AiSettings => "ai-settings",
            Screen::Settings => "settings",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Chat => "Chats",
            Screen::Call => "Call",
            Screen::Media => "Media",
            Screen::AiSettings => "AI Assistant",
            Screen::Settings => "Settings",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Screen::Home => "Start here",
            Screen::Chat => "End-to-end encrypted messaging",
            Screen::Call => "Voice and video calls",
            Screen::Media => "Shared photos and files",
            Screen::AiSettings => "Reply tone and suggestions",
            Screen::Settings => "App preferences",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Tracks the visible screen and the theme. Neither is persisted.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: Screen,
    theme: Theme,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Screen {
        self.current
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Show `screen`. Unconditional: there are no guards or transition rules.
    pub fn navigate(&mut self, screen: Screen) {
        debug!(from = self.current.id(), to = screen.id(), "Navigate");
        self.current = screen;
    }

    pub fn back(&mut self) {
        self.navigate(Screen::Home);
    }

    /// Return to home after sign-in or sign-out. Theme is kept.
    pub fn reset(&mut self) {
        self.current = Screen::Home;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), Screen::Home);
        assert_eq!(nav.theme(), Theme::Dark);
    }

    #[test]
    fn test_navigate_reads_back_every_screen() {
        let mut nav = Navigator::new();
        for screen in Screen::ALL {
            nav.navigate(screen);
            assert_eq!(nav.current(), screen);
        }
        // Order does not matter: the graph is flat
        for screen in Screen::ALL.iter().rev() {
            nav.navigate(*screen);
            assert_eq!(nav.current(), *screen);
        }
    }

    #[test]
    fn test_back_always_returns_home() {
        let mut nav = Navigator::new();
        nav.navigate(Screen::Chat);
        nav.navigate(Screen::Media);
        nav.back();
        assert_eq!(nav.current(), Screen::Home);
    }

    #[test]
    fn test_toggle_theme_twice_is_identity() {
        let mut nav = Navigator::new();
        let original = nav.theme();
        assert_eq!(nav.toggle_theme(), Theme::Light);
        nav.toggle_theme();
        assert_eq!(nav.theme(), original);
    }

    #[test]
    fn test_reset_keeps_theme() {
        let mut nav = Navigator::new();
        nav.toggle_theme();
        nav.navigate(Screen::Settings);
        nav.reset();
        assert_eq!(nav.current(), Screen::Home);
        assert_eq!(nav.theme(), Theme::Light);
    }

    #[test]
    fn test_screen_ids_round_trip() {
        for screen in Screen::ALL {
            assert_eq!(Screen::from_id(screen.id()), Some(screen));
        }
        assert_eq!(Screen::from_id("ai"), None);
        assert_eq!(serde_json::to_string(&Screen::AiSettings).unwrap(), "\"ai-settings\"");
    }
}
