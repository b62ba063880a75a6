//! Application state management for PrivyTalk.
//!
//! This module contains the `App` struct that ties the session gate, the
//! navigation controller and the per-screen state together.

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info, warn};

use privytalk_core::auth::ACCESS_DENIED;
use privytalk_core::models::{AssistantSettings, CallState, MediaGallery, SettingsPanel};
use privytalk_core::storage::clear_app_data;
use privytalk_core::{ChatRoom, Config, Navigator, Screen, Session, SessionStore, SharedStore, Theme};

// ============================================================================
// Constants
// ============================================================================

/// Maximum length for identifier input.
const MAX_IDENTIFIER_LENGTH: usize = 50;

/// Maximum length for secret input.
/// 128 chars accommodates password managers and passphrases.
const MAX_SECRET_LENGTH: usize = 128;

/// Shown as the peer when the allow-list has nobody else in it.
const UNKNOWN_PEER: &str = "Unknown";

/// Home menu entries, in display order.
pub const HOME_ITEMS: [Screen; 5] = [
    Screen::Chat,
    Screen::Call,
    Screen::Media,
    Screen::AiSettings,
    Screen::Settings,
];

// ============================================================================
// UI State Types
// ============================================================================

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    LoggingIn,
    ConfirmingQuit,
    Quitting,
}

/// Login form focus state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoginFocus {
    Identifier,
    Secret,
    Button,
}

/// State of the visible screen. Each variant owns only what its screen
/// needs; replacing the view drops the old screen's state.
pub enum View {
    Home { selection: usize },
    Chat(ChatRoom),
    Call(CallState),
    Media(MediaGallery),
    AiSettings(AssistantSettings),
    Settings(SettingsPanel),
}

impl View {
    pub fn screen(&self) -> Screen {
        match self {
            View::Home { .. } => Screen::Home,
            View::Chat(_) => Screen::Chat,
            View::Call(_) => Screen::Call,
            View::Media(_) => Screen::Media,
            View::AiSettings(_) => Screen::AiSettings,
            View::Settings(_) => Screen::Settings,
        }
    }
}

// ============================================================================
// Main Application Struct
// ============================================================================

pub struct App {
    pub config: Config,
    config_path: Option<PathBuf>,
    store: SharedStore,
    pub sessions: SessionStore,
    pub navigator: Navigator,
    pub view: View,
    pub state: AppState,

    // Login form state
    pub login_identifier: String,
    pub login_secret: String,
    pub login_focus: LoginFocus,
    pub login_error: Option<String>,

    pub status_message: Option<String>,
}

impl App {
    /// Create the app and rehydrate any persisted session.
    ///
    /// `config_path` is where the last used identifier is remembered; `None`
    /// keeps config changes in memory.
    pub fn new(config: Config, config_path: Option<PathBuf>, store: SharedStore) -> Result<Self> {
        let allow_list = config.allow_list()?;
        if allow_list.is_empty() {
            warn!("Credential allow-list is empty, nobody can sign in");
        }
        debug!(entries = allow_list.len(), "Allow-list loaded");

        let mut sessions = SessionStore::new(allow_list, store.clone());
        let restored = sessions.restore();
        debug!(restored = restored.is_some(), "Session restore attempted");

        let login_identifier = std::env::var("PRIVYTALK_USERNAME")
            .ok()
            .or_else(|| config.last_identifier.clone())
            .unwrap_or_default();

        Ok(Self {
            config,
            config_path,
            store,
            sessions,
            navigator: Navigator::new(),
            view: View::Home { selection: 0 },
            state: AppState::Normal,

            login_identifier,
            login_secret: String::new(),
            login_focus: LoginFocus::Identifier,
            login_error: None,

            status_message: None,
        })
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    pub fn is_authenticated(&self) -> bool {
        self.sessions.is_authenticated()
    }

    pub fn current_user(&self) -> Option<&Session> {
        self.sessions.session()
    }

    /// Attempt login with the credentials from the login form.
    /// Every failure shows the same message.
    pub fn attempt_login(&mut self) -> bool {
        let identifier = self.login_identifier.clone();

        if !self.sessions.authorize(&identifier, &self.login_secret) {
            info!("Login rejected");
            self.login_error = Some(ACCESS_DENIED.to_string());
            return false;
        }

        self.login_secret.clear();
        self.login_error = None;
        self.remember_identifier(identifier);

        self.navigator.reset();
        self.view = View::Home { selection: 0 };
        self.state = AppState::Normal;
        info!("Login successful");
        true
    }

    fn remember_identifier(&mut self, identifier: String) {
        self.config.last_identifier = Some(identifier);
        if let Some(ref path) = self.config_path {
            if let Err(e) = self.config.save_to(path) {
                warn!(error = %e, "Failed to save config");
            }
        }
    }

    /// Start the login process (show login overlay)
    pub fn start_login(&mut self) {
        self.state = AppState::LoggingIn;
        self.login_focus = if self.login_identifier.is_empty() {
            LoginFocus::Identifier
        } else {
            LoginFocus::Secret
        };
        self.login_error = None;
    }

    pub fn logout(&mut self) {
        self.sessions.clear();
        self.navigator.reset();
        self.view = View::Home { selection: 0 };
        self.login_secret.clear();
        self.status_message = None;
        self.start_login();
    }

    /// The other party in chats and calls.
    pub fn peer_identifier(&self) -> String {
        let me = self
            .current_user()
            .map(|s| s.identifier.as_str())
            .unwrap_or_default();
        self.sessions
            .allow_list()
            .peer_of(me)
            .map(|r| r.identifier.clone())
            .unwrap_or_else(|| UNKNOWN_PEER.to_string())
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn theme(&self) -> Theme {
        self.navigator.theme()
    }

    pub fn navigate(&mut self, screen: Screen) {
        if let View::Chat(ref mut room) = self.view {
            room.cancel_pending();
        }
        self.navigator.navigate(screen);
        self.view = self.build_view(screen);
        self.status_message = None;
    }

    pub fn go_back(&mut self) {
        self.navigate(Screen::Home);
    }

    pub fn toggle_theme(&mut self) {
        let theme = self.navigator.toggle_theme();
        debug!(?theme, "Theme toggled");
    }

    fn build_view(&self, screen: Screen) -> View {
        match screen {
            Screen::Home => View::Home { selection: 0 },
            Screen::Chat => {
                let me = self
                    .current_user()
                    .map(|s| s.identifier.clone())
                    .unwrap_or_default();
                View::Chat(ChatRoom::open(me, self.peer_identifier(), self.store.clone()))
            }
            Screen::Call => View::Call(CallState::new()),
            Screen::Media => View::Media(MediaGallery::open(&self.store)),
            Screen::AiSettings => View::AiSettings(AssistantSettings::default()),
            Screen::Settings => {
                let label = self
                    .current_user()
                    .map(|s| s.display_label.clone())
                    .unwrap_or_default();
                View::Settings(SettingsPanel::new(label))
            }
        }
    }

    // =========================================================================
    // Data
    // =========================================================================

    /// Wipe the chat transcript and media index.
    pub fn clear_data(&mut self) {
        match clear_app_data(self.store.as_ref()) {
            Ok(()) => {
                info!("App data cleared");
                self.status_message = Some("Chat history and media cleared".to_string());
            }
            Err(e) => {
                warn!(error = %e, "Failed to clear app data");
                self.status_message = Some("Could not clear data".to_string());
            }
        }
    }

    /// Deliver any simulated chat events that have arrived.
    pub fn check_background_tasks(&mut self) {
        if let View::Chat(ref mut room) = self.view {
            room.poll();
        }
    }
}

// ============================================================================
// Input validation helpers (exported for use in input.rs)
// ============================================================================

/// Check if a character is valid for input (no control characters)
fn is_valid_input_char(c: char) -> bool {
    !c.is_control()
}

/// Check if an identifier character should be accepted
pub fn can_add_identifier_char(current_len: usize, c: char) -> bool {
    current_len < MAX_IDENTIFIER_LENGTH && is_valid_input_char(c)
}

/// Check if a secret character should be accepted
pub fn can_add_secret_char(current_len: usize, c: char) -> bool {
    current_len < MAX_SECRET_LENGTH && is_valid_input_char(c)
}

// ============================================================================
// Tests
// ============================================================================
