use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use privytalk_core::{Screen, Theme};

use crate::app::{App, AppState, LoginFocus, View};

use super::screens::{assistant, call, chat, home, media, settings};
use super::styles;

const LOGO: [&str; 3] = [
    "   ╔═╗╦═╗╦╦  ╦╦ ╦╔╦╗╔═╗╦  ╦╔═",
    "   ╠═╝╠╦╝║╚╗╔╝╚╦╝ ║ ╠═╣║  ╠╩╗",
    "   ╩  ╩╚═╩ ╚╝  ╩  ╩ ╩ ╩╩═╝╩ ╩",
];

pub fn render(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    frame.render_widget(Block::default().style(styles::base_style(theme)), frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Min(10),   // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_title_bar(frame, app, chunks[0]);
    // Nothing behind the login gate is drawn until a session exists
    if app.is_authenticated() {
        render_main_content(frame, app, chunks[1]);
    }
    render_status_bar(frame, app, chunks[2]);

    // Render overlays
    if matches!(app.state, AppState::LoggingIn) {
        render_login_overlay(frame, app);
    }

    if matches!(app.state, AppState::ConfirmingQuit) {
        render_quit_overlay(frame, theme);
    }
}

fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let title = format!("  PrivyTalk · {}", app.navigator.current().title());
    let user_hint = match app.current_user() {
        Some(session) => format!("🔒 {}", session.display_label),
        None => "🔒 Locked".to_string(),
    };

    let title_line = Line::from(vec![
        Span::styled(title.clone(), styles::title_style(theme)),
        Span::raw(" ".repeat(
            (area.width as usize)
                .saturating_sub(title.chars().count() + user_hint.chars().count() + 4),
        )),
        Span::styled(user_hint, styles::muted_style(theme)),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(styles::muted_style(theme));

    let paragraph = Paragraph::new(title_line).block(block);
    frame.render_widget(paragraph, area);
}

fn render_main_content(frame: &mut Frame, app: &App, area: Rect) {
    match &app.view {
        View::Home { selection } => home::render(frame, app, *selection, area),
        View::Chat(room) => chat::render(frame, app, room, area),
        View::Call(state) => call::render(frame, app, state, area),
        View::Media(gallery) => media::render(frame, app, gallery, area),
        View::AiSettings(settings) => assistant::render(frame, app, settings, area),
        View::Settings(panel) => settings::render(frame, app, panel, area),
    }
}

fn shortcuts(app: &App) -> &'static str {
    if !app.is_authenticated() {
        return "[Tab] next field | [Enter] sign in | [Esc] quit";
    }
    match app.navigator.current() {
        Screen::Home => "[1-5] open | [t]heme | [q]uit",
        Screen::Chat => "[Enter] send | [Tab] quick reply | [Esc] back",
        Screen::Call => "[v]oice | [c]amera | [m]ic | [e]nd | [Esc] back",
        Screen::Media => "[←/→] filter | [↑/↓] select | [Esc] back",
        Screen::AiSettings => "[↑/↓] field | [←/→] change | [Esc] back",
        Screen::Settings => "[Enter] select | [t]heme | [Esc] back",
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let theme = app.theme();
    let left_text = match app.status_message {
        Some(ref msg) => format!(" {} ", msg),
        None => " End-to-end encrypted ".to_string(),
    };
    let right_text = format!(" {} ", shortcuts(app));

    let width = area.width as usize;
    let padding_len = width
        .saturating_sub(left_text.chars().count())
        .saturating_sub(right_text.chars().count());
    let status_line = Line::from(vec![
        Span::styled(left_text, styles::muted_style(theme)),
        Span::raw(" ".repeat(padding_len)),
        Span::styled(right_text, styles::muted_style(theme)),
    ]);
    let paragraph = Paragraph::new(status_line).style(styles::status_bar_style(theme));
    frame.render_widget(paragraph, area);
}

fn logo_lines(theme: Theme) -> Vec<Line<'static>> {
    LOGO.iter()
        .map(|row| Line::from(Span::styled(*row, styles::title_style(theme))))
        .collect()
}

fn render_login_overlay(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    let height = if app.login_error.is_some() { 14 } else { 12 };
    let area = centered_rect_fixed(44, height, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let mut lines = logo_lines(theme);
    lines.push(Line::from(""));

    let field_style = |focused: bool| {
        if focused {
            styles::selected_style(theme)
        } else {
            styles::list_item_style(theme)
        }
    };

    let identifier_focused = app.login_focus == LoginFocus::Identifier;
    let cursor = if identifier_focused { "▌" } else { "" };
    lines.push(Line::from(vec![
        Span::raw("   "),
        Span::styled("Username: [", styles::muted_style(theme)),
        Span::styled(
            format!("{:<18}{}", app.login_identifier, cursor),
            field_style(identifier_focused),
        ),
        Span::styled("]", styles::muted_style(theme)),
    ]));

    // Never echo the secret itself
    let secret_focused = app.login_focus == LoginFocus::Secret;
    let masked = "*".repeat(app.login_secret.chars().count().min(18));
    let cursor = if secret_focused { "▌" } else { "" };
    lines.push(Line::from(vec![
        Span::raw("   "),
        Span::styled("Password: [", styles::muted_style(theme)),
        Span::styled(format!("{:<18}{}", masked, cursor), field_style(secret_focused)),
        Span::styled("]", styles::muted_style(theme)),
    ]));

    let button_focused = app.login_focus == LoginFocus::Button;
    let label = if button_focused {
        " ▶ Sign In ◀ "
    } else {
        "   Sign In   "
    };
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("            ["),
        Span::styled(label, field_style(button_focused)),
        Span::raw("]"),
    ]));

    if let Some(ref error) = app.login_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!(" {}", error),
            styles::error_style(theme),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(theme, true))
        .style(styles::base_style(theme));

    let paragraph = Paragraph::new(lines).block(block);

    frame.render_widget(paragraph, area);
}

/// Create a centered rectangle with fixed dimensions
pub(crate) fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}

fn render_quit_overlay(frame: &mut Frame, theme: Theme) {
    let area = centered_rect_fixed(44, 10, frame.area());

    // Clear the area
    frame.render_widget(Clear, area);

    let mut lines = logo_lines(theme);
    lines.extend([
        Line::from(""),
        Line::from(Span::styled(
            "   Are you sure you want to quit?",
            styles::highlight_style(theme),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("   Press ", styles::muted_style(theme)),
            Span::styled("[Y]", styles::help_key_style(theme)),
            Span::styled(" to quit, ", styles::muted_style(theme)),
            Span::styled("[N]", styles::help_key_style(theme)),
            Span::styled(" to cancel", styles::muted_style(theme)),
        ]),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(theme, true))
        .style(styles::base_style(theme));

    let paragraph = Paragraph::new(lines).block(block);

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{fixture_app, signed_in_app};
    use privytalk_core::MemoryStore;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_centered_rect_fixed() {
        let r = centered_rect_fixed(10, 4, Rect::new(0, 0, 30, 10));
        assert_eq!(r, Rect::new(10, 3, 10, 4));

        let clipped = centered_rect_fixed(50, 20, Rect::new(0, 0, 30, 10));
        assert_eq!(clipped.width, 30);
        assert_eq!(clipped.height, 10);
    }

    #[test]
    fn test_login_overlay_masks_secret() {
        let mut app = fixture_app(MemoryStore::shared());
        app.start_login();
        app.login_identifier = "Rachit_14".to_string();
        app.login_secret = "hunter22".to_string();
        app.login_error = Some("Access denied".to_string());

        let screen = draw(&app);
        assert!(screen.contains("Rachit_14"));
        assert!(screen.contains("********"));
        assert!(!screen.contains("hunter22"));
        assert!(screen.contains("Access denied"));
    }

    #[test]
    fn test_attachment_row_shows_one_paperclip() {
        let mut app = signed_in_app();
        app.navigate(Screen::Chat);
        match app.view {
            View::Chat(ref mut room) => {
                room.draft = "/attach notes.pdf".to_string();
                assert!(room.submit());
            }
            _ => panic!("expected chat view"),
        }

        let screen = draw(&app);
        assert!(screen.contains("notes.pdf"));
        assert_eq!(screen.matches('📎').count(), 1);
    }

    #[test]
    fn test_every_screen_renders() {
        let mut app = signed_in_app();
        for screen in Screen::ALL {
            app.navigate(screen);
            let drawn = draw(&app);
            assert!(drawn.contains("PrivyTalk"));
        }
    }
}
