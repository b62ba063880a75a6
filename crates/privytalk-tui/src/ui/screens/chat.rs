use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use privytalk_core::chat::QUICK_REPLIES;
use privytalk_core::models::Message;
use privytalk_core::{ChatRoom, Theme};

use crate::app::App;
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, room: &ChatRoom, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Transcript
            Constraint::Length(1), // Typing indicator
            Constraint::Length(3), // Draft input
        ])
        .split(area);

    render_transcript(frame, app.theme(), room, chunks[0]);
    render_typing(frame, app.theme(), room, chunks[1]);
    render_draft(frame, app.theme(), room, chunks[2]);
}

fn message_lines(theme: Theme, room: &ChatRoom, message: &Message) -> Vec<Line<'static>> {
    let own = message.is_from(room.me());
    let (name, style) = if own {
        ("You".to_string(), styles::own_message_style(theme))
    } else {
        (message.sender.clone(), styles::peer_message_style(theme))
    };
    let time = message.timestamp.with_timezone(&Local).format("%H:%M").to_string();
    let lock = if message.encrypted { " 🔒" } else { "" };

    vec![
        Line::from(vec![
            Span::styled(name, style),
            Span::styled(format!("  {}{}", time, lock), styles::muted_style(theme)),
        ]),
        Line::from(Span::styled(
            format!("  {}", message.content),
            styles::list_item_style(theme),
        )),
    ]
}

fn render_transcript(frame: &mut Frame, theme: Theme, room: &ChatRoom, area: Rect) {
    let lines: Vec<Line> = room
        .messages()
        .iter()
        .flat_map(|m| message_lines(theme, room, m))
        .collect();

    // Keep the newest messages in view
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(visible) as u16;

    let block = Block::default()
        .title(format!(" {} · Encrypted ", room.peer()))
        .title_style(styles::title_style(theme))
        .borders(Borders::ALL)
        .border_style(styles::border_style(theme, false));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_typing(frame: &mut Frame, theme: Theme, room: &ChatRoom, area: Rect) {
    let line = if room.is_peer_typing() {
        Line::from(Span::styled(
            format!(" {} is typing…", room.peer()),
            styles::highlight_style(theme),
        ))
    } else {
        Line::from("")
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_draft(frame: &mut Frame, theme: Theme, room: &ChatRoom, area: Rect) {
    let line = if room.draft.is_empty() {
        Line::from(Span::styled(
            format!("Type a message… (Tab: \"{}\")", QUICK_REPLIES[0]),
            styles::muted_style(theme),
        ))
    } else {
        Line::from(vec![
            Span::styled(room.draft.clone(), styles::list_item_style(theme)),
            Span::styled("▌", styles::highlight_style(theme)),
        ])
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(theme, true));

    frame.render_widget(Paragraph::new(line).block(block), area);
}
