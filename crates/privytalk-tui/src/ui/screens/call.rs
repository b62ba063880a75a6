use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use privytalk_core::models::{call_history, CallKind, CallState};

use crate::app::App;
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, call: &CallState, area: Rect) {
    let theme = app.theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(5)])
        .split(area);

    let peer = app.peer_identifier();
    let mut lines = vec![Line::from("")];

    if call.is_active() {
        lines.push(Line::from(Span::styled(
            format!("  {} with {}", call.kind().label(), peer),
            styles::title_style(theme),
        )));
        lines.push(Line::from(Span::styled("  Connected · 00:00", styles::success_style(theme))));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  Mic: ", styles::muted_style(theme)),
            Span::styled(
                if call.is_mic_on() { "on " } else { "off" },
                styles::toggle_style(theme, call.is_mic_on()),
            ),
            Span::styled("   Camera: ", styles::muted_style(theme)),
            Span::styled(
                if call.is_video_on() { "on " } else { "off" },
                styles::toggle_style(theme, call.is_video_on()),
            ),
        ]));
    } else {
        lines.push(Line::from(Span::styled(
            format!("  {}", peer),
            styles::title_style(theme),
        )));
        lines.push(Line::from(Span::styled(
            "  Calls are end-to-end encrypted",
            styles::muted_style(theme),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  [v] ", styles::help_key_style(theme)),
            Span::styled(CallKind::Voice.label(), styles::list_item_style(theme)),
            Span::styled("    [c] ", styles::help_key_style(theme)),
            Span::styled(CallKind::Video.label(), styles::list_item_style(theme)),
        ]));
    }

    let block = Block::default()
        .title(" Call ")
        .title_style(styles::title_style(theme))
        .borders(Borders::ALL)
        .border_style(styles::border_style(theme, call.is_active()));
    frame.render_widget(Paragraph::new(lines).block(block), chunks[0]);

    let items: Vec<ListItem> = call_history()
        .into_iter()
        .map(|record| {
            let direction = if record.incoming { "↙" } else { "↗" };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", direction), styles::highlight_style(theme)),
                Span::styled(format!("{:<12}", record.kind.label()), styles::list_item_style(theme)),
                Span::styled(format!("{:>7}  ", record.duration), styles::list_item_style(theme)),
                Span::styled(record.when, styles::muted_style(theme)),
            ]))
        })
        .collect();

    let block = Block::default()
        .title(" Recent Calls ")
        .title_style(styles::title_style(theme))
        .borders(Borders::ALL)
        .border_style(styles::border_style(theme, false));
    frame.render_widget(List::new(items).block(block), chunks[1]);
}
