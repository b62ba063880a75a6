use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::{App, HOME_ITEMS};
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, selection: usize, area: Rect) {
    let theme = app.theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(5)])
        .split(area);

    let name = app
        .current_user()
        .map(|s| s.display_label.as_str())
        .unwrap_or_default();
    let greeting = vec![
        Line::from(Span::styled(
            format!(" Welcome back, {}", name),
            styles::title_style(theme),
        )),
        Line::from(Span::styled(
            " Your conversations are protected with end-to-end encryption.",
            styles::muted_style(theme),
        )),
    ];
    frame.render_widget(Paragraph::new(greeting), chunks[0]);

    let items: Vec<ListItem> = HOME_ITEMS
        .iter()
        .enumerate()
        .map(|(i, screen)| {
            let style = if i == selection {
                styles::selected_style(theme)
            } else {
                styles::list_item_style(theme)
            };
            let line = Line::from(vec![
                Span::styled(format!(" [{}] ", i + 1), styles::help_key_style(theme)),
                Span::styled(format!("{:<14}", screen.title()), style),
                Span::styled(screen.description(), styles::muted_style(theme)),
            ]);
            ListItem::new(line).style(style)
        })
        .collect();

    let block = Block::default()
        .title(" Quick Actions ")
        .title_style(styles::title_style(theme))
        .borders(Borders::ALL)
        .border_style(styles::border_style(theme, true));

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    state.select(Some(selection));

    frame.render_stateful_widget(list, chunks[1], &mut state);
}
