use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use privytalk_core::models::{MediaFilter, MediaGallery, MediaKind};

use crate::app::App;
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, gallery: &MediaGallery, area: Rect) {
    let theme = app.theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(5)])
        .split(area);

    // Filter tabs
    let mut spans = vec![Span::raw(" ")];
    for (i, filter) in MediaFilter::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", styles::muted_style(theme)));
        }
        let label = format!("{} ({})", filter.title(), gallery.count(*filter));
        spans.push(Span::styled(label, styles::tab_style(theme, *filter == gallery.filter)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    let filtered = gallery.filtered();
    let items: Vec<ListItem> = filtered
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let icon = match item.kind {
                MediaKind::Photo => "🖼",
                MediaKind::Video => "🎬",
                MediaKind::Document => "📄",
            };
            let style = if i == gallery.selection {
                styles::selected_style(theme)
            } else {
                styles::list_item_style(theme)
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!(" {}  ", icon)),
                Span::styled(format!("{:<24}", item.name), style),
                Span::styled(format!("{:>9}  ", item.size), styles::muted_style(theme)),
                Span::styled(item.date.clone(), styles::muted_style(theme)),
            ]))
            .style(style)
        })
        .collect();

    let block = Block::default()
        .title(format!(" Shared Media ({}) ", filtered.len()))
        .title_style(styles::title_style(theme))
        .borders(Borders::ALL)
        .border_style(styles::border_style(theme, true));

    let list = List::new(items).block(block);

    let mut state = ListState::default();
    if !filtered.is_empty() {
        state.select(Some(gallery.selection));
    }

    frame.render_stateful_widget(list, chunks[1], &mut state);
}
