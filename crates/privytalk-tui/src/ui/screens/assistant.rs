use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use privytalk_core::models::{AssistantField, AssistantSettings, SUGGESTIONS};
use privytalk_core::Theme;

use crate::app::App;
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, settings: &AssistantSettings, area: Rect) {
    let theme = app.theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(8), Constraint::Min(4)])
        .split(area);

    let lines: Vec<Line> = AssistantField::ALL
        .iter()
        .map(|field| field_line(theme, settings, *field))
        .collect();

    let block = Block::default()
        .title(" AI Assistant ")
        .title_style(styles::title_style(theme))
        .borders(Borders::ALL)
        .border_style(styles::border_style(theme, true));
    frame.render_widget(Paragraph::new(lines).block(block), chunks[0]);

    let mut lines = vec![Line::from(Span::styled(
        format!(" {} {}", settings.tone.emoji(), settings.tone.description()),
        styles::muted_style(theme),
    ))];
    if settings.auto_suggestions {
        lines.push(Line::from(""));
        lines.extend(SUGGESTIONS.iter().map(|s| {
            Line::from(Span::styled(format!("  • {}", s), styles::list_item_style(theme)))
        }));
    }

    let block = Block::default()
        .title(" Suggestions ")
        .title_style(styles::title_style(theme))
        .borders(Borders::ALL)
        .border_style(styles::border_style(theme, false));
    frame.render_widget(Paragraph::new(lines).block(block), chunks[1]);
}

fn field_line(theme: Theme, settings: &AssistantSettings, field: AssistantField) -> Line<'static> {
    let (label, value, on) = match field {
        AssistantField::Tone => ("Reply tone", settings.tone.label().to_string(), true),
        AssistantField::Language => ("Language", settings.language.label().to_string(), true),
        AssistantField::AutoSuggestions => (
            "Auto suggestions",
            on_off(settings.auto_suggestions),
            settings.auto_suggestions,
        ),
        AssistantField::ContextAware => (
            "Context aware",
            on_off(settings.context_aware),
            settings.context_aware,
        ),
    };

    let focused = settings.focus == field;
    let label_style = if focused {
        styles::selected_style(theme)
    } else {
        styles::list_item_style(theme)
    };

    Line::from(vec![
        Span::styled(format!(" {:<18}", label), label_style),
        Span::styled(format!("◀ {} ▶", value), styles::toggle_style(theme, on)),
    ])
}

fn on_off(value: bool) -> String {
    let label = if value { "On" } else { "Off" };
    label.to_string()
}
