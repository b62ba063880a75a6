use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use privytalk_core::models::{Confirmation, SettingsItem, SettingsPanel};
use privytalk_core::Theme;

use crate::app::App;
use crate::ui::render::centered_rect_fixed;
use crate::ui::styles;

pub fn render(frame: &mut Frame, app: &App, panel: &SettingsPanel, area: Rect) {
    let theme = app.theme();
    let mut lines = vec![];
    let mut section = "";

    for (i, item) in SettingsItem::ALL.iter().enumerate() {
        if item.section() != section {
            section = item.section();
            if i > 0 {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                format!(" {}", section),
                styles::highlight_style(theme),
            )));
        }

        let style = if i == panel.selection {
            styles::selected_style(theme)
        } else {
            styles::list_item_style(theme)
        };

        let value = match item {
            SettingsItem::DisplayName => {
                let cursor = if panel.editing_name { "▌" } else { "" };
                Span::styled(format!("{}{}", panel.display_name, cursor), style)
            }
            SettingsItem::DarkMode => toggle(theme, app.theme().is_dark()),
            SettingsItem::Notifications => toggle(theme, panel.notifications),
            SettingsItem::Encryption => Span::styled("Always on", styles::success_style(theme)),
            SettingsItem::ClearData | SettingsItem::Logout => Span::raw(""),
        };

        lines.push(Line::from(vec![
            Span::styled(format!("   {:<24}", item.label()), style),
            value,
        ]));
    }

    let block = Block::default()
        .title(" Settings ")
        .title_style(styles::title_style(theme))
        .borders(Borders::ALL)
        .border_style(styles::border_style(theme, true));
    frame.render_widget(Paragraph::new(lines).block(block), area);

    if let Some(confirmation) = panel.confirming {
        render_confirmation(frame, theme, confirmation, area);
    }
}

fn toggle(theme: Theme, on: bool) -> Span<'static> {
    Span::styled(if on { "[on] " } else { "[off]" }, styles::toggle_style(theme, on))
}

fn render_confirmation(frame: &mut Frame, theme: Theme, confirmation: Confirmation, area: Rect) {
    let question = match confirmation {
        Confirmation::ClearData => "  Delete all chat history and media?",
        Confirmation::Logout => "  Sign out of PrivyTalk?",
    };

    let area = centered_rect_fixed(42, 6, area);
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(question, styles::error_style(theme))),
        Line::from(""),
        Line::from(vec![
            Span::styled("  [Y]", styles::help_key_style(theme)),
            Span::styled(" confirm  ", styles::muted_style(theme)),
            Span::styled("[N]", styles::help_key_style(theme)),
            Span::styled(" cancel", styles::muted_style(theme)),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::border_style(theme, true))
        .style(styles::base_style(theme));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
