use ratatui::style::{Color, Modifier, Style};

use privytalk_core::Theme;

/// Color palette for one theme
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub error: Color,
    pub muted: Color,
    pub highlight: Color,
    pub text: Color,
    pub background: Color,
    pub bar: Color,
    pub own_bubble: Color,
    pub peer_bubble: Color,
}

const DARK: Palette = Palette {
    primary: Color::Rgb(147, 51, 234),
    secondary: Color::Rgb(74, 222, 128),
    accent: Color::Rgb(236, 72, 153),
    error: Color::Rgb(248, 113, 113),
    muted: Color::Rgb(156, 163, 175),
    highlight: Color::Rgb(55, 65, 81),
    text: Color::Rgb(243, 244, 246),
    background: Color::Rgb(17, 24, 39),
    bar: Color::Rgb(31, 41, 55),
    own_bubble: Color::Rgb(196, 181, 253),
    peer_bubble: Color::Rgb(209, 213, 219),
};

const LIGHT: Palette = Palette {
    primary: Color::Rgb(124, 58, 237),
    secondary: Color::Rgb(22, 163, 74),
    accent: Color::Rgb(219, 39, 119),
    error: Color::Rgb(220, 38, 38),
    muted: Color::Rgb(107, 114, 128),
    highlight: Color::Rgb(229, 231, 235),
    text: Color::Rgb(17, 24, 39),
    background: Color::Rgb(249, 250, 251),
    bar: Color::Rgb(255, 255, 255),
    own_bubble: Color::Rgb(109, 40, 217),
    peer_bubble: Color::Rgb(31, 41, 55),
};

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}

// Styles
pub fn base_style(theme: Theme) -> Style {
    let p = palette(theme);
    Style::default().fg(p.text).bg(p.background)
}

pub fn title_style(theme: Theme) -> Style {
    Style::default()
        .fg(palette(theme).primary)
        .add_modifier(Modifier::BOLD)
}

pub fn selected_style(theme: Theme) -> Style {
    Style::default()
        .bg(palette(theme).highlight)
        .add_modifier(Modifier::BOLD)
}

pub fn list_item_style(theme: Theme) -> Style {
    Style::default().fg(palette(theme).text)
}

pub fn muted_style(theme: Theme) -> Style {
    Style::default().fg(palette(theme).muted)
}

pub fn highlight_style(theme: Theme) -> Style {
    Style::default().fg(palette(theme).accent)
}

pub fn success_style(theme: Theme) -> Style {
    Style::default().fg(palette(theme).secondary)
}

pub fn error_style(theme: Theme) -> Style {
    Style::default().fg(palette(theme).error)
}

pub fn tab_style(theme: Theme, selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(palette(theme).primary)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    } else {
        muted_style(theme)
    }
}

pub fn border_style(theme: Theme, focused: bool) -> Style {
    if focused {
        Style::default().fg(palette(theme).primary)
    } else {
        Style::default().fg(palette(theme).muted)
    }
}

pub fn status_bar_style(theme: Theme) -> Style {
    let p = palette(theme);
    Style::default().bg(p.bar).fg(p.text)
}

pub fn help_key_style(theme: Theme) -> Style {
    Style::default()
        .fg(palette(theme).accent)
        .add_modifier(Modifier::BOLD)
}

pub fn own_message_style(theme: Theme) -> Style {
    Style::default().fg(palette(theme).own_bubble)
}

pub fn peer_message_style(theme: Theme) -> Style {
    Style::default().fg(palette(theme).peer_bubble)
}

pub fn toggle_style(theme: Theme, on: bool) -> Style {
    if on {
        success_style(theme).add_modifier(Modifier::BOLD)
    } else {
        muted_style(theme)
    }
}
