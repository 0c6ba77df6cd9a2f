//! Styles for every component, built once at startup and passed down as props.

use ratatui::style::{Color, Modifier, Style};

use crate::core::config::{DEFAULT_HIGHLIGHT_COLOR, ResolvedConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub title: Style,
    pub title_indent: usize,
    pub item: Style,
    pub item_indent: usize,
    pub selected: Style,
    pub selected_indent: usize,
    pub status: Style,
    pub filter_prompt: Style,
    pub dim: Style,
}

impl Theme {
    pub fn new(highlight_color: u8) -> Self {
        Self {
            title: Style::default().add_modifier(Modifier::BOLD),
            title_indent: 2,
            item: Style::default(),
            item_indent: 4,
            selected: Style::default().fg(Color::Indexed(highlight_color)),
            selected_indent: 2,
            status: Style::default().fg(Color::Gray),
            filter_prompt: Style::default().fg(Color::Indexed(highlight_color)),
            dim: Style::default().fg(Color::DarkGray),
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.highlight_color)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(DEFAULT_HIGHLIGHT_COLOR)
    }
}
