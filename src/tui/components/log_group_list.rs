//! # LogGroupList Component
//!
//! One page of the filtered subset, one log group per row.
//!
//! Rows are produced by each item's `Renderable` impl; the list only decides
//! which rows are on screen and which one is highlighted. The page always
//! contains the highlight, so moving past the last row turns the page.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::BrowserState;
use crate::tui::component::{Component, Renderable};
use crate::tui::theme::Theme;

pub struct LogGroupList<'a> {
    state: &'a BrowserState,
    theme: &'a Theme,
}

impl<'a> LogGroupList<'a> {
    pub fn new(state: &'a BrowserState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn lines(&self, width: u16) -> Vec<Line<'static>> {
        if self.state.visible_len() == 0 {
            let message = if self.state.groups().is_empty() {
                "No log groups."
            } else {
                "No matches."
            };
            return vec![Line::from(vec![
                Span::raw(" ".repeat(self.theme.item_indent)),
                Span::styled(message, self.theme.dim),
            ])];
        }

        let selected = self.state.selected();
        self.state
            .page_items()
            .into_iter()
            .map(|(pos, name)| name.render(pos + 1, Some(pos) == selected, self.theme, width))
            .collect()
    }
}

impl Component for LogGroupList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Paragraph::new(self.lines(area.width)), area);
    }
}
