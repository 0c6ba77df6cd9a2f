//! # StatusLine Component
//!
//! The line between the title and the list. Doubles as the filter input.
//!
//! - Filtering: `Filter: lamb█`
//! - Browsing with a filter applied: `"lamb": 2 of 3`
//! - Browsing without a filter: `3 log groups`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::core::state::{BrowserState, Mode};
use crate::tui::component::Component;
use crate::tui::theme::Theme;

const CURSOR: &str = "█";

pub struct StatusLine<'a> {
    state: &'a BrowserState,
    theme: &'a Theme,
}

impl<'a> StatusLine<'a> {
    pub fn new(state: &'a BrowserState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn line(&self) -> Line<'static> {
        let indent = Span::raw(" ".repeat(self.theme.title_indent));
        let total = self.state.groups().len();

        match self.state.mode {
            Mode::Filtering => Line::from(vec![
                indent,
                Span::styled("Filter: ", self.theme.filter_prompt),
                Span::raw(self.state.filter().to_string()),
                Span::styled(CURSOR, self.theme.filter_prompt),
            ]),
            _ if !self.state.filter().is_empty() => Line::from(vec![
                indent,
                Span::styled(
                    format!(
                        "\"{}\": {} of {}",
                        self.state.filter(),
                        self.state.visible_len(),
                        total
                    ),
                    self.theme.status,
                ),
            ]),
            _ => Line::from(vec![
                indent,
                Span::styled(count_label(total), self.theme.status),
            ]),
        }
    }
}

fn count_label(total: usize) -> String {
    match total {
        1 => "1 log group".to_string(),
        n => format!("{n} log groups"),
    }
}

impl Component for StatusLine<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(self.line(), area);
    }
}
