//! # HelpBar Component
//!
//! Bottom line listing the keys that do something in the current mode.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::core::state::{BrowserState, Mode};
use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct HelpBar<'a> {
    state: &'a BrowserState,
    theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    pub fn new(state: &'a BrowserState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn text(&self) -> &'static str {
        match self.state.mode {
            Mode::Filtering => "type to filter • ↑/↓ move • enter/esc done • ctrl+c quit",
            _ if !self.state.filter().is_empty() => {
                "↑/k ↓/j move • ←/h →/l page • / filter • esc clear filter • q quit"
            }
            _ => "↑/k ↓/j move • ←/h →/l page • g/G first/last • / filter • q quit",
        }
    }
}

impl Component for HelpBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::raw(" ".repeat(self.theme.item_indent)),
            Span::styled(self.text(), self.theme.dim),
        ]);
        frame.render_widget(line, area);
    }
}
