//! # Paginator Component
//!
//! Shows which page of the list is on screen: one dot per page when they fit
//! (`●○○`), `2/17` otherwise. Hidden when everything fits on one page.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use crate::core::state::BrowserState;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

const ACTIVE_DOT: &str = "●";
const INACTIVE_DOT: &str = "○";

pub struct Paginator<'a> {
    state: &'a BrowserState,
    theme: &'a Theme,
}

impl<'a> Paginator<'a> {
    pub fn new(state: &'a BrowserState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    pub fn text(&self, width: u16) -> Option<String> {
        let total = self.state.total_pages();
        if total <= 1 {
            return None;
        }
        let page = self.state.page();
        let available = (width as usize).saturating_sub(self.theme.item_indent);

        if total <= available {
            Some(
                (0..total)
                    .map(|p| if p == page { ACTIVE_DOT } else { INACTIVE_DOT })
                    .collect(),
            )
        } else {
            Some(format!("{}/{}", page + 1, total))
        }
    }
}

impl Component for Paginator<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if let Some(text) = self.text(area.width) {
            let line = Line::from(vec![
                Span::raw(" ".repeat(self.theme.item_indent)),
                Span::styled(text, self.theme.dim),
            ]);
            frame.render_widget(line, area);
        }
    }
}
