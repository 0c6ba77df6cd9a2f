//! # TitleBar Component
//!
//! Top line showing where the list came from.
//!
//! ## Responsibilities
//!
//! - Display the tool name
//! - Display the region and account the log groups were fetched from
//! - Display when the snapshot was taken (the list is never refreshed)
//!
//! ## Stateless Component
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state.
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(&header, &theme);
//! title_bar.render(frame, area);
//! ```
//!
//! ## Conditional Formatting
//!
//! Segments are dropped from the right when the terminal is too narrow:
//!
//! 1. `"lgbrowse · eu-west-1 · account 123456789012 · fetched 14:02:11"`
//! 2. `"lgbrowse · eu-west-1 · account 123456789012"`
//! 3. `"lgbrowse · eu-west-1"`

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::tui::Header;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

const SEPARATOR: &str = " · ";

pub struct TitleBar<'a> {
    header: &'a Header,
    theme: &'a Theme,
}

impl<'a> TitleBar<'a> {
    pub fn new(header: &'a Header, theme: &'a Theme) -> Self {
        Self { header, theme }
    }

    /// The widest title that fits in `width` columns after the indent.
    pub fn text(&self, width: u16) -> String {
        let available = (width as usize).saturating_sub(self.theme.title_indent);
        let mut segments = vec![
            "lgbrowse".to_string(),
            self.header.region.clone(),
        ];
        if !self.header.account.is_empty() {
            segments.push(format!("account {}", self.header.account));
        }
        segments.push(format!("fetched {}", self.header.fetched_at));

        while segments.len() > 1 {
            let text = segments.join(SEPARATOR);
            if text.width() <= available {
                return text;
            }
            segments.pop();
        }
        segments.join(SEPARATOR)
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::raw(" ".repeat(self.theme.title_indent)),
            Span::styled(self.text(area.width), self.theme.title),
        ]);
        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn header() -> Header {
        Header {
            region: "eu-west-1".to_string(),
            account: "123456789012".to_string(),
            fetched_at: "14:02:11".to_string(),
        }
    }

    #[test]
    fn test_title_bar_renders_all_segments() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let header = header();
        let theme = Theme::default();

        terminal
            .draw(|f| {
                TitleBar::new(&header, &theme).render(f, f.area());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();

        assert!(text.starts_with("  lgbrowse"));
        assert!(text.contains("eu-west-1"));
        assert!(text.contains("account 123456789012"));
        assert!(text.contains("fetched 14:02:11"));
    }

    #[test]
    fn test_title_bar_drops_segments_when_narrow() {
        let header = header();
        let theme = Theme::default();
        let title_bar = TitleBar::new(&header, &theme);

        assert_eq!(
            title_bar.text(48),
            "lgbrowse · eu-west-1 · account 123456789012"
        );
        assert_eq!(title_bar.text(25), "lgbrowse · eu-west-1");
        assert_eq!(title_bar.text(5), "lgbrowse");
    }

    #[test]
    fn test_title_bar_without_account() {
        let header = Header {
            account: String::new(),
            ..header()
        };
        let theme = Theme::default();
        assert_eq!(
            TitleBar::new(&header, &theme).text(80),
            "lgbrowse · eu-west-1 · fetched 14:02:11"
        );
    }
}
