use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::log_group::LogGroupName;
use crate::tui::theme::Theme;

/// A reusable UI component.
///
/// Components in this architecture follow the React pattern:
/// - They receive data via props (struct fields).
/// - They render to a `Frame` within a given `Rect`.
///
/// The `render` method takes `&mut self` so a component can cache layout
/// work during the render pass, in line with Ratatui's `StatefulWidget`.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Something that can be shown as one row of the list.
///
/// The list only knows ordinals and highlight; how an item turns into text is
/// up to the item.
pub trait Renderable {
    /// Render as a single line no wider than `width` columns.
    /// `ordinal` is 1-based.
    fn render(&self, ordinal: usize, highlighted: bool, theme: &Theme, width: u16) -> Line<'static>;
}

/// Marker shown in front of the highlighted row.
pub const HIGHLIGHT_MARKER: &str = "> ";

impl Renderable for LogGroupName {
    fn render(&self, ordinal: usize, highlighted: bool, theme: &Theme, width: u16) -> Line<'static> {
        let text = format!("{}. {}", ordinal, self.as_str());

        if highlighted {
            let indent = " ".repeat(theme.selected_indent);
            let budget = (width as usize).saturating_sub(indent.len() + HIGHLIGHT_MARKER.len());
            Line::from(vec![
                Span::raw(indent),
                Span::styled(
                    format!("{HIGHLIGHT_MARKER}{}", truncate(&text, budget)),
                    theme.selected,
                ),
            ])
        } else {
            let indent = " ".repeat(theme.item_indent);
            let budget = (width as usize).saturating_sub(indent.len());
            Line::from(vec![
                Span::raw(indent),
                Span::styled(truncate(&text, budget), theme.item),
            ])
        }
    }
}

/// Cut `s` to `max_width` display columns, ending in `…` when shortened.
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
