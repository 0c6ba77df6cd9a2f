use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::BrowserState;
use crate::tui::Header;
use crate::tui::component::Component;
use crate::tui::components::{HelpBar, LogGroupList, Paginator, StatusLine, TitleBar};
use crate::tui::theme::Theme;

/// Heights of the chrome rows `[title, status, paginator, help]` for a frame
/// `height` rows tall.
///
/// Together they add up to `core::state::CHROME_ROWS` whenever the frame has
/// room for it, since the reducer pages by the rows left over. On shorter
/// frames the list keeps one row (the reducer's minimum page) and chrome rows
/// are dropped: help first, then title, then status. The paginator goes last.
fn chrome_heights(height: u16) -> [u16; 4] {
    let mut spare = height.saturating_sub(1);
    let mut take = || {
        let row = spare.min(1);
        spare -= row;
        row
    };
    let pager = take();
    let status = take();
    let title = take();
    let help = take();
    [title, status, pager, help]
}

/// Lay out and draw one full frame.
pub fn draw_ui(frame: &mut Frame, state: &BrowserState, header: &Header, theme: &Theme) {
    use Constraint::{Length, Min};
    let [title, status, pager, help] = chrome_heights(frame.area().height);
    let layout = Layout::vertical([
        Length(title),
        Length(status),
        Min(0),
        Length(pager),
        Length(help),
    ]);
    let [title_area, status_area, list_area, pager_area, help_area] = layout.areas(frame.area());

    TitleBar::new(header, theme).render(frame, title_area);
    StatusLine::new(state, theme).render(frame, status_area);
    LogGroupList::new(state, theme).render(frame, list_area);
    Paginator::new(state, theme).render(frame, pager_area);
    HelpBar::new(state, theme).render(frame, help_area);
}
