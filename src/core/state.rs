//! # Browser State
//!
//! Everything the interactive list needs, in one place. No terminal types.
//!
//! ```text
//! BrowserState
//! ├── groups: LogGroupCollection   // read-only input from the fetcher
//! ├── mode: Mode                   // Browsing | Filtering | Exited
//! ├── filter: String               // current filter text
//! ├── visible: Vec<usize>          // indices into groups matching filter
//! ├── selected: Option<usize>      // position within visible
//! ├── viewport: Viewport           // terminal size
//! ├── policy: MatchPolicy          // case handling for the filter
//! └── max_rows: Option<u16>        // optional cap on rows per page
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::filter::{MatchPolicy, filter_indices};
use crate::core::log_group::{LogGroupCollection, LogGroupName};

/// Rows taken by everything that isn't the list: title, status, paginator, help.
pub const CHROME_ROWS: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    Filtering,
    Exited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone)]
pub struct BrowserState {
    groups: LogGroupCollection,
    pub mode: Mode,
    filter: String,
    visible: Vec<usize>,
    selected: Option<usize>,
    pub viewport: Viewport,
    policy: MatchPolicy,
    max_rows: Option<u16>,
}

impl BrowserState {
    pub fn new(groups: LogGroupCollection, policy: MatchPolicy, viewport: Viewport) -> Self {
        let visible: Vec<usize> = (0..groups.len()).collect();
        let selected = if visible.is_empty() { None } else { Some(0) };
        Self {
            groups,
            mode: Mode::Browsing,
            filter: String::new(),
            visible,
            selected,
            viewport,
            policy,
            max_rows: None,
        }
    }

    pub fn with_max_rows(mut self, max_rows: Option<u16>) -> Self {
        self.max_rows = max_rows.filter(|r| *r > 0);
        self
    }

    pub fn groups(&self) -> &LogGroupCollection {
        &self.groups
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Position of the highlight within the filtered subset.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_name(&self) -> Option<&LogGroupName> {
        self.selected
            .and_then(|pos| self.visible.get(pos))
            .and_then(|&i| self.groups.get(i))
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// The filtered subset, in collection order.
    pub fn visible(&self) -> impl Iterator<Item = &LogGroupName> {
        self.visible.iter().filter_map(|&i| self.groups.get(i))
    }

    // ------------------------------------------------------------------
    // Pagination
    // ------------------------------------------------------------------

    /// List rows available per page, never zero. On frames too short for the
    /// chrome the layout drops chrome rows so one list row always remains.
    pub fn per_page(&self) -> usize {
        let rows = self.viewport.height.saturating_sub(CHROME_ROWS).max(1);
        let rows = match self.max_rows {
            Some(cap) => rows.min(cap),
            None => rows,
        };
        rows as usize
    }

    pub fn total_pages(&self) -> usize {
        self.visible.len().div_ceil(self.per_page()).max(1)
    }

    /// Zero-based page holding the highlight.
    pub fn page(&self) -> usize {
        self.selected.unwrap_or(0) / self.per_page()
    }

    /// Rows on the current page as `(position in subset, name)`.
    pub fn page_items(&self) -> Vec<(usize, &LogGroupName)> {
        let start = self.page() * self.per_page();
        self.visible
            .iter()
            .enumerate()
            .skip(start)
            .take(self.per_page())
            .filter_map(|(pos, &i)| self.groups.get(i).map(|name| (pos, name)))
            .collect()
    }

    // ------------------------------------------------------------------
    // Mutations (called from the reducer)
    // ------------------------------------------------------------------

    pub(crate) fn select(&mut self, pos: usize) {
        self.selected = if self.visible.is_empty() {
            None
        } else {
            Some(pos.min(self.visible.len() - 1))
        };
    }

    pub(crate) fn move_by(&mut self, delta: isize) {
        if let Some(pos) = self.selected {
            self.select(pos.saturating_add_signed(delta));
        }
    }

    pub(crate) fn move_to_last(&mut self) {
        self.select(self.visible.len().saturating_sub(1));
    }

    /// Jump `delta` pages, keeping the row offset within the page.
    pub(crate) fn flip_page(&mut self, delta: isize) {
        let Some(pos) = self.selected else { return };
        let per_page = self.per_page();
        let last_page = self.total_pages() - 1;
        let page = self.page().saturating_add_signed(delta).min(last_page);
        self.select(page * per_page + pos % per_page);
    }

    pub(crate) fn push_filter_char(&mut self, c: char) {
        self.filter.push(c);
        self.refilter();
    }

    pub(crate) fn pop_filter_char(&mut self) -> bool {
        let popped = self.filter.pop().is_some();
        if popped {
            self.refilter();
        }
        popped
    }

    pub(crate) fn clear_filter(&mut self) -> bool {
        if self.filter.is_empty() {
            return false;
        }
        self.filter.clear();
        self.refilter();
        true
    }

    pub(crate) fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        // The subset is unchanged so the highlight keeps its item; just re-clamp.
        if let Some(pos) = self.selected {
            self.select(pos);
        }
    }

    /// Recompute the subset, keeping the highlight on the same log group when
    /// it survives the filter and clamping otherwise.
    fn refilter(&mut self) {
        let previous_item = self.selected.and_then(|pos| self.visible.get(pos).copied());
        let previous_pos = self.selected.unwrap_or(0);

        self.visible = filter_indices(&self.groups, &self.filter, self.policy);

        let pos = previous_item
            .and_then(|item| self.visible.iter().position(|&i| i == item))
            .unwrap_or(previous_pos);
        self.select(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_groups, state_with};

    #[test]
    fn test_new_state_highlights_first_item() {
        let state = state_with(sample_groups(), 80, 24);
        assert_eq!(state.mode, Mode::Browsing);
        assert_eq!(state.filter(), "");
        assert_eq!(state.selected(), Some(0));
        assert_eq!(state.visible_len(), 3);
    }

    #[test]
    fn test_empty_collection_has_no_highlight() {
        let state = state_with(LogGroupCollection::default(), 80, 24);
        assert_eq!(state.selected(), None);
        assert_eq!(state.selected_name(), None);
        assert_eq!(state.total_pages(), 1);
        assert!(state.page_items().is_empty());
    }

    #[test]
    fn test_per_page_respects_viewport_and_cap() {
        let state = state_with(sample_groups(), 80, 24);
        assert_eq!(state.per_page(), 20);

        let state = state.with_max_rows(Some(15));
        assert_eq!(state.per_page(), 15);

        // Tiny terminal still shows one row
        let state = state_with(sample_groups(), 80, 2);
        assert_eq!(state.per_page(), 1);
    }

    #[test]
    fn test_page_items_follow_highlight() {
        let groups: LogGroupCollection = (0..10).map(|i| format!("/g/{i}")).collect();
        // 3 rows per page
        let mut state = state_with(groups, 80, CHROME_ROWS + 3);
        assert_eq!(state.total_pages(), 4);

        state.select(4);
        assert_eq!(state.page(), 1);
        let page: Vec<usize> = state.page_items().iter().map(|(pos, _)| *pos).collect();
        assert_eq!(page, vec![3, 4, 5]);

        state.select(9);
        let page: Vec<&str> = state.page_items().iter().map(|(_, n)| n.as_str()).collect();
        assert_eq!(page, vec!["/g/9"]);
    }

    #[test]
    fn test_flip_page_keeps_row_offset_and_clamps() {
        let groups: LogGroupCollection = (0..10).map(|i| format!("/g/{i}")).collect();
        let mut state = state_with(groups, 80, CHROME_ROWS + 3);
        state.select(1);

        state.flip_page(1);
        assert_eq!(state.selected(), Some(4));
        state.flip_page(5);
        assert_eq!(state.selected(), Some(9)); // last page only has one row
        state.flip_page(-10);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_refilter_tracks_highlighted_item() {
        let mut state = state_with(sample_groups(), 80, 24);
        state.select(1); // "/aws/lambda/b"
        state.push_filter_char('/');
        assert_eq!(state.selected(), Some(1));
        state.push_filter_char('b');
        assert_eq!(state.selected_name().map(|n| n.as_str()), Some("/aws/lambda/b"));
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_refilter_clamps_when_item_filtered_out() {
        let mut state = state_with(sample_groups(), 80, 24);
        state.select(2); // "/ecs/service/c"
        for c in "lambda".chars() {
            state.push_filter_char(c);
        }
        assert_eq!(state.visible_len(), 2);
        assert_eq!(state.selected(), Some(1));

        for c in "zzz".chars() {
            state.push_filter_char(c);
        }
        assert_eq!(state.visible_len(), 0);
        assert_eq!(state.selected(), None);

        assert!(state.clear_filter());
        assert_eq!(state.visible_len(), 3);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn test_resize_keeps_item_and_filter() {
        let groups: LogGroupCollection = (0..50).map(|i| format!("/g/{i}")).collect();
        let mut state = state_with(groups, 80, 24);
        state.push_filter_char('1');
        state.select(5);
        let before = state.selected_name().cloned();

        state.resize(Viewport::new(40, 8));
        assert_eq!(state.filter(), "1");
        assert_eq!(state.selected_name().cloned(), before);
        assert_eq!(state.viewport, Viewport::new(40, 8));
        assert!(state.page_items().iter().any(|(pos, _)| Some(*pos) == state.selected()));
    }
}
