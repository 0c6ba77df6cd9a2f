//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Every component here is a transient, props-based wrapper: it is built each
//! frame from borrowed `BrowserState` and `Theme` and renders into the `Rect`
//! it is given. None of them hold state of their own; the reducer in
//! `core::action` owns every change.
//!
//! **Example:**
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! LogGroupList::new(&state, &theme).render(frame, list_area);
//!
//! // Bad: Hidden dependency on global styles
//! LogGroupList::new(&state).render(frame, list_area); // reads a static Theme
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs       (region / account / fetch time)
//! ├── status_line.rs     (count or filter input)
//! ├── log_group_list.rs  (one page of rows)
//! ├── paginator.rs       (page dots)
//! └── help_bar.rs        (key hints)
//! ```

mod help_bar;
mod log_group_list;
mod paginator;
mod status_line;
mod title_bar;

pub use help_bar::HelpBar;
pub use log_group_list::LogGroupList;
pub use paginator::Paginator;
pub use status_line::StatusLine;
pub use title_bar::TitleBar;
