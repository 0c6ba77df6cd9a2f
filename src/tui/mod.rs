//! # TUI Adapter
//!
//! The ratatui-specific layer. Owns the terminal, renders the list, and
//! translates keyboard and resize events into `core::action::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Strictly one event at a time: block on the next input, reduce it, redraw
//! if the reducer asked for it. There is no tick and no background work, so
//! an idle browser costs nothing.

mod component;
mod components;
mod event;
mod theme;
mod ui;

pub use component::Renderable;
pub use theme::Theme;

use log::{debug, info};

use crate::core::action::{Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::error::AppError;
use crate::core::filter::MatchPolicy;
use crate::core::log_group::LogGroupCollection;
use crate::core::state::{BrowserState, Viewport};

/// Where the list came from, shown in the title bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub region: String,
    pub account: String,
    pub fetched_at: String,
}

/// Leaves the alternate screen and raw mode however `run` exits.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        ratatui::restore();
        info!("Terminal restored");
    }
}

pub fn run(groups: LogGroupCollection, header: Header, config: &ResolvedConfig) -> Result<(), AppError> {
    let theme = Theme::from_config(config);

    let mut terminal = ratatui::try_init()?;
    let _guard = TerminalGuard;
    info!("Terminal initialized");

    let size = terminal.size()?;
    let mut state = BrowserState::new(
        groups,
        MatchPolicy::from_case_sensitive(config.case_sensitive),
        Viewport::new(size.width, size.height),
    )
    .with_max_rows(config.list_height);

    let mut needs_redraw = true; // Force first frame
    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &state, &header, &theme))?;
            needs_redraw = false;
        }

        let action = event::next_action()?;
        match update(&mut state, action) {
            Effect::Quit => break,
            Effect::Redraw => needs_redraw = true,
            Effect::None => {}
        }
    }

    debug!("Browser exited");
    Ok(())
}
