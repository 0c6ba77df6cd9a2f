//! # Actions
//!
//! Everything that can happen in the browser becomes an `Action`.
//! User presses `/`? That's `Action::Char('/')`.
//! Terminal resized? That's `Action::Resize { width, height }`.
//!
//! Keys arrive uninterpreted: what `q` means depends on the mode, so the
//! decision lives here rather than in the terminal adapter.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! This makes everything testable without a terminal: feed actions, assert state.

use log::debug;

use crate::core::state::{BrowserState, Mode, Viewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Char(char),
    Backspace,
    Enter,
    Escape,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    /// Ctrl+C: quits from any mode.
    Interrupt,
    Resize { width: u16, height: u16 },
}

/// What the event loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Redraw,
    Quit,
}

pub fn update(state: &mut BrowserState, action: Action) -> Effect {
    if state.mode == Mode::Exited {
        return Effect::None;
    }

    let effect = match action {
        Action::Interrupt => quit(state),
        Action::Resize { width, height } => {
            state.resize(Viewport::new(width, height));
            Effect::Redraw
        }
        _ => match state.mode {
            Mode::Browsing => update_browsing(state, action),
            Mode::Filtering => update_filtering(state, action),
            Mode::Exited => Effect::None,
        },
    };

    debug!(
        "{:?} -> {:?} (mode={:?}, filter={:?}, selected={:?}/{})",
        action,
        effect,
        state.mode,
        state.filter(),
        state.selected(),
        state.visible_len()
    );
    effect
}

fn update_browsing(state: &mut BrowserState, action: Action) -> Effect {
    match action {
        Action::Char('q') => quit(state),
        Action::Char('/') => {
            state.mode = Mode::Filtering;
            Effect::Redraw
        }
        Action::Up | Action::Char('k') => {
            state.move_by(-1);
            Effect::Redraw
        }
        Action::Down | Action::Char('j') => {
            state.move_by(1);
            Effect::Redraw
        }
        Action::PageUp | Action::Char('h') => {
            state.flip_page(-1);
            Effect::Redraw
        }
        Action::PageDown | Action::Char('l') => {
            state.flip_page(1);
            Effect::Redraw
        }
        Action::Home | Action::Char('g') => {
            state.select(0);
            Effect::Redraw
        }
        Action::End | Action::Char('G') => {
            state.move_to_last();
            Effect::Redraw
        }
        Action::Escape => {
            if state.clear_filter() {
                Effect::Redraw
            } else {
                Effect::None
            }
        }
        _ => Effect::None,
    }
}

fn update_filtering(state: &mut BrowserState, action: Action) -> Effect {
    match action {
        Action::Char(c) if !c.is_control() => {
            state.push_filter_char(c);
            Effect::Redraw
        }
        Action::Backspace => {
            if state.pop_filter_char() {
                Effect::Redraw
            } else {
                Effect::None
            }
        }
        // Leaving filter mode keeps the filter applied
        Action::Escape | Action::Enter => {
            state.mode = Mode::Browsing;
            Effect::Redraw
        }
        Action::Up => {
            state.move_by(-1);
            Effect::Redraw
        }
        Action::Down => {
            state.move_by(1);
            Effect::Redraw
        }
        _ => Effect::None,
    }
}

fn quit(state: &mut BrowserState) -> Effect {
    state.mode = Mode::Exited;
    Effect::Quit
}
