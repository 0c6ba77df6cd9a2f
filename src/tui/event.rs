use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Action;

/// Block until the next terminal event that means something to the browser.
///
/// There is no timeout: the browser has no background work, so it simply
/// waits for the user.
pub fn next_action() -> std::io::Result<Action> {
    loop {
        let event = event::read()?;
        if let Some(action) = translate(event) {
            return Ok(action);
        }
    }
}

/// Map a raw crossterm event onto an `Action`. Mode-dependent meaning is
/// left to the reducer.
pub fn translate(event: Event) -> Option<Action> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        Event::Resize(width, height) => Some(Action::Resize { width, height }),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<Action> {
    // Windows reports releases too
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );

    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Interrupt),
        (m, KeyCode::Char(_)) if m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => None,
        (_, KeyCode::Char(c)) => Some(Action::Char(c)),
        (_, KeyCode::Backspace) => Some(Action::Backspace),
        (_, KeyCode::Enter) => Some(Action::Enter),
        (_, KeyCode::Esc) => Some(Action::Escape),
        (_, KeyCode::Up) => Some(Action::Up),
        (_, KeyCode::Down) => Some(Action::Down),
        (_, KeyCode::Left) | (_, KeyCode::PageUp) => Some(Action::PageUp),
        (_, KeyCode::Right) | (_, KeyCode::PageDown) => Some(Action::PageDown),
        (_, KeyCode::Home) => Some(Action::Home),
        (_, KeyCode::End) => Some(Action::End),
        _ => None,
    }
}
