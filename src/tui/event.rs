use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};
use log::warn;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    ForceQuit, // Ctrl+C, quits from anywhere
    Remount,   // Ctrl+R, re-mounts the Home screen
    NextTab,
    PrevTab,
    SelectTab(usize),
    CursorUp,
    CursorDown,
    PageUp,
    PageDown,
    First,
    Last,
    Submit,
    Escape,
    Backspace,
    Resize,
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            warn!("Event poll failed: {}", e);
            return None;
        }
    }

    match event::read() {
        Ok(Event::Key(key_event)) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event)
        }
        Ok(Event::Mouse(mouse_event)) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::CursorUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::CursorDown),
            _ => None,
        },
        Ok(Event::Resize(_, _)) => Some(TuiEvent::Resize),
        Ok(_) => None,
        Err(e) => {
            warn!("Event read failed: {}", e);
            None
        }
    }
}

/// Translate a key press into a `TuiEvent`. Releases and repeats are ignored.
pub fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
        (KeyModifiers::CONTROL, KeyCode::Char('r')) => Some(TuiEvent::Remount),
        (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
        (_, KeyCode::Char(c @ '1'..='9')) => c
            .to_digit(10)
            .map(|d| TuiEvent::SelectTab(d as usize - 1)),
        (_, KeyCode::Char('k')) | (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Char('j')) | (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Tab) | (_, KeyCode::Right) => Some(TuiEvent::NextTab),
        (_, KeyCode::BackTab) | (_, KeyCode::Left) => Some(TuiEvent::PrevTab),
        (_, KeyCode::PageUp) => Some(TuiEvent::PageUp),
        (_, KeyCode::PageDown) => Some(TuiEvent::PageDown),
        (_, KeyCode::Home) => Some(TuiEvent::First),
        (_, KeyCode::End) => Some(TuiEvent::Last),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        _ => None,
    }
}
