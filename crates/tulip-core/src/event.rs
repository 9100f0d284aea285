use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

/// Terminal events produced by the runtime's event loop.
///
/// The runtime hands every `TerminalEvent` to
/// [`Model::event`](crate::Model::event), which maps it into the model's
/// `Message` type (or drops it by returning `None`).
///
/// Each variant wraps the corresponding [`crossterm::event::Event`] payload,
/// so key codes, modifiers, and mouse buttons use the full crossterm API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// A mouse event.
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Terminal window gained focus.
    FocusGained,
    /// Terminal window lost focus.
    FocusLost,
    /// Bracketed paste content.
    Paste(String),
}

impl From<crossterm::event::Event> for TerminalEvent {
    fn from(event: crossterm::event::Event) -> Self {
        match event {
            crossterm::event::Event::Key(k) => TerminalEvent::Key(k),
            crossterm::event::Event::Mouse(m) => TerminalEvent::Mouse(m),
            crossterm::event::Event::Resize(w, h) => TerminalEvent::Resize(w, h),
            crossterm::event::Event::FocusGained => TerminalEvent::FocusGained,
            crossterm::event::Event::FocusLost => TerminalEvent::FocusLost,
            crossterm::event::Event::Paste(s) => TerminalEvent::Paste(s),
        }
    }
}

impl TerminalEvent {
    /// The key event, if this is a key press (repeats and releases excluded).
    pub fn key_press(&self) -> Option<KeyEvent> {
        match self {
            TerminalEvent::Key(k) if k.kind == KeyEventKind::Press => Some(*k),
            _ => None,
        }
    }

    /// The (column, row) of a left-button press.
    pub fn left_click(&self) -> Option<(u16, u16)> {
        match self {
            TerminalEvent::Mouse(m) if m.kind == MouseEventKind::Down(MouseButton::Left) => {
                Some((m.column, m.row))
            }
            _ => None,
        }
    }
}

/// Whether a widget acted on an input event.
///
/// A handled event has had its default action suppressed: the host must not
/// also interpret it (for example as focus traversal or a global shortcut).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// The widget did not act; the host may handle the event.
    Ignored,
    /// The widget consumed the event.
    Handled,
}

impl EventResult {
    pub fn is_handled(self) -> bool {
        self == EventResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn key(kind: KeyEventKind) -> TerminalEvent {
        TerminalEvent::Key(KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn key_press_ignores_release() {
        assert!(key(KeyEventKind::Press).key_press().is_some());
        assert!(key(KeyEventKind::Release).key_press().is_none());
        assert!(key(KeyEventKind::Repeat).key_press().is_none());
    }

    #[test]
    fn left_click_position() {
        let ev = TerminalEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 3,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(ev.left_click(), Some((3, 7)));
        assert_eq!(TerminalEvent::FocusGained.left_click(), None);
    }
}
