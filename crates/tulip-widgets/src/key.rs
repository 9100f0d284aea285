//! Key bindings and the default keymaps of the tulip widgets.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A key binding that maps one or more key combinations to a described action.
#[derive(Debug, Clone)]
pub struct Binding {
    /// The set of key combinations that trigger this binding.
    pub keys: Vec<KeyCombination>,
    /// A human-readable description of the action this binding performs.
    pub description: String,
    /// Whether this binding is currently active. Disabled bindings never match.
    pub enabled: bool,
}

/// A single key press with optional modifier keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombination {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Binding {
    /// Create a binding for a single key combination.
    pub fn new(key: KeyCombination, description: impl Into<String>) -> Self {
        Self::with_keys(vec![key], description)
    }

    /// Create a binding for several key combinations.
    pub fn with_keys(keys: Vec<KeyCombination>, description: impl Into<String>) -> Self {
        Self {
            keys,
            description: description.into(),
            enabled: true,
        }
    }

    /// Whether the event matches any of this binding's combinations.
    ///
    /// Always `false` when the binding is disabled.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.enabled
            && self
                .keys
                .iter()
                .any(|k| k.code == event.code && event.modifiers.contains(k.modifiers))
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Short label for help lines, e.g. `"↑/←"`.
    pub fn label(&self) -> String {
        self.keys
            .iter()
            .map(KeyCombination::label)
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl KeyCombination {
    /// A key combination with no modifier keys.
    pub fn new(code: KeyCode) -> Self {
        Self::with_modifiers(code, KeyModifiers::NONE)
    }

    pub fn with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    fn label(&self) -> String {
        let key = match self.code {
            KeyCode::Char(' ') => "space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::Home => "home".to_string(),
            KeyCode::End => "end".to_string(),
            other => format!("{other:?}").to_lowercase(),
        };
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("ctrl+{key}")
        } else {
            key
        }
    }
}

/// Whether a widget should look at this key event at all.
///
/// Only presses count, and presses with Alt held are left alone: screen
/// readers use that modifier for their own commands.
pub fn is_actionable(event: &KeyEvent) -> bool {
    event.kind == KeyEventKind::Press && !event.modifiers.contains(KeyModifiers::ALT)
}

/// Types that expose their bindings for help display.
pub trait KeyMap {
    /// Bindings in display order.
    fn bindings(&self) -> Vec<&Binding>;

    /// A one-line `key action · key action` summary of the enabled bindings.
    fn help_line(&self) -> String {
        self.bindings()
            .into_iter()
            .filter(|b| b.enabled)
            .map(|b| format!("{} {}", b.label(), b.description))
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

/// Keys understood by [`Checkbox`](crate::checkbox::Checkbox).
#[derive(Debug, Clone)]
pub struct CheckboxKeys {
    pub toggle: Binding,
}

impl Default for CheckboxKeys {
    fn default() -> Self {
        Self {
            toggle: Binding::new(KeyCombination::new(KeyCode::Char(' ')), "toggle"),
        }
    }
}

impl KeyMap for CheckboxKeys {
    fn bindings(&self) -> Vec<&Binding> {
        vec![&self.toggle]
    }
}

/// Keys understood by [`Listbox`](crate::listbox::Listbox).
#[derive(Debug, Clone)]
pub struct ListboxKeys {
    pub prev: Binding,
    pub next: Binding,
    pub first: Binding,
    pub last: Binding,
}

impl Default for ListboxKeys {
    fn default() -> Self {
        Self {
            prev: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::Up),
                    KeyCombination::new(KeyCode::Left),
                ],
                "previous",
            ),
            next: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::Down),
                    KeyCombination::new(KeyCode::Right),
                ],
                "next",
            ),
            first: Binding::new(KeyCombination::new(KeyCode::Home), "first"),
            last: Binding::new(KeyCombination::new(KeyCode::End), "last"),
        }
    }
}

impl KeyMap for ListboxKeys {
    fn bindings(&self) -> Vec<&Binding> {
        vec![&self.prev, &self.next, &self.first, &self.last]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn binding_matches_any_key() {
        let keys = ListboxKeys::default();
        assert!(keys.prev.matches(&key(KeyCode::Up, KeyModifiers::NONE)));
        assert!(keys.prev.matches(&key(KeyCode::Left, KeyModifiers::NONE)));
        assert!(!keys.prev.matches(&key(KeyCode::Down, KeyModifiers::NONE)));
    }

    #[test]
    fn disabled_binding_never_matches() {
        let b = Binding::new(KeyCombination::new(KeyCode::Home), "first").enabled(false);
        assert!(!b.matches(&key(KeyCode::Home, KeyModifiers::NONE)));
    }

    #[test]
    fn alt_presses_are_not_actionable() {
        assert!(is_actionable(&key(KeyCode::Char(' '), KeyModifiers::NONE)));
        assert!(is_actionable(&key(KeyCode::Char(' '), KeyModifiers::SHIFT)));
        assert!(!is_actionable(&key(KeyCode::Char(' '), KeyModifiers::ALT)));
    }

    #[test]
    fn releases_are_not_actionable() {
        let mut ev = key(KeyCode::Char(' '), KeyModifiers::NONE);
        ev.kind = KeyEventKind::Release;
        assert!(!is_actionable(&ev));
    }

    #[test]
    fn help_line_lists_enabled_bindings() {
        let mut keys = ListboxKeys::default();
        keys.first.enabled = false;
        assert_eq!(keys.help_line(), "↑/← previous · ↓/→ next · end last");
        assert_eq!(CheckboxKeys::default().help_line(), "space toggle");
    }
}
