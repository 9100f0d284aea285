//! Two-state checkbox with a separate disabled flag.
//!
//! `checked` and `disabled` are reflected onto presence attributes and onto
//! `aria-checked` / `aria-disabled`.  Only user input (space or a click)
//! toggles the box and emits [`Message::Change`]; [`Checkbox::set_checked`]
//! changes state silently.

use crate::key::{is_actionable, CheckboxKeys};
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::cell::Cell;
use tulip_core::{attr, Command, Component, CustomElement, Element, EventResult, Mount};

/// Tag name of the checkbox host element.
pub const TAG: &str = "tulip-checkbox";

/// Messages for the checkbox component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A key press forwarded to the checkbox.
    KeyPress(KeyEvent),
    /// A mouse event; left presses inside the last rendered area toggle.
    Mouse(MouseEvent),
    /// A click on the checkbox.
    Click,
    /// The checkbox received input focus.
    Focus,
    /// The checkbox lost input focus.
    Blur,
    /// Emitted after a user-driven toggle, carrying the new state.
    Change { checked: bool },
}

/// Visual style configuration for the [`Checkbox`] component.
#[derive(Debug, Clone)]
pub struct CheckboxStyle {
    pub normal: Style,
    pub focused: Style,
    pub disabled: Style,
    pub checked_symbol: String,
    pub unchecked_symbol: String,
}

impl Default for CheckboxStyle {
    fn default() -> Self {
        Self {
            normal: Style::default(),
            focused: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            disabled: Style::default().fg(Color::DarkGray),
            checked_symbol: "[x] ".to_string(),
            unchecked_symbol: "[ ] ".to_string(),
        }
    }
}

/// An accessible checkbox.
pub struct Checkbox {
    element: Element,
    mount: Mount,
    checked: bool,
    disabled: bool,
    label: String,
    keys: CheckboxKeys,
    style: CheckboxStyle,
    area: Cell<Rect>,
}

impl Checkbox {
    /// Create a detached, unchecked, enabled checkbox.
    pub fn new() -> Self {
        Self::from_element(Element::new(TAG))
    }

    /// Install checkbox behavior on an existing element.
    ///
    /// `checked` / `disabled` attributes already on the element become the
    /// initial state.  Properties set on the element are applied on
    /// [`connect`](CustomElement::connect).
    pub fn from_element(element: Element) -> Self {
        let checked = element.has_attribute(attr::CHECKED);
        let disabled = element.has_attribute(attr::DISABLED);
        Self {
            element,
            mount: Mount::new(),
            checked,
            disabled,
            label: String::new(),
            keys: CheckboxKeys::default(),
            style: CheckboxStyle::default(),
            area: Cell::new(Rect::default()),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_style(mut self, style: CheckboxStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_keys(mut self, keys: CheckboxKeys) -> Self {
        self.keys = keys;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn keys(&self) -> &CheckboxKeys {
        &self.keys
    }

    pub fn checked(&self) -> bool {
        self.checked
    }

    /// Set the checked state. Works while disabled and emits nothing.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
        self.element.toggle_attribute(attr::CHECKED, checked);
        self.element.set_bool_attribute(attr::ARIA_CHECKED, checked);
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Enable or disable the checkbox.
    ///
    /// A disabled checkbox leaves the tab order and loses focus at once.
    /// `checked` is never touched.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        self.element.toggle_attribute(attr::DISABLED, disabled);
        self.element.set_bool_attribute(attr::ARIA_DISABLED, disabled);
        if disabled {
            self.element.remove_attribute(attr::TABINDEX);
            self.element.blur();
        } else {
            self.element.set_attribute(attr::TABINDEX, "0");
        }
    }

    /// Handle a key press, reporting whether its default action was suppressed.
    pub fn handle_key(&mut self, key: KeyEvent) -> (EventResult, Command<Message>) {
        if !self.is_connected() || !is_actionable(&key) {
            return (EventResult::Ignored, Command::none());
        }
        if self.keys.toggle.matches(&key) {
            (EventResult::Handled, self.toggle())
        } else {
            (EventResult::Ignored, Command::none())
        }
    }

    fn toggle(&mut self) -> Command<Message> {
        if self.disabled {
            log::trace!("checkbox is disabled, ignoring toggle");
            return Command::none();
        }
        self.set_checked(!self.checked);
        log::debug!("checkbox toggled to {}", self.checked);
        Command::message(Message::Change {
            checked: self.checked,
        })
    }

    fn hit(&self, mouse: &MouseEvent) -> bool {
        mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && self
                .area
                .get()
                .contains(Position::new(mouse.column, mouse.row))
    }
}

impl Default for Checkbox {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomElement for Checkbox {
    const OBSERVED_ATTRIBUTES: &'static [&'static str] = &[attr::CHECKED, attr::DISABLED];

    fn element(&self) -> &Element {
        &self.element
    }

    fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }

    fn mount(&self) -> &Mount {
        &self.mount
    }

    fn mount_mut(&mut self) -> &mut Mount {
        &mut self.mount
    }

    fn connected_callback(&mut self) {
        self.set_default_attribute(attr::ROLE, "checkbox");
        if let Some(value) = self.upgrade_property(attr::CHECKED) {
            self.checked = value.as_bool();
        }
        if let Some(value) = self.upgrade_property(attr::DISABLED) {
            self.disabled = value.as_bool();
        }
        self.set_checked(self.checked);
        if self.disabled {
            // an author-supplied tabindex must not keep a disabled box focusable
            self.set_disabled(true);
        } else {
            self.set_default_attribute(attr::TABINDEX, "0");
            self.element.toggle_attribute(attr::DISABLED, false);
            self.element.set_bool_attribute(attr::ARIA_DISABLED, false);
        }
    }

    fn attribute_changed_callback(&mut self, name: &str, _old: Option<&str>, new: Option<&str>) {
        let present = new.is_some();
        match name {
            attr::CHECKED => self.set_checked(present),
            attr::DISABLED => self.set_disabled(present),
            _ => {}
        }
    }
}

impl Component for Checkbox {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        if !self.is_connected() {
            return Command::none();
        }
        match msg {
            Message::KeyPress(key) => self.handle_key(key).1,
            Message::Mouse(mouse) if self.hit(&mouse) => self.toggle(),
            Message::Click => self.toggle(),
            Message::Focus => {
                self.element.focus();
                Command::none()
            }
            Message::Blur => {
                self.element.blur();
                Command::none()
            }
            _ => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        self.area.set(area);
        let style = if self.disabled {
            self.style.disabled
        } else if self.element.is_focused() {
            self.style.focused
        } else {
            self.style.normal
        };
        let symbol = if self.checked {
            &self.style.checked_symbol
        } else {
            &self.style.unchecked_symbol
        };
        let line = Line::from(vec![
            Span::styled(symbol.as_str(), style),
            Span::styled(self.label.as_str(), style),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn focused(&self) -> bool {
        self.element.is_focused()
    }
}
