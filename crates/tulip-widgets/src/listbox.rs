//! Single-select listbox with wraparound keyboard navigation.
//!
//! The listbox owns an ordered list of [`ListOption`]s.  Selection is not
//! stored separately: it is read from the options' `selected` flags on every
//! operation, so options added or removed in between are always accounted
//! for.  [`Listbox::select_option`] clears every flag before setting one,
//! which keeps at most one option selected.
//!
//! Navigation on a listbox without options returns `None` and leaves the
//! selection alone.

use crate::key::{is_actionable, ListboxKeys};
use crate::list_option::{self, ListOption};
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::cell::Cell;
use std::sync::Arc;
use tulip_core::{
    attr, Command, Component, CustomElement, Element, EventResult, IdGenerator, Mount,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Tag name of the listbox host element.
pub const TAG: &str = "tulip-listbox";

/// Messages for the listbox component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A key press forwarded to the listbox.
    KeyPress(KeyEvent),
    /// A mouse event; left presses on a rendered option row select it.
    Mouse(MouseEvent),
    /// A click whose target is the element with this id.
    Click { target: String },
    /// The listbox received input focus.
    Focus,
    /// The listbox lost input focus.
    Blur,
    /// Emitted after user-driven selection or focus, carrying the current value.
    Input { value: String },
}

/// Visual style configuration for the [`Listbox`] component.
#[derive(Debug, Clone)]
pub struct ListboxStyle {
    pub normal: Style,
    pub selected: Style,
    /// Selected option while the listbox has focus.
    pub active: Style,
    pub highlight_symbol: String,
}

impl Default for ListboxStyle {
    fn default() -> Self {
        Self {
            normal: Style::default(),
            selected: Style::default().fg(Color::Cyan),
            active: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            highlight_symbol: "▸ ".to_string(),
        }
    }
}

/// An accessible single-select listbox.
pub struct Listbox {
    element: Element,
    mount: Mount,
    options: Vec<ListOption>,
    ids: Arc<IdGenerator>,
    keys: ListboxKeys,
    style: ListboxStyle,
    area: Cell<Rect>,
    /// First option drawn in the last render.
    offset: Cell<usize>,
}

impl Listbox {
    /// Create a detached, empty listbox drawing ids from [`IdGenerator::global`].
    pub fn new() -> Self {
        Self::from_element(Element::new(TAG))
    }

    /// Install listbox behavior on an existing element.
    pub fn from_element(element: Element) -> Self {
        Self {
            element,
            mount: Mount::new(),
            options: Vec::new(),
            ids: IdGenerator::global(),
            keys: ListboxKeys::default(),
            style: ListboxStyle::default(),
            area: Cell::new(Rect::default()),
            offset: Cell::new(0),
        }
    }

    /// Append options, in order.
    pub fn with_options(mut self, options: impl IntoIterator<Item = ListOption>) -> Self {
        for option in options {
            self.append_option(option);
        }
        self
    }

    /// Draw generated option ids from `ids` instead of the global generator.
    pub fn with_id_generator(mut self, ids: Arc<IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn with_style(mut self, style: ListboxStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_keys(mut self, keys: ListboxKeys) -> Self {
        self.keys = keys;
        self
    }

    pub fn keys(&self) -> &ListboxKeys {
        &self.keys
    }

    // -- children -----------------------------------------------------------

    pub fn options(&self) -> &[ListOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn append_option(&mut self, option: ListOption) {
        self.insert_option(self.options.len(), option);
    }

    /// Insert an option at `index` (clamped to the end).
    ///
    /// An option that arrives selected becomes the only selected option.
    pub fn insert_option(&mut self, index: usize, option: ListOption) {
        let index = index.min(self.options.len());
        self.options.insert(index, option);
        if self.is_connected() {
            self.adopt(index);
        }
        if self.options[index].selected() {
            self.select_option(index);
        }
    }

    /// Remove and return the option at `index`.
    pub fn remove_option(&mut self, index: usize) -> Option<ListOption> {
        if index >= self.options.len() {
            return None;
        }
        let mut option = self.options.remove(index);
        let was_active = option.id().is_some()
            && option.id() == self.element.attribute(attr::ARIA_ACTIVEDESCENDANT);
        if was_active {
            self.element.remove_attribute(attr::ARIA_ACTIVEDESCENDANT);
        }
        option.disconnect();
        Some(option)
    }

    fn adopt(&mut self, index: usize) {
        let ids = self.ids.clone();
        let option = &mut self.options[index];
        option.ensure_id(|| ids.next_id(list_option::ID_PREFIX));
        option.connect();
    }

    // -- selection ----------------------------------------------------------

    /// Index of the selected option.
    pub fn selected_index(&self) -> Option<usize> {
        self.options.iter().position(ListOption::selected)
    }

    pub fn selected_option(&self) -> Option<&ListOption> {
        self.selected_index().map(|i| &self.options[i])
    }

    /// Select the option at `index`, deselecting every other option, and
    /// point `aria-activedescendant` at it. Out-of-range indices are ignored.
    pub fn select_option(&mut self, index: usize) {
        if index >= self.options.len() {
            return;
        }
        self.reset();
        self.options[index].set_selected(true);
        self.set_active_descendant(index);
        log::debug!("listbox selected option {index}");
    }

    /// Deselect every option.
    pub fn reset(&mut self) {
        for option in &mut self.options {
            option.set_selected(false);
        }
    }

    /// Value of the selected option, or `""` when nothing is selected.
    pub fn value(&self) -> &str {
        self.selected_option().map_or("", ListOption::value)
    }

    /// Select the first option whose value loosely equals `value`, or
    /// deselect everything when none does.
    pub fn set_value(&mut self, value: &str) {
        match self.options.iter().position(|o| o.value_matches(value)) {
            Some(index) => self.select_option(index),
            None => {
                log::debug!("listbox has no option valued {value:?}, resetting");
                self.reset();
            }
        }
    }

    fn set_active_descendant(&mut self, index: usize) {
        let ids = self.ids.clone();
        let id = self.options[index]
            .ensure_id(|| ids.next_id(list_option::ID_PREFIX))
            .to_string();
        self.element.set_attribute(attr::ARIA_ACTIVEDESCENDANT, id);
    }

    // -- navigation ---------------------------------------------------------

    pub fn first_index(&self) -> Option<usize> {
        (!self.options.is_empty()).then_some(0)
    }

    pub fn last_index(&self) -> Option<usize> {
        self.options.len().checked_sub(1)
    }

    /// Index before the selected one, wrapping to the last option.
    /// With nothing selected this is the last option.
    pub fn prev_index(&self) -> Option<usize> {
        let n = self.options.len();
        if n == 0 {
            return None;
        }
        let current = self.selected_index().unwrap_or(0);
        Some((current + n - 1) % n)
    }

    /// Index after the selected one, wrapping to the first option.
    /// With nothing selected this is the first option.
    pub fn next_index(&self) -> Option<usize> {
        let n = self.options.len();
        if n == 0 {
            return None;
        }
        Some(self.selected_index().map_or(0, |i| (i + 1) % n))
    }

    pub fn first_option(&self) -> Option<&ListOption> {
        self.first_index().map(|i| &self.options[i])
    }

    pub fn last_option(&self) -> Option<&ListOption> {
        self.last_index().map(|i| &self.options[i])
    }

    pub fn prev_option(&self) -> Option<&ListOption> {
        self.prev_index().map(|i| &self.options[i])
    }

    pub fn next_option(&self) -> Option<&ListOption> {
        self.next_index().map(|i| &self.options[i])
    }

    // -- input --------------------------------------------------------------

    /// Handle a key press, reporting whether its default action was suppressed.
    pub fn handle_key(&mut self, key: KeyEvent) -> (EventResult, Command<Message>) {
        if !self.is_connected() || !is_actionable(&key) {
            return (EventResult::Ignored, Command::none());
        }
        let target = if self.keys.prev.matches(&key) {
            self.prev_index()
        } else if self.keys.next.matches(&key) {
            self.next_index()
        } else if self.keys.first.matches(&key) {
            self.first_index()
        } else if self.keys.last.matches(&key) {
            self.last_index()
        } else {
            return (EventResult::Ignored, Command::none());
        };
        let cmd = match target {
            Some(index) => self.select_and_notify(index),
            None => Command::none(),
        };
        (EventResult::Handled, cmd)
    }

    fn select_and_notify(&mut self, index: usize) -> Command<Message> {
        self.select_option(index);
        Command::message(Message::Input {
            value: self.value().to_string(),
        })
    }

    fn click(&mut self, target: &str) -> Command<Message> {
        let hit = self
            .options
            .iter()
            .position(|o| o.id() == Some(target) && o.is_option_role());
        match hit {
            Some(index) => self.select_and_notify(index),
            None => {
                log::trace!("listbox click on {target:?} is not an option");
                Command::none()
            }
        }
    }

    fn option_at(&self, mouse: &MouseEvent) -> Option<usize> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let area = self.area.get();
        if !area.contains(Position::new(mouse.column, mouse.row)) {
            return None;
        }
        let index = self.offset.get() + usize::from(mouse.row - area.y);
        (index < self.options.len() && self.options[index].is_option_role()).then_some(index)
    }

    fn on_focus(&mut self) -> Command<Message> {
        if !self.element.focus() {
            return Command::none();
        }
        let Some(index) = self.selected_index().or(self.first_index()) else {
            return Command::none();
        };
        self.set_active_descendant(index);
        Command::message(Message::Input {
            value: self.value().to_string(),
        })
    }
}

impl Default for Listbox {
    fn default() -> Self {
        Self::new()
    }
}

impl CustomElement for Listbox {
    const OBSERVED_ATTRIBUTES: &'static [&'static str] = &[];

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
        self.set_default_attribute(attr::ROLE, "listbox");
        self.set_default_attribute(attr::TABINDEX, "0");
        for index in 0..self.options.len() {
            self.adopt(index);
        }
        // pending properties on options may have selected several
        if let Some(index) = self.selected_index() {
            self.select_option(index);
        }
        if let Some(value) = self.upgrade_property(attr::VALUE) {
            self.set_value(&value.as_text());
        }
    }

    fn disconnected_callback(&mut self) {
        for option in &mut self.options {
            option.disconnect();
        }
    }

    fn attribute_changed_callback(&mut self, _name: &str, _old: Option<&str>, _new: Option<&str>) {}
}

impl Component for Listbox {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        if !self.is_connected() {
            return Command::none();
        }
        match msg {
            Message::KeyPress(key) => self.handle_key(key).1,
            Message::Mouse(mouse) => match self.option_at(&mouse) {
                Some(index) => self.select_and_notify(index),
                None => Command::none(),
            },
            Message::Click { target } => self.click(&target),
            Message::Focus => self.on_focus(),
            Message::Blur => {
                self.element.blur();
                Command::none()
            }
            Message::Input { .. } => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        self.area.set(area);
        let offset = self.scroll_offset(usize::from(area.height));
        self.offset.set(offset);
        let focused = self.element.is_focused();
        let blank = " ".repeat(self.style.highlight_symbol.width());
        let label_width = self.label_width(area.width);

        let lines: Vec<Line> = self
            .options
            .iter()
            .skip(offset)
            .take(usize::from(area.height))
            .map(|option| {
                let (prefix, style) = match (option.selected(), focused) {
                    (true, true) => (self.style.highlight_symbol.as_str(), self.style.active),
                    (true, false) => (self.style.highlight_symbol.as_str(), self.style.selected),
                    (false, _) => (blank.as_str(), self.style.normal),
                };
                Line::from(vec![
                    Span::raw(prefix.to_string()),
                    Span::styled(truncate(option.label(), label_width), style),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn focused(&self) -> bool {
        self.element.is_focused()
    }
}

impl Listbox {
    /// Offset that keeps the selected option inside `visible` rows, moving
    /// the previous offset as little as possible.
    fn scroll_offset(&self, visible: usize) -> usize {
        if visible == 0 {
            return 0;
        }
        let max = self.options.len().saturating_sub(visible);
        let offset = self.offset.get().min(max);
        match self.selected_index() {
            Some(i) if i < offset => i,
            Some(i) if i >= offset + visible => i + 1 - visible,
            _ => offset,
        }
    }

    /// Columns left for a label once the highlight symbol is drawn.
    fn label_width(&self, width: u16) -> usize {
        usize::from(width).saturating_sub(self.style.highlight_symbol.width())
    }
}

/// Cut `text` to at most `width` terminal columns.
fn truncate(text: &str, width: usize) -> String {
    let mut used = 0;
    text.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= width
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventKind, KeyEventState, KeyModifiers};
    use tulip_core::testing::TestComponent;

    fn key(code: KeyCode) -> Message {
        Message::KeyPress(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn listbox(values: &[&str]) -> Listbox {
        let mut lb = Listbox::new()
            .with_id_generator(Arc::new(IdGenerator::new()))
            .with_options(values.iter().map(|v| ListOption::new(*v)));
        lb.connect();
        lb
    }

    fn selected_count(lb: &Listbox) -> usize {
        lb.options().iter().filter(|o| o.selected()).count()
    }

    fn input(value: &str) -> Message {
        Message::Input {
            value: value.to_string(),
        }
    }

    #[test]
    fn connect_sets_defaults_and_ids() {
        let lb = listbox(&["a", "b"]);
        assert_eq!(lb.element().attribute(attr::ROLE), Some("listbox"));
        assert_eq!(lb.element().attribute(attr::TABINDEX), Some("0"));
        let ids: Vec<_> = lb.options().iter().map(|o| o.id()).collect();
        assert_eq!(ids, vec![Some("tulip-option-0"), Some("tulip-option-1")]);
        assert!(lb.options().iter().all(ListOption::is_option_role));
        assert!(lb
            .options()
            .iter()
            .all(|o| o.element().attribute(attr::ARIA_SELECTED) == Some("false")));
    }

    #[test]
    fn explicit_ids_are_kept() {
        let mut lb = Listbox::new()
            .with_id_generator(Arc::new(IdGenerator::new()))
            .with_options([ListOption::new("a").with_id("first"), ListOption::new("b")]);
        lb.connect();
        assert_eq!(lb.options()[0].id(), Some("first"));
        assert_eq!(lb.options()[1].id(), Some("tulip-option-0"));
    }

    #[test]
    fn ids_are_unique_across_listboxes() {
        let ids = Arc::new(IdGenerator::new());
        let mut a = Listbox::new()
            .with_id_generator(ids.clone())
            .with_options([ListOption::new("x")]);
        let mut b = Listbox::new()
            .with_id_generator(ids)
            .with_options([ListOption::new("y")]);
        a.connect();
        b.connect();
        assert_ne!(a.options()[0].id(), b.options()[0].id());
    }

    #[test]
    fn keyboard_scenario() {
        let mut h = TestComponent::new(listbox(&["a", "b", "c"]));
        h.send(key(KeyCode::Down));
        assert_eq!(h.component().value(), "a");
        h.send(key(KeyCode::Down));
        assert_eq!(h.component().value(), "b");
        h.send(key(KeyCode::End));
        assert_eq!(h.component().value(), "c");
        h.send(key(KeyCode::Down));
        assert_eq!(h.component().value(), "a");
        assert_eq!(
            h.emitted(),
            &[input("a"), input("b"), input("c"), input("a")]
        );
    }

    #[test]
    fn up_from_nothing_selects_last_and_left_right_navigate() {
        let mut h = TestComponent::new(listbox(&["a", "b", "c"]));
        h.send(key(KeyCode::Up));
        assert_eq!(h.component().value(), "c");
        h.send(key(KeyCode::Right));
        assert_eq!(h.component().value(), "a");
        h.send(key(KeyCode::Left));
        assert_eq!(h.component().value(), "c");
        h.send(key(KeyCode::Home));
        assert_eq!(h.component().value(), "a");
    }

    #[test]
    fn selection_updates_active_descendant_and_aria() {
        let mut lb = listbox(&["a", "b"]);
        lb.select_option(1);
        assert_eq!(
            lb.element().attribute(attr::ARIA_ACTIVEDESCENDANT),
            lb.options()[1].id()
        );
        assert_eq!(lb.options()[0].element().attribute(attr::ARIA_SELECTED), Some("false"));
        assert_eq!(lb.options()[1].element().attribute(attr::ARIA_SELECTED), Some("true"));
        assert!(lb.options()[1].element().has_attribute(attr::SELECTED));
    }

    #[test]
    fn at_most_one_selected() {
        let mut lb = listbox(&["a", "b", "c", "d"]);
        for index in [2, 0, 3, 3, 1, 9] {
            lb.select_option(index);
            assert_eq!(selected_count(&lb), 1);
        }
        lb.reset();
        assert_eq!(selected_count(&lb), 0);
    }

    #[test]
    fn next_n_times_is_identity() {
        let mut lb = listbox(&["a", "b", "c", "d", "e"]);
        for start in 0..lb.len() {
            lb.select_option(start);
            for _ in 0..lb.len() {
                let next = lb.next_index().unwrap();
                lb.select_option(next);
            }
            assert_eq!(lb.selected_index(), Some(start));
        }
    }

    #[test]
    fn prev_inverts_next() {
        let mut lb = listbox(&["a", "b", "c"]);
        for start in 0..lb.len() {
            lb.select_option(start);
            lb.select_option(lb.next_index().unwrap());
            lb.select_option(lb.prev_index().unwrap());
            assert_eq!(lb.selected_index(), Some(start));
            lb.select_option(lb.prev_index().unwrap());
            lb.select_option(lb.next_index().unwrap());
            assert_eq!(lb.selected_index(), Some(start));
        }
    }

    #[test]
    fn first_and_last_options() {
        let lb = listbox(&["a", "b", "c"]);
        assert_eq!(lb.first_option().map(ListOption::value), Some("a"));
        assert_eq!(lb.last_option().map(ListOption::value), Some("c"));
        assert_eq!(lb.next_option().map(ListOption::value), Some("a"));
        assert_eq!(lb.prev_option().map(ListOption::value), Some("c"));
    }

    #[test]
    fn set_value_selects_or_resets() {
        let mut lb = listbox(&["a", "b", "c"]);
        lb.set_value("b");
        assert_eq!(lb.value(), "b");
        assert_eq!(lb.selected_index(), Some(1));

        lb.set_value("zzz");
        assert_eq!(lb.value(), "");
        assert_eq!(selected_count(&lb), 0);
    }

    #[test]
    fn set_value_picks_first_loose_match() {
        let mut lb = listbox(&["1.0", "1", "2"]);
        lb.set_value("1");
        assert_eq!(lb.selected_index(), Some(0));
    }

    #[test]
    fn empty_listbox_navigation_is_noop() {
        let mut h = TestComponent::new(listbox(&[]));
        let lb = h.component();
        assert!(lb.first_option().is_none());
        assert!(lb.last_option().is_none());
        assert!(lb.prev_option().is_none());
        assert!(lb.next_option().is_none());

        let (result, cmd) = h.component_mut().handle_key(KeyEvent::new(
            KeyCode::Down,
            KeyModifiers::NONE,
        ));
        assert_eq!(result, EventResult::Handled);
        assert!(cmd.is_none());
        h.send(Message::Focus);
        assert!(h.emitted().is_empty());
        assert!(!h.component().element().has_attribute(attr::ARIA_ACTIVEDESCENDANT));
    }

    #[test]
    fn other_and_alt_keys_are_ignored() {
        let mut h = TestComponent::new(listbox(&["a", "b"]));
        h.send(key(KeyCode::Enter));
        h.send(Message::KeyPress(KeyEvent::new(KeyCode::Down, KeyModifiers::ALT)));
        assert_eq!(h.component().selected_index(), None);
        assert!(h.emitted().is_empty());
    }

    #[test]
    fn children_changes_are_seen_by_next_operation() {
        let mut h = TestComponent::new(listbox(&["a", "b"]));
        h.send(key(KeyCode::End));
        assert_eq!(h.component().value(), "b");

        h.component_mut().append_option(ListOption::new("c"));
        assert!(h.component().options()[2].id().is_some());
        h.send(key(KeyCode::Down));
        assert_eq!(h.component().value(), "c");

        h.component_mut().remove_option(2);
        assert_eq!(h.component().selected_index(), None);
        assert!(!h
            .component()
            .element()
            .has_attribute(attr::ARIA_ACTIVEDESCENDANT));
        h.send(key(KeyCode::Up));
        assert_eq!(h.component().value(), "b");
    }

    #[test]
    fn inserting_a_selected_option_takes_over_selection() {
        let mut lb = listbox(&["a", "b"]);
        lb.select_option(0);
        lb.insert_option(1, ListOption::new("new").with_selected(true));
        assert_eq!(lb.value(), "new");
        assert_eq!(selected_count(&lb), 1);
    }

    #[test]
    fn click_on_option_selects() {
        let mut h = TestComponent::new(listbox(&["a", "b"]));
        let target = h.component().options()[1].id().unwrap().to_string();
        h.send(Message::Click { target });
        assert_eq!(h.component().value(), "b");
        assert_eq!(h.emitted(), &[input("b")]);
    }

    #[test]
    fn click_elsewhere_is_noop() {
        let mut h = TestComponent::new(listbox(&["a"]));
        h.send(Message::Click {
            target: "nowhere".to_string(),
        });
        assert_eq!(h.component().selected_index(), None);
        assert!(h.emitted().is_empty());
    }

    #[test]
    fn mouse_press_on_row_selects() {
        let mut h = TestComponent::new(listbox(&["a", "b", "c"]));
        h.render_string(10, 5);
        let press = |row| MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 1,
            row,
            modifiers: KeyModifiers::NONE,
        };
        h.send(Message::Mouse(press(2)));
        assert_eq!(h.component().value(), "c");
        h.send(Message::Mouse(press(4)));
        assert_eq!(h.component().value(), "c");
        assert_eq!(h.emitted(), &[input("c")]);
    }

    #[test]
    fn focus_points_at_selected_or_first_without_selecting() {
        let mut h = TestComponent::new(listbox(&["a", "b"]));
        h.send(Message::Focus);
        let lb = h.component();
        assert!(lb.focused());
        assert_eq!(
            lb.element().attribute(attr::ARIA_ACTIVEDESCENDANT),
            lb.options()[0].id()
        );
        assert_eq!(lb.selected_index(), None);
        assert_eq!(h.take_emitted(), vec![input("")]);

        h.component_mut().select_option(1);
        h.send(Message::Blur);
        h.send(Message::Focus);
        let lb = h.component();
        assert_eq!(
            lb.element().attribute(attr::ARIA_ACTIVEDESCENDANT),
            lb.options()[1].id()
        );
        assert_eq!(h.take_emitted(), vec![input("b")]);
    }

    #[test]
    fn pending_value_replays_on_connect() {
        let el = Element::new(TAG).with_property(attr::VALUE, "b");
        let mut lb = Listbox::from_element(el)
            .with_id_generator(Arc::new(IdGenerator::new()))
            .with_options([ListOption::new("a"), ListOption::new("b")]);
        assert_eq!(lb.value(), "");
        lb.connect();
        assert_eq!(lb.value(), "b");
    }

    #[test]
    fn preselected_options_collapse_to_one_on_connect() {
        let mut lb = Listbox::new()
            .with_id_generator(Arc::new(IdGenerator::new()))
            .with_options([
                ListOption::from_element(
                    Element::new(list_option::TAG).with_property(attr::SELECTED, true),
                ),
                ListOption::new("b").with_selected(true),
            ]);
        lb.connect();
        assert_eq!(selected_count(&lb), 1);
    }

    #[test]
    fn detached_listbox_ignores_input() {
        let mut lb = listbox(&["a", "b"]);
        lb.disconnect();
        let mut h = TestComponent::new(lb);
        h.send(key(KeyCode::Down));
        assert_eq!(h.component().selected_index(), None);
        assert!(h.emitted().is_empty());
    }

    #[test]
    fn renders_selection_marker() {
        let mut lb = listbox(&["apple", "banana"]);
        lb.select_option(1);
        let h = TestComponent::new(lb);
        assert_eq!(h.render_string(10, 2), "  apple   \n▸ banana  ");
    }

    #[test]
    fn selection_below_the_rows_scrolls_into_view() {
        let mut lb = listbox(&["a", "b", "c", "d", "e", "f"]);
        lb.select_option(5);
        let mut h = TestComponent::new(lb);
        assert_eq!(h.render_string(6, 3), "  d   \n  e   \n▸ f   ");

        h.component_mut().select_option(4);
        assert_eq!(h.render_string(6, 3), "  d   \n▸ e   \n  f   ");

        h.component_mut().select_option(0);
        assert_eq!(h.render_string(6, 3), "▸ a   \n  b   \n  c   ");
    }

    #[test]
    fn wrapping_down_follows_the_selection() {
        let mut h = TestComponent::new(listbox(&["a", "b", "c", "d"]));
        h.send(key(KeyCode::End));
        assert_eq!(h.render_string(4, 2), "  c \n▸ d ");
        h.send(key(KeyCode::Down));
        assert_eq!(h.render_string(4, 2), "▸ a \n  b ");
    }

    #[test]
    fn mouse_rows_account_for_scrolling() {
        let mut lb = listbox(&["a", "b", "c", "d", "e", "f"]);
        lb.select_option(5);
        let mut h = TestComponent::new(lb);
        h.render_string(6, 3);
        h.send(Message::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 1,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }));
        assert_eq!(h.component().value(), "d");
        assert_eq!(h.emitted(), &[input("d")]);
    }

    #[test]
    fn wide_highlight_symbol_narrows_labels() {
        let lb = listbox(&["a"]).with_style(ListboxStyle {
            highlight_symbol: "👉".to_string(),
            ..ListboxStyle::default()
        });
        assert_eq!(lb.label_width(4), 2);
        assert_eq!(listbox(&["a"]).label_width(4), 2);
        assert_eq!(lb.label_width(1), 0);
    }

    #[test]
    fn truncate_respects_wide_chars() {
        assert_eq!(truncate("abcdef", 3), "abc");
        assert_eq!(truncate("日本語", 5), "日本");
        assert_eq!(truncate("ab", 0), "");
    }
}
