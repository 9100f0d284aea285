//! A single option inside a [`Listbox`](crate::listbox::Listbox).

use tulip_core::{attr, CustomElement, Element, Mount};

/// Tag name of the option host element.
pub const TAG: &str = "tulip-option";

/// Prefix for ids generated for options that have none.
pub const ID_PREFIX: &str = "tulip-option";

/// One selectable entry of a listbox.
///
/// The `selected` flag is reflected onto the `selected` presence attribute and
/// onto `aria-selected`.  Once an option belongs to a listbox only the listbox
/// changes its selection, which keeps at most one option selected.
#[derive(Debug, Clone)]
pub struct ListOption {
    element: Element,
    mount: Mount,
    value: String,
    label: Option<String>,
    selected: bool,
}

impl ListOption {
    pub fn new(value: impl Into<String>) -> Self {
        Self::from_element(Element::new(TAG)).with_value(value)
    }

    /// Install option behavior on an existing element, adopting its
    /// `value` and `selected` attributes.
    pub fn from_element(element: Element) -> Self {
        let value = element.attribute(attr::VALUE).unwrap_or_default().to_string();
        let selected = element.has_attribute(attr::SELECTED);
        Self {
            element,
            mount: Mount::new(),
            value,
            label: None,
            selected,
        }
    }

    fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    /// Text shown for the option. Defaults to the value.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Give the option an explicit id instead of a generated one.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.element.set_attribute(attr::ID, id);
        self
    }

    /// Start out selected. A listbox adopting this option deselects the rest.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.set_selected(selected);
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.element.id()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.element.set_attribute(attr::VALUE, self.value.as_str());
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.value)
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
        self.element.toggle_attribute(attr::SELECTED, selected);
        self.element.set_bool_attribute(attr::ARIA_SELECTED, selected);
    }

    /// Whether the host element carries the `option` role.
    pub fn is_option_role(&self) -> bool {
        self.element.attribute(attr::ROLE) == Some("option")
    }

    /// Whether this option's value loosely equals `value`.
    ///
    /// Strings match exactly; two strings that both parse as numbers match
    /// when the numbers are equal (`"1"` matches `"1.0"`).
    pub fn value_matches(&self, value: &str) -> bool {
        loosely_equal(&self.value, value)
    }

    pub(crate) fn ensure_id(&mut self, next_id: impl FnOnce() -> String) -> &str {
        if self.element.id().is_none() {
            self.element.set_attribute(attr::ID, next_id());
        }
        self.element.attribute(attr::ID).unwrap_or_default()
    }
}

impl CustomElement for ListOption {
    const OBSERVED_ATTRIBUTES: &'static [&'static str] = &[attr::SELECTED, attr::VALUE];

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
        self.set_default_attribute(attr::ROLE, "option");
        if let Some(value) = self.upgrade_property(attr::VALUE) {
            self.set_value(value.as_text());
        }
        if let Some(selected) = self.upgrade_property(attr::SELECTED) {
            self.set_selected(selected.as_bool());
        }
        self.element
            .set_bool_attribute(attr::ARIA_SELECTED, self.selected);
    }

    fn attribute_changed_callback(&mut self, name: &str, _old: Option<&str>, new: Option<&str>) {
        match name {
            attr::SELECTED => self.set_selected(new.is_some()),
            attr::VALUE => self.value = new.unwrap_or_default().to_string(),
            _ => {}
        }
    }
}

fn loosely_equal(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    match (a.trim().parse::<f64>(), b.trim().parse::<f64>()) {
        (Ok(x), Ok(y)) => x == y,
        _ => false,
    }
}
