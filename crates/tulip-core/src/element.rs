//! Headless host element: attributes, pending properties, and focus.
//!
//! Every widget wraps one [`Element`].  Boolean widget state is reflected onto
//! presence attributes (attribute present ⇔ flag true) and onto the ARIA
//! attributes that assistive technology reads.

use std::collections::BTreeMap;

/// Well-known attribute names.
pub mod attr {
    pub const ID: &str = "id";
    pub const ROLE: &str = "role";
    pub const TABINDEX: &str = "tabindex";
    pub const VALUE: &str = "value";
    pub const CHECKED: &str = "checked";
    pub const DISABLED: &str = "disabled";
    pub const SELECTED: &str = "selected";
    pub const ARIA_CHECKED: &str = "aria-checked";
    pub const ARIA_DISABLED: &str = "aria-disabled";
    pub const ARIA_SELECTED: &str = "aria-selected";
    pub const ARIA_ACTIVEDESCENDANT: &str = "aria-activedescendant";
}

/// A property value set on an element before its widget behavior was installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Bool(bool),
    Text(String),
}

impl PropertyValue {
    /// Interpret the value as a boolean flag.
    ///
    /// Text is truthy when non-empty.
    pub fn as_bool(&self) -> bool {
        match self {
            PropertyValue::Bool(b) => *b,
            PropertyValue::Text(s) => !s.is_empty(),
        }
    }

    /// Interpret the value as text.
    pub fn as_text(&self) -> String {
        match self {
            PropertyValue::Bool(b) => b.to_string(),
            PropertyValue::Text(s) => s.clone(),
        }
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::Text(value)
    }
}

/// A node in the host document.
#[derive(Debug, Clone, Default)]
pub struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    pending: BTreeMap<String, PropertyValue>,
    focused: bool,
}

impl Element {
    /// Create an element with the given tag name and no attributes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Builder form of [`set_attribute`](Element::set_attribute).
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Builder form of [`set_property`](Element::set_property).
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.set_property(name, value);
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Iterate attributes in name order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Set an attribute, returning the previous value.
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.attributes.insert(name.into(), value.into())
    }

    /// Remove an attribute, returning the previous value.
    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        let old = self.attributes.remove(name);
        if name == attr::TABINDEX && self.focused {
            // an element that left the tab order cannot keep focus
            self.focused = false;
        }
        old
    }

    /// Add (`present = true`, empty value) or remove a presence attribute.
    ///
    /// Returns whether the attribute set changed.
    pub fn toggle_attribute(&mut self, name: &str, present: bool) -> bool {
        match (present, self.has_attribute(name)) {
            (true, false) => {
                self.set_attribute(name, "");
                true
            }
            (false, true) => {
                self.remove_attribute(name);
                true
            }
            _ => false,
        }
    }

    /// Set a `"true"`/`"false"` attribute such as `aria-checked`.
    pub fn set_bool_attribute(&mut self, name: &str, value: bool) {
        self.set_attribute(name, if value { "true" } else { "false" });
    }

    pub fn id(&self) -> Option<&str> {
        self.attribute(attr::ID).filter(|id| !id.is_empty())
    }

    /// Store a property value for a widget that has not been connected yet.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) {
        self.pending.insert(name.into(), value.into());
    }

    /// Remove and return a pending property value.
    pub fn take_property(&mut self, name: &str) -> Option<PropertyValue> {
        self.pending.remove(name)
    }

    /// The parsed `tabindex`, if present and numeric.
    pub fn tab_index(&self) -> Option<i32> {
        self.attribute(attr::TABINDEX)?.trim().parse().ok()
    }

    /// Whether the element takes part in keyboard focus traversal.
    pub fn is_focusable(&self) -> bool {
        self.tab_index().is_some_and(|i| i >= 0)
    }

    /// Give the element focus. Returns `false` if it is not focusable.
    pub fn focus(&mut self) -> bool {
        if self.is_focusable() {
            self.focused = true;
        }
        self.focused
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_attribute_tracks_presence() {
        let mut el = Element::new("tulip-checkbox");
        assert!(el.toggle_attribute(attr::CHECKED, true));
        assert_eq!(el.attribute(attr::CHECKED), Some(""));
        assert!(!el.toggle_attribute(attr::CHECKED, true));
        assert!(el.toggle_attribute(attr::CHECKED, false));
        assert!(!el.has_attribute(attr::CHECKED));
    }

    #[test]
    fn focus_requires_tabindex() {
        let mut el = Element::new("div");
        assert!(!el.focus());
        el.set_attribute(attr::TABINDEX, "0");
        assert!(el.focus());
        assert!(el.is_focused());
    }

    #[test]
    fn negative_tabindex_is_not_focusable() {
        let mut el = Element::new("div").with_attribute(attr::TABINDEX, "-1");
        assert!(!el.is_focusable());
        assert!(!el.focus());
    }

    #[test]
    fn removing_tabindex_drops_focus() {
        let mut el = Element::new("div").with_attribute(attr::TABINDEX, "0");
        el.focus();
        el.remove_attribute(attr::TABINDEX);
        assert!(!el.is_focused());
    }

    #[test]
    fn pending_property_is_taken_once() {
        let mut el = Element::new("div").with_property(attr::CHECKED, true);
        assert_eq!(el.take_property(attr::CHECKED), Some(PropertyValue::Bool(true)));
        assert_eq!(el.take_property(attr::CHECKED), None);
    }

    #[test]
    fn empty_id_counts_as_missing() {
        let el = Element::new("div").with_attribute(attr::ID, "");
        assert_eq!(el.id(), None);
    }

    #[test]
    fn text_property_truthiness() {
        assert!(PropertyValue::from("yes").as_bool());
        assert!(!PropertyValue::from("").as_bool());
        assert_eq!(PropertyValue::from(true).as_text(), "true");
    }
}
