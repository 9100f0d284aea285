//! Custom-element lifecycle: connect, disconnect, and observed attributes.

use crate::element::{Element, PropertyValue};

/// Tracks whether a widget is attached to its document and whether its
/// one-time setup already ran.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mount {
    rendered: bool,
    connected: bool,
}

impl Mount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark connected. Returns `true` only the first time it is ever called.
    fn attach(&mut self) -> bool {
        self.connected = true;
        !std::mem::replace(&mut self.rendered, true)
    }

    fn detach(&mut self) {
        self.connected = false;
    }

    /// Whether input listeners are attached.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Whether one-time setup has run.
    pub fn is_rendered(&self) -> bool {
        self.rendered
    }
}

/// Behavior installed on a host [`Element`].
///
/// A widget is constructed detached.  [`connect`](CustomElement::connect)
/// attaches it: the first connect runs [`render`](CustomElement::render) and
/// every connect runs [`connected_callback`](CustomElement::connected_callback),
/// where widgets set default attributes and replay pending properties.
/// While detached a widget ignores input.
///
/// External code changing an attribute listed in
/// [`OBSERVED_ATTRIBUTES`](CustomElement::OBSERVED_ATTRIBUTES) through
/// [`set_attribute`](CustomElement::set_attribute) or
/// [`remove_attribute`](CustomElement::remove_attribute) triggers
/// [`attribute_changed_callback`](CustomElement::attribute_changed_callback),
/// which keeps the widget's internal flags in sync with the attribute surface.
pub trait CustomElement {
    /// Attributes whose changes are routed to the widget.
    const OBSERVED_ATTRIBUTES: &'static [&'static str];

    fn element(&self) -> &Element;

    /// Raw access to the host element.
    ///
    /// Writes through this reference skip
    /// [`attribute_changed_callback`](CustomElement::attribute_changed_callback),
    /// so an observed attribute changed here falls out of sync with the
    /// widget's state. Outside the widget itself, change attributes through
    /// [`set_attribute`](CustomElement::set_attribute) and
    /// [`remove_attribute`](CustomElement::remove_attribute).
    fn element_mut(&mut self) -> &mut Element;

    fn mount(&self) -> &Mount;

    fn mount_mut(&mut self) -> &mut Mount;

    /// One-time presentational setup.
    fn render(&mut self) {}

    fn connected_callback(&mut self);

    fn disconnected_callback(&mut self) {}

    fn attribute_changed_callback(&mut self, name: &str, old: Option<&str>, new: Option<&str>);

    /// Attach the widget to its document. Repeated calls while attached are no-ops.
    fn connect(&mut self) {
        if self.mount().is_connected() {
            return;
        }
        if self.mount_mut().attach() {
            log::debug!("<{}> first connect, rendering", self.element().tag());
            self.render();
        }
        self.connected_callback();
    }

    /// Detach the widget. Its state is kept; input is ignored until reconnected.
    fn disconnect(&mut self) {
        if !self.mount().is_connected() {
            return;
        }
        self.mount_mut().detach();
        self.element_mut().blur();
        self.disconnected_callback();
        log::debug!("<{}> disconnected", self.element().tag());
    }

    fn is_connected(&self) -> bool {
        self.mount().is_connected()
    }

    /// Set an attribute on the host element, notifying the widget if observed.
    fn set_attribute(&mut self, name: &str, value: &str) {
        let old = self.element_mut().set_attribute(name, value);
        if Self::OBSERVED_ATTRIBUTES.contains(&name) && old.as_deref() != Some(value) {
            self.attribute_changed_callback(name, old.as_deref(), Some(value));
        }
    }

    /// Remove an attribute from the host element, notifying the widget if observed.
    fn remove_attribute(&mut self, name: &str) {
        let old = self.element_mut().remove_attribute(name);
        if old.is_some() && Self::OBSERVED_ATTRIBUTES.contains(&name) {
            self.attribute_changed_callback(name, old.as_deref(), None);
        }
    }

    /// Set `name` only if the element does not carry it yet.
    fn set_default_attribute(&mut self, name: &str, value: &str) {
        if !self.element().has_attribute(name) {
            self.element_mut().set_attribute(name, value);
        }
    }

    /// Take a property value that was set before the widget was connected.
    fn upgrade_property(&mut self, name: &str) -> Option<PropertyValue> {
        self.element_mut().take_property(name)
    }
}
