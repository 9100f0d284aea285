//! Accessible widgets for the **tulip** TUI framework.
//!
//! Every widget implements [`tulip_core::Component`] for input and rendering
//! and [`tulip_core::CustomElement`] for its lifecycle and attribute surface.
//! Construct a widget, [`connect`](tulip_core::CustomElement::connect) it, then
//! route input messages to it from the parent model.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`checkbox`] | Two-state checkbox with a disabled flag |
//! | [`listbox`] | Single-select listbox with wraparound navigation |
//! | [`list_option`] | The options a listbox selects between |
//!
//! # Utilities
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`focus`] | [`FocusRing`](focus::FocusRing) for tab traversal that skips disabled widgets |
//! | [`key`] | Key bindings and the default widget keymaps |

pub mod checkbox;
pub mod focus;
pub mod key;
pub mod list_option;
pub mod listbox;

pub use checkbox::Checkbox;
pub use focus::FocusRing;
pub use list_option::ListOption;
pub use listbox::Listbox;
