//! Core runtime for **tulip**, accessible widgets for terminal UIs.
//!
//! `tulip-core` provides the host-document model that widgets attach to and
//! the Elm-architecture runtime that drives them.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Element`] | Host node: attributes, pending properties, focus |
//! | [`CustomElement`] | Connect/disconnect lifecycle and observed attributes |
//! | [`IdGenerator`] | Unique generated element ids |
//! | [`Component`] | Reusable widget that renders into a [`ratatui::layout::Rect`] |
//! | [`Model`] | Top-level application (the host document) |
//! | [`Command`] | Notifications and follow-up messages returned from `update` |
//! | [`Program`] | Wires a [`Model`] to a real terminal and drives the event loop |
//! | [`TestProgram`](testing::TestProgram) | Headless harness for a [`Model`] |
//! | [`TestComponent`](testing::TestComponent) | Headless harness for a single [`Component`] |
//!
//! # Reflection
//!
//! Widget state lives in plain fields.  Every setter writes the field and then
//! reflects it onto the host element: presence attributes (`checked`,
//! `disabled`, `selected`) and ARIA attributes (`aria-checked`, ...).  Writes
//! that arrive through the attribute surface are routed back to the same
//! setters by [`CustomElement::attribute_changed_callback`], so both surfaces
//! always agree.

pub mod command;
pub mod component;
pub mod element;
pub mod event;
pub mod ids;
pub mod lifecycle;
pub mod model;
pub mod runtime;
pub mod testing;

pub use command::Command;
pub use component::Component;
pub use element::{attr, Element, PropertyValue};
pub use event::{EventResult, TerminalEvent};
pub use ids::IdGenerator;
pub use lifecycle::{CustomElement, Mount};
pub use model::Model;
pub use runtime::{Program, ProgramError, ProgramOptions};
pub use simplelog::LevelFilter;

/// Run a tulip application with default options.
pub async fn run<M: Model>(flags: M::Flags) -> Result<M, ProgramError> {
    Program::<M>::new(flags)?.run().await
}

/// Run with custom options.
pub async fn run_with<M: Model>(
    flags: M::Flags,
    options: ProgramOptions,
) -> Result<M, ProgramError> {
    Program::<M>::with_options(flags, options)?.run().await
}
