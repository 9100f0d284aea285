//! **tulip** -- accessible checkbox and listbox widgets for [`ratatui`].
//!
//! This is the umbrella crate that re-exports everything you need from a
//! single dependency:
//!
//! * All public items from [`tulip_core`] are available at the crate root
//!   ([`Element`], [`CustomElement`], [`Component`], [`Model`], [`Command`],
//!   [`Program`], [`run`], [`run_with`], etc.).
//! * The [`widgets`] module re-exports everything from [`tulip_widgets`].
//! * [`ratatui`], [`crossterm`], [`tokio`], and [`log`] are re-exported so
//!   applications do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use tulip::widgets::{checkbox, Checkbox};
//! use tulip::{Command, Component, CustomElement, Model, TerminalEvent};
//!
//! struct App { terms: Checkbox }
//!
//! enum Msg { Terms(checkbox::Message) }
//!
//! impl Model for App {
//!     type Message = Msg;
//!     type Flags = ();
//!
//!     fn init(_: ()) -> (Self, Command<Msg>) {
//!         let mut terms = Checkbox::new().with_label("I agree");
//!         terms.connect();
//!         (App { terms }, Command::message(Msg::Terms(checkbox::Message::Focus)))
//!     }
//!     fn update(&mut self, msg: Msg) -> Command<Msg> {
//!         match msg {
//!             Msg::Terms(checkbox::Message::Change { checked }) if checked => Command::quit(),
//!             Msg::Terms(m) => self.terms.update(m).map(Msg::Terms),
//!         }
//!     }
//!     fn view(&self, frame: &mut tulip::ratatui::Frame) {
//!         self.terms.view(frame, frame.area());
//!     }
//!     fn event(&self, event: TerminalEvent) -> Option<Msg> {
//!         event.key_press().map(|k| Msg::Terms(checkbox::Message::KeyPress(k)))
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     tulip::run::<App>(()).await.unwrap();
//! }
//! ```

pub use tulip_core::*;
pub mod widgets {
    pub use tulip_widgets::*;
}

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use log;
pub use ratatui;
pub use tokio;
