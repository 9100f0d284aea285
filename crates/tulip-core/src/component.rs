use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A reusable widget that renders into a given [`Rect`] area.
///
/// `Component` is the widget half of the Elm architecture: input arrives as a
/// message, [`update`](Component::update) mutates state and returns a
/// [`Command`], and [`view`](Component::view) draws the current state.
/// Notifications a widget emits (a checkbox change, a listbox input) are
/// returned as `Command::message(..)`; the parent lifts them into its own
/// message type with [`Command::map`].
///
/// ```rust,ignore
/// use tulip_core::{Command, Component};
/// use tulip_widgets::checkbox::{self, Checkbox};
///
/// enum AppMsg { Terms(checkbox::Message) }
///
/// fn route(terms: &mut Checkbox, msg: AppMsg) -> Command<AppMsg> {
///     match msg {
///         AppMsg::Terms(checkbox::Message::Change { checked }) => {
///             log::info!("terms accepted: {checked}");
///             Command::none()
///         }
///         AppMsg::Terms(m) => terms.update(m).map(AppMsg::Terms),
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's message type: input events in, notifications out.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] for side effects.
    ///
    /// All state changes, including attribute reflection, are complete by the
    /// time the returned command is delivered.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has focus.
    ///
    /// The default implementation returns `false`.
    fn focused(&self) -> bool {
        false
    }
}
