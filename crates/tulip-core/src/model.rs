use crate::command::Command;
use crate::event::TerminalEvent;
use ratatui::Frame;

/// The top-level application trait, following the [Elm Architecture].
///
/// The runtime drives an **init -> event -> update -> view** cycle:
///
/// 1. [`init`](Model::init) creates the initial state.
/// 2. [`view`](Model::view) renders the current state to a [`ratatui::Frame`].
/// 3. Terminal input is offered to [`event`](Model::event), which maps it to a
///    message.
/// 4. [`update`](Model::update) processes each message and may return a
///    [`Command`] carrying follow-up messages.
/// 5. Steps 2--4 repeat until a [`Command::quit`] is returned.
///
/// In a tulip application the model plays the part of the host document: it
/// owns the widgets, connects them, routes input to the focused one, and
/// reacts to the notifications they emit.
///
/// [Elm Architecture]: https://guide.elm-lang.org/architecture/
pub trait Model: Sized + Send + 'static {
    /// The application's message type.
    type Message: Send + 'static;

    /// Initialization data passed to [`Model::init`].
    type Flags: Send + 'static;

    /// Create the initial model state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Process a message, mutate state, and return a command.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state. Must not mutate the model.
    fn view(&self, frame: &mut Frame);

    /// Map a terminal event to a message. Return `None` to drop it.
    ///
    /// The default implementation drops every event.
    fn event(&self, _event: TerminalEvent) -> Option<Self::Message> {
        None
    }
}
