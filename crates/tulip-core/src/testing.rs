use crate::command::Command;
use crate::component::Component;
use crate::event::TerminalEvent;
use crate::model::Model;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless test harness that drives a [`Model`] without a real terminal.
///
/// Messages returned through [`Command::message`] are queued and can be
/// flushed with [`drain_messages`](TestProgram::drain_messages).
///
/// ```rust,ignore
/// use tulip_core::testing::TestProgram;
///
/// let mut prog = TestProgram::<Form>::new(());
/// prog.send_event(TerminalEvent::Key(space));
/// prog.drain_messages();
/// assert!(prog.model().terms.checked());
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
    quit: bool,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
            quit: false,
        };
        program.collect(init_cmd);
        program
    }

    /// Send a message, triggering a single update cycle.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect(cmd);
    }

    /// Offer a terminal event to [`Model::event`] and send the resulting message, if any.
    pub fn send_event(&mut self, event: TerminalEvent) {
        if let Some(msg) = self.model.event(event) {
            self.send(msg);
        }
    }

    /// Process pending messages until no new ones are produced.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.model.update(msg);
                self.collect(cmd);
            }
        }
    }

    /// Whether the model returned [`Command::quit`].
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Render the model to a ratatui [`Buffer`] of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        render_with(width, height, |frame| self.model.view(frame))
    }

    /// Render the model and return the visible content as a plain string.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        buffer_to_string(&self.render(width, height))
    }

    fn collect(&mut self, cmd: Command<M::Message>) {
        self.quit |= cmd.is_quit();
        self.pending_messages.extend(cmd.into_messages());
    }
}

/// A headless harness for a single [`Component`].
///
/// Every message the component returns from `update` is recorded instead of
/// being fed back, so tests can assert on the notifications a widget emits.
pub struct TestComponent<C: Component> {
    component: C,
    emitted: Vec<C::Message>,
}

impl<C: Component> TestComponent<C> {
    pub fn new(component: C) -> Self {
        Self {
            component,
            emitted: Vec::new(),
        }
    }

    /// Send a message and record whatever the component emits in response.
    pub fn send(&mut self, msg: C::Message) {
        let cmd = self.component.update(msg);
        self.emitted.extend(cmd.into_messages());
    }

    /// Messages emitted so far, oldest first.
    pub fn emitted(&self) -> &[C::Message] {
        &self.emitted
    }

    /// Take and clear the recorded messages.
    pub fn take_emitted(&mut self) -> Vec<C::Message> {
        std::mem::take(&mut self.emitted)
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    /// Render the component into a `width` x `height` area.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        let buf = render_with(width, height, |frame| {
            self.component.view(frame, frame.area())
        });
        buffer_to_string(&buf)
    }
}

fn render_with(width: u16, height: u16, draw: impl FnOnce(&mut ratatui::Frame)) -> Buffer {
    let backend = ratatui::backend::TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test backend never fails");
    terminal.draw(draw).expect("test backend never fails");
    terminal.backend().buffer().clone()
}

fn buffer_to_string(buf: &Buffer) -> String {
    let area: Rect = buf.area;
    let mut output = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            output.push_str(buf[(x, y)].symbol());
        }
        if y < area.bottom() - 1 {
            output.push('\n');
        }
    }
    output
}
