use crate::command::Command;
use crate::event::TerminalEvent;
use crate::model::Model;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::collections::VecDeque;
use std::io::{self, stdout, Stdout};
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Errors that can occur while initializing or running a [`Program`].
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    /// An I/O error from terminal setup, rendering, or teardown.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// The terminal event stream ended unexpectedly.
    #[error("terminal event stream closed")]
    EventStreamClosed,
}

/// Configuration options for a [`Program`].
///
/// Use struct update syntax to override only the options you need:
///
/// ```rust,ignore
/// use tulip_core::ProgramOptions;
///
/// let opts = ProgramOptions {
///     log_file: Some("tulip.log".into()),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ProgramOptions {
    /// Maximum redraws per second (clamped to 1..=120).
    pub fps: u32,
    /// Render on the alternate screen.
    pub alt_screen: bool,
    /// Capture mouse events so widgets receive clicks.
    pub mouse: bool,
    /// Install a `simplelog` file logger writing to this path.
    pub log_file: Option<PathBuf>,
    /// Level for the file logger.
    pub log_level: LevelFilter,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            fps: 60,
            alt_screen: true,
            mouse: true,
            log_file: None,
            log_level: LevelFilter::Debug,
        }
    }
}

/// Wires a [`Model`] to a real terminal and drives the event loop.
///
/// ```rust,ignore
/// #[tokio::main]
/// async fn main() -> Result<(), tulip_core::ProgramError> {
///     let model = tulip_core::Program::<Form>::new(())?.run().await?;
///     Ok(())
/// }
/// ```
pub struct Program<M: Model> {
    model: M,
    terminal: Terminal<CrosstermBackend<Stdout>>,
    options: ProgramOptions,
    queue: VecDeque<M::Message>,
    needs_redraw: bool,
    should_quit: bool,
}

impl<M: Model> Program<M> {
    /// Create a new program with default options.
    pub fn new(flags: M::Flags) -> Result<Self, ProgramError> {
        Self::with_options(flags, ProgramOptions::default())
    }

    /// Create a new program with custom options.
    pub fn with_options(flags: M::Flags, options: ProgramOptions) -> Result<Self, ProgramError> {
        if let Some(ref path) = options.log_file {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            // A logger installed by the embedding application wins.
            let _ = WriteLogger::init(options.log_level, Config::default(), file);
        }

        let (model, init_cmd) = M::init(flags);
        let terminal = init_terminal(&options)?;

        let mut program = Self {
            model,
            terminal,
            options,
            queue: VecDeque::new(),
            needs_redraw: true,
            should_quit: false,
        };
        log::debug!("program initialized");
        program.execute_command(init_cmd);
        Ok(program)
    }

    /// Run the program until a quit command. Returns the final model.
    pub async fn run(mut self) -> Result<M, ProgramError> {
        let result = self.event_loop().await;
        log::debug!("shutting down");
        restore_terminal(&self.options)?;
        result.map(|()| self.model)
    }

    async fn event_loop(&mut self) -> Result<(), ProgramError> {
        let mut events = EventStream::new();
        let fps = self.options.fps.clamp(1, 120);
        let mut frame_interval =
            tokio::time::interval(Duration::from_secs_f64(1.0 / fps as f64));
        frame_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        self.render()?;

        loop {
            self.drain_queue();
            if self.should_quit {
                return Ok(());
            }

            tokio::select! {
                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            let event = TerminalEvent::from(event);
                            if let TerminalEvent::Resize(..) = event {
                                self.needs_redraw = true;
                            }
                            if let Some(msg) = self.model.event(event) {
                                self.queue.push_back(msg);
                            }
                        }
                        Some(Err(err)) => return Err(err.into()),
                        None => return Err(ProgramError::EventStreamClosed),
                    }
                }
                _ = frame_interval.tick() => {
                    if self.needs_redraw {
                        self.render()?;
                        self.needs_redraw = false;
                    }
                }
            }
        }
    }

    fn drain_queue(&mut self) {
        while let Some(msg) = self.queue.pop_front() {
            let cmd = self.model.update(msg);
            self.execute_command(cmd);
            self.needs_redraw = true;
            if self.should_quit {
                return;
            }
        }
    }

    fn execute_command(&mut self, cmd: Command<M::Message>) {
        if cmd.is_quit() {
            self.should_quit = true;
        }
        self.queue.extend(cmd.into_messages());
    }

    fn render(&mut self) -> Result<(), ProgramError> {
        let model = &self.model;
        self.terminal.draw(|frame| model.view(frame))?;
        Ok(())
    }
}

fn init_terminal(options: &ProgramOptions) -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut out = stdout();
    if options.alt_screen {
        execute!(out, EnterAlternateScreen)?;
    }
    if options.mouse {
        execute!(out, EnableMouseCapture)?;
    }
    let mut terminal = Terminal::new(CrosstermBackend::new(out))?;
    terminal.hide_cursor()?;
    terminal.clear()?;
    Ok(terminal)
}

fn restore_terminal(options: &ProgramOptions) -> io::Result<()> {
    let mut out = stdout();
    if options.mouse {
        execute!(out, DisableMouseCapture)?;
    }
    if options.alt_screen {
        execute!(out, LeaveAlternateScreen)?;
    }
    execute!(out, crossterm::cursor::Show)?;
    disable_raw_mode()
}
