//! # Form Demo
//!
//! A small settings form hosting two checkboxes and a listbox:
//! - Tab / Shift+Tab move focus, skipping the disabled checkbox
//! - Space toggles a checkbox, arrows / Home / End pick a fruit
//! - Ticking "Lock newsletter" disables the newsletter checkbox
//! - Clicks work too; q or Esc quits
//!
//! Debug logs go to `form.log`.
//!
//! Run with: `cargo run --example form`

use tulip::crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use tulip::ratatui::layout::{Constraint, Layout};
use tulip::ratatui::style::{Color, Style};
use tulip::ratatui::widgets::{Block, Borders, Paragraph};
use tulip::ratatui::Frame;
use tulip::widgets::key::KeyMap;
use tulip::widgets::{checkbox, listbox, Checkbox, FocusRing, ListOption, Listbox};
use tulip::{Command, Component, CustomElement, Model, ProgramOptions, TerminalEvent};

const NEWSLETTER: usize = 0;
const LOCK: usize = 1;
const FRUIT: usize = 2;

struct Form {
    newsletter: Checkbox,
    lock: Checkbox,
    fruit: Listbox,
    ring: FocusRing<3>,
    status: String,
}

#[derive(Debug)]
enum Msg {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Newsletter(checkbox::Message),
    Lock(checkbox::Message),
    Fruit(listbox::Message),
    Quit,
}

impl Form {
    fn focusable(&self) -> [bool; 3] {
        [
            self.newsletter.element().is_focusable(),
            self.lock.element().is_focusable(),
            self.fruit.element().is_focusable(),
        ]
    }

    fn send_to(&mut self, slot: usize, focus: bool) -> Command<Msg> {
        match slot {
            NEWSLETTER => {
                let m = if focus { checkbox::Message::Focus } else { checkbox::Message::Blur };
                self.newsletter.update(m).map(Msg::Newsletter)
            }
            LOCK => {
                let m = if focus { checkbox::Message::Focus } else { checkbox::Message::Blur };
                self.lock.update(m).map(Msg::Lock)
            }
            _ => {
                let m = if focus { listbox::Message::Focus } else { listbox::Message::Blur };
                self.fruit.update(m).map(Msg::Fruit)
            }
        }
    }

    fn move_focus(&mut self, to: usize) -> Command<Msg> {
        let from = self.ring.focused();
        if from == to {
            return Command::none();
        }
        self.ring.focus(to);
        Command::batch([self.send_to(from, false), self.send_to(to, true)])
    }

    fn on_key(&mut self, key: KeyEvent) -> Command<Msg> {
        let (result, cmd) = match self.ring.focused() {
            NEWSLETTER => {
                let (r, c) = self.newsletter.handle_key(key);
                (r, c.map(Msg::Newsletter))
            }
            LOCK => {
                let (r, c) = self.lock.handle_key(key);
                (r, c.map(Msg::Lock))
            }
            _ => {
                let (r, c) = self.fruit.handle_key(key);
                (r, c.map(Msg::Fruit))
            }
        };
        if result.is_handled() {
            return cmd;
        }
        match key.code {
            KeyCode::Tab => {
                let to = self.ring.next_focusable(self.focusable());
                self.move_focus(to)
            }
            KeyCode::BackTab => {
                let to = self.ring.prev_focusable(self.focusable());
                self.move_focus(to)
            }
            KeyCode::Char('q') | KeyCode::Esc => Command::quit(),
            _ => Command::none(),
        }
    }
}

impl Model for Form {
    type Message = Msg;
    type Flags = ();

    fn init(_: ()) -> (Self, Command<Msg>) {
        let mut newsletter = Checkbox::new().with_label("Send me the newsletter");
        let mut lock = Checkbox::new().with_label("Lock newsletter setting");
        let mut fruit = Listbox::new().with_options([
            ListOption::new("apple").with_label("Apple"),
            ListOption::new("banana").with_label("Banana"),
            ListOption::new("cherry").with_label("Cherry"),
            ListOption::new("durian").with_label("Durian"),
        ]);
        newsletter.connect();
        lock.connect();
        fruit.connect();

        let form = Form {
            newsletter,
            lock,
            fruit,
            ring: FocusRing::new(),
            status: "Tab to move, space to toggle, arrows to pick".to_string(),
        };
        (form, Command::message(Msg::Newsletter(checkbox::Message::Focus)))
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::Key(key) => self.on_key(key),
            Msg::Mouse(mouse) => Command::batch([
                self.newsletter
                    .update(checkbox::Message::Mouse(mouse))
                    .map(Msg::Newsletter),
                self.lock.update(checkbox::Message::Mouse(mouse)).map(Msg::Lock),
                self.fruit.update(listbox::Message::Mouse(mouse)).map(Msg::Fruit),
            ]),
            Msg::Newsletter(checkbox::Message::Change { checked }) => {
                self.status = format!("newsletter: {checked}");
                Command::none()
            }
            Msg::Lock(checkbox::Message::Change { checked }) => {
                self.newsletter.set_disabled(checked);
                self.status = format!("newsletter locked: {checked}");
                let to = self.ring.repaired(self.focusable());
                self.move_focus(to)
            }
            Msg::Fruit(listbox::Message::Input { value }) => {
                self.status = format!("fruit: {}", if value.is_empty() { "-" } else { value.as_str() });
                Command::none()
            }
            Msg::Newsletter(m) => self.newsletter.update(m).map(Msg::Newsletter),
            Msg::Lock(m) => self.lock.update(m).map(Msg::Lock),
            Msg::Fruit(m) => self.fruit.update(m).map(Msg::Fruit),
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let [checks, list, help, status] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(6),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        let [first, second] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(checks);
        self.newsletter.view(frame, first);
        self.lock.view(frame, second);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Fruit ");
        let inner = block.inner(list);
        frame.render_widget(block, list);
        self.fruit.view(frame, inner);

        let keys = if self.ring.is_focused(FRUIT) {
            self.fruit.keys().help_line()
        } else {
            self.newsletter.keys().help_line()
        };
        frame.render_widget(
            Paragraph::new(format!("{keys} · tab next · q quit"))
                .style(Style::default().fg(Color::DarkGray)),
            help,
        );
        frame.render_widget(Paragraph::new(self.status.as_str()), status);
    }

    fn event(&self, event: TerminalEvent) -> Option<Msg> {
        match event {
            TerminalEvent::Mouse(m) => Some(Msg::Mouse(m)),
            TerminalEvent::FocusLost => None,
            other => other.key_press().map(|k| match k.code {
                KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => Msg::Quit,
                _ => Msg::Key(k),
            }),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), tulip::ProgramError> {
    let options = ProgramOptions {
        log_file: Some("form.log".into()),
        ..Default::default()
    };
    let form = tulip::run_with::<Form>((), options).await?;
    println!("newsletter: {}", form.newsletter.checked());
    println!("fruit: {}", form.fruit.value());
    Ok(())
}
