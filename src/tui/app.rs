use std::cell::Cell;
use std::rc::Rc;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::{Frame, Terminal};

use super::action::{Action, ScreenState};
use super::error::AppError;
use super::screens::{HelpState, LoginState, draw_help, draw_login};
use super::widgets::draw_alert;

/// Widest the login card gets, in columns.
const CARD_WIDTH: u16 = 60;
/// Height of the login card, in rows.
const CARD_HEIGHT: u16 = 20;

/// All screens the app can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// The login form.
    Login,
    /// Show keybinding help.
    Help,
}

/// Credentials handed over by a successful login submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub email: String,
    pub password: String,
}

impl Submission {
    /// The text shown to acknowledge the attempt.
    pub fn acknowledgment(&self) -> String {
        format!(
            "Login attempted with email: {} and password: {}",
            self.email, self.password
        )
    }
}

/// Callback type the app's login screen is built with.
pub type SubmitHandler = Box<dyn FnMut(&str, &str)>;

/// Top-level application state: the page around the login form.
pub struct App {
    screen: Screen,
    login: LoginState<SubmitHandler>,
    help: HelpState,
    pending: Rc<Cell<Option<Submission>>>,
    alert: Option<String>,
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates a new `App` starting on an empty [`Screen::Login`].
    pub fn new() -> Self {
        let pending = Rc::new(Cell::new(None));
        let slot = Rc::clone(&pending);
        let on_submit: SubmitHandler = Box::new(move |email: &str, password: &str| {
            slot.set(Some(Submission {
                email: email.to_string(),
                password: password.to_string(),
            }));
        });
        Self {
            screen: Screen::Login,
            login: LoginState::new(on_submit),
            help: HelpState::new(),
            pending,
            alert: None,
            should_quit: false,
        }
    }

    /// Main event loop: draw → read event → dispatch → check quit.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    pub fn run<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<(), AppError> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Renders the current screen in a centred card, with any alert on top.
    #[cfg_attr(coverage_nightly, coverage(off))]
    #[mutants::skip]
    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let card = card_area(area);

        match self.screen {
            Screen::Login => draw_login(&self.login, frame, card),
            Screen::Help => draw_help(&mut self.help, frame, card),
        }

        if let Some(message) = &self.alert {
            draw_alert(message, frame, area);
        }
    }

    /// Handles a key event: global keys first, then the alert, then the screen.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // An open alert swallows everything until dismissed.
        if self.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.alert = None;
            }
            return;
        }

        if key.code == KeyCode::F(1) && self.screen != Screen::Help {
            self.help.reset();
            self.screen = Screen::Help;
            return;
        }

        let action = match self.screen {
            Screen::Login => self.login.handle_key(key),
            Screen::Help => self.help.handle_key(key),
        };
        self.apply(action);
        self.take_submission();
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Navigate(screen) => self.screen = screen,
            Action::Quit => self.should_quit = true,
        }
    }

    // Turns a submission made during this key into the alert.
    fn take_submission(&mut self) {
        if let Some(submission) = self.pending.take() {
            self.alert = Some(submission.acknowledgment());
        }
    }

    /// Returns the current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns `true` if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the open alert's message, if any.
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Returns the login screen state.
    pub fn login(&self) -> &LoginState<SubmitHandler> {
        &self.login
    }
}

/// Centres a card of at most [`CARD_WIDTH`] x [`CARD_HEIGHT`] within `area`.
fn card_area(area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(CARD_HEIGHT.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [card] = Layout::horizontal([Constraint::Length(CARD_WIDTH.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    card
}
