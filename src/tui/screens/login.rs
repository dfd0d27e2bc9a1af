//! Login screen — email and password inputs over a [`LoginForm`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{FormStatus, LoginForm};
use crate::tui::action::{Action, ScreenState};
use crate::tui::widgets::form::{FIELD_HEIGHT, FieldView, draw_button, draw_field};

/// Label of the email input.
pub const EMAIL_LABEL: &str = "Email:";
/// Label of the password input.
pub const PASSWORD_LABEL: &str = "Password:";
/// Label of the submit button.
pub const SIGN_IN_LABEL: &str = "\u{1F680} Sign In";

/// Which control has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Email,
    Password,
    SignIn,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Self::Email => Self::Password,
            Self::Password => Self::SignIn,
            Self::SignIn => Self::Email,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Email => Self::SignIn,
            Self::Password => Self::Email,
            Self::SignIn => Self::Password,
        }
    }
}

/// State for the login screen.
pub struct LoginState<F> {
    form: LoginForm<F>,
    focus: Focus,
}

impl<F: FnMut(&str, &str)> LoginState<F> {
    /// Creates an empty login screen; `on_submit` receives `(email, password)`
    /// after every successful submit.
    pub fn new(on_submit: F) -> Self {
        Self {
            form: LoginForm::new(on_submit),
            focus: Focus::Email,
        }
    }

    // Applies `edit` to a copy of the focused input and feeds the result back
    // through the form's change handler.
    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        match self.focus {
            Focus::Email => {
                let mut value = self.form.email().to_string();
                edit(&mut value);
                self.form.on_email_change(value);
            }
            Focus::Password => {
                let mut value = self.form.password().to_string();
                edit(&mut value);
                self.form.on_password_change(value);
            }
            Focus::SignIn => {}
        }
    }

    fn submit(&mut self) -> Action {
        if self.form.submit() == FormStatus::Invalid {
            self.focus = Focus::Email;
        }
        Action::None
    }
}

impl<F> LoginState<F> {
    /// Returns the underlying form state.
    pub fn form(&self) -> &LoginForm<F> {
        &self.form
    }

    /// Returns the focused control.
    pub fn focus(&self) -> Focus {
        self.focus
    }
}

impl<F: FnMut(&str, &str)> ScreenState for LoginState<F> {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                Action::None
            }
            KeyCode::Char(_)
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Action::None
            }
            KeyCode::Char(ch) => {
                self.edit_focused(|value| value.push(ch));
                Action::None
            }
            KeyCode::Backspace => {
                self.edit_focused(|value| {
                    value.pop();
                });
                Action::None
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }
}

/// Renders the login card.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_login<F>(state: &LoginState<F>, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(Line::from(" Login ").centered())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title_style(Style::default().add_modifier(Modifier::BOLD));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [_top, email_area, password_area, button_area, _spacer, footer_area] =
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(FIELD_HEIGHT + 1),
            Constraint::Length(FIELD_HEIGHT + 1),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(inner);

    let form = state.form();
    let email = FieldView {
        label: EMAIL_LABEL,
        value: form.email(),
        error: form.email_error(),
        required: true,
        masked: false,
        focused: state.focus() == Focus::Email,
    };
    draw_field(&email, frame, email_area);

    let password = FieldView {
        label: PASSWORD_LABEL,
        value: form.password(),
        error: None,
        required: true,
        masked: true,
        focused: state.focus() == Focus::Password,
    };
    draw_field(&password, frame, password_area);

    draw_button(
        SIGN_IN_LABEL,
        state.focus() == Focus::SignIn,
        frame,
        button_area,
    );

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  Enter: sign in  F1: help  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
