use tracing::debug;

use super::validation::{is_valid_email, validate_email};

/// Whether the form is currently showing a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    /// No error shown.
    #[default]
    Clean,
    /// The last submit failed email validation and the email has not since
    /// been cleared or corrected.
    Invalid,
}

/// Login form state: email, password, and the inline email error.
///
/// Created empty. Mutated only through [`on_email_change`](Self::on_email_change),
/// [`on_password_change`](Self::on_password_change) and [`submit`](Self::submit).
/// A successful submit hands `(email, password)` to the callback given at
/// construction; a failed one only sets the inline error.
pub struct LoginForm<F> {
    email: String,
    password: String,
    email_error: Option<String>,
    on_submit: F,
}

impl<F> std::fmt::Debug for LoginForm<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("email_error", &self.email_error)
            .finish_non_exhaustive()
    }
}

impl<F: FnMut(&str, &str)> LoginForm<F> {
    /// Creates an empty form that reports successful submissions to `on_submit`.
    pub fn new(on_submit: F) -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            email_error: None,
            on_submit,
        }
    }

    /// Replaces the email value.
    ///
    /// A showing error is cleared once the new value is empty or valid; an
    /// invalid edit leaves it in place until the next submit.
    pub fn on_email_change(&mut self, value: impl Into<String>) {
        self.email = value.into();
        if self.email_error.is_some() && (self.email.is_empty() || is_valid_email(&self.email)) {
            self.email_error = None;
        }
    }

    /// Replaces the password value. Passwords are never validated.
    pub fn on_password_change(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    /// Validates the email and, if it passes, notifies the callback.
    ///
    /// On failure the inline error is (re)set and the callback is not called.
    pub fn submit(&mut self) -> FormStatus {
        if let Err(e) = validate_email(&self.email) {
            debug!(email = %self.email, "login submit rejected");
            self.email_error = Some(e.to_string());
            return FormStatus::Invalid;
        }

        self.email_error = None;
        debug!(email = %self.email, "login submit accepted");
        (self.on_submit)(&self.email, &self.password);
        FormStatus::Clean
    }
}

impl<F> LoginForm<F> {
    /// Returns the current email value.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the current password value.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the inline email error, if one is showing.
    pub fn email_error(&self) -> Option<&str> {
        self.email_error.as_deref()
    }

    /// Returns [`FormStatus::Invalid`] while an email error is showing.
    pub fn status(&self) -> FormStatus {
        if self.email_error.is_some() {
            FormStatus::Invalid
        } else {
            FormStatus::Clean
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use quickcheck_macros::quickcheck;

    use super::*;

    const ERROR: &str = "Please enter a valid email address";

    type Calls = Rc<RefCell<Vec<(String, String)>>>;

    fn make_form() -> (Calls, LoginForm<impl FnMut(&str, &str)>) {
        let calls: Calls = Rc::default();
        let sink = Rc::clone(&calls);
        let form = LoginForm::new(move |email: &str, password: &str| {
            sink.borrow_mut()
                .push((email.to_string(), password.to_string()));
        });
        (calls, form)
    }

    fn pair(email: &str, password: &str) -> (String, String) {
        (email.to_string(), password.to_string())
    }

    mod construction {
        use super::*;

        #[test]
        fn starts_empty_and_clean() {
            let (calls, form) = make_form();
            assert_eq!(form.email(), "");
            assert_eq!(form.password(), "");
            assert_eq!(form.email_error(), None);
            assert_eq!(form.status(), FormStatus::Clean);
            assert!(calls.borrow().is_empty());
        }

        #[test]
        fn debug_redacts_password() {
            let (_calls, mut form) = make_form();
            form.on_password_change("hunter2");
            let dbg = format!("{form:?}");
            assert!(!dbg.contains("hunter2"));
            assert!(dbg.contains("<redacted>"));
        }
    }

    mod submit {
        use super::*;

        #[test]
        fn invalid_email_sets_error_without_callback() {
            let (calls, mut form) = make_form();
            form.on_email_change("invalid-email");
            assert_eq!(form.submit(), FormStatus::Invalid);
            assert_eq!(form.email_error(), Some(ERROR));
            assert!(calls.borrow().is_empty());
        }

        #[test]
        fn empty_email_is_invalid() {
            let (calls, mut form) = make_form();
            form.on_password_change("secret");
            assert_eq!(form.submit(), FormStatus::Invalid);
            assert!(calls.borrow().is_empty());
        }

        #[test]
        fn repeated_failure_keeps_same_error() {
            let (calls, mut form) = make_form();
            form.on_email_change("nope");
            form.submit();
            form.submit();
            assert_eq!(form.email_error(), Some(ERROR));
            assert_eq!(form.status(), FormStatus::Invalid);
            assert!(calls.borrow().is_empty());
        }

        #[test]
        fn valid_email_calls_back_once_with_both_fields() {
            let (calls, mut form) = make_form();
            form.on_email_change("test@example.com");
            form.on_password_change("password123");
            assert_eq!(form.submit(), FormStatus::Clean);
            assert_eq!(
                *calls.borrow(),
                vec![pair("test@example.com", "password123")]
            );
        }

        #[test]
        fn each_successful_submit_calls_back() {
            let (calls, mut form) = make_form();
            form.on_email_change("a@b.c");
            form.submit();
            form.on_password_change("x");
            form.submit();
            assert_eq!(*calls.borrow(), vec![pair("a@b.c", ""), pair("a@b.c", "x")]);
        }

        #[test]
        fn success_after_failure_clears_error() {
            let (calls, mut form) = make_form();
            form.on_email_change("invalid-email");
            form.submit();
            // Still invalid after the edit, so the error stays until submit.
            form.on_email_change("invalid-email2");
            assert_eq!(form.email_error(), Some(ERROR));

            form.on_email_change("valid@email.com");
            assert_eq!(form.submit(), FormStatus::Clean);
            assert_eq!(form.email_error(), None);
            assert_eq!(*calls.borrow(), vec![pair("valid@email.com", "")]);
        }
    }

    mod live_clearing {
        use super::*;

        fn failed_form() -> (Calls, LoginForm<impl FnMut(&str, &str)>) {
            let (calls, mut form) = make_form();
            form.on_email_change("bad");
            form.submit();
            (calls, form)
        }

        #[test]
        fn valid_edit_clears_error_without_submit() {
            let (calls, mut form) = failed_form();
            form.on_email_change("good@example.com");
            assert_eq!(form.email_error(), None);
            assert_eq!(form.status(), FormStatus::Clean);
            assert!(calls.borrow().is_empty());
        }

        #[test]
        fn empty_edit_clears_error() {
            let (_calls, mut form) = failed_form();
            form.on_email_change("");
            assert_eq!(form.email_error(), None);
        }

        #[test]
        fn invalid_edit_keeps_error() {
            let (_calls, mut form) = failed_form();
            form.on_email_change("still@bad");
            assert_eq!(form.email_error(), Some(ERROR));
        }

        #[test]
        fn edits_before_any_submit_never_set_error() {
            let (_calls, mut form) = make_form();
            form.on_email_change("x");
            form.on_email_change("");
            assert_eq!(form.email_error(), None);
        }
    }

    mod properties {
        use super::*;

        #[quickcheck]
        fn invalid_email_never_calls_back(email: String, password: String) -> bool {
            let email: String = email.chars().filter(|c| *c != '@').collect();
            let (calls, mut form) = make_form();
            form.on_email_change(email);
            form.on_password_change(password);
            form.submit() == FormStatus::Invalid && calls.borrow().is_empty()
        }

        #[quickcheck]
        fn password_changes_never_touch_error(password: String, fail_first: bool) -> bool {
            let (_calls, mut form) = make_form();
            if fail_first {
                form.on_email_change("bad");
                form.submit();
            }
            let before = form.email_error().map(str::to_string);
            form.on_password_change(password.clone());
            form.email_error().map(str::to_string) == before && form.password() == password
        }
    }
}
