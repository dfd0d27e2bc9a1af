mod login_form;
mod validation;

pub use login_form::{FormStatus, LoginForm};
pub use validation::{ValidationError, is_valid_email, validate_email};
