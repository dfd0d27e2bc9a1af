//! Reusable TUI widgets.

pub mod alert;
pub mod form;

pub use alert::draw_alert;
pub use form::{FieldView, draw_button, draw_field};
