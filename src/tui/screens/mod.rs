//! TUI screen implementations.

pub mod help;
pub mod login;

pub use help::{HelpState, draw_help};
pub use login::{Focus, LoginState, draw_login};
