#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::error::Error;
use std::io::{self, Stdout, stdout};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use loginpage::tui::App;

type Tui = Terminal<CrosstermBackend<Stdout>>;

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn main() -> Result<(), Box<dyn Error>> {
    install_panic_hook();
    let mut terminal = enter_terminal()?;

    let result = App::new().run(&mut terminal);

    // Restore even when the app failed; the app's error wins.
    let restore_result = leave_terminal();
    result?;
    restore_result?;
    Ok(())
}

// Leaves raw mode before the default hook prints, so the panic is readable.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = leave_terminal();
        original_hook(info);
    }));
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn enter_terminal() -> Result<Tui, io::Error> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout()))
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn leave_terminal() -> Result<(), io::Error> {
    let raw_result = disable_raw_mode();
    let screen_result = execute!(stdout(), LeaveAlternateScreen);
    raw_result.and(screen_result)
}
