//! Modal alert popup.

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

/// Widest the popup gets, in columns.
const MAX_WIDTH: u16 = 56;
/// Popup height: border, message rows, blank row, hint, border.
const HEIGHT: u16 = 8;

/// Returns the centred popup rectangle within `area`.
pub fn alert_area(area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(HEIGHT.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(MAX_WIDTH.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    popup
}

/// Renders `message` in a popup over whatever is already drawn in `area`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_alert(message: &str, frame: &mut Frame, area: Rect) {
    let popup = alert_area(area);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Alert ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let [message_area, hint_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    let text = Paragraph::new(message).wrap(Wrap { trim: true });
    frame.render_widget(text, message_area);

    let hint = Paragraph::new(Line::from("Enter: OK").centered())
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, hint_area);
}
