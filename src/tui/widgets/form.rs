//! Labelled text inputs and buttons for form screens.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Height of a bordered input or button row.
pub const FIELD_HEIGHT: u16 = 3;

/// Character shown in place of each masked input character.
const MASK_CHAR: char = '\u{2022}';

/// Everything needed to draw one text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldView<'a> {
    /// Label shown in the top border.
    pub label: &'a str,
    /// Current text value.
    pub value: &'a str,
    /// Validation error to show below the input, if any.
    pub error: Option<&'a str>,
    /// Marks the label with `*`.
    pub required: bool,
    /// Hides the value behind bullets.
    pub masked: bool,
    /// Draws the cursor and the focus colour.
    pub focused: bool,
}

/// Replaces every character of `value` with a bullet.
pub fn mask(value: &str) -> String {
    value.chars().map(|_| MASK_CHAR).collect()
}

/// Renders a bordered input in the top [`FIELD_HEIGHT`] rows of `area`.
///
/// When the field has an error and `area` is taller than the input, the
/// message goes on the row below it.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_field(field: &FieldView<'_>, frame: &mut Frame, area: Rect) {
    let border_color = if field.error.is_some() {
        Color::Red
    } else if field.focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let label = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.to_string()
    };

    let block = Block::default()
        .title(label)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let shown = if field.masked {
        mask(field.value)
    } else {
        field.value.to_string()
    };
    let mut spans = vec![Span::raw(shown)];
    if field.focused {
        spans.push(Span::styled(
            "\u{2588}",
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    let input_area = Rect {
        height: area.height.min(FIELD_HEIGHT),
        ..area
    };
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), input_area);

    if let Some(err) = field.error
        && area.height > FIELD_HEIGHT
    {
        let err_area = Rect {
            x: area.x + 1,
            y: area.y + FIELD_HEIGHT,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        let error_line = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
        frame.render_widget(error_line, err_area);
    }
}

/// Renders a bordered, centred button label.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_button(label: &str, focused: bool, frame: &mut Frame, area: Rect) {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let button = Paragraph::new(Line::from(Span::styled(label, style)).centered()).block(block);
    frame.render_widget(button, area);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    fn render_field(field: &FieldView<'_>, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_field(field, frame, frame.area()))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn field<'a>(label: &'a str, value: &'a str) -> FieldView<'a> {
        FieldView {
            label,
            value,
            error: None,
            required: false,
            masked: false,
            focused: false,
        }
    }

    #[test]
    fn mask_hides_every_char() {
        assert_eq!(mask("abc"), "\u{2022}\u{2022}\u{2022}");
        assert_eq!(mask(""), "");
    }

    #[test]
    fn mask_counts_chars_not_bytes() {
        assert_eq!(mask("é!").chars().count(), 2);
    }

    #[test]
    fn renders_label_and_value() {
        let output = render_field(&field("Email:", "a@b.c"), 30, 3);
        assert!(output.contains("Email:"));
        assert!(output.contains("a@b.c"));
    }

    #[test]
    fn required_label_gets_star() {
        let view = FieldView {
            required: true,
            ..field("Email:", "")
        };
        let output = render_field(&view, 30, 3);
        assert!(output.contains("Email: *"));
    }

    #[test]
    fn masked_value_is_hidden() {
        let view = FieldView {
            masked: true,
            ..field("Password:", "secret")
        };
        let output = render_field(&view, 30, 3);
        assert!(!output.contains("secret"));
        assert!(output.contains("\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}"));
    }

    #[test]
    fn error_rendered_below_input() {
        let view = FieldView {
            error: Some("bad input"),
            ..field("Email:", "x")
        };
        let output = render_field(&view, 30, 4);
        let last_line = output.lines().nth(3).unwrap();
        assert!(last_line.contains("bad input"));
    }

    #[test]
    fn error_skipped_without_room() {
        let view = FieldView {
            error: Some("bad input"),
            ..field("Email:", "x")
        };
        let output = render_field(&view, 30, 3);
        assert!(!output.contains("bad input"));
    }

    #[test]
    fn button_renders_label() {
        let backend = TestBackend::new(20, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_button("Sign In", true, frame, frame.area()))
            .unwrap();
        let output = buffer_to_string(terminal.backend().buffer());
        assert!(output.contains("Sign In"));
    }
}
