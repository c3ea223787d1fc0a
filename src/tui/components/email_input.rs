//! # EmailInput Component
//!
//! Presentation of the contact form's email field as a single styled line.
//!
//! The field is always shown focused: a reversed cell marks the cursor, over
//! the first placeholder character when the buffer is empty. Input longer
//! than the visible width scrolls horizontally to keep the cursor in view.

use ratatui::text::{Line, Span};

use crate::core::email::EmailField;
use crate::tui::theme::Theme;

/// Visible characters of the field, excluding the prompt.
pub const INPUT_WIDTH: usize = 30;
const PROMPT: &str = "> ";

pub struct EmailInput<'a> {
    pub field: &'a EmailField,
    pub theme: &'a Theme,
}

impl<'a> EmailInput<'a> {
    pub fn new(field: &'a EmailField, theme: &'a Theme) -> Self {
        Self { field, theme }
    }

    pub fn to_line(&self) -> Line<'static> {
        let mut spans = vec![Span::raw(PROMPT)];

        if self.field.value().is_empty() {
            let mut placeholder = self.field.placeholder().chars();
            let first = placeholder.next().map_or(" ".to_string(), String::from);
            spans.push(Span::styled(first, self.theme.input_cursor));
            spans.push(Span::styled(
                placeholder.collect::<String>(),
                self.theme.placeholder,
            ));
            return Line::from(spans);
        }

        let chars: Vec<char> = self.field.value().chars().collect();
        let cursor = self.field.cursor();
        let start = cursor.saturating_sub(INPUT_WIDTH - 1);
        let end = (start + INPUT_WIDTH).min(chars.len());

        let before: String = chars[start..cursor.min(end)].iter().collect();
        spans.push(Span::styled(before, self.theme.input_text));

        if cursor < chars.len() {
            spans.push(Span::styled(chars[cursor].to_string(), self.theme.input_cursor));
            let after: String = chars[(cursor + 1).min(end)..end].iter().collect();
            spans.push(Span::styled(after, self.theme.input_text));
        } else {
            spans.push(Span::styled(" ", self.theme.input_cursor));
        }
        Line::from(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::Key;

    fn plain(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_empty_shows_placeholder() {
        let field = EmailField::default();
        let theme = Theme::default();
        let line = EmailInput::new(&field, &theme).to_line();
        assert_eq!(plain(&line), "> Enter your email...");
    }

    #[test]
    fn test_shows_value_with_trailing_cursor() {
        let mut field = EmailField::default();
        field.focus();
        field.insert_str("me@example.com");
        let theme = Theme::default();
        let line = EmailInput::new(&field, &theme).to_line();
        assert_eq!(plain(&line), "> me@example.com ");
    }

    #[test]
    fn test_long_value_scrolls_to_cursor() {
        let mut field = EmailField::default();
        field.focus();
        field.insert_str("abcdefghijklmnopqrstuvwxyz0123456789@example.com");
        let theme = Theme::default();
        let text = plain(&EmailInput::new(&field, &theme).to_line());
        assert!(text.ends_with("example.com "));
        assert_eq!(text.chars().count(), PROMPT.len() + INPUT_WIDTH);

        field.handle_key(&Key::Home);
        let text = plain(&EmailInput::new(&field, &theme).to_line());
        assert!(text.starts_with("> abcdef"));
        assert_eq!(text.chars().count(), PROMPT.len() + INPUT_WIDTH);
    }
}
