//! # Email Capture Field
//!
//! Single-line text buffer used by the contact screen.
//!
//! The cursor is tracked as a char index (not a byte offset) so the length
//! limit and cursor math agree for non-ASCII input. The field only reacts to
//! keys while focused.

use crate::core::action::Key;

pub const EMAIL_PLACEHOLDER: &str = "Enter your email...";
pub const EMAIL_CHAR_LIMIT: usize = 64;

#[derive(Debug, Clone)]
pub struct EmailField {
    buffer: String,
    /// Cursor position as a char index (0..=char count)
    cursor: usize,
    placeholder: &'static str,
    char_limit: usize,
    focused: bool,
}

impl Default for EmailField {
    fn default() -> Self {
        Self::new(EMAIL_PLACEHOLDER, EMAIL_CHAR_LIMIT)
    }
}

impl EmailField {
    pub fn new(placeholder: &'static str, char_limit: usize) -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            placeholder,
            char_limit,
            focused: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    pub fn char_limit(&self) -> usize {
        self.char_limit
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Empty the buffer. Focus is left as it was.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map_or(self.buffer.len(), |(i, _)| i)
    }

    /// Insert a character at the cursor. Rejected once the limit is reached.
    pub fn insert_char(&mut self, c: char) -> bool {
        if c.is_control() || self.char_count() >= self.char_limit {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.buffer.insert(at, c);
        self.cursor += 1;
        true
    }

    /// Insert pasted text, dropping control characters and anything past the limit.
    pub fn insert_str(&mut self, text: &str) -> bool {
        let mut changed = false;
        for c in text.chars() {
            if c.is_control() {
                continue;
            }
            if !self.insert_char(c) {
                break;
            }
            changed = true;
        }
        changed
    }

    /// Apply an editing key. Returns `true` if the buffer or cursor changed.
    pub fn handle_key(&mut self, key: &Key) -> bool {
        if !self.focused {
            return false;
        }
        match key {
            Key::Char(c) => self.insert_char(*c),
            Key::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                let at = self.byte_offset(self.cursor);
                self.buffer.remove(at);
                true
            }
            Key::Delete => {
                if self.cursor >= self.char_count() {
                    return false;
                }
                let at = self.byte_offset(self.cursor);
                self.buffer.remove(at);
                true
            }
            Key::Left => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                true
            }
            Key::Right => {
                if self.cursor >= self.char_count() {
                    return false;
                }
                self.cursor += 1;
                true
            }
            Key::Home => {
                let moved = self.cursor != 0;
                self.cursor = 0;
                moved
            }
            Key::End => {
                let end = self.char_count();
                let moved = self.cursor != end;
                self.cursor = end;
                moved
            }
            Key::Up | Key::Down | Key::Enter | Key::Esc => false,
        }
    }

    /// Apply pasted text if focused.
    pub fn handle_paste(&mut self, text: &str) -> bool {
        self.focused && self.insert_str(text)
    }
}
