//! Text input widget
//!
//! A single-line text field with a cursor. The cursor counts characters, not
//! bytes, so non-ASCII names edit correctly.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::tui::palette::Palette;

/// Editable text plus cursor position
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    content: String,
    cursor: usize,
    /// Label drawn before the field
    pub label: String,
    /// Text shown while the field is empty
    pub placeholder: String,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Replace the content and put the cursor at the end
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.content = value.into();
        self.cursor = self.content.chars().count();
    }

    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.content.chars().count() {
            let at = self.byte_offset(self.cursor);
            self.content.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.content.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.chars().count();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }
}

/// Renders a [`TextInput`] with the active palette
pub struct InputField<'a> {
    input: &'a TextInput,
    focused: bool,
    palette: Palette,
}

impl<'a> InputField<'a> {
    pub fn new(input: &'a TextInput, focused: bool, palette: Palette) -> Self {
        Self {
            input,
            focused,
            palette,
        }
    }
}

impl Widget for InputField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_width = if self.input.label.is_empty() {
            0
        } else {
            self.input.label.chars().count() as u16 + 2
        };

        if label_width > 0 {
            let label_style = if self.focused {
                Style::default()
                    .fg(self.palette.focus)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.palette.accent)
            };
            let label_line = Line::from(vec![
                Span::styled(self.input.label.as_str(), label_style),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width);
        }

        let input_start = area.x + label_width;
        let input_width = area.width.saturating_sub(label_width) as usize;

        if self.input.content.is_empty() && !self.focused {
            buf.set_stringn(
                input_start,
                area.y,
                &self.input.placeholder,
                input_width,
                Style::default().fg(self.palette.muted),
            );
            return;
        }

        buf.set_stringn(
            input_start,
            area.y,
            &self.input.content,
            input_width,
            Style::default().fg(self.palette.text),
        );

        if self.focused {
            let cursor_x = input_start + self.input.cursor as u16;
            if cursor_x < area.x + area.width {
                let cursor_char = self.input.content.chars().nth(self.input.cursor).unwrap_or(' ');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default()
                        .fg(self.palette.background)
                        .bg(self.palette.focus),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "tea".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "tea");
        input.backspace();
        assert_eq!(input.value(), "te");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new();
        input.set_value("café");
        assert_eq!(input.cursor(), 4);

        input.move_left();
        input.delete();
        assert_eq!(input.value(), "caf");

        input.move_start();
        input.insert('¡');
        assert_eq!(input.value(), "¡caf");
    }

    #[test]
    fn test_clear_resets_cursor() {
        let mut input = TextInput::new();
        input.set_value("x");
        input.clear();
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
    }
}
