//! Single-line text input field.

/// State for a text input field. The cursor is a character index, so
/// multi-byte input (ticker names pasted with accents, question text)
/// cannot split a UTF-8 boundary.
#[derive(Clone, Debug, Default)]
pub struct TextInput {
    content: String,
    /// Cursor position as a character index.
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    fn byte_at(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map_or(self.content.len(), |(i, _)| i)
    }

    /// Inserts a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        let at = self.byte_at(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_at(self.cursor);
            self.content.remove(at);
        }
    }

    /// Deletes the character at the cursor position.
    pub fn delete(&mut self) {
        if self.cursor < self.content.chars().count() {
            let at = self.byte_at(self.cursor);
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

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.chars().count();
    }

    /// Takes the content and resets the input.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.content)
    }

    /// Replaces the content and moves the cursor to the end.
    pub fn set(&mut self, text: impl Into<String>) {
        self.content = text.into();
        self.move_end();
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace() {
        let mut input = TextInput::new();
        for c in "AAPL".chars() {
            input.insert(c);
        }
        input.backspace();
        assert_eq!(input.as_str(), "AAP");
        assert_eq!(input.cursor, 3);
    }

    #[test]
    fn cursor_counts_characters_not_bytes() {
        let mut input = TextInput::new();
        input.insert('é');
        input.insert('x');
        input.move_left();
        input.backspace();
        assert_eq!(input.as_str(), "x");
    }

    #[test]
    fn take_resets_state() {
        let mut input = TextInput::new();
        input.set("hello");
        assert_eq!(input.take(), "hello");
        assert!(input.is_empty());
        assert_eq!(input.cursor, 0);
    }
}
