//! # Text area component
//!
//! The in-memory text being edited, stored as a vector of lines with a
//! cursor. The session controller only ever reads and replaces the text
//! wholesale; the line structure exists for interactive editing and
//! rendering.
//!
//! Cursor columns count characters, not bytes. Every mutation maps the
//! column to a byte offset first, so multibyte input never lands inside
//! a character.

/// Editable text content with a (row, column) cursor.
#[derive(Debug, Clone)]
pub struct TextArea {
    pub content: Vec<String>,
    pub cursor_pos: (usize, usize),
    pub modified: bool,
}

/// Byte offset of the `col`-th character of `line`; the end of the line
/// when `col` is past the last character.
fn byte_offset(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(i, _)| i)
        .unwrap_or(line.len())
}

fn char_len(line: &str) -> usize {
    line.chars().count()
}

impl Default for TextArea {
    fn default() -> Self {
        Self::new()
    }
}

impl TextArea {
    pub fn new() -> Self {
        Self {
            content: vec![String::new()],
            cursor_pos: (0, 0),
            modified: false,
        }
    }

    /// The whole buffer as one string, lines joined by newline.
    pub fn text(&self) -> String {
        let total: usize = self.content.iter().map(|line| line.len() + 1).sum();
        let mut result = String::with_capacity(total.saturating_sub(1));

        for (i, line) in self.content.iter().enumerate() {
            result.push_str(line);
            if i < self.content.len() - 1 {
                result.push('\n');
            }
        }

        result
    }

    /// Replaces the whole buffer, resetting the cursor and the modified
    /// flag.
    pub fn set_text(&mut self, text: &str) {
        self.content = text.split('\n').map(str::to_string).collect();
        if self.content.is_empty() {
            self.content.push(String::new());
        }
        self.cursor_pos = (0, 0);
        self.modified = false;
    }

    pub fn insert_char(&mut self, c: char) {
        let (row, col) = self.cursor_pos;
        if row >= self.content.len() {
            self.content.push(String::new());
        }

        let line = &mut self.content[row];
        let len = char_len(line);
        if col > len {
            line.push_str(&" ".repeat(col - len));
        }

        let at = byte_offset(line, col);
        line.insert(at, c);
        self.cursor_pos.1 += 1;
        self.modified = true;
    }

    pub fn insert_newline(&mut self) {
        let (row, col) = self.cursor_pos;
        if row >= self.content.len() {
            self.content.push(String::new());
            self.cursor_pos = (row + 1, 0);
            return;
        }

        if col < char_len(&self.content[row]) {
            let at = byte_offset(&self.content[row], col);
            let remainder = self.content[row].split_off(at);
            self.content.insert(row + 1, remainder);
        } else {
            self.content.insert(row + 1, String::new());
        }

        self.cursor_pos = (row + 1, 0);
        self.modified = true;
    }

    pub fn backspace(&mut self) {
        let (row, col) = self.cursor_pos;
        if col > 0 {
            let at = byte_offset(&self.content[row], col - 1);
            self.content[row].remove(at);
            self.cursor_pos.1 -= 1;
            self.modified = true;
        } else if row > 0 {
            let current = self.content.remove(row);
            let prev = &mut self.content[row - 1];
            let joined_at = char_len(prev);
            prev.push_str(&current);
            self.cursor_pos = (row - 1, joined_at);
            self.modified = true;
        }
    }

    pub fn delete(&mut self) {
        let (row, col) = self.cursor_pos;
        if row >= self.content.len() {
            return;
        }

        if col < char_len(&self.content[row]) {
            let at = byte_offset(&self.content[row], col);
            self.content[row].remove(at);
            self.modified = true;
        } else if row + 1 < self.content.len() {
            let next = self.content.remove(row + 1);
            self.content[row].push_str(&next);
            self.modified = true;
        }
    }

    pub fn move_cursor(&mut self, movement: CursorMovement) {
        let (mut row, mut col) = self.cursor_pos;

        match movement {
            CursorMovement::Up => {
                if row > 0 {
                    row -= 1;
                    col = col.min(char_len(&self.content[row]));
                }
            }
            CursorMovement::Down => {
                if row + 1 < self.content.len() {
                    row += 1;
                    col = col.min(char_len(&self.content[row]));
                }
            }
            CursorMovement::Left => {
                if col > 0 {
                    col -= 1;
                } else if row > 0 {
                    row -= 1;
                    col = char_len(&self.content[row]);
                }
            }
            CursorMovement::Right => {
                if col < char_len(&self.content[row]) {
                    col += 1;
                } else if row + 1 < self.content.len() {
                    row += 1;
                    col = 0;
                }
            }
            CursorMovement::LineStart => {
                col = 0;
            }
            CursorMovement::LineEnd => {
                col = char_len(&self.content[row]);
            }
            CursorMovement::PageUp => {
                let page = 8;
                row = row.saturating_sub(page);
                col = col.min(char_len(&self.content[row]));
            }
            CursorMovement::PageDown => {
                let page = 8;
                row = (row + page).min(self.content.len() - 1);
                col = col.min(char_len(&self.content[row]));
            }
        }

        self.cursor_pos = (row, col);
    }
}

pub enum CursorMovement {
    Up,
    Down,
    Left,
    Right,
    LineStart,
    LineEnd,
    PageUp,
    PageDown,
}
