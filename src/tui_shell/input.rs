use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::workflow::{FieldShape, TextField};

/// Applies a line-editing key to `field`. Returns false when the key is not
/// an edit, so callers can give it another meaning.
pub(super) fn edit_text(field: &mut TextField, key: KeyEvent) -> bool {
    let plain = !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match key.code {
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        KeyCode::Char(c) if plain => field.insert_char(c),
        _ => return false,
    }
    true
}

/// Command line: an unshaped text field plus submitted-line history.
#[derive(Debug)]
pub(super) struct Input {
    field: TextField,
    history: Vec<String>,
    recall: Option<usize>,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            field: TextField::new(FieldShape::PLAIN),
            history: Vec::new(),
            recall: None,
        }
    }
}

impl Input {
    pub(super) fn buf(&self) -> &str {
        self.field.value()
    }

    pub(super) fn cursor(&self) -> usize {
        self.field.cursor()
    }

    pub(super) fn is_empty(&self) -> bool {
        self.field.value().is_empty()
    }

    pub(super) fn clear(&mut self) {
        self.field.clear();
        self.recall = None;
    }

    pub(super) fn set(&mut self, s: String) {
        self.field.set(&s);
    }

    pub(super) fn edit(&mut self, key: KeyEvent) -> bool {
        edit_text(&mut self.field, key)
    }

    /// Remembers a submitted line, skipping blanks and immediate repeats.
    pub(super) fn remember(&mut self, line: &str) {
        let line = line.trim();
        self.recall = None;
        if line.is_empty() || self.history.last().is_some_and(|last| last == line) {
            return;
        }
        self.history.push(line.to_string());
    }

    /// Steps back through history; stops at the oldest line.
    pub(super) fn recall_older(&mut self) {
        let Some(newest) = self.history.len().checked_sub(1) else {
            return;
        };
        let at = self.recall.map_or(newest, |i| i.saturating_sub(1));
        self.recall = Some(at);
        self.field.set(&self.history[at]);
    }

    /// Steps forward; moving past the newest line leaves an empty prompt.
    pub(super) fn recall_newer(&mut self) {
        let Some(i) = self.recall else {
            return;
        };
        match self.history.get(i + 1) {
            Some(line) => {
                let line = line.clone();
                self.recall = Some(i + 1);
                self.field.set(&line);
            }
            None => self.clear(),
        }
    }
}
