/// Input shaping applied on every edit, not at submit time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldShape {
    pub uppercase: bool,
    pub max_len: Option<usize>,
}

impl FieldShape {
    pub const PLAIN: FieldShape = FieldShape {
        uppercase: false,
        max_len: None,
    };

    pub fn code(max_len: Option<usize>) -> Self {
        Self {
            uppercase: true,
            max_len,
        }
    }

    /// Uppercase first, then clamp, so the clamp counts the stored characters.
    pub fn apply(&self, raw: &str) -> String {
        let s = if self.uppercase {
            raw.to_uppercase()
        } else {
            raw.to_string()
        };
        match self.max_len {
            Some(n) => s.chars().take(n).collect(),
            None => s,
        }
    }
}

/// Single-line text value with a char-indexed cursor.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor: usize,
    shape: FieldShape,
}

impl TextField {
    pub fn new(shape: FieldShape) -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            shape,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn shape(&self) -> FieldShape {
        self.shape
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_at(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Replaces the whole value, as a paste or programmatic fill would.
    pub fn set(&mut self, raw: &str) {
        self.value = self.shape.apply(raw);
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_at(self.cursor);
        let mut prefix = self.value[..at].to_string();
        prefix.push(c);
        let suffix = &self.value[at..];

        let shaped = self.shape.apply(&format!("{}{}", prefix, suffix));
        let cursor = self.shape.apply(&prefix).chars().count();
        self.value = shaped;
        self.cursor = cursor.min(self.len());
    }

    pub fn type_str(&mut self, s: &str) {
        for c in s.chars() {
            self.insert_char(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_at(self.cursor);
        self.value.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.len() {
            return;
        }
        let at = self.byte_at(self.cursor);
        self.value.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }
}

#[cfg(test)]
#[path = "../tests/workflow/field_tests.rs"]
mod tests;
