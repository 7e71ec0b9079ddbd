use super::*;

impl App {
    /// First word on the command line, without the palette's `/`.
    pub(super) fn typed_command(&self) -> &str {
        self.input
            .buf()
            .trim_start()
            .trim_start_matches('/')
            .split_whitespace()
            .next()
            .unwrap_or("")
    }

    /// Rebuilds the palette after the command line changed. A leading `/`
    /// opens it even before anything is typed.
    pub(super) fn recompute_suggestions(&mut self) {
        let opened = self.input.buf().trim_start().starts_with('/');
        let query = self.typed_command().to_lowercase();
        if query.is_empty() && !opened {
            self.suggestions.clear();
        } else {
            let defs = self.available_command_defs();
            self.suggestions = palette_entries(&query, defs, self.primary_hint_commands());
        }
        self.suggestion_selected = self
            .suggestion_selected
            .min(self.suggestions.len().saturating_sub(1));
    }

    pub(super) fn selected_suggestion(&self) -> Option<CommandDef> {
        self.suggestions.get(self.suggestion_selected).copied()
    }

    pub(super) fn cycle_suggestion(&mut self, forward: bool) {
        let n = self.suggestions.len();
        if n == 0 {
            return;
        }
        self.suggestion_selected = if forward {
            (self.suggestion_selected + 1) % n
        } else {
            (self.suggestion_selected + n - 1) % n
        };
    }

    /// Replaces the typed command word with the selected entry, keeping any
    /// arguments already typed.
    pub(super) fn accept_suggestion(&mut self) {
        let Some(def) = self.selected_suggestion() else {
            return;
        };
        let buf = self.input.buf().trim_start();
        let slash = if buf.starts_with('/') { "/" } else { "" };
        let args = buf
            .trim_start_matches('/')
            .trim_start()
            .split_once(char::is_whitespace)
            .map(|(_, rest)| rest.trim_start())
            .unwrap_or("");
        let line = if args.is_empty() {
            format!("{}{} ", slash, def.name)
        } else {
            format!("{}{} {}", slash, def.name, args)
        };
        self.input.set(line);
        self.recompute_suggestions();
    }
}
