use crossterm::event::KeyCode;

use super::Input;

const PAGE: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum TextInputAction {
    ConnectIdentity,
}

/// Actions that ask for confirmation before running.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum PendingAction {
    Disconnect,
}

#[derive(Clone, Debug)]
pub(in crate::tui_shell) enum ModalKind {
    /// Read-only text: help and the activity log.
    Viewer,
    TextInput {
        action: TextInputAction,
        prompt: String,
    },
    ConfirmAction {
        action: PendingAction,
    },
}

#[derive(Debug)]
pub(in crate::tui_shell) struct Modal {
    pub(in crate::tui_shell) title: String,
    pub(in crate::tui_shell) lines: Vec<String>,
    pub(in crate::tui_shell) scroll: usize,
    pub(in crate::tui_shell) kind: ModalKind,
    pub(in crate::tui_shell) input: Input,
}

impl Modal {
    fn new(title: impl Into<String>, lines: Vec<String>, kind: ModalKind) -> Self {
        Self {
            title: title.into(),
            lines,
            scroll: 0,
            kind,
            input: Input::default(),
        }
    }

    pub(in crate::tui_shell) fn viewer(title: impl Into<String>, lines: Vec<String>) -> Self {
        Self::new(title, lines, ModalKind::Viewer)
    }

    pub(in crate::tui_shell) fn confirm(
        title: impl Into<String>,
        action: PendingAction,
        mut lines: Vec<String>,
    ) -> Self {
        lines.push(String::new());
        lines.push("Enter to confirm; Esc to cancel.".to_string());
        Self::new(title, lines, ModalKind::ConfirmAction { action })
    }

    pub(in crate::tui_shell) fn text_input(
        title: impl Into<String>,
        prompt: impl Into<String>,
        action: TextInputAction,
        mut lines: Vec<String>,
    ) -> Self {
        lines.push(String::new());
        lines.push("Enter to continue; Esc to cancel.".to_string());
        let kind = ModalKind::TextInput {
            action,
            prompt: prompt.into(),
        };
        Self::new(title, lines, kind)
    }

    /// Scrolls for arrow and page keys; other keys are ignored.
    pub(in crate::tui_shell) fn scroll_key(&mut self, code: KeyCode) {
        let last = self.lines.len().saturating_sub(1);
        self.scroll = match code {
            KeyCode::Up => self.scroll.saturating_sub(1),
            KeyCode::Down => (self.scroll + 1).min(last),
            KeyCode::PageUp => self.scroll.saturating_sub(PAGE),
            KeyCode::PageDown => (self.scroll + PAGE).min(last),
            KeyCode::Home => 0,
            KeyCode::End => last,
            _ => self.scroll,
        };
    }

    /// Shows one validation error under the body, replacing any earlier one.
    pub(in crate::tui_shell) fn show_error(&mut self, msg: &str) {
        self.lines.retain(|l| !l.starts_with("error:"));
        self.lines.push(format!("error: {}", msg));
    }
}
