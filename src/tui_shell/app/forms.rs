use super::*;

impl App {
    /// Moves keystrokes to the mounted view's form. Returns false when the
    /// view has none.
    pub(in crate::tui_shell) fn focus_form(&mut self) -> bool {
        self.focus = if self.shell.view().has_form() {
            Focus::Form
        } else {
            Focus::Command
        };
        self.focus == Focus::Form
    }
}

pub(super) fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.focus = Focus::Command,
        KeyCode::Tab => app.shell.view_mut().focus_next(),
        KeyCode::BackTab => app.shell.view_mut().focus_prev(),
        KeyCode::Enter => app.submit_active_form(),
        _ => match app.shell.view_mut().focused_field_mut() {
            Some(field) => {
                edit_text(field, key);
            }
            None => app.focus = Focus::Command,
        },
    }
}
