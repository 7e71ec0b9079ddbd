use crossterm::event::{KeyCode, KeyEvent};

use super::{App, Modal, ModalKind, TextInputAction};

mod draw;

pub(super) use self::draw::draw_modal;

/// Why a typed value cannot be submitted yet.
fn rejection(action: &TextInputAction, value: &str) -> Option<&'static str> {
    match action {
        TextInputAction::ConnectIdentity if value.is_empty() => Some("a public key is required"),
        TextInputAction::ConnectIdentity if value.chars().any(char::is_whitespace) => {
            Some("public key cannot contain spaces")
        }
        TextInputAction::ConnectIdentity => None,
    }
}

pub(super) fn handle_modal_key(app: &mut App, key: KeyEvent) {
    let Some(modal) = app.modal.as_mut() else {
        return;
    };
    if key.code == KeyCode::Esc {
        app.close_modal();
        return;
    }

    match modal.kind.clone() {
        ModalKind::Viewer if key.code == KeyCode::Enter => app.close_modal(),
        ModalKind::Viewer => modal.scroll_key(key.code),

        ModalKind::ConfirmAction { action } if key.code == KeyCode::Enter => {
            app.close_modal();
            app.execute_action_confirmed(action);
        }
        ModalKind::ConfirmAction { .. } => modal.scroll_key(key.code),

        ModalKind::TextInput { action, .. } if key.code == KeyCode::Enter => {
            let value = modal.input.buf().trim().to_string();
            match rejection(&action, &value) {
                Some(problem) => modal.show_error(problem),
                None => {
                    app.close_modal();
                    app.submit_text_input(action, value);
                }
            }
        }
        ModalKind::TextInput { .. } => {
            modal.input.edit(key);
        }
    }
}

impl App {
    pub(in crate::tui_shell) fn open_modal(&mut self, modal: Modal) {
        self.modal = Some(modal);
    }

    pub(in crate::tui_shell) fn close_modal(&mut self) {
        self.modal = None;
    }
}
