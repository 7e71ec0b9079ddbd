#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum TimestampMode {
    Relative,
    Absolute,
}

impl TimestampMode {
    pub(in crate::tui_shell) fn toggle(self) -> Self {
        match self {
            TimestampMode::Relative => TimestampMode::Absolute,
            TimestampMode::Absolute => TimestampMode::Relative,
        }
    }
}

/// Where keystrokes go: the command line, or the mounted view's form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(in crate::tui_shell) enum Focus {
    #[default]
    Command,
    Form,
}
