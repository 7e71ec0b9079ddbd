use super::*;

pub(in crate::tui_shell) struct App {
    pub(in crate::tui_shell) shell: Shell,
    pub(in crate::tui_shell) ledger: Arc<dyn Ledger>,

    // Settlements run on this runtime and report back over the channel;
    // the event loop drains it every tick.
    pub(in crate::tui_shell) runtime: Handle,
    pub(in crate::tui_shell) completions_tx: mpsc::UnboundedSender<Completion>,
    pub(in crate::tui_shell) completions_rx: mpsc::UnboundedReceiver<Completion>,
    pub(in crate::tui_shell) in_flight: usize,

    pub(in crate::tui_shell) focus: Focus,
    pub(in crate::tui_shell) ts_mode: TimestampMode,

    pub(in crate::tui_shell) activity: ActivityLog,

    pub(in crate::tui_shell) last_command: Option<String>,
    pub(in crate::tui_shell) last_result: Option<ScrollEntry>,

    pub(in crate::tui_shell) modal: Option<Modal>,

    pub(in crate::tui_shell) input: Input,

    pub(in crate::tui_shell) suggestions: Vec<CommandDef>,
    pub(in crate::tui_shell) suggestion_selected: usize,

    pub(in crate::tui_shell) quit: bool,
}
