use super::*;

impl App {
    pub(in crate::tui_shell) fn new(config: &AppConfig, runtime: Handle) -> Self {
        let ledger: Arc<dyn Ledger> = Arc::new(SimulatedLedger::new(config.settlement.clone()));
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            shell: Shell::new(config),
            ledger,
            runtime,
            completions_tx,
            completions_rx,
            in_flight: 0,
            focus: Focus::Command,
            ts_mode: TimestampMode::Relative,
            activity: ActivityLog::default(),
            last_command: None,
            last_result: None,
            modal: None,
            input: Input::default(),
            suggestions: Vec::new(),
            suggestion_selected: 0,
            quit: false,
        }
    }

    pub(super) fn load(opts: crate::tui::TuiRunOptions, runtime: Handle) -> Self {
        let preconnect = opts
            .identity
            .clone()
            .or_else(|| opts.config.wallet.identity.clone());
        let mut app = App::new(&opts.config, runtime);

        if let Some(raw) = preconnect {
            match Identity::new(raw) {
                Some(identity) => app.connect(identity),
                None => app.push_error("configured identity is empty".to_string()),
            }
        }

        if !app.shell.session().is_connected() {
            app.push_output(vec![
                "Type `connect <public-key>` to begin.".to_string(),
                "(Use `/` to show available commands; `help` for keys.)".to_string(),
            ]);
        }
        app
    }
}
