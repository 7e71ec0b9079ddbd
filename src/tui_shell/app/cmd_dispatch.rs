use crate::workflow::TransferField;

use super::super::commands::resolve;
use super::cmd_line::split_words;

use super::*;

impl App {
    pub(in crate::tui_shell) fn available_command_defs(&self) -> Vec<CommandDef> {
        if self.shell.session().is_connected() {
            connected_command_defs()
        } else {
            disconnected_command_defs()
        }
    }

    /// Commands the input line nudges toward for the current view.
    pub(super) fn primary_hint_commands(&self) -> &'static [&'static str] {
        match self.shell.view() {
            MountedView::Onboarding => &["connect", "help"],
            MountedView::Dashboard(_) => &["transfer", "create", "manage"],
            MountedView::Creator(_) => &["submit", "manage", "dashboard"],
            MountedView::Manager(_) => &["submit", "create", "dashboard"],
        }
    }

    /// Enter on an empty command line.
    pub(super) fn run_default_action(&mut self) {
        if !self.shell.session().is_connected() {
            self.cmd_connect(&[]);
            return;
        }
        if !self.focus_form() {
            self.push_output(vec!["nothing to edit here".to_string()]);
        }
    }

    pub(in crate::tui_shell) fn run_current_input(&mut self) {
        let line = self.input.buf().trim().to_string();
        if line.is_empty() {
            return;
        }
        self.input.remember(&line);
        self.push_command(format!("{} {}", self.prompt(), line));
        self.input.clear();
        self.suggestions.clear();
        self.suggestion_selected = 0;

        let words = match split_words(line.strip_prefix('/').unwrap_or(&line)) {
            Ok(words) => words,
            Err(err) => {
                self.push_error(format!("parse error: {}", err));
                return;
            }
        };
        let Some((first, args)) = words.split_first() else {
            return;
        };

        // Resolve against every command so gated ones explain themselves.
        match resolve(first) {
            Some(def) if def.name == "help" => {
                let available = self.available_command_defs();
                self.cmd_help(&available, args);
            }
            Some(def) => self.dispatch(def.name, args),
            None => self.push_error(format!("unknown command: {}", first)),
        }
    }

    fn dispatch(&mut self, cmd: &str, args: &[String]) {
        match cmd {
            "connect" => self.cmd_connect(args),
            "disconnect" => self.cmd_disconnect(),
            "dashboard" => self.select_tab(Tab::Dashboard),
            "create" => self.select_tab(Tab::Creator),
            "manage" => self.select_tab(Tab::Manager),
            "tab" => {
                let Some(raw) = args.first() else {
                    self.push_error("usage: tab <dashboard|creator|manager>".to_string());
                    return;
                };
                match Tab::parse(raw) {
                    Some(tab) => self.select_tab(tab),
                    None => self.push_error(format!("unknown tab: {}", raw)),
                }
            }
            "submit" => self.submit_active_form(),
            "transfer" => self.cmd_transfer(args),
            "time" => {
                self.ts_mode = self.ts_mode.toggle();
                self.push_output(vec![format!("timestamps: {:?}", self.ts_mode).to_lowercase()]);
            }
            "activity" => self.cmd_activity(args),
            "quit" => self.quit = true,
            _ => self.push_error(format!("unknown command: {}", cmd)),
        }
    }

    pub(in crate::tui_shell) fn prompt(&self) -> String {
        match self.shell.view() {
            MountedView::Onboarding => "offline>".to_string(),
            view => format!("{}>", view.name()),
        }
    }

    pub(in crate::tui_shell) fn connect(&mut self, identity: Identity) {
        let short = identity.short();
        self.shell.connect(identity);
        self.focus = Focus::Command;
        self.push_output(vec![format!("connected as {}", short)]);
    }

    pub(in crate::tui_shell) fn disconnect(&mut self) {
        self.shell.disconnect();
        self.focus = Focus::Command;
        self.push_output(vec!["disconnected".to_string()]);
    }

    pub(in crate::tui_shell) fn select_tab(&mut self, tab: Tab) {
        match self.shell.select_tab(tab) {
            Ok(()) => {
                // The dashboard opens on its panels; the project forms open ready to type.
                if tab == Tab::Dashboard {
                    self.focus = Focus::Command;
                } else {
                    self.focus_form();
                }
                self.push_output(vec![tab.label().to_string()]);
            }
            Err(err) => self.push_error(err.to_string()),
        }
    }

    fn cmd_connect(&mut self, args: &[String]) {
        if let Some(raw) = args.first() {
            match Identity::new(raw.as_str()) {
                Some(identity) => self.connect(identity),
                None => self.push_error("public key must not be empty".to_string()),
            }
            return;
        }
        self.open_modal(Modal::text_input(
            "Connect wallet",
            "public key: ",
            TextInputAction::ConnectIdentity,
            vec![
                "Paste the public key your wallet approved (G...).".to_string(),
                "Nothing is signed; settlement is simulated.".to_string(),
            ],
        ));
    }

    fn cmd_disconnect(&mut self) {
        if !self.shell.session().is_connected() {
            self.push_error("not connected".to_string());
            return;
        }
        if self.in_flight > 0 {
            self.open_modal(Modal::confirm(
                "Disconnect",
                PendingAction::Disconnect,
                vec![
                    format!("{} settlement(s) still pending.", self.in_flight),
                    "Their forms close; the ledger still settles them.".to_string(),
                ],
            ));
            return;
        }
        self.disconnect();
    }

    fn cmd_transfer(&mut self, args: &[String]) {
        if !self.shell.session().is_connected() {
            self.push_error(crate::session::SessionError::NotConnected.to_string());
            return;
        }
        self.select_tab(Tab::Dashboard);
        let MountedView::Dashboard(d) = self.shell.view_mut() else {
            return;
        };
        let form = d.transfer_mut();
        if let Some(code) = args.first() {
            form.field_mut(TransferField::Code).set(code);
        }
        if let Some(to) = args.get(1) {
            form.field_mut(TransferField::Destination).set(to);
        }
        if args.len() >= 2 {
            self.submit_active_form();
        } else {
            self.focus_form();
        }
    }

    pub(in crate::tui_shell) fn submit_text_input(&mut self, action: TextInputAction, value: String) {
        match action {
            TextInputAction::ConnectIdentity => self.cmd_connect(&[value]),
        }
    }

    pub(in crate::tui_shell) fn execute_action_confirmed(&mut self, action: PendingAction) {
        match action {
            PendingAction::Disconnect => self.disconnect(),
        }
    }

    fn cmd_help(&mut self, defs: &[CommandDef], args: &[String]) {
        if args.is_empty() {
            let mut lines = Vec::new();
            lines.push("Commands:".to_string());
            let mut defs = defs.to_vec();
            defs.sort_by(|a, b| a.name.cmp(b.name));
            for d in defs {
                lines.push(format!("- {:<10} {}", d.name, d.help));
            }
            lines.push("".to_string());
            lines.push("Keys:".to_string());
            lines.push("- F1/F2/F3 select Dashboard, Project Creator, Project Manager.".to_string());
            lines.push("- Tab (empty input) edits the form; Esc returns here.".to_string());
            lines.push("- In a form: Tab/Shift+Tab move fields; Enter submits.".to_string());
            lines.push("- With suggestions open: Up/Down selects; Tab accepts.".to_string());
            lines.push("- History: Up/Down (palette closed) or Ctrl+p / Ctrl+n.".to_string());
            lines.push("- In this window: Up/Down/PageUp/PageDown scroll.".to_string());
            lines.push("- `/` shows available commands in this view.".to_string());
            self.open_modal(Modal::viewer("Help", lines));
            return;
        }

        let Some(d) = resolve(&args[0]) else {
            self.push_error(format!("unknown command: {}", args[0]));
            return;
        };

        let mut lines = vec![
            format!("{} - {}", d.name, d.help),
            "".to_string(),
            format!("usage: {}", d.usage),
        ];
        if !d.aliases.is_empty() {
            lines.push(format!("aliases: {}", d.aliases.join(", ")));
        }
        self.open_modal(Modal::viewer("Help", lines));
    }
}
