use super::*;

impl App {
    fn record(&mut self, kind: EntryKind, lines: Vec<String>) -> ScrollEntry {
        let entry = ScrollEntry {
            ts: now_ts(),
            kind,
            lines,
        };
        self.activity.push(entry.clone());
        entry
    }

    pub(super) fn push_command(&mut self, line: String) {
        self.last_command = Some(line.clone());
        self.record(EntryKind::Command, vec![line]);
    }

    pub(in crate::tui_shell) fn push_output(&mut self, lines: Vec<String>) {
        tracing::debug!(output = %lines.join(" / "), "ui output");
        self.last_result = Some(self.record(EntryKind::Output, lines));
    }

    pub(in crate::tui_shell) fn push_error(&mut self, msg: String) {
        tracing::warn!(error = %msg, "ui error");
        self.last_result = Some(self.record(EntryKind::Error, vec![msg]));
    }

    /// `activity` opens the session log, newest first; `activity clear`
    /// empties it.
    pub(super) fn cmd_activity(&mut self, args: &[String]) {
        match args.first().map(String::as_str) {
            None => {}
            Some("clear") => {
                self.activity.clear();
                self.push_output(vec!["activity cleared".to_string()]);
                return;
            }
            Some(other) => {
                self.push_error(format!("usage: activity [clear] (got {})", other));
                return;
            }
        }

        let ctx = RenderCtx {
            now: OffsetDateTime::now_utc(),
            ts_mode: self.ts_mode,
        };
        let mut lines = Vec::new();
        for entry in self.activity.entries().rev() {
            let mark = match entry.kind {
                EntryKind::Command => ">",
                EntryKind::Output => " ",
                EntryKind::Error => "!",
            };
            let when = fmt_ts_list(&entry.ts, &ctx);
            for (i, line) in entry.lines.iter().enumerate() {
                if i == 0 {
                    lines.push(format!("{:<20} {} {}", when, mark, line));
                } else {
                    lines.push(format!("{:<20}   {}", "", line));
                }
            }
        }
        if lines.is_empty() {
            lines.push("(no activity yet)".to_string());
        }
        let title = format!("Activity ({} entries)", self.activity.len());
        self.open_modal(Modal::viewer(title, lines));
    }
}
