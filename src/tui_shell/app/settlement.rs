use crate::shell::{OpKind, Submission};

use super::*;

fn op_label(kind: OpKind) -> &'static str {
    match kind {
        OpKind::Create => "create",
        OpKind::Update => "update",
        OpKind::Transfer => "transfer",
    }
}

fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}

impl App {
    pub(in crate::tui_shell) fn submit_active_form(&mut self) {
        match self.shell.submit() {
            Ok(submission) => self.spawn_settlement(submission),
            Err(err) => self.push_error(format!("submit: {}", err)),
        }
    }

    fn spawn_settlement(&mut self, submission: Submission) {
        let label = op_label(submission.kind());
        let ledger = Arc::clone(&self.ledger);
        let tx = self.completions_tx.clone();
        self.in_flight += 1;
        self.runtime.spawn(async move {
            let completion = submission.run(ledger.as_ref()).await;
            // Send fails only once the app is gone.
            let _ = tx.send(completion);
        });
        self.push_output(vec![format!("{}: submitted, settling...", label)]);
    }

    /// Applies finished settlements and reloads stale dashboard panels.
    pub(in crate::tui_shell) fn tick(&mut self) {
        self.drain_completions();
        self.shell.sync_panels(self.ledger.as_ref());
    }

    fn drain_completions(&mut self) {
        while let Ok(completion) = self.completions_rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            let label = op_label(completion.kind);
            let outcome = completion.outcome.clone();
            match (self.shell.complete(completion), outcome) {
                (CompletionStatus::Dropped { refreshed }, _) => {
                    let mut lines = vec![format!(
                        "{}: settled after its view closed; result dropped",
                        label
                    )];
                    if refreshed {
                        lines.push("balance and history refreshed".to_string());
                    }
                    self.push_output(lines);
                }
                (CompletionStatus::Applied { refreshed }, Ok(receipt)) => {
                    let mut lines = vec![format!(
                        "{}: {} settled (receipt {})",
                        label,
                        receipt.code,
                        short_id(&receipt.id)
                    )];
                    if refreshed {
                        lines.push("balance and history refreshed".to_string());
                    }
                    self.push_output(lines);
                }
                (CompletionStatus::Applied { .. }, Err(err)) => {
                    self.push_error(format!("{}: {}", label, err));
                }
            }
        }
    }
}
