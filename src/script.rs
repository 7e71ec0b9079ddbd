//! Headless scenario runner: replays a JSON list of steps against a fresh
//! shell and simulated ledger.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::ledger::{Ledger, SimulatedLedger};
use crate::model::{AppConfig, Identity};
use crate::session::Tab;
use crate::shell::{CompletionStatus, MountedView, Shell};
use crate::workflow::{CreatorField, ManagerField, Phase, TextField, TransferField};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    Connect {
        identity: String,
    },
    Disconnect,
    Tab {
        tab: Tab,
    },
    Create {
        code: String,
        url: String,
    },
    Update {
        code: String,
        version: String,
        notes: String,
    },
    Transfer {
        code: String,
        to: String,
    },
}

impl Step {
    pub fn name(&self) -> &'static str {
        match self {
            Step::Connect { .. } => "connect",
            Step::Disconnect => "disconnect",
            Step::Tab { .. } => "tab",
            Step::Create { .. } => "create",
            Step::Update { .. } => "update",
            Step::Transfer { .. } => "transfer",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub index: usize,
    pub step: &'static str,
    pub ok: bool,
    pub detail: String,
    pub tab: Tab,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
    pub refresh: u64,
}

pub fn load_script(path: &Path) -> Result<Vec<Step>> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parse {}", path.display()))
}

pub async fn run_script(steps: &[Step], config: &AppConfig) -> Vec<StepReport> {
    let ledger = SimulatedLedger::new(config.settlement.clone());
    let mut shell = Shell::new(config);

    let mut reports = Vec::with_capacity(steps.len());
    for (index, step) in steps.iter().enumerate() {
        let result = run_step(&mut shell, &ledger, step).await;
        shell.sync_panels(&ledger);
        let (ok, detail) = match result {
            Ok(detail) => (true, detail),
            Err(err) => (false, format!("{:#}", err)),
        };
        tracing::debug!(index, step = step.name(), ok, detail = %detail, "script step");
        reports.push(StepReport {
            index,
            step: step.name(),
            ok,
            detail,
            tab: shell.session().tab(),
            identity: shell.session().identity().map(|i| i.to_string()),
            refresh: shell.session().refresh().value(),
        });
    }
    reports
}

async fn run_step(shell: &mut Shell, ledger: &dyn Ledger, step: &Step) -> Result<String> {
    match step {
        Step::Connect { identity } => {
            let identity =
                Identity::new(identity.as_str()).context("identity must not be empty")?;
            shell.connect(identity.clone());
            Ok(format!("connected as {}", identity))
        }
        Step::Disconnect => {
            shell.disconnect();
            Ok("disconnected".to_string())
        }
        Step::Tab { tab } => {
            shell.select_tab(*tab)?;
            Ok(format!("tab {}", tab.label()))
        }
        Step::Create { code, url } => {
            shell.select_tab(Tab::Creator)?;
            if let MountedView::Creator(f) = shell.view_mut() {
                fill(f.field_mut(CreatorField::Code), code);
                fill(f.field_mut(CreatorField::Url), url);
            }
            settle(shell, ledger).await
        }
        Step::Update {
            code,
            version,
            notes,
        } => {
            shell.select_tab(Tab::Manager)?;
            if let MountedView::Manager(f) = shell.view_mut() {
                fill(f.field_mut(ManagerField::Code), code);
                fill(f.field_mut(ManagerField::Version), version);
                fill(f.field_mut(ManagerField::Notes), notes);
            }
            settle(shell, ledger).await
        }
        Step::Transfer { code, to } => {
            shell.select_tab(Tab::Dashboard)?;
            if let MountedView::Dashboard(d) = shell.view_mut() {
                let form = d.transfer_mut();
                fill(form.field_mut(TransferField::Code), code);
                fill(form.field_mut(TransferField::Destination), to);
            }
            settle(shell, ledger).await
        }
    }
}

async fn settle(shell: &mut Shell, ledger: &dyn Ledger) -> Result<String> {
    let submission = shell.submit()?;
    let completion = submission.run(ledger).await;
    let outcome = completion.outcome.clone();
    let status = shell.complete(completion);

    let phase = shell
        .view()
        .submission_state()
        .map(|s| s.phase())
        .unwrap_or_default();
    match (outcome, status) {
        (Ok(receipt), CompletionStatus::Applied { .. }) if phase == Phase::Success => {
            Ok(format!("{} settled (receipt {})", receipt.code, short_id(&receipt.id)))
        }
        (Ok(receipt), _) => Ok(format!("{} settled", receipt.code)),
        (Err(err), _) => Err(err.into()),
    }
}

/// Replaces a field's value keystroke by keystroke so input shaping applies.
fn fill(field: &mut TextField, text: &str) {
    field.clear();
    field.type_str(text);
}

fn short_id(id: &str) -> String {
    id.chars().take(8).collect()
}
