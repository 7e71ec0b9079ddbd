//! Root shell: owns the [`Session`], mounts the view for the active tab, and
//! routes settlements back to the form that submitted them.
//!
//! Switching tabs (or connecting/disconnecting) unmounts the current view. A
//! settlement that arrives for an unmounted view is dropped.

use crate::ledger::{CreateAsset, Ledger, Transfer, UpdateMetadata};
use crate::model::{AppConfig, Identity};
use crate::session::{ActiveView, Session, SessionError, Tab};
use crate::workflow::{
    Pending, ProjectCreator, ProjectManager, Settlement, SubmissionState, SubmitError, TextField,
    Ticket,
};

mod dashboard;

pub use self::dashboard::{Dashboard, Panel};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MountId(u64);

#[derive(Debug)]
pub enum MountedView {
    Onboarding,
    Dashboard(Box<Dashboard>),
    Creator(ProjectCreator),
    Manager(ProjectManager),
}

impl MountedView {
    pub fn name(&self) -> &'static str {
        match self {
            MountedView::Onboarding => "onboarding",
            MountedView::Dashboard(_) => "dashboard",
            MountedView::Creator(_) => "creator",
            MountedView::Manager(_) => "manager",
        }
    }

    pub fn has_form(&self) -> bool {
        !matches!(self, MountedView::Onboarding)
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self {
            MountedView::Onboarding => None,
            MountedView::Dashboard(d) => Some(d.transfer_mut().focused_mut()),
            MountedView::Creator(f) => Some(f.focused_mut()),
            MountedView::Manager(f) => Some(f.focused_mut()),
        }
    }

    pub fn focus_next(&mut self) {
        match self {
            MountedView::Onboarding => {}
            MountedView::Dashboard(d) => d.transfer_mut().focus_next(),
            MountedView::Creator(f) => f.focus_next(),
            MountedView::Manager(f) => f.focus_next(),
        }
    }

    pub fn focus_prev(&mut self) {
        match self {
            MountedView::Onboarding => {}
            MountedView::Dashboard(d) => d.transfer_mut().focus_prev(),
            MountedView::Creator(f) => f.focus_prev(),
            MountedView::Manager(f) => f.focus_prev(),
        }
    }

    pub fn submission_state(&self) -> Option<&SubmissionState> {
        match self {
            MountedView::Onboarding => None,
            MountedView::Dashboard(d) => Some(d.transfer().state()),
            MountedView::Creator(f) => Some(f.state()),
            MountedView::Manager(f) => Some(f.state()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpKind {
    Create,
    Update,
    Transfer,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PendingOp {
    Create(Pending<CreateAsset>),
    Update(Pending<UpdateMetadata>),
    Transfer(Pending<Transfer>),
}

/// A form submission tagged with the view that issued it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub mount: MountId,
    pub op: PendingOp,
}

impl Submission {
    pub fn kind(&self) -> OpKind {
        match self.op {
            PendingOp::Create(_) => OpKind::Create,
            PendingOp::Update(_) => OpKind::Update,
            PendingOp::Transfer(_) => OpKind::Transfer,
        }
    }

    /// Sends the request to the ledger and waits for it to settle.
    pub async fn run(self, ledger: &dyn Ledger) -> Completion {
        let kind = self.kind();
        let (ticket, outcome) = match self.op {
            PendingOp::Create(p) => (p.ticket, ledger.create_asset(p.request).await),
            PendingOp::Update(p) => (p.ticket, ledger.update_metadata(p.request).await),
            PendingOp::Transfer(p) => (p.ticket, ledger.transfer(p.request).await),
        };
        Completion {
            mount: self.mount,
            kind,
            ticket,
            outcome,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Completion {
    pub mount: MountId,
    pub kind: OpKind,
    pub ticket: Ticket,
    pub outcome: Settlement,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionStatus {
    Applied { refreshed: bool },
    /// The issuing form is gone. A successful transfer still refreshes the
    /// dashboard panels.
    Dropped { refreshed: bool },
}

pub struct Shell {
    session: Session,
    view: MountedView,
    mount: MountId,

    creator_max_len: Option<usize>,
    manager_max_len: Option<usize>,
    history_limit: usize,
}

impl Shell {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            session: Session::new(),
            view: MountedView::Onboarding,
            mount: MountId(0),
            creator_max_len: config.asset_code.creator_max_len,
            manager_max_len: config.asset_code.manager_max_len,
            history_limit: config.history_limit,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn view(&self) -> &MountedView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut MountedView {
        &mut self.view
    }

    pub fn connect(&mut self, identity: Identity) {
        self.session.connect(identity);
        self.remount();
    }

    pub fn disconnect(&mut self) {
        self.session.disconnect();
        self.remount();
    }

    /// Selecting the tab that is already active keeps the mounted view.
    pub fn select_tab(&mut self, tab: Tab) -> Result<(), SessionError> {
        let before = self.session.tab();
        self.session.select_tab(tab)?;
        if before != tab {
            self.remount();
        }
        Ok(())
    }

    fn remount(&mut self) {
        self.mount = MountId(self.mount.0 + 1);
        self.view = match (self.session.active_view(), self.session.identity()) {
            (ActiveView::Dashboard, Some(identity)) => {
                MountedView::Dashboard(Box::new(Dashboard::new(identity.clone())))
            }
            (ActiveView::Creator, _) => MountedView::Creator(ProjectCreator::new(self.creator_max_len)),
            (ActiveView::Manager, _) => MountedView::Manager(ProjectManager::new(self.manager_max_len)),
            _ => MountedView::Onboarding,
        };
        tracing::debug!(view = self.view.name(), mount = self.mount.0, "view mounted");
    }

    /// Submits the active view's form.
    pub fn submit(&mut self) -> Result<Submission, SubmitError> {
        let identity = self
            .session
            .identity()
            .cloned()
            .ok_or(SubmitError::NotConnected)?;
        let op = match &mut self.view {
            MountedView::Creator(f) => PendingOp::Create(f.begin_submit(&identity)?),
            MountedView::Manager(f) => PendingOp::Update(f.begin_submit(&identity)?),
            MountedView::Dashboard(d) => PendingOp::Transfer(d.transfer_mut().begin_submit(&identity)?),
            MountedView::Onboarding => return Err(SubmitError::NoForm("onboarding")),
        };
        Ok(Submission {
            mount: self.mount,
            op,
        })
    }

    pub fn complete(&mut self, c: Completion) -> CompletionStatus {
        match &c.outcome {
            Ok(receipt) => tracing::info!(kind = ?c.kind, receipt = %receipt.id, "settled"),
            Err(err) => tracing::warn!(kind = ?c.kind, error = %err, "settlement failed"),
        }
        // Every successful transfer bumps the refresh signal, mounted form or not.
        let refreshed = c.kind == OpKind::Transfer && c.outcome.is_ok();
        if refreshed {
            self.session.transfer_succeeded();
        }
        if c.mount != self.mount {
            tracing::debug!(kind = ?c.kind, "settlement for unmounted view dropped");
            return CompletionStatus::Dropped { refreshed };
        }
        let applied = match (&mut self.view, c.kind) {
            (MountedView::Creator(f), OpKind::Create) => f.complete(c.ticket, &c.outcome),
            (MountedView::Manager(f), OpKind::Update) => f.complete(c.ticket, &c.outcome),
            (MountedView::Dashboard(d), OpKind::Transfer) => {
                d.transfer_mut().complete(c.ticket, &c.outcome)
            }
            _ => false,
        };
        if applied {
            CompletionStatus::Applied { refreshed }
        } else {
            CompletionStatus::Dropped { refreshed }
        }
    }

    /// Reloads dashboard panels whose refresh key is out of date.
    pub fn sync_panels(&mut self, ledger: &dyn Ledger) -> bool {
        let key = self.session.refresh().value();
        match &mut self.view {
            MountedView::Dashboard(d) => d.sync(key, ledger, self.history_limit),
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "tests/shell/shell_tests.rs"]
mod tests;
