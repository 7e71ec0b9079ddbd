use serde::Serialize;

use crate::ledger::LedgerError;
use crate::model::Receipt;

use super::SubmitError;

pub type Settlement = Result<Receipt, LedgerError>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Idle,
    Success,
    Error,
}

/// Identifies one submission of one form. Settlements carrying an older
/// ticket are ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

/// A submitted request waiting to be sent to the ledger.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pending<R> {
    pub ticket: Ticket,
    pub request: R,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionState {
    phase: Phase,
    busy: bool,
    message: Option<String>,
    issued: u64,
}

impl SubmissionState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn busy(&self) -> bool {
        self.busy
    }

    /// Receipt id on success, error text on failure.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn begin(&mut self) -> Result<Ticket, SubmitError> {
        if self.busy {
            return Err(SubmitError::Busy);
        }
        self.busy = true;
        self.phase = Phase::Idle;
        self.message = None;
        self.issued += 1;
        Ok(Ticket(self.issued))
    }

    /// Returns false when the settlement is stale or nothing is in flight.
    pub fn settle(&mut self, ticket: Ticket, outcome: &Settlement) -> bool {
        if !self.busy || ticket != Ticket(self.issued) {
            return false;
        }
        self.busy = false;
        match outcome {
            Ok(receipt) => {
                self.phase = Phase::Success;
                self.message = Some(receipt.id.clone());
            }
            Err(err) => {
                self.phase = Phase::Error;
                self.message = Some(err.to_string());
            }
        }
        true
    }
}
