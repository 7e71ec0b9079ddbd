//! Form workflows: drafts shaped as they are typed, validated on submit, and
//! settled asynchronously against a [`Ledger`](crate::ledger::Ledger).

use thiserror::Error;

mod creator;
mod field;
mod manager;
mod submission;
mod transfer;

pub use self::creator::{CreatorField, ProjectCreator, ProjectDraft};
pub use self::field::{FieldShape, TextField};
pub use self::manager::{ManagerField, ProjectManager, ProjectUpdateDraft};
pub use self::submission::{Pending, Phase, Settlement, SubmissionState, Ticket};
pub use self::transfer::{TransferDraft, TransferField, TransferForm};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Draft(#[from] DraftError),

    #[error("a submission is already in progress")]
    Busy,

    #[error("not connected")]
    NotConnected,

    #[error("the {0} view has no form")]
    NoForm(&'static str),
}

/// Tab order for a form's fields.
pub(crate) fn cycle<T: Copy + PartialEq>(order: &[T], current: T, forward: bool) -> T {
    let n = order.len();
    let i = order.iter().position(|f| *f == current).unwrap_or(0);
    if forward {
        order[(i + 1) % n]
    } else {
        order[(i + n - 1) % n]
    }
}
