use serde::Serialize;

use crate::ledger::{Ledger, Transfer};
use crate::model::{AssetCode, Identity};

use super::{
    DraftError, FieldShape, Pending, Settlement, SubmissionState, SubmitError, TextField, Ticket,
    cycle,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TransferDraft {
    pub code: String,
    pub destination: String,
}

impl TransferDraft {
    pub fn validate(&self) -> Result<(AssetCode, Identity), DraftError> {
        let code = AssetCode::parse(&self.code).ok_or(DraftError::Missing("asset code"))?;
        let to = Identity::new(self.destination.as_str()).ok_or(DraftError::Missing("destination"))?;
        Ok((code, to))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransferField {
    Code,
    Destination,
}

const TRANSFER_FIELDS: [TransferField; 2] = [TransferField::Code, TransferField::Destination];

/// Hands a held project token to another identity.
#[derive(Clone, Debug)]
pub struct TransferForm {
    code: TextField,
    destination: TextField,
    focus: TransferField,
    state: SubmissionState,
}

impl Default for TransferForm {
    fn default() -> Self {
        Self {
            code: TextField::new(FieldShape::code(None)),
            destination: TextField::new(FieldShape::PLAIN),
            focus: TransferField::Code,
            state: SubmissionState::default(),
        }
    }
}

impl TransferForm {
    pub fn field(&self, which: TransferField) -> &TextField {
        match which {
            TransferField::Code => &self.code,
            TransferField::Destination => &self.destination,
        }
    }

    pub fn field_mut(&mut self, which: TransferField) -> &mut TextField {
        match which {
            TransferField::Code => &mut self.code,
            TransferField::Destination => &mut self.destination,
        }
    }

    pub fn focus(&self) -> TransferField {
        self.focus
    }

    pub fn focused_mut(&mut self) -> &mut TextField {
        self.field_mut(self.focus)
    }

    pub fn focus_next(&mut self) {
        self.focus = cycle(&TRANSFER_FIELDS, self.focus, true);
    }

    pub fn focus_prev(&mut self) {
        self.focus = cycle(&TRANSFER_FIELDS, self.focus, false);
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn draft(&self) -> TransferDraft {
        TransferDraft {
            code: self.code.value().to_string(),
            destination: self.destination.value().to_string(),
        }
    }

    pub fn begin_submit(&mut self, from: &Identity) -> Result<Pending<Transfer>, SubmitError> {
        let (code, to) = self.draft().validate()?;
        let ticket = self.state.begin()?;
        tracing::info!(asset_code = %code, from = %from, to = %to, "transferring project asset");
        Ok(Pending {
            ticket,
            request: Transfer {
                code,
                from: from.clone(),
                to,
            },
        })
    }

    /// The owner of the form fires its success callback when this returns
    /// true for an `Ok` outcome.
    pub fn complete(&mut self, ticket: Ticket, outcome: &Settlement) -> bool {
        self.state.settle(ticket, outcome)
    }

    pub async fn submit_transfer(
        &mut self,
        ledger: &dyn Ledger,
        from: &Identity,
    ) -> Result<Settlement, SubmitError> {
        let pending = self.begin_submit(from)?;
        let outcome = ledger.transfer(pending.request).await;
        self.complete(pending.ticket, &outcome);
        Ok(outcome)
    }
}
