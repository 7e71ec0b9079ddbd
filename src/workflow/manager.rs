use serde::Serialize;

use crate::ledger::{Ledger, UpdateMetadata};
use crate::model::{AssetCode, Identity};

use super::{
    DraftError, FieldShape, Pending, Settlement, SubmissionState, SubmitError, TextField, Ticket,
    cycle,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectUpdateDraft {
    pub code: String,
    pub version: String,
    pub notes: String,
}

impl ProjectUpdateDraft {
    pub fn validate(&self) -> Result<(AssetCode, String, String), DraftError> {
        let code = AssetCode::parse(&self.code).ok_or(DraftError::Missing("asset code"))?;
        let version = self.version.trim();
        if version.is_empty() {
            return Err(DraftError::Missing("version"));
        }
        let notes = self.notes.trim();
        if notes.is_empty() {
            return Err(DraftError::Missing("notes"));
        }
        Ok((code, version.to_string(), notes.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ManagerField {
    Code,
    Version,
    Notes,
}

const MANAGER_FIELDS: [ManagerField; 3] =
    [ManagerField::Code, ManagerField::Version, ManagerField::Notes];

/// Publishes a new version and release notes for an existing project token.
/// Only the token's issuer may do this; the ledger enforces it.
#[derive(Clone, Debug)]
pub struct ProjectManager {
    code: TextField,
    version: TextField,
    notes: TextField,
    focus: ManagerField,
    state: SubmissionState,
}

impl ProjectManager {
    pub fn new(code_max_len: Option<usize>) -> Self {
        Self {
            code: TextField::new(FieldShape::code(code_max_len)),
            version: TextField::new(FieldShape::PLAIN),
            notes: TextField::new(FieldShape::PLAIN),
            focus: ManagerField::Code,
            state: SubmissionState::default(),
        }
    }

    pub fn field(&self, which: ManagerField) -> &TextField {
        match which {
            ManagerField::Code => &self.code,
            ManagerField::Version => &self.version,
            ManagerField::Notes => &self.notes,
        }
    }

    pub fn field_mut(&mut self, which: ManagerField) -> &mut TextField {
        match which {
            ManagerField::Code => &mut self.code,
            ManagerField::Version => &mut self.version,
            ManagerField::Notes => &mut self.notes,
        }
    }

    pub fn focus(&self) -> ManagerField {
        self.focus
    }

    pub fn focused_mut(&mut self) -> &mut TextField {
        self.field_mut(self.focus)
    }

    pub fn focus_next(&mut self) {
        self.focus = cycle(&MANAGER_FIELDS, self.focus, true);
    }

    pub fn focus_prev(&mut self) {
        self.focus = cycle(&MANAGER_FIELDS, self.focus, false);
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn draft(&self) -> ProjectUpdateDraft {
        ProjectUpdateDraft {
            code: self.code.value().to_string(),
            version: self.version.value().to_string(),
            notes: self.notes.value().to_string(),
        }
    }

    pub fn begin_submit(
        &mut self,
        issuer: &Identity,
    ) -> Result<Pending<UpdateMetadata>, SubmitError> {
        let (code, version, notes) = self.draft().validate()?;
        let ticket = self.state.begin()?;
        tracing::info!(
            asset_code = %code,
            version = %version,
            notes = %notes,
            issuer = %issuer,
            "updating project metadata"
        );
        Ok(Pending {
            ticket,
            request: UpdateMetadata {
                code,
                version,
                notes,
                issuer: issuer.clone(),
            },
        })
    }

    pub fn complete(&mut self, ticket: Ticket, outcome: &Settlement) -> bool {
        self.state.settle(ticket, outcome)
    }

    pub async fn submit_update(
        &mut self,
        ledger: &dyn Ledger,
        issuer: &Identity,
    ) -> Result<Settlement, SubmitError> {
        let pending = self.begin_submit(issuer)?;
        let outcome = ledger.update_metadata(pending.request).await;
        self.complete(pending.ticket, &outcome);
        Ok(outcome)
    }
}
