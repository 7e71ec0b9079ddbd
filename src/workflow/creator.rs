use serde::Serialize;

use crate::ledger::{CreateAsset, Ledger};
use crate::model::{AssetCode, Identity};

use super::{
    DraftError, FieldShape, Pending, Settlement, SubmissionState, SubmitError, TextField, Ticket,
    cycle,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProjectDraft {
    pub code: String,
    pub url: String,
}

impl ProjectDraft {
    pub fn validate(&self) -> Result<(AssetCode, String), DraftError> {
        let code = AssetCode::parse(&self.code).ok_or(DraftError::Missing("asset code"))?;
        let url = self.url.trim();
        if url.is_empty() {
            return Err(DraftError::Missing("project url"));
        }
        url::Url::parse(url).map_err(|e| DraftError::InvalidUrl(format!("{}: {}", url, e)))?;
        Ok((code, url.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CreatorField {
    Code,
    Url,
}

const CREATOR_FIELDS: [CreatorField; 2] = [CreatorField::Code, CreatorField::Url];

/// Tokenizes a new project. The token is issued to, and held by, the creator.
#[derive(Clone, Debug)]
pub struct ProjectCreator {
    code: TextField,
    url: TextField,
    focus: CreatorField,
    state: SubmissionState,
}

impl ProjectCreator {
    pub fn new(code_max_len: Option<usize>) -> Self {
        Self {
            code: TextField::new(FieldShape::code(code_max_len)),
            url: TextField::new(FieldShape::PLAIN),
            focus: CreatorField::Code,
            state: SubmissionState::default(),
        }
    }

    pub fn field(&self, which: CreatorField) -> &TextField {
        match which {
            CreatorField::Code => &self.code,
            CreatorField::Url => &self.url,
        }
    }

    pub fn field_mut(&mut self, which: CreatorField) -> &mut TextField {
        match which {
            CreatorField::Code => &mut self.code,
            CreatorField::Url => &mut self.url,
        }
    }

    pub fn focus(&self) -> CreatorField {
        self.focus
    }

    pub fn focused_mut(&mut self) -> &mut TextField {
        self.field_mut(self.focus)
    }

    pub fn focus_next(&mut self) {
        self.focus = cycle(&CREATOR_FIELDS, self.focus, true);
    }

    pub fn focus_prev(&mut self) {
        self.focus = cycle(&CREATOR_FIELDS, self.focus, false);
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn draft(&self) -> ProjectDraft {
        ProjectDraft {
            code: self.code.value().to_string(),
            url: self.url.value().to_string(),
        }
    }

    /// Validates the draft and marks the form busy. Nothing changes when the
    /// draft is incomplete.
    pub fn begin_submit(&mut self, owner: &Identity) -> Result<Pending<CreateAsset>, SubmitError> {
        let (code, url) = self.draft().validate()?;
        let ticket = self.state.begin()?;
        tracing::info!(asset_code = %code, url = %url, creator = %owner, "creating project asset");
        Ok(Pending {
            ticket,
            request: CreateAsset {
                code,
                url,
                creator: owner.clone(),
            },
        })
    }

    pub fn complete(&mut self, ticket: Ticket, outcome: &Settlement) -> bool {
        self.state.settle(ticket, outcome)
    }

    pub async fn submit_create(
        &mut self,
        ledger: &dyn Ledger,
        owner: &Identity,
    ) -> Result<Settlement, SubmitError> {
        let pending = self.begin_submit(owner)?;
        let outcome = ledger.create_asset(pending.request).await;
        self.complete(pending.ticket, &outcome);
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "../tests/workflow/creator_tests.rs"]
mod tests;
