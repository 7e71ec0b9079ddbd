use serde::{Deserialize, Serialize};

use super::ids::{AssetCode, Identity};

/// A tokenized project. Supply is always one: holding the token is owning the
/// project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAsset {
    pub code: AssetCode,
    pub issuer: Identity,
    pub holder: Identity,
    pub url: String,
    pub supply: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HistoryKind {
    Created { url: String },
    MetadataUpdated { version: String },
    Transferred { from: Identity, to: Identity },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub at: String,
    pub code: AssetCode,
    pub actor: Identity,
    #[serde(flatten)]
    pub kind: HistoryKind,
}

impl HistoryEntry {
    pub fn involves(&self, account: &Identity) -> bool {
        if &self.actor == account {
            return true;
        }
        matches!(&self.kind, HistoryKind::Transferred { to, .. } if to == account)
    }

    pub fn summary(&self) -> String {
        match &self.kind {
            HistoryKind::Created { url } => format!("created {} ({})", self.code, url),
            HistoryKind::MetadataUpdated { version } => {
                format!("updated {} to {}", self.code, version)
            }
            HistoryKind::Transferred { from, to } => {
                format!("transferred {} {} -> {}", self.code, from.short(), to.short())
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    pub code: AssetCode,
    pub amount: u64,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub issued_by_holder: bool,
}

/// Proof that a ledger operation settled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: String,
    pub code: AssetCode,
    pub settled_at: String,
}

pub fn compute_receipt_id(seq: u64, settled_at: &str, code: &AssetCode, actor: &Identity) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&seq.to_le_bytes());
    hasher.update(settled_at.as_bytes());
    hasher.update(b"\n");
    hasher.update(code.as_str().as_bytes());
    hasher.update(b"\n");
    hasher.update(actor.as_str().as_bytes());
    hasher.finalize().to_hex().to_string()
}
