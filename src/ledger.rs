//! Ledger operations behind the project workflows.
//!
//! Every mutating call is asynchronous and settles after a delay; reads are
//! synchronous snapshots used by the dashboard panels.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::model::{AssetCode, HistoryEntry, Holding, Identity, ProjectAsset, Receipt};

mod error;
mod simulated;

pub use self::error::LedgerError;
pub use self::simulated::SimulatedLedger;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAsset {
    pub code: AssetCode,
    pub url: String,
    pub creator: Identity,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMetadata {
    pub code: AssetCode,
    pub version: String,
    pub notes: String,
    pub issuer: Identity,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub code: AssetCode,
    pub from: Identity,
    pub to: Identity,
}

#[async_trait]
pub trait Ledger: Send + Sync {
    async fn create_asset(&self, req: CreateAsset) -> Result<Receipt, LedgerError>;

    /// Rejected with [`LedgerError::Unauthorized`] unless `req.issuer` issued
    /// the asset.
    async fn update_metadata(&self, req: UpdateMetadata) -> Result<Receipt, LedgerError>;

    async fn transfer(&self, req: Transfer) -> Result<Receipt, LedgerError>;

    fn asset(&self, code: &AssetCode) -> Option<ProjectAsset>;

    fn holdings(&self, owner: &Identity) -> Vec<Holding>;

    /// Most recent first.
    fn history(&self, account: &Identity, limit: usize) -> Vec<HistoryEntry>;
}
