use thiserror::Error;

use crate::model::{AssetCode, Identity};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("asset {0} already exists")]
    AssetExists(AssetCode),

    #[error("unknown asset {0}")]
    UnknownAsset(AssetCode),

    #[error("unauthorized: {actor} is not the issuer of {code}")]
    Unauthorized { code: AssetCode, actor: Identity },

    #[error("{actor} does not hold {code}")]
    NotHolder { code: AssetCode, actor: Identity },

    #[error("invalid destination: {0}")]
    InvalidDestination(String),

    #[error("settlement failed: {0}")]
    Transient(String),
}

impl LedgerError {
    pub fn is_transient(&self) -> bool {
        matches!(self, LedgerError::Transient(_))
    }
}
