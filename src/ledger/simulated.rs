use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use super::{CreateAsset, Ledger, LedgerError, Transfer, UpdateMetadata};
use crate::model::{
    AssetCode, HistoryEntry, HistoryKind, Holding, Identity, ProjectAsset, Receipt,
    SettlementConfig, compute_receipt_id,
};
use crate::time_utils::now_ts;

/// In-memory ledger. Each mutation waits out the configured settlement delay
/// and may fail transiently at the configured rate.
pub struct SimulatedLedger {
    settlement: SettlementConfig,
    state: Mutex<LedgerState>,
}

#[derive(Default)]
struct LedgerState {
    assets: BTreeMap<AssetCode, ProjectAsset>,
    history: Vec<HistoryEntry>,
    seq: u64,
}

impl LedgerState {
    fn record(&mut self, code: &AssetCode, actor: &Identity, kind: HistoryKind) -> Receipt {
        self.seq += 1;
        let at = now_ts();
        let id = compute_receipt_id(self.seq, &at, code, actor);
        self.history.push(HistoryEntry {
            id: id.clone(),
            at: at.clone(),
            code: code.clone(),
            actor: actor.clone(),
            kind,
        });
        Receipt {
            id,
            code: code.clone(),
            settled_at: at,
        }
    }

    fn check_issuer(&self, code: &AssetCode, actor: &Identity) -> Result<(), LedgerError> {
        let asset = self
            .assets
            .get(code)
            .ok_or_else(|| LedgerError::UnknownAsset(code.clone()))?;
        if &asset.issuer != actor {
            return Err(LedgerError::Unauthorized {
                code: code.clone(),
                actor: actor.clone(),
            });
        }
        Ok(())
    }

    fn check_holder(&self, code: &AssetCode, actor: &Identity) -> Result<(), LedgerError> {
        let asset = self
            .assets
            .get(code)
            .ok_or_else(|| LedgerError::UnknownAsset(code.clone()))?;
        if &asset.holder != actor {
            return Err(LedgerError::NotHolder {
                code: code.clone(),
                actor: actor.clone(),
            });
        }
        Ok(())
    }
}

impl SimulatedLedger {
    pub fn new(settlement: SettlementConfig) -> Self {
        Self {
            settlement,
            state: Mutex::new(LedgerState::default()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LedgerState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    async fn settle(&self) -> Result<(), LedgerError> {
        tokio::time::sleep(self.settlement.delay()).await;
        if roll_failure(self.settlement.failure_rate)? {
            tracing::warn!("simulated settlement failure");
            return Err(LedgerError::Transient("network unavailable".to_string()));
        }
        Ok(())
    }
}

fn roll_failure(rate: f64) -> Result<bool, LedgerError> {
    if rate <= 0.0 {
        return Ok(false);
    }
    if rate >= 1.0 {
        return Ok(true);
    }
    let mut bytes = [0u8; 8];
    getrandom::getrandom(&mut bytes)
        .map_err(|e| LedgerError::Transient(format!("getrandom: {:?}", e)))?;
    let sample = u64::from_le_bytes(bytes) as f64 / u64::MAX as f64;
    Ok(sample < rate)
}

#[async_trait]
impl Ledger for SimulatedLedger {
    async fn create_asset(&self, req: CreateAsset) -> Result<Receipt, LedgerError> {
        let exists = self.lock().assets.contains_key(&req.code);
        if exists {
            return Err(LedgerError::AssetExists(req.code));
        }

        self.settle().await?;

        let mut state = self.lock();
        // A concurrent create may have settled first.
        if state.assets.contains_key(&req.code) {
            return Err(LedgerError::AssetExists(req.code));
        }
        let receipt = state.record(
            &req.code,
            &req.creator,
            HistoryKind::Created {
                url: req.url.clone(),
            },
        );
        state.assets.insert(
            req.code.clone(),
            ProjectAsset {
                code: req.code.clone(),
                issuer: req.creator.clone(),
                holder: req.creator.clone(),
                url: req.url,
                supply: 1,
                version: None,
                notes: None,
                created_at: receipt.settled_at.clone(),
            },
        );
        tracing::info!(code = %req.code, creator = %req.creator, receipt = %receipt.id, "asset created");
        Ok(receipt)
    }

    async fn update_metadata(&self, req: UpdateMetadata) -> Result<Receipt, LedgerError> {
        self.lock().check_issuer(&req.code, &req.issuer)?;

        self.settle().await?;

        let mut state = self.lock();
        state.check_issuer(&req.code, &req.issuer)?;
        let receipt = state.record(
            &req.code,
            &req.issuer,
            HistoryKind::MetadataUpdated {
                version: req.version.clone(),
            },
        );
        if let Some(asset) = state.assets.get_mut(&req.code) {
            asset.version = Some(req.version);
            asset.notes = Some(req.notes);
        }
        tracing::info!(code = %req.code, issuer = %req.issuer, receipt = %receipt.id, "metadata updated");
        Ok(receipt)
    }

    async fn transfer(&self, req: Transfer) -> Result<Receipt, LedgerError> {
        if req.from == req.to {
            return Err(LedgerError::InvalidDestination(
                "destination is the current holder".to_string(),
            ));
        }
        self.lock().check_holder(&req.code, &req.from)?;

        self.settle().await?;

        let mut state = self.lock();
        state.check_holder(&req.code, &req.from)?;
        let receipt = state.record(
            &req.code,
            &req.from,
            HistoryKind::Transferred {
                from: req.from.clone(),
                to: req.to.clone(),
            },
        );
        if let Some(asset) = state.assets.get_mut(&req.code) {
            asset.holder = req.to.clone();
        }
        tracing::info!(code = %req.code, from = %req.from, to = %req.to, receipt = %receipt.id, "asset transferred");
        Ok(receipt)
    }

    fn asset(&self, code: &AssetCode) -> Option<ProjectAsset> {
        self.lock().assets.get(code).cloned()
    }

    fn holdings(&self, owner: &Identity) -> Vec<Holding> {
        self.lock()
            .assets
            .values()
            .filter(|a| &a.holder == owner)
            .map(|a| Holding {
                code: a.code.clone(),
                amount: a.supply,
                url: a.url.clone(),
                version: a.version.clone(),
                issued_by_holder: &a.issuer == owner,
            })
            .collect()
    }

    fn history(&self, account: &Identity, limit: usize) -> Vec<HistoryEntry> {
        self.lock()
            .history
            .iter()
            .rev()
            .filter(|e| e.involves(account))
            .take(limit)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
#[path = "../tests/ledger/simulated_tests.rs"]
mod tests;
