use crate::ledger::Ledger;
use crate::model::{HistoryEntry, Holding, Identity};
use crate::workflow::TransferForm;

/// Cached snapshot keyed on the refresh signal. A key change discards the
/// snapshot and counts as a fresh mount.
#[derive(Clone, Debug, Default)]
pub struct Panel<T> {
    key: Option<u64>,
    mounts: u64,
    data: T,
}

impl<T> Panel<T> {
    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn mounts(&self) -> u64 {
        self.mounts
    }

    pub fn key(&self) -> Option<u64> {
        self.key
    }

    fn sync(&mut self, key: u64, load: impl FnOnce() -> T) -> bool {
        if self.key == Some(key) {
            return false;
        }
        self.key = Some(key);
        self.mounts += 1;
        self.data = load();
        true
    }
}

#[derive(Debug)]
pub struct Dashboard {
    identity: Identity,
    balance: Panel<Vec<Holding>>,
    history: Panel<Vec<HistoryEntry>>,
    transfer: TransferForm,
}

impl Dashboard {
    pub fn new(identity: Identity) -> Self {
        Self {
            identity,
            balance: Panel::default(),
            history: Panel::default(),
            transfer: TransferForm::default(),
        }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn balance(&self) -> &Panel<Vec<Holding>> {
        &self.balance
    }

    pub fn history(&self) -> &Panel<Vec<HistoryEntry>> {
        &self.history
    }

    pub fn transfer(&self) -> &TransferForm {
        &self.transfer
    }

    pub fn transfer_mut(&mut self) -> &mut TransferForm {
        &mut self.transfer
    }

    pub(super) fn sync(&mut self, refresh_key: u64, ledger: &dyn Ledger, history_limit: usize) -> bool {
        let identity = &self.identity;
        let balance = self.balance.sync(refresh_key, || ledger.holdings(identity));
        let history = self
            .history
            .sync(refresh_key, || ledger.history(identity, history_limit));
        balance || history
    }
}
