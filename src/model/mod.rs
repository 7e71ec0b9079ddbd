mod asset;
mod config;
mod ids;

pub use self::asset::{
    HistoryEntry, HistoryKind, Holding, ProjectAsset, Receipt, compute_receipt_id,
};
pub use self::config::{
    AppConfig, AssetCodeConfig, CONFIG_VERSION, SettlementConfig, WalletConfig,
};
pub use self::ids::{AssetCode, Identity};
