use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_VERSION: u32 = 1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub version: u32,

    #[serde(default)]
    pub settlement: SettlementConfig,

    #[serde(default)]
    pub asset_code: AssetCodeConfig,

    #[serde(default)]
    pub wallet: WalletConfig,

    /// Number of history rows the dashboard keeps.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            settlement: SettlementConfig::default(),
            asset_code: AssetCodeConfig::default(),
            wallet: WalletConfig::default(),
            history_limit: default_history_limit(),
        }
    }
}

fn default_history_limit() -> usize {
    20
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SettlementConfig {
    /// Simulated network round trip for every ledger operation.
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Probability in [0, 1] that a settlement fails with a transient error.
    #[serde(default)]
    pub failure_rate: f64,
}

impl Default for SettlementConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            failure_rate: 0.0,
        }
    }
}

fn default_delay_ms() -> u64 {
    2000
}

impl SettlementConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Length clamp applied to the asset code field while typing. `None` leaves
/// the field unbounded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetCodeConfig {
    #[serde(default = "default_creator_max_len")]
    pub creator_max_len: Option<usize>,

    #[serde(default)]
    pub manager_max_len: Option<usize>,
}

impl Default for AssetCodeConfig {
    fn default() -> Self {
        Self {
            creator_max_len: default_creator_max_len(),
            manager_max_len: None,
        }
    }
}

fn default_creator_max_len() -> Option<usize> {
    Some(12)
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConfig {
    /// Identity to connect on startup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
        let cfg: AppConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse {}", path.display()))?;
        cfg.validate()
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(cfg)
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let mut out = serde_json::to_vec_pretty(self).context("serialize config")?;
        out.push(b'\n');
        fs::write(path, out).with_context(|| format!("write {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.version != CONFIG_VERSION {
            anyhow::bail!(
                "unsupported config version {} (expected {})",
                self.version,
                CONFIG_VERSION
            );
        }
        let rate = self.settlement.failure_rate;
        if !(0.0..=1.0).contains(&rate) {
            anyhow::bail!("settlement.failure_rate must be within [0, 1] (got {})", rate);
        }
        if self.asset_code.creator_max_len == Some(0) || self.asset_code.manager_max_len == Some(0)
        {
            anyhow::bail!("asset_code max length must be positive or null");
        }
        if self.history_limit == 0 {
            anyhow::bail!("history_limit must be positive");
        }
        Ok(())
    }
}
