use anyhow::Result;

use crate::model::AppConfig;

#[derive(Clone, Debug, Default)]
pub struct TuiRunOptions {
    pub config: AppConfig,
    /// Public key to connect on startup; overrides `wallet.identity`.
    pub identity: Option<String>,
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run_with_options(opts)
}
