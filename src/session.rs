//! Connection state and tab selection for one interactive session.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Identity;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Dashboard,
    Creator,
    Manager,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Dashboard, Tab::Creator, Tab::Manager];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Creator => "Project Creator",
            Tab::Manager => "Project Manager",
        }
    }

    pub fn parse(s: &str) -> Option<Tab> {
        match s.trim().to_lowercase().as_str() {
            "dashboard" | "dash" | "home" => Some(Tab::Dashboard),
            "creator" | "create" | "new" => Some(Tab::Creator),
            "manager" | "manage" | "update" => Some(Tab::Manager),
            _ => None,
        }
    }
}

/// Remount key for the dashboard's balance and history panels. Only ever
/// incremented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RefreshSignal(u64);

impl RefreshSignal {
    pub fn value(self) -> u64 {
        self.0
    }

    fn bump(&mut self) {
        self.0 += 1;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveView {
    Onboarding,
    Dashboard,
    Creator,
    Manager,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("connect a wallet first")]
    NotConnected,
}

#[derive(Clone, Debug, Default)]
pub struct Session {
    identity: Option<Identity>,
    tab: Tab,
    refresh: RefreshSignal,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.identity.is_some()
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn refresh(&self) -> RefreshSignal {
        self.refresh
    }

    pub fn connect(&mut self, identity: Identity) {
        tracing::info!(identity = %identity, "wallet connected");
        self.identity = Some(identity);
        self.tab = Tab::Dashboard;
    }

    pub fn disconnect(&mut self) {
        if let Some(identity) = self.identity.take() {
            tracing::info!(identity = %identity, "wallet disconnected");
        }
        self.tab = Tab::Dashboard;
    }

    pub fn select_tab(&mut self, tab: Tab) -> Result<(), SessionError> {
        if !self.is_connected() {
            return Err(SessionError::NotConnected);
        }
        self.tab = tab;
        Ok(())
    }

    pub fn transfer_succeeded(&mut self) {
        self.refresh.bump();
        tracing::debug!(refresh = self.refresh.value(), "refresh signal bumped");
    }

    pub fn active_view(&self) -> ActiveView {
        if !self.is_connected() {
            return ActiveView::Onboarding;
        }
        match self.tab {
            Tab::Dashboard => ActiveView::Dashboard,
            Tab::Creator => ActiveView::Creator,
            Tab::Manager => ActiveView::Manager,
        }
    }
}
