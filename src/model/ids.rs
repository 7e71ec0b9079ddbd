use std::fmt;

use serde::{Deserialize, Serialize};

/// Public key of a connected wallet. Never empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identity(String);

impl Identity {
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        Some(Self(key.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Abbreviated form for headers and list rows (`GABC…WXYZ`).
    pub fn short(&self) -> String {
        let n = self.0.chars().count();
        if n <= 12 {
            return self.0.clone();
        }
        let head = self.0.chars().take(4).collect::<String>();
        let tail = self.0.chars().skip(n - 4).collect::<String>();
        format!("{}…{}", head, tail)
    }
}

impl TryFrom<String> for Identity {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Identity::new(value).ok_or_else(|| "identity must not be empty".to_string())
    }
}

impl From<Identity> for String {
    fn from(value: Identity) -> Self {
        value.0
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ledger key of a project token. Uppercase, never empty.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetCode(String);

impl AssetCode {
    pub fn parse(raw: &str) -> Option<Self> {
        let code = raw.trim().to_uppercase();
        if code.is_empty() {
            return None;
        }
        Some(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AssetCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        AssetCode::parse(&value).ok_or_else(|| "asset code must not be empty".to_string())
    }
}

impl From<AssetCode> for String {
    fn from(value: AssetCode) -> Self {
        value.0
    }
}

impl fmt::Display for AssetCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
