// 📏 Transfer Policy - configurable limits applied by Account::transfer
//
// Loaded from JSON; missing fields fall back to defaults.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Ceiling on transfers between accounts held by different owners
pub const DEFAULT_CROSS_OWNER_LIMIT: i64 = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferPolicy {
    /// Maximum amount a single transfer may move to another holder
    pub cross_owner_limit: Decimal,
}

impl Default for TransferPolicy {
    fn default() -> Self {
        TransferPolicy {
            cross_owner_limit: Decimal::from(DEFAULT_CROSS_OWNER_LIMIT),
        }
    }
}

impl TransferPolicy {
    pub fn new(cross_owner_limit: Decimal) -> Self {
        TransferPolicy { cross_owner_limit }
    }

    /// Load policy from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read policy file: {:?}", path.as_ref()))?;

        Self::from_json(&content)
    }

    /// Parse policy from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let policy: TransferPolicy =
            serde_json::from_str(json).context("Failed to parse policy JSON")?;

        anyhow::ensure!(
            policy.cross_owner_limit >= Decimal::ZERO,
            "cross_owner_limit must not be negative, got {}",
            policy.cross_owner_limit
        );

        Ok(policy)
    }

    /// Whether `amount` may move between accounts of different owners
    pub fn allows_cross_owner(&self, amount: Decimal) -> bool {
        amount <= self.cross_owner_limit
    }
}
