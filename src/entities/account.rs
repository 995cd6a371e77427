// 💳 Account Entity - a single holder's balance and the operations on it
//
// "Identity and labels are fixed at construction, only the balance moves"
//
// - account_number, holder_name, account_type, date_opened never change
// - balance changes only through credit, debit and transfer
// - every rejected operation leaves both accounts untouched

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::error::{AccountError, Result};
use crate::policy::TransferPolicy;

// ============================================================================
// ACCOUNT TYPE
// ============================================================================

/// Descriptive label only; no operation branches on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    /// Savings account (interest-bearing)
    Savings,

    /// Checking account (daily transactions)
    Checking,

    /// Business account
    Business,

    /// Any other label, kept verbatim
    Other(String),
}

impl AccountType {
    pub fn as_str(&self) -> &str {
        match self {
            AccountType::Savings => "Savings",
            AccountType::Checking => "Checking",
            AccountType::Business => "Business",
            AccountType::Other(label) => label,
        }
    }
}

impl FromStr for AccountType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(AccountType::from(s))
    }
}

impl From<&str> for AccountType {
    fn from(s: &str) -> Self {
        match s {
            "Savings" => AccountType::Savings,
            "Checking" => AccountType::Checking,
            "Business" => AccountType::Business,
            other => AccountType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    account_number: String,
    balance: Decimal,
    holder_name: String,
    account_type: AccountType,
    date_opened: DateTime<Utc>,
}

impl Account {
    /// Create an account. Inputs are stored as given; a negative opening
    /// balance is accepted.
    pub fn new(
        account_number: impl Into<String>,
        initial_balance: Decimal,
        holder_name: impl Into<String>,
        account_type: impl Into<AccountType>,
        date_opened: DateTime<Utc>,
    ) -> Self {
        Account {
            account_number: account_number.into(),
            balance: initial_balance,
            holder_name: holder_name.into(),
            account_type: account_type.into(),
            date_opened,
        }
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn account_type(&self) -> &AccountType {
        &self.account_type
    }

    pub fn date_opened(&self) -> DateTime<Utc> {
        self.date_opened
    }

    /// Current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Add `amount` to the balance
    pub fn credit(&mut self, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(self.reject("credit", amount, AccountError::NonPositiveCredit));
        }

        let balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| self.reject("credit", amount, AccountError::BalanceOverflow))?;
        self.balance = balance;

        debug!(account = %self.account_number, %amount, balance = %self.balance, "credit applied");
        Ok(())
    }

    /// Remove `amount` from the balance
    ///
    /// Positivity is checked before sufficiency, so `debit(0)` on an empty
    /// account reports the positivity error.
    pub fn debit(&mut self, amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(self.reject("debit", amount, AccountError::NonPositiveDebit));
        }
        if amount > self.balance {
            return Err(self.reject(
                "debit",
                amount,
                AccountError::InsufficientBalanceForDebit,
            ));
        }

        self.balance -= amount;

        debug!(account = %self.account_number, %amount, balance = %self.balance, "debit applied");
        Ok(())
    }

    /// Move `amount` into `target` under the default policy
    pub fn transfer(&mut self, target: &mut Account, amount: Decimal) -> Result<()> {
        self.transfer_with_policy(target, amount, &TransferPolicy::default())
    }

    /// Move `amount` into `target`.
    ///
    /// Checks, in order:
    /// 1. `amount` is positive
    /// 2. `amount` does not exceed this account's balance
    /// 3. if the holders differ, `amount` is within `policy.cross_owner_limit`
    ///
    /// Nothing is mutated until every check has passed.
    pub fn transfer_with_policy(
        &mut self,
        target: &mut Account,
        amount: Decimal,
        policy: &TransferPolicy,
    ) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(self.reject("transfer", amount, AccountError::NonPositiveTransfer));
        }
        if amount > self.balance {
            return Err(self.reject(
                "transfer",
                amount,
                AccountError::InsufficientBalanceForTransfer,
            ));
        }
        if !self.same_owner(target) && !policy.allows_cross_owner(amount) {
            return Err(self.reject("transfer", amount, AccountError::TransferLimitExceeded));
        }

        let target_balance = target
            .balance
            .checked_add(amount)
            .ok_or_else(|| self.reject("transfer", amount, AccountError::BalanceOverflow))?;

        self.balance -= amount;
        target.balance = target_balance;

        debug!(
            from = %self.account_number,
            to = %target.account_number,
            %amount,
            "transfer applied"
        );
        Ok(())
    }

    /// Interest earned at `rate` on the current balance; zero unless the
    /// balance is positive. Does not touch the balance.
    ///
    /// Any rate is accepted, negative included; a product outside Decimal's
    /// range is reported as `InterestOverflow`.
    pub fn calculate_interest(&self, rate: Decimal) -> Result<Decimal> {
        if self.balance <= Decimal::ZERO {
            return Ok(Decimal::ZERO);
        }

        self.balance
            .checked_mul(rate)
            .ok_or_else(|| self.reject("interest", rate, AccountError::InterestOverflow))
    }

    /// Both accounts belong to the same holder
    pub fn same_owner(&self, other: &Account) -> bool {
        self.holder_name == other.holder_name
    }

    /// Mask account number (show only last 4 characters)
    ///
    /// Example: "1234567890" → "*7890"
    pub fn mask_account_number(full_number: &str) -> String {
        let count = full_number.chars().count();
        if count <= 4 {
            return full_number.to_string();
        }
        let last4: String = full_number.chars().skip(count - 4).collect();
        format!("*{}", last4)
    }

    fn reject(&self, operation: &'static str, amount: Decimal, err: AccountError) -> AccountError {
        warn!(
            account = %self.account_number,
            operation,
            %amount,
            balance = %self.balance,
            error = %err,
            "operation rejected"
        );
        err
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}) opened {}: {}",
            Account::mask_account_number(&self.account_number),
            self.holder_name,
            self.account_type,
            self.date_opened.format("%Y-%m-%d"),
            self.balance
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
