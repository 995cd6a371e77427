// ⚠️ Account Errors
// Every rejected operation maps to exactly one variant; the Display text is
// the message callers match on.

use thiserror::Error;

/// Broad category of a failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A parameter failed a local precondition (non-positive amount)
    InvalidArgument,
    /// A business rule rejected the operation (balance, transfer ceiling)
    OperationFailed,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountError {
    #[error("Credit amount must be positive.")]
    NonPositiveCredit,

    #[error("Debit amount must be positive.")]
    NonPositiveDebit,

    #[error("Transfer amount must be positive.")]
    NonPositiveTransfer,

    #[error("Insufficient balance for debit.")]
    InsufficientBalanceForDebit,

    #[error("Insufficient balance for transfer.")]
    InsufficientBalanceForTransfer,

    #[error("Transfer amount exceeds maximum limit for different account owners.")]
    TransferLimitExceeded,

    #[error("Balance overflow.")]
    BalanceOverflow,

    #[error("Interest calculation overflow.")]
    InterestOverflow,
}

impl AccountError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountError::NonPositiveCredit
            | AccountError::NonPositiveDebit
            | AccountError::NonPositiveTransfer => ErrorKind::InvalidArgument,
            AccountError::InsufficientBalanceForDebit
            | AccountError::InsufficientBalanceForTransfer
            | AccountError::TransferLimitExceeded
            | AccountError::BalanceOverflow
            | AccountError::InterestOverflow => ErrorKind::OperationFailed,
        }
    }
}

pub type Result<T> = std::result::Result<T, AccountError>;
