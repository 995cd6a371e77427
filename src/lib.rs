// Bank Account - Core Library
// Exposes the account entity, its errors and transfer policy for the CLI and tests

pub mod entities;
pub mod error;
pub mod logger;
pub mod policy;

// Re-export commonly used types
pub use entities::{Account, AccountType};
pub use error::{AccountError, ErrorKind, Result};
pub use policy::{TransferPolicy, DEFAULT_CROSS_OWNER_LIMIT};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
