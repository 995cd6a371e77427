// Entity Models
//
// Account is the only entity: fixed identity and labels, a balance that
// moves through credit, debit and transfer.

pub mod account;

pub use account::{Account, AccountType};
