//! End-to-end scenarios for the public Account API.

use bank_account::{Account, AccountError, AccountType, ErrorKind};
use chrono::Utc;
use rust_decimal_macros::dec;

#[test]
fn test_create_account_valid_data() {
    let opened = Utc::now();
    let account = Account::new("123", dec!(1000), "John Doe", "Savings", opened);

    assert_eq!(account.account_number(), "123");
    assert_eq!(account.balance(), dec!(1000));
    assert_eq!(account.holder_name(), "John Doe");
    assert_eq!(account.account_type(), &AccountType::Savings);
    assert_eq!(account.date_opened(), opened);
}

#[test]
fn test_create_account_initial_balance_zero() {
    let opened = Utc::now();
    let account = Account::new("124", dec!(0), "Jane Doe", "Checking", opened);

    assert_eq!(account.account_number(), "124");
    assert_eq!(account.balance(), dec!(0));
    assert_eq!(account.holder_name(), "Jane Doe");
    assert_eq!(account.account_type().as_str(), "Checking");
    assert_eq!(account.date_opened(), opened);
}

#[test]
fn test_create_account_initial_balance_negative() {
    let opened = Utc::now();
    let account = Account::new("125", dec!(-100), "Jim Doe", "Business", opened);

    assert_eq!(account.account_number(), "125");
    assert_eq!(account.balance(), dec!(-100));
    assert_eq!(account.holder_name(), "Jim Doe");
    assert_eq!(account.account_type().as_str(), "Business");
    assert_eq!(account.date_opened(), opened);
}

#[test]
fn test_credit_then_get_balance() {
    let mut account = Account::new("123", dec!(1000), "John Doe", "Savings", Utc::now());
    account.credit(dec!(200)).unwrap();
    assert_eq!(account.balance(), dec!(1200));
}

#[test]
fn test_debit_then_get_balance() {
    let mut account = Account::new("123", dec!(1000), "John Doe", "Savings", Utc::now());
    account.debit(dec!(200)).unwrap();
    assert_eq!(account.balance(), dec!(800));
}

#[test]
fn test_debit_negative_amount() {
    let mut account = Account::new("123", dec!(1000), "John Doe", "Savings", Utc::now());
    let err = account.debit(dec!(-200)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.to_string(), "Debit amount must be positive.");
}

#[test]
fn test_transfer_successful() {
    let mut account1 = Account::new("123", dec!(1000), "John Doe", "Savings", Utc::now());
    let mut account2 = Account::new("456", dec!(500), "Jane Doe", "Savings", Utc::now());

    account1.transfer(&mut account2, dec!(200)).unwrap();

    assert_eq!(account1.balance(), dec!(800));
    assert_eq!(account2.balance(), dec!(700));
}

#[test]
fn test_transfer_insufficient_balance() {
    let mut account1 = Account::new("123", dec!(100), "John Doe", "Savings", Utc::now());
    let mut account2 = Account::new("456", dec!(500), "Jane Doe", "Savings", Utc::now());

    let err = account1.transfer(&mut account2, dec!(200)).unwrap_err();

    assert_eq!(err, AccountError::InsufficientBalanceForTransfer);
    assert_eq!(err.to_string(), "Insufficient balance for transfer.");
    assert_eq!(account1.balance(), dec!(100));
    assert_eq!(account2.balance(), dec!(500));
}

#[test]
fn test_transfer_exceeds_limit_for_different_owners() {
    let mut account1 = Account::new("123", dec!(1000), "John", "Savings", Utc::now());
    let mut account2 = Account::new("456", dec!(500), "Jane Doe", "Savings", Utc::now());

    let err = account1.transfer(&mut account2, dec!(600)).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::OperationFailed);
    assert_eq!(
        err.to_string(),
        "Transfer amount exceeds maximum limit for different account owners."
    );
    assert_eq!(account1.balance(), dec!(1000));
    assert_eq!(account2.balance(), dec!(500));
}

#[test]
fn test_calculate_interest_scenarios() {
    let opened = Utc::now();

    let positive = Account::new("123", dec!(1000), "John Doe", "Savings", opened);
    assert_eq!(positive.calculate_interest(dec!(0.05)).unwrap(), dec!(50));
    assert_eq!(positive.calculate_interest(dec!(0.20)).unwrap(), dec!(200));
    assert_eq!(positive.calculate_interest(dec!(0.01)).unwrap(), dec!(10));

    let zero = Account::new("123", dec!(0), "John Doe", "Savings", opened);
    assert_eq!(zero.calculate_interest(dec!(0.05)).unwrap(), dec!(0));

    let negative = Account::new("123", dec!(-1000), "John Doe", "Savings", opened);
    assert_eq!(negative.calculate_interest(dec!(0.05)).unwrap(), dec!(0));
}
