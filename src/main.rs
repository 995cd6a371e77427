use anyhow::Result;
use chrono::Utc;
use rust_decimal::Decimal;
use std::env;
use tracing::info;

use bank_account::{logger, Account, AccountType, TransferPolicy};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let verbose = args.iter().any(|a| a == "-v" || a == "--verbose");
    logger::init_logger(verbose);

    let policy = match args.iter().find(|a| !a.starts_with('-')) {
        Some(path) => {
            info!(path = %path, "loading transfer policy");
            TransferPolicy::from_file(path)?
        }
        None => TransferPolicy::default(),
    };

    run_walkthrough(&policy)
}

fn run_walkthrough(policy: &TransferPolicy) -> Result<()> {
    println!("🏦 Bank Account v{}", bank_account::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Cross-owner transfer limit: {}", policy.cross_owner_limit);

    let now = Utc::now();
    let mut savings = Account::new("123", Decimal::from(1000), "John Doe", AccountType::Savings, now);
    let mut checking = Account::new("456", Decimal::from(500), "Jane Doe", AccountType::Checking, now);

    println!("\n📂 Accounts");
    println!("  {}", savings);
    println!("  {}", checking);

    println!("\n💰 Credit 200 to {}", savings.account_number());
    report(savings.credit(Decimal::from(200)));
    println!("  balance: {}", savings.balance());

    println!("\n💸 Debit 1500 from {}", savings.account_number());
    report(savings.debit(Decimal::from(1500)));
    println!("  balance: {}", savings.balance());

    println!(
        "\n🔁 Transfer 600 from {} to {}",
        savings.account_number(),
        checking.account_number()
    );
    report(savings.transfer_with_policy(&mut checking, Decimal::from(600), policy));

    println!(
        "\n🔁 Transfer 200 from {} to {}",
        savings.account_number(),
        checking.account_number()
    );
    report(savings.transfer_with_policy(&mut checking, Decimal::from(200), policy));

    let rate = Decimal::new(5, 2);
    println!("\n📈 Interest at {} on {}", rate, savings.account_number());
    match savings.calculate_interest(rate) {
        Ok(interest) => println!("  interest: {}", interest),
        Err(e) => println!("  ✗ {:?}: {}", e.kind(), e),
    }

    println!("\n━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  {}", savings);
    println!("  {}", checking);

    Ok(())
}

fn report(outcome: bank_account::Result<()>) {
    match outcome {
        Ok(()) => println!("  ✓ ok"),
        Err(e) => println!("  ✗ {:?}: {}", e.kind(), e),
    }
}
