//! Transaction command implementations

use anyhow::{Context, Result};
use chrono::NaiveDate;

use tally_core::{Database, NewTransaction, Settings, TransactionKind};

use super::{print_notices, run_cycle, today, truncate};

pub fn cmd_transactions_list(db: &Database, limit: usize) -> Result<()> {
    let ledger = db.load_ledger()?;
    let transactions = ledger.transactions();

    if transactions.is_empty() {
        println!("No transactions yet. Record one with:");
        println!("  tally transactions add --description Salary --amount 20000 --kind income");
        return Ok(());
    }

    println!();
    println!("📝 Recent Transactions");
    println!("   ─────────────────────────────────────────────────────────────");

    let start = transactions.len().saturating_sub(limit);
    for tx in &transactions[start..] {
        let amount_str = match tx.kind {
            TransactionKind::Income => format!("\x1b[32m+₹{:.2}\x1b[0m", tx.amount),
            TransactionKind::Expense => format!("\x1b[31m₹{:.2}\x1b[0m", tx.amount),
        };

        println!(
            "   {} │ {:>12} │ {}",
            tx.date,
            amount_str,
            truncate(&tx.description, 40)
        );
    }

    Ok(())
}

pub fn cmd_transactions_add(
    db: &Database,
    settings: &Settings,
    description: &str,
    amount: f64,
    kind: &str,
    date: Option<NaiveDate>,
) -> Result<()> {
    let kind: TransactionKind = kind.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let mut ledger = db.load_ledger()?;
    ledger
        .add_transaction(NewTransaction {
            date: date.unwrap_or_else(today),
            description: description.to_string(),
            amount,
            kind,
        })
        .context("Transaction rejected")?;

    let report = run_cycle(db, &mut ledger, settings, today());
    print_notices(&report.notices);

    println!(
        "✅ Recorded {} of ₹{:.2}. Balance: ₹{:.2}",
        kind, amount, report.totals.balance
    );
    Ok(())
}
