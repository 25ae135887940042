//! Recurring bill command implementations

use anyhow::{Context, Result};
use chrono::NaiveDate;

use tally_core::{BillCategory, Database, NewBill, Settings};

use super::{print_notices, run_cycle, today, truncate};

pub fn cmd_bills_list(db: &Database) -> Result<()> {
    let ledger = db.load_ledger()?;
    let bills = ledger.bills();

    if bills.is_empty() {
        println!("No bills yet. Add one with:");
        println!("  tally bills add --name Electricity --amount 1200 --due 2026-09-01 --autopay");
        return Ok(());
    }

    println!();
    println!("🧾 Recurring Bills");
    println!("   ─────────────────────────────────────────────────────────────");

    for bill in bills {
        let autopay = if bill.autopay {
            "\x1b[32mautopay ON\x1b[0m"
        } else {
            "\x1b[2mautopay OFF\x1b[0m"
        };
        println!(
            "   {:<24} │ ₹{:>10.2} │ due {} │ {:<12} │ {}",
            truncate(&bill.name, 24),
            bill.amount,
            bill.due,
            bill.category.to_string(),
            autopay
        );
    }

    Ok(())
}

pub fn cmd_bills_add(
    db: &Database,
    settings: &Settings,
    name: &str,
    amount: f64,
    due: NaiveDate,
    category: &str,
    autopay: bool,
) -> Result<()> {
    let category: BillCategory = category.parse().map_err(|e: String| anyhow::anyhow!(e))?;

    let mut ledger = db.load_ledger()?;
    ledger
        .add_bill(NewBill {
            name: name.to_string(),
            amount,
            due,
            category,
            autopay,
        })
        .context("Bill rejected")?;

    let report = run_cycle(db, &mut ledger, settings, today());
    print_notices(&report.notices);

    println!(
        "✅ Added bill {} of ₹{:.2}, due {} (autopay {}).",
        name,
        amount,
        due,
        if autopay { "on" } else { "off" }
    );
    Ok(())
}
