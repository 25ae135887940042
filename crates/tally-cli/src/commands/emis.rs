//! Recurring installment command implementations

use anyhow::{Context, Result};
use chrono::NaiveDate;

use tally_core::{Database, NewEmi, Settings};

use super::{print_notices, run_cycle, today, truncate};

pub fn cmd_emis_list(db: &Database) -> Result<()> {
    let ledger = db.load_ledger()?;
    let emis = ledger.emis();

    if emis.is_empty() {
        println!("No EMIs yet. Add one with:");
        println!("  tally emis add --name 'Car loan' --amount 2000 --next-due 2026-09-05");
        return Ok(());
    }

    println!();
    println!("🏦 Recurring Installments");
    println!("   ─────────────────────────────────────────────────────────────");

    for emi in emis {
        println!(
            "   {:<30} │ ₹{:>10.2} │ next due {}",
            truncate(&emi.name, 30),
            emi.amount,
            emi.next_due
        );
    }

    Ok(())
}

pub fn cmd_emis_add(
    db: &Database,
    settings: &Settings,
    name: &str,
    amount: f64,
    next_due: NaiveDate,
) -> Result<()> {
    let mut ledger = db.load_ledger()?;
    ledger
        .add_emi(NewEmi {
            name: name.to_string(),
            amount,
            next_due,
        })
        .context("EMI rejected")?;

    let report = run_cycle(db, &mut ledger, settings, today());
    print_notices(&report.notices);

    println!("✅ Added EMI {} of ₹{:.2}, next due {}.", name, amount, next_due);
    Ok(())
}
