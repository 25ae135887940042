//! Core commands (init, cycle) and shared helpers

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::warn;

use tally_core::{CycleEngine, CycleReport, Database, Ledger, Notice, Settings};

/// Open the database, creating it on first use
pub fn open_db(path: &Path) -> Result<Database> {
    Database::open(path)
        .with_context(|| format!("Failed to open database at {}", path.display()))
}

/// Today in the local timezone
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn cmd_init(db_path: &Path) -> Result<()> {
    open_db(db_path)?;
    println!("✅ Database initialized at {}", db_path.display());
    println!("   Record income with 'tally transactions add' to get started.");
    Ok(())
}

/// Run one update cycle against the ledger, then persist all four
/// collections.
///
/// Persistence failures are not fatal: each failed collection produces a
/// notice and the in-memory state stays authoritative for this run.
pub fn run_cycle(
    db: &Database,
    ledger: &mut Ledger,
    settings: &Settings,
    today: NaiveDate,
) -> CycleReport {
    let mut report = CycleEngine::new(settings).run_cycle(ledger, today);
    report.notices.extend(persist_ledger(db, ledger));
    report
}

fn persist_ledger(db: &Database, ledger: &Ledger) -> Vec<Notice> {
    let saves = [
        ("transactions", db.save_transactions(ledger.transactions())),
        ("emis", db.save_emis(ledger.emis())),
        ("goals", db.save_goals(ledger.goals())),
        ("bills", db.save_bills(ledger.bills())),
    ];

    let mut notices = Vec::new();
    for (collection, result) in saves {
        if let Err(e) = result {
            warn!(collection, error = %e, "failed to persist collection");
            notices.push(Notice::SaveFailed {
                collection: collection.to_string(),
            });
        }
    }
    notices
}

/// Print cycle notifications, one per line
pub fn print_notices(notices: &[Notice]) {
    for notice in notices {
        println!("  🔔 {}", notice);
    }
}

pub fn cmd_cycle(db: &Database, settings: &Settings) -> Result<()> {
    let mut ledger = db.load_ledger()?;
    let report = run_cycle(db, &mut ledger, settings, today());

    print_notices(&report.notices);
    println!(
        "✅ Cycle complete. Balance: ₹{:.2} | Savings: ₹{:.2}",
        report.totals.balance, report.totals.savings
    );
    Ok(())
}
