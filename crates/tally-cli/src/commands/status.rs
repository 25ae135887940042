//! Status command: totals and insights after an update cycle

use anyhow::Result;

use tally_core::{Database, Settings};

use super::{print_notices, run_cycle, today};

pub fn cmd_status(db: &Database, settings: &Settings, json: bool) -> Result<()> {
    let mut ledger = db.load_ledger()?;
    let report = run_cycle(db, &mut ledger, settings, today());

    if json {
        let snapshot = serde_json::json!({
            "totals": report.totals,
            "insights": report.insights,
            "notices": report.notices,
        });
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    print_notices(&report.notices);

    println!();
    println!("╭─────────────────────────────────────────╮");
    println!("│            💰 Tally Status              │");
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  Income:   ₹{:.2}", report.totals.income);
    println!("  Expense:  ₹{:.2}", report.totals.expense);
    println!("  Balance:  ₹{:.2}", report.totals.balance);
    println!("  Savings:  ₹{:.2}", report.totals.savings);
    println!();
    println!("  ❤️  Health Score:   {}/100", report.insights.health_score);
    println!("  ⏳ Survival Days:  {}", report.insights.survival_days);
    println!("  🔮 Month-End Forecast: ₹{}", report.insights.forecast);
    println!();
    println!(
        "  Transactions: {} | EMIs: {} | Goals: {} | Bills: {}",
        ledger.transactions().len(),
        ledger.emis().len(),
        ledger.goals().len(),
        ledger.bills().len()
    );
    println!();

    Ok(())
}
