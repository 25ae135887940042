//! Savings goal command implementations

use anyhow::{Context, Result};

use tally_core::{Database, NewGoal, Settings};

use super::{print_notices, run_cycle, today, truncate};

pub fn cmd_goals_list(db: &Database) -> Result<()> {
    let ledger = db.load_ledger()?;
    let goals = ledger.goals();

    if goals.is_empty() {
        println!("No goals yet. Add one with:");
        println!("  tally goals add --name 'Emergency fund' --target 50000");
        return Ok(());
    }

    println!();
    println!("🎯 Savings Goals");
    println!("   ─────────────────────────────────────────────────────────────");

    for goal in goals {
        let marker = if goal.is_complete() { " ✔" } else { "" };
        println!(
            "   {:<30} │ ₹{:>10.2} / ₹{:>10.2}{}",
            truncate(&goal.name, 30),
            goal.saved,
            goal.target,
            marker
        );
    }

    Ok(())
}

pub fn cmd_goals_add(db: &Database, settings: &Settings, name: &str, target: f64) -> Result<()> {
    let mut ledger = db.load_ledger()?;
    ledger
        .add_goal(NewGoal {
            name: name.to_string(),
            target,
        })
        .context("Goal rejected")?;

    let report = run_cycle(db, &mut ledger, settings, today());
    print_notices(&report.notices);

    // The cycle already allocated current savings to the new goal
    let saved = ledger
        .goals()
        .last()
        .map(|g| g.saved)
        .unwrap_or_default();
    println!(
        "✅ Added goal {} with target ₹{:.2} (₹{:.2} allocated).",
        name, target, saved
    );
    Ok(())
}
