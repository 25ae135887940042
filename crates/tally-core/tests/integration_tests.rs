//! Integration tests for tally-core
//!
//! These tests exercise the full load → cycle → persist workflow.

use chrono::NaiveDate;
use tally_core::{
    BillCategory, CycleEngine, Database, NewBill, NewEmi, NewGoal, NewTransaction, Notice,
    Settings, TransactionKind,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_full_cycle_workflow() {
    let db = Database::in_memory().expect("Failed to create in-memory database");
    let mut ledger = db.load_ledger().unwrap();

    ledger
        .add_transaction(NewTransaction {
            date: date(2026, 8, 1),
            description: "Salary".to_string(),
            amount: 20000.0,
            kind: TransactionKind::Income,
        })
        .unwrap();
    ledger
        .add_emi(NewEmi {
            name: "Car loan".to_string(),
            amount: 2000.0,
            next_due: date(2026, 8, 5),
        })
        .unwrap();
    ledger
        .add_goal(NewGoal {
            name: "Emergency fund".to_string(),
            target: 100000.0,
        })
        .unwrap();
    ledger
        .add_bill(NewBill {
            name: "Electricity".to_string(),
            amount: 1200.0,
            due: date(2026, 8, 3),
            category: BillCategory::Ordinary,
            autopay: true,
        })
        .unwrap();

    let engine = CycleEngine::new(&Settings::default());
    let report = engine.run_cycle(&mut ledger, date(2026, 8, 6));

    // The EMI charge landed on the ledger; the autopay debit did not
    // (default behavior), but the bill advanced and notified.
    assert_eq!(ledger.transactions().len(), 2);
    assert_eq!(report.totals.balance, 18000.0);
    assert_eq!(report.totals.savings, 15000.0);
    assert_eq!(ledger.emis()[0].next_due, date(2026, 9, 5));
    assert_eq!(ledger.bills()[0].due, date(2026, 9, 3));
    assert_eq!(
        report.notices,
        vec![Notice::AutopayCharged {
            name: "Electricity".to_string(),
            amount: 1200.0,
        }]
    );

    // All of savings went to the single goal
    assert_eq!(ledger.goals()[0].saved, 15000.0);

    // Persist all four collections and reload
    db.save_transactions(ledger.transactions()).unwrap();
    db.save_emis(ledger.emis()).unwrap();
    db.save_goals(ledger.goals()).unwrap();
    db.save_bills(ledger.bills()).unwrap();

    let reloaded = db.load_ledger().unwrap();
    assert_eq!(reloaded.transactions(), ledger.transactions());
    assert_eq!(reloaded.emis(), ledger.emis());
    assert_eq!(reloaded.goals(), ledger.goals());
    assert_eq!(reloaded.bills(), ledger.bills());
}

#[test]
fn test_skipped_obligations_retry_next_cycle() {
    let db = Database::in_memory().unwrap();
    let mut ledger = db.load_ledger().unwrap();

    ledger
        .add_transaction(NewTransaction {
            date: date(2026, 8, 1),
            description: "Salary".to_string(),
            amount: 4000.0,
            kind: TransactionKind::Income,
        })
        .unwrap();
    ledger
        .add_emi(NewEmi {
            name: "Car loan".to_string(),
            amount: 2000.0,
            next_due: date(2026, 8, 5),
        })
        .unwrap();

    let engine = CycleEngine::new(&Settings::default());

    // 4000 - 2000 would breach the floor: skipped, still due
    let report = engine.run_cycle(&mut ledger, date(2026, 8, 6));
    assert_eq!(ledger.transactions().len(), 1);
    assert_eq!(ledger.emis()[0].next_due, date(2026, 8, 5));
    assert_eq!(
        report.notices,
        vec![Notice::EmiSkipped {
            name: "Car loan".to_string(),
            amount: 2000.0,
        }]
    );

    // More income arrives; the same obligation clears on the next cycle
    ledger
        .add_transaction(NewTransaction {
            date: date(2026, 8, 6),
            description: "Freelance".to_string(),
            amount: 6000.0,
            kind: TransactionKind::Income,
        })
        .unwrap();

    let report = engine.run_cycle(&mut ledger, date(2026, 8, 6));
    assert!(report.notices.is_empty());
    assert_eq!(ledger.emis()[0].next_due, date(2026, 9, 5));
    assert_eq!(report.totals.balance, 8000.0);
}

#[test]
fn test_goal_allocation_accumulates_over_persisted_cycles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tally.db");
    let engine = CycleEngine::new(&Settings::default());

    {
        let db = Database::open(&path).unwrap();
        let mut ledger = db.load_ledger().unwrap();
        ledger
            .add_transaction(NewTransaction {
                date: date(2026, 8, 1),
                description: "Salary".to_string(),
                amount: 3300.0,
                kind: TransactionKind::Income,
            })
            .unwrap();
        for name in ["A", "B", "C"] {
            ledger
                .add_goal(NewGoal {
                    name: name.to_string(),
                    target: 1000.0,
                })
                .unwrap();
        }

        // savings = 300 across three goals
        engine.run_cycle(&mut ledger, date(2026, 8, 6));
        for goal in ledger.goals() {
            assert_eq!(goal.saved, 100.0);
        }

        db.save_transactions(ledger.transactions()).unwrap();
        db.save_goals(ledger.goals()).unwrap();
    }

    // A second identical cycle against the reloaded state adds another 100
    let db = Database::open(&path).unwrap();
    let mut ledger = db.load_ledger().unwrap();
    engine.run_cycle(&mut ledger, date(2026, 8, 6));
    for goal in ledger.goals() {
        assert_eq!(goal.saved, 200.0);
    }
}
