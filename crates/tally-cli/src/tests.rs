//! CLI command tests
//!
//! Commands run against an in-memory database; cycle-running commands use
//! the real local date, so fixtures keep due dates far in the future where
//! a firing would change the assertion.

use chrono::NaiveDate;

use tally_core::{Database, Settings};

use crate::commands::{self, truncate};

fn setup_test_db() -> Database {
    Database::in_memory().unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn far_future() -> NaiveDate {
    date(2100, 1, 1)
}

// ========== Init Command Tests ==========

#[test]
fn test_cmd_init_creates_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tally.db");

    commands::cmd_init(&path).unwrap();
    assert!(path.exists());

    // Re-running init against an existing database is fine
    commands::cmd_init(&path).unwrap();
}

// ========== Transaction Command Tests ==========

#[test]
fn test_cmd_transactions_list_empty() {
    let db = setup_test_db();
    assert!(commands::cmd_transactions_list(&db, 20).is_ok());
}

#[test]
fn test_cmd_transactions_add_and_list() {
    let db = setup_test_db();
    let settings = Settings::default();

    commands::cmd_transactions_add(&db, &settings, "Salary", 20000.0, "income", None).unwrap();

    let ledger = db.load_ledger().unwrap();
    assert_eq!(ledger.transactions().len(), 1);
    assert_eq!(ledger.compute_totals().balance, 20000.0);

    assert!(commands::cmd_transactions_list(&db, 20).is_ok());
}

#[test]
fn test_cmd_transactions_add_rejects_bad_kind() {
    let db = setup_test_db();
    let settings = Settings::default();

    let result = commands::cmd_transactions_add(&db, &settings, "Oops", 100.0, "transfer", None);
    assert!(result.is_err());
    assert!(db.load_ledger().unwrap().transactions().is_empty());
}

#[test]
fn test_cmd_transactions_add_enforces_protected_minimum() {
    let db = setup_test_db();
    let settings = Settings::default();

    commands::cmd_transactions_add(&db, &settings, "Salary", 5000.0, "income", None).unwrap();
    let result =
        commands::cmd_transactions_add(&db, &settings, "Splurge", 2001.0, "expense", None);

    assert!(result.is_err());
    // The rejected expense was never persisted
    assert_eq!(db.load_ledger().unwrap().transactions().len(), 1);
}

// ========== EMI Command Tests ==========

#[test]
fn test_cmd_emis_add_and_list() {
    let db = setup_test_db();
    let settings = Settings::default();

    commands::cmd_emis_add(&db, &settings, "Car loan", 2000.0, far_future()).unwrap();

    let ledger = db.load_ledger().unwrap();
    assert_eq!(ledger.emis().len(), 1);
    assert_eq!(ledger.emis()[0].next_due, far_future());

    assert!(commands::cmd_emis_list(&db).is_ok());
}

// ========== Goal Command Tests ==========

#[test]
fn test_cmd_goals_add_allocates_current_savings() {
    let db = setup_test_db();
    let settings = Settings::default();

    commands::cmd_transactions_add(&db, &settings, "Salary", 10000.0, "income", None).unwrap();
    commands::cmd_goals_add(&db, &settings, "Trip", 100000.0).unwrap();

    // The post-add cycle allocated savings (10000 - 3000) to the new goal
    let ledger = db.load_ledger().unwrap();
    assert_eq!(ledger.goals()[0].saved, 7000.0);

    assert!(commands::cmd_goals_list(&db).is_ok());
}

#[test]
fn test_cmd_goals_add_rejects_zero_target() {
    let db = setup_test_db();
    let settings = Settings::default();

    assert!(commands::cmd_goals_add(&db, &settings, "Nothing", 0.0).is_err());
    assert!(db.load_ledger().unwrap().goals().is_empty());
}

// ========== Bill Command Tests ==========

#[test]
fn test_cmd_bills_add_and_list() {
    let db = setup_test_db();
    let settings = Settings::default();

    commands::cmd_bills_add(
        &db,
        &settings,
        "Streaming",
        499.0,
        far_future(),
        "subscription",
        true,
    )
    .unwrap();

    let ledger = db.load_ledger().unwrap();
    assert_eq!(ledger.bills().len(), 1);
    assert!(ledger.bills()[0].autopay);

    assert!(commands::cmd_bills_list(&db).is_ok());
}

#[test]
fn test_cmd_bills_add_rejects_bad_category() {
    let db = setup_test_db();
    let settings = Settings::default();

    let result = commands::cmd_bills_add(
        &db,
        &settings,
        "Streaming",
        499.0,
        far_future(),
        "ott",
        true,
    );
    assert!(result.is_err());
    assert!(db.load_ledger().unwrap().bills().is_empty());
}

// ========== Status / Cycle Command Tests ==========

#[test]
fn test_cmd_status_runs_on_empty_database() {
    let db = setup_test_db();
    let settings = Settings::default();

    assert!(commands::cmd_status(&db, &settings, false).is_ok());
    assert!(commands::cmd_status(&db, &settings, true).is_ok());
}

#[test]
fn test_cmd_cycle_fires_due_emi() {
    let db = setup_test_db();
    let settings = Settings::default();

    commands::cmd_transactions_add(&db, &settings, "Salary", 10000.0, "income", None).unwrap();
    // Due far in the past: fires on the next cycle
    commands::cmd_emis_add(&db, &settings, "Car loan", 2000.0, date(2020, 1, 1)).unwrap();

    // The add already ran a cycle, so the charge is on the ledger
    let ledger = db.load_ledger().unwrap();
    assert_eq!(ledger.transactions().len(), 2);
    assert_eq!(ledger.emis()[0].next_due, date(2020, 2, 1));

    // An explicit cycle fires it again (still overdue) and persists
    commands::cmd_cycle(&db, &settings).unwrap();
    let ledger = db.load_ledger().unwrap();
    assert_eq!(ledger.transactions().len(), 3);
    assert_eq!(ledger.emis()[0].next_due, date(2020, 3, 1));
}

// ========== Helper Tests ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a very long description", 10), "a very ...");
}
