//! SQLite persistence for the four record collections
//!
//! This module is organized by domain:
//! - `transactions` - transaction log load/save
//! - `emis` - recurring installment load/save
//! - `goals` - savings goal load/save
//! - `bills` - recurring bill load/save
//!
//! Each collection is persisted as an independently-keyed sequence: saving
//! replaces the whole table inside one SQLite transaction, loading returns
//! the rows in id order. Dates are stored as ISO `YYYY-MM-DD` text.

use std::path::Path;

use chrono::NaiveDate;
use rusqlite::Connection;
use tracing::info;

use crate::error::Result;
use crate::ledger::Ledger;

mod bills;
mod emis;
mod goals;
mod transactions;

/// Parse an ISO calendar date from a text column
pub(crate) fn parse_date(s: &str, column: usize) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
    })
}

/// Database wrapper owning the single connection
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database at `path` and run migrations.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.run_migrations()?;
        Ok(db)
    }

    /// Create an in-memory database (for testing)
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.run_migrations()?;
        Ok(db)
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Load all four collections into a fresh ledger.
    pub fn load_ledger(&self) -> Result<Ledger> {
        Ok(Ledger::from_records(
            self.load_transactions()?,
            self.load_emis()?,
            self.load_goals()?,
            self.load_bills()?,
        ))
    }

    fn run_migrations(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            -- Transaction log (append-only)
            CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY,
                date DATE NOT NULL,
                description TEXT NOT NULL,
                amount REAL NOT NULL,
                kind TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);

            -- Recurring installments
            CREATE TABLE IF NOT EXISTS emis (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                amount REAL NOT NULL,
                next_due DATE NOT NULL
            );

            -- Savings goals
            CREATE TABLE IF NOT EXISTS goals (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                target REAL NOT NULL,
                saved REAL NOT NULL DEFAULT 0
            );

            -- Recurring bills
            CREATE TABLE IF NOT EXISTS bills (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                amount REAL NOT NULL,
                due DATE NOT NULL,
                category TEXT NOT NULL,
                autopay BOOLEAN NOT NULL DEFAULT 0
            );

            CREATE INDEX IF NOT EXISTS idx_bills_due ON bills(due);
            "#,
        )?;

        info!("Database schema initialized");
        Ok(())
    }
}
