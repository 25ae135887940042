//! Tally Core Library
//!
//! Shared functionality for the tally personal finance tracker:
//! - Domain models for the four record collections
//! - An owned ledger with aggregate totals and validated input
//! - The protected minimum balance policy
//! - Recurrence processing for EMIs and bill autopay
//! - Proportional savings allocation across goals
//! - Derived insights (health score, survival days, forecast)
//! - The update-cycle engine sequencing all of the above
//! - SQLite persistence and settings loading

pub mod allocation;
pub mod db;
pub mod engine;
pub mod error;
pub mod insights;
pub mod ledger;
pub mod models;
pub mod policy;
pub mod recurrence;
pub mod settings;

pub use db::Database;
pub use engine::{CycleEngine, CycleReport};
pub use error::{Error, Result};
pub use insights::Insights;
pub use ledger::Ledger;
pub use models::{
    Bill, BillCategory, Emi, Goal, NewBill, NewEmi, NewGoal, NewTransaction, Notice, Totals,
    Transaction, TransactionKind,
};
pub use policy::{can_debit, PROTECTED_MINIMUM};
pub use settings::Settings;
