//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Tally - personal finance tracker with automatic allocations
#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Track income, EMIs, bills and goals from the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Database path
    #[arg(long, default_value = "tally.db", global = true)]
    pub db: PathBuf,

    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database
    Init,

    /// Run an update cycle and show totals and insights
    Status {
        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run one update cycle (EMIs, autopay, goal allocation)
    Cycle,

    /// Manage transactions
    Transactions {
        #[command(subcommand)]
        action: Option<TransactionsAction>,
    },

    /// Manage recurring installments
    Emis {
        #[command(subcommand)]
        action: Option<EmisAction>,
    },

    /// Manage savings goals
    Goals {
        #[command(subcommand)]
        action: Option<GoalsAction>,
    },

    /// Manage recurring bills
    Bills {
        #[command(subcommand)]
        action: Option<BillsAction>,
    },
}

#[derive(Subcommand)]
pub enum TransactionsAction {
    /// List transactions
    List {
        /// Number of most recent transactions to show
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Add a transaction, then run an update cycle
    Add {
        /// What the money was for
        #[arg(long)]
        description: String,

        /// Amount in rupees
        #[arg(long)]
        amount: f64,

        /// income or expense
        #[arg(long)]
        kind: String,

        /// Calendar date (YYYY-MM-DD); today if omitted
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[derive(Subcommand)]
pub enum EmisAction {
    /// List recurring installments
    List,

    /// Add an installment, then run an update cycle
    Add {
        /// Loan or installment name
        #[arg(long)]
        name: String,

        /// Installment amount in rupees
        #[arg(long)]
        amount: f64,

        /// Next due date (YYYY-MM-DD)
        #[arg(long)]
        next_due: NaiveDate,
    },
}

#[derive(Subcommand)]
pub enum GoalsAction {
    /// List savings goals
    List,

    /// Add a goal, then run an update cycle
    Add {
        /// Goal name
        #[arg(long)]
        name: String,

        /// Target amount in rupees
        #[arg(long)]
        target: f64,
    },
}

#[derive(Subcommand)]
pub enum BillsAction {
    /// List recurring bills
    List,

    /// Add a bill, then run an update cycle
    Add {
        /// Bill name
        #[arg(long)]
        name: String,

        /// Bill amount in rupees
        #[arg(long)]
        amount: f64,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: NaiveDate,

        /// ordinary or subscription
        #[arg(long, default_value = "ordinary")]
        category: String,

        /// Charge this bill automatically when due
        #[arg(long)]
        autopay: bool,
    },
}
