//! Tally CLI - personal finance tracker
//!
//! Usage:
//!   tally init                               Initialize database
//!   tally transactions add --amount 20000 \
//!       --kind income --description Salary   Record a transaction
//!   tally status                             Totals and insights
//!   tally cycle                              Process due EMIs and autopay

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;
use tally_core::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let settings = Settings::load(cli.settings.as_deref())?;

    match cli.command {
        Commands::Init => commands::cmd_init(&cli.db),
        Commands::Status { json } => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_status(&db, &settings, json)
        }
        Commands::Cycle => {
            let db = commands::open_db(&cli.db)?;
            commands::cmd_cycle(&db, &settings)
        }
        Commands::Transactions { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None => commands::cmd_transactions_list(&db, 20),
                Some(TransactionsAction::List { limit }) => {
                    commands::cmd_transactions_list(&db, limit)
                }
                Some(TransactionsAction::Add {
                    description,
                    amount,
                    kind,
                    date,
                }) => commands::cmd_transactions_add(
                    &db,
                    &settings,
                    &description,
                    amount,
                    &kind,
                    date,
                ),
            }
        }
        Commands::Emis { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None | Some(EmisAction::List) => commands::cmd_emis_list(&db),
                Some(EmisAction::Add {
                    name,
                    amount,
                    next_due,
                }) => commands::cmd_emis_add(&db, &settings, &name, amount, next_due),
            }
        }
        Commands::Goals { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None | Some(GoalsAction::List) => commands::cmd_goals_list(&db),
                Some(GoalsAction::Add { name, target }) => {
                    commands::cmd_goals_add(&db, &settings, &name, target)
                }
            }
        }
        Commands::Bills { action } => {
            let db = commands::open_db(&cli.db)?;
            match action {
                None | Some(BillsAction::List) => commands::cmd_bills_list(&db),
                Some(BillsAction::Add {
                    name,
                    amount,
                    due,
                    category,
                    autopay,
                }) => commands::cmd_bills_add(
                    &db,
                    &settings,
                    &name,
                    amount,
                    due,
                    &category,
                    autopay,
                ),
            }
        }
    }
}
