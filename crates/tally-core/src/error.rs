//! Error types for tally

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Expense of ₹{amount:.2} would drop the balance below the protected minimum of ₹{minimum:.2}")]
    ProtectedBalance { amount: f64, minimum: f64 },

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
