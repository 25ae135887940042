//! CLI command implementations
//!
//! Commands are organized by domain:
//! - `core` - init/cycle commands and shared helpers (open_db, persistence)
//! - `status` - totals and insights view
//! - `transactions` - transaction commands (list, add)
//! - `emis` - recurring installment commands
//! - `goals` - savings goal commands
//! - `bills` - recurring bill commands

pub mod bills;
pub mod core;
pub mod emis;
pub mod goals;
pub mod status;
pub mod transactions;

// Re-export command functions for main.rs
pub use bills::*;
pub use core::*;
pub use emis::*;
pub use goals::*;
pub use status::*;
pub use transactions::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        format!("{}...", &s[..max.saturating_sub(3)])
    }
}
