//! Domain models for tally

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A ledger transaction
///
/// Transactions are append-only: they are created by user input or by the
/// recurrence engine (EMI charges, optionally bill autopay charges) and are
/// never edited or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
}

/// A new transaction before the ledger assigns it an id
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub date: NaiveDate,
    pub description: String,
    pub amount: f64,
    pub kind: TransactionKind,
}

/// Transaction direction
///
/// The classification is binary: everything that is not income counts as
/// an expense when totals are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(format!("Unknown transaction kind: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recurring loan installment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emi {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    /// Advanced by exactly one calendar month each time the installment fires
    pub next_due: NaiveDate,
}

/// A new EMI before the ledger assigns it an id
#[derive(Debug, Clone)]
pub struct NewEmi {
    pub name: String,
    pub amount: f64,
    pub next_due: NaiveDate,
}

/// A recurring bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: i64,
    pub name: String,
    pub amount: f64,
    /// Advanced by one calendar month on successful autopay; unchanged on
    /// failed autopay
    pub due: NaiveDate,
    pub category: BillCategory,
    pub autopay: bool,
}

/// A new bill before the ledger assigns it an id
#[derive(Debug, Clone)]
pub struct NewBill {
    pub name: String,
    pub amount: f64,
    pub due: NaiveDate,
    pub category: BillCategory,
    pub autopay: bool,
}

/// Bill category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillCategory {
    Ordinary,
    Subscription,
}

impl BillCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ordinary => "ordinary",
            Self::Subscription => "subscription",
        }
    }
}

impl std::str::FromStr for BillCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ordinary" => Ok(Self::Ordinary),
            "subscription" => Ok(Self::Subscription),
            _ => Err(format!("Unknown bill category: {}", s)),
        }
    }
}

impl std::fmt::Display for BillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A savings goal
///
/// `saved` starts at 0, only ever grows via allocation, and is clamped at
/// `target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub name: String,
    pub target: f64,
    pub saved: f64,
}

impl Goal {
    /// Whether the goal has reached its target
    pub fn is_complete(&self) -> bool {
        self.saved >= self.target
    }
}

/// A new goal before the ledger assigns it an id
#[derive(Debug, Clone)]
pub struct NewGoal {
    pub name: String,
    pub target: f64,
}

/// Aggregate totals derived from the transaction log
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
    /// income - expense
    pub balance: f64,
    /// Balance in excess of the protected minimum, floored at 0
    pub savings: f64,
}

/// A notification produced while processing automatic debits
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Notice {
    /// An EMI was due but charging it would breach the protected minimum
    EmiSkipped { name: String, amount: f64 },
    /// A bill was charged via autopay
    AutopayCharged { name: String, amount: f64 },
    /// A bill was due for autopay but charging it would breach the
    /// protected minimum
    AutopayBlocked { name: String, amount: f64 },
    /// A collection could not be persisted after the cycle
    SaveFailed { collection: String },
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmiSkipped { name, .. } => {
                write!(f, "EMI {} skipped: low balance", name)
            }
            Self::AutopayCharged { name, amount } => {
                write!(f, "Autopay successful for {} (₹{:.2})", name, amount)
            }
            Self::AutopayBlocked { name, .. } => {
                write!(
                    f,
                    "Autopay failed for {}: minimum balance protection",
                    name
                )
            }
            Self::SaveFailed { collection } => {
                write!(f, "Could not save {}; changes kept in memory", collection)
            }
        }
    }
}
