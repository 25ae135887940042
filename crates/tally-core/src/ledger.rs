//! The ledger: owned holder of the four record collections
//!
//! The ledger is the single owner of all in-memory state. The orchestrator
//! borrows it mutably for the duration of one update cycle; nothing else
//! writes to it. Records are only ever appended or mutated in place —
//! deletion is not part of this system.

use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{
    Bill, Emi, Goal, NewBill, NewEmi, NewGoal, NewTransaction, Totals, Transaction,
    TransactionKind,
};
use crate::policy::PROTECTED_MINIMUM;

/// In-memory ledger holding transactions, EMIs, goals, and bills.
///
/// All four record kinds share one id sequence, so an id identifies a record
/// across the whole ledger.
#[derive(Debug, Clone)]
pub struct Ledger {
    transactions: Vec<Transaction>,
    emis: Vec<Emi>,
    goals: Vec<Goal>,
    bills: Vec<Bill>,
    next_id: i64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            emis: Vec::new(),
            goals: Vec::new(),
            bills: Vec::new(),
            next_id: 1,
        }
    }

    /// Rebuild a ledger from previously persisted collections.
    ///
    /// The id sequence resumes after the highest id found in any collection.
    pub fn from_records(
        transactions: Vec<Transaction>,
        emis: Vec<Emi>,
        goals: Vec<Goal>,
        bills: Vec<Bill>,
    ) -> Self {
        let max_id = transactions
            .iter()
            .map(|t| t.id)
            .chain(emis.iter().map(|e| e.id))
            .chain(goals.iter().map(|g| g.id))
            .chain(bills.iter().map(|b| b.id))
            .max()
            .unwrap_or(0);

        Self {
            transactions,
            emis,
            goals,
            bills,
            next_id: max_id + 1,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn emis(&self) -> &[Emi] {
        &self.emis
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn bills(&self) -> &[Bill] {
        &self.bills
    }

    pub(crate) fn emis_mut(&mut self) -> &mut [Emi] {
        &mut self.emis
    }

    pub(crate) fn goals_mut(&mut self) -> &mut [Goal] {
        &mut self.goals
    }

    pub(crate) fn bills_mut(&mut self) -> &mut [Bill] {
        &mut self.bills
    }

    fn allocate_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Compute aggregate totals over the transaction log.
    ///
    /// Income is the sum of income transactions, expense the sum of
    /// everything else; savings is the balance in excess of the protected
    /// minimum, floored at zero. Defined for any ledger, including empty.
    pub fn compute_totals(&self) -> Totals {
        let mut income = 0.0;
        let mut expense = 0.0;

        for tx in &self.transactions {
            match tx.kind {
                TransactionKind::Income => income += tx.amount,
                _ => expense += tx.amount,
            }
        }

        let balance = income - expense;
        let savings = (balance - PROTECTED_MINIMUM).max(0.0);

        Totals {
            income,
            expense,
            balance,
            savings,
        }
    }

    /// Add a user-entered transaction.
    ///
    /// Rejects non-finite or negative amounts, and rejects expenses that
    /// would take the balance below the protected minimum. This pre-check is
    /// the input-side counterpart of the automatic-debit policy: a rejected
    /// input mutates nothing.
    pub fn add_transaction(&mut self, new: NewTransaction) -> Result<&Transaction> {
        if !new.amount.is_finite() || new.amount < 0.0 {
            return Err(Error::InvalidInput(format!(
                "transaction amount must be a non-negative number, got {}",
                new.amount
            )));
        }

        if new.kind == TransactionKind::Expense {
            let balance = self.compute_totals().balance;
            if balance - new.amount < PROTECTED_MINIMUM {
                return Err(Error::ProtectedBalance {
                    amount: new.amount,
                    minimum: PROTECTED_MINIMUM,
                });
            }
        }

        Ok(self.append_transaction(new))
    }

    /// Append a transaction the engine has already vetted.
    ///
    /// EMI and autopay charges pass the protected-minimum check before they
    /// are generated, so they bypass the input pre-check here.
    pub(crate) fn append_transaction(&mut self, new: NewTransaction) -> &Transaction {
        let id = self.allocate_id();
        debug!(id, description = %new.description, "appending transaction");
        self.transactions.push(Transaction {
            id,
            date: new.date,
            description: new.description,
            amount: new.amount,
            kind: new.kind,
        });
        self.transactions.last().expect("just pushed")
    }

    /// Add a recurring installment
    pub fn add_emi(&mut self, new: NewEmi) -> Result<&Emi> {
        if !new.amount.is_finite() || new.amount < 0.0 {
            return Err(Error::InvalidInput(format!(
                "EMI amount must be a non-negative number, got {}",
                new.amount
            )));
        }

        let id = self.allocate_id();
        self.emis.push(Emi {
            id,
            name: new.name,
            amount: new.amount,
            next_due: new.next_due,
        });
        Ok(self.emis.last().expect("just pushed"))
    }

    /// Add a savings goal. `saved` starts at zero.
    pub fn add_goal(&mut self, new: NewGoal) -> Result<&Goal> {
        if !new.target.is_finite() || new.target <= 0.0 {
            return Err(Error::InvalidInput(format!(
                "goal target must be a positive number, got {}",
                new.target
            )));
        }

        let id = self.allocate_id();
        self.goals.push(Goal {
            id,
            name: new.name,
            target: new.target,
            saved: 0.0,
        });
        Ok(self.goals.last().expect("just pushed"))
    }

    /// Add a recurring bill
    pub fn add_bill(&mut self, new: NewBill) -> Result<&Bill> {
        if new.name.trim().is_empty() {
            return Err(Error::InvalidInput("bill name must not be empty".into()));
        }
        if !new.amount.is_finite() || new.amount < 0.0 {
            return Err(Error::InvalidInput(format!(
                "bill amount must be a non-negative number, got {}",
                new.amount
            )));
        }

        let id = self.allocate_id();
        self.bills.push(Bill {
            id,
            name: new.name,
            amount: new.amount,
            due: new.due,
            category: new.category,
            autopay: new.autopay,
        });
        Ok(self.bills.last().expect("just pushed"))
    }
}
