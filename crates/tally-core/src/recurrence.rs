//! Recurrence engine: advances date-driven obligations
//!
//! EMIs and autopay-enabled bills fire when their due date has arrived.
//! Each firing advances the due date by exactly one calendar month — an
//! obligation that is several months overdue fires once per cycle and is
//! immediately due again on the next one.
//!
//! Obligations are processed in insertion order, and each one is checked
//! against the balance left behind by the previous one. The running balance
//! is an accumulator threaded through the pass, never a snapshot.

use chrono::{Months, NaiveDate};
use tracing::debug;

use crate::models::{Bill, Emi, NewTransaction, Notice, TransactionKind};
use crate::policy::can_debit;

/// Result of one processing pass over a collection of obligations
#[derive(Debug, Clone)]
pub struct DebitRun {
    /// Expense transactions to append to the ledger, dated at the original
    /// due dates
    pub charges: Vec<NewTransaction>,
    /// Balance after all debits in this pass
    pub final_balance: f64,
    pub notices: Vec<Notice>,
}

/// Advance a due date by one calendar month.
///
/// The day of month is preserved where it exists; chrono clamps it for
/// shorter months (Jan 31 -> Feb 28/29).
fn one_month_later(date: NaiveDate) -> NaiveDate {
    date.checked_add_months(Months::new(1)).unwrap_or(date)
}

/// Process every EMI whose due date has arrived.
///
/// An EMI that cannot be charged without breaching the protected minimum is
/// skipped whole: no charge, no date advancement, one notice. It stays due
/// and is retried on the next cycle.
pub fn process_emis(emis: &mut [Emi], balance: f64, today: NaiveDate) -> DebitRun {
    let mut run = DebitRun {
        charges: Vec::new(),
        final_balance: balance,
        notices: Vec::new(),
    };

    for emi in emis.iter_mut() {
        if emi.next_due > today {
            continue;
        }

        if !can_debit(run.final_balance, emi.amount) {
            debug!(name = %emi.name, amount = emi.amount, "EMI skipped, low balance");
            run.notices.push(Notice::EmiSkipped {
                name: emi.name.clone(),
                amount: emi.amount,
            });
            continue;
        }

        run.charges.push(NewTransaction {
            date: emi.next_due,
            description: format!("EMI - {}", emi.name),
            amount: emi.amount,
            kind: TransactionKind::Expense,
        });
        run.final_balance -= emi.amount;
        emi.next_due = one_month_later(emi.next_due);
        debug!(name = %emi.name, next_due = %emi.next_due, "EMI charged");
    }

    run
}

/// Process every autopay-enabled bill whose due date has arrived.
///
/// A successful autopay debits the running balance and advances the bill by
/// one month; a blocked one leaves the bill unchanged. When
/// `record_charges` is set, each successful autopay also produces an
/// expense transaction dated at the bill's original due date; by default
/// the debit only affects the running balance.
pub fn process_bill_autopay(
    bills: &mut [Bill],
    balance: f64,
    today: NaiveDate,
    record_charges: bool,
) -> DebitRun {
    let mut run = DebitRun {
        charges: Vec::new(),
        final_balance: balance,
        notices: Vec::new(),
    };

    for bill in bills.iter_mut() {
        if !bill.autopay || bill.due > today {
            continue;
        }

        if !can_debit(run.final_balance, bill.amount) {
            debug!(name = %bill.name, amount = bill.amount, "autopay blocked, low balance");
            run.notices.push(Notice::AutopayBlocked {
                name: bill.name.clone(),
                amount: bill.amount,
            });
            continue;
        }

        if record_charges {
            run.charges.push(NewTransaction {
                date: bill.due,
                description: format!("Autopay - {}", bill.name),
                amount: bill.amount,
                kind: TransactionKind::Expense,
            });
        }
        run.final_balance -= bill.amount;
        run.notices.push(Notice::AutopayCharged {
            name: bill.name.clone(),
            amount: bill.amount,
        });
        bill.due = one_month_later(bill.due);
        debug!(name = %bill.name, due = %bill.due, "autopay charged");
    }

    run
}
