//! Cycle engine: sequences one full update cycle
//!
//! A cycle runs at startup and after every user mutation:
//!
//! 1. compute totals from the transaction log
//! 2. process due EMIs against the current balance
//! 3. process bill autopay against the balance the EMIs left behind
//! 4. recompute totals (EMI charges are now on the ledger)
//! 5. allocate the resulting savings across goals
//! 6. derive insights from the recomputed totals
//!
//! The cycle never fails: obligations that cannot be honored are skipped
//! with a notice and retried next cycle.

use chrono::NaiveDate;
use tracing::debug;

use crate::insights::Insights;
use crate::ledger::Ledger;
use crate::models::{Notice, Totals};
use crate::settings::Settings;
use crate::{allocation, recurrence};

/// Orchestrates the update cycle over an owned ledger
#[derive(Debug, Clone, Copy, Default)]
pub struct CycleEngine {
    /// Mirror successful autopay debits into the transaction log
    autopay_ledger_entries: bool,
}

/// Snapshot handed to display and persistence after a cycle
#[derive(Debug, Clone)]
pub struct CycleReport {
    /// Totals recomputed after recurrence processing
    pub totals: Totals,
    pub insights: Insights,
    /// Notifications collected from EMI and autopay processing, in firing
    /// order
    pub notices: Vec<Notice>,
}

impl CycleEngine {
    pub fn new(settings: &Settings) -> Self {
        Self {
            autopay_ledger_entries: settings.autopay_ledger_entries,
        }
    }

    /// Run one full update cycle against `ledger` as of `today`.
    pub fn run_cycle(&self, ledger: &mut Ledger, today: NaiveDate) -> CycleReport {
        let totals = ledger.compute_totals();
        debug!(balance = totals.balance, "cycle start");

        let emi_run = recurrence::process_emis(ledger.emis_mut(), totals.balance, today);
        for charge in emi_run.charges {
            ledger.append_transaction(charge);
        }

        let autopay_run = recurrence::process_bill_autopay(
            ledger.bills_mut(),
            emi_run.final_balance,
            today,
            self.autopay_ledger_entries,
        );
        for charge in autopay_run.charges {
            ledger.append_transaction(charge);
        }

        // EMI charges (and autopay charges, when mirrored) are on the ledger
        // now, so the recomputed totals see them. Unmirrored autopay debits
        // exist only in the threaded balance above.
        let totals = ledger.compute_totals();
        allocation::allocate(totals.savings, ledger.goals_mut());

        let insights = Insights::derive(&totals, today);

        let mut notices = emi_run.notices;
        notices.extend(autopay_run.notices);
        debug!(
            balance = totals.balance,
            notices = notices.len(),
            "cycle complete"
        );

        CycleReport {
            totals,
            insights,
            notices,
        }
    }
}
