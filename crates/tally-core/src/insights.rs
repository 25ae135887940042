//! Insight engine: derived financial indicators
//!
//! Pure functions over the aggregate totals; nothing here mutates state.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::Totals;

/// The three derived indicators computed at the end of each cycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Insights {
    pub health_score: u8,
    pub survival_days: i64,
    pub forecast: i64,
}

impl Insights {
    pub fn derive(totals: &Totals, today: NaiveDate) -> Self {
        Self {
            health_score: health_score(totals),
            survival_days: survival_days(totals),
            forecast: forecast(totals, today),
        }
    }
}

/// Savings-to-balance health heuristic, capped at 100.
///
/// The +20 baseline means the score bottoms out at exactly 20 when savings
/// is zero (savings is never negative, so the ratio isn't either).
pub fn health_score(totals: &Totals) -> u8 {
    let ratio = if totals.balance > 0.0 {
        totals.savings / totals.balance * 100.0
    } else {
        0.0
    };
    (ratio + 20.0).round().min(100.0) as u8
}

/// How many days the current balance covers at the 30-day average burn
/// rate. Zero when there is no spending on record; negative when the
/// balance itself is negative.
pub fn survival_days(totals: &Totals) -> i64 {
    if totals.expense == 0.0 {
        return 0;
    }
    (totals.balance / (totals.expense / 30.0)).floor() as i64
}

/// Naive projected end-of-period balance, assuming the current burn rate
/// continues and every month has exactly 30 days.
pub fn forecast(totals: &Totals, today: NaiveDate) -> i64 {
    let avg_daily = totals.expense / 30.0;
    let days_left = 30 - today.day() as i64;
    (totals.balance - avg_daily * days_left as f64).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(income: f64, expense: f64) -> Totals {
        let balance = income - expense;
        Totals {
            income,
            expense,
            balance,
            savings: (balance - crate::policy::PROTECTED_MINIMUM).max(0.0),
        }
    }

    #[test]
    fn test_health_score_floor_is_twenty() {
        // Balance below the protected minimum means zero savings
        let score = health_score(&totals(2000.0, 0.0));
        assert_eq!(score, 20);

        // Non-positive balance takes the zero-ratio branch
        let score = health_score(&totals(1000.0, 2000.0));
        assert_eq!(score, 20);
    }

    #[test]
    fn test_health_score_capped_at_hundred() {
        // Savings ratio near 100% would push the score past the cap
        let score = health_score(&totals(1_000_000.0, 0.0));
        assert_eq!(score, 100);
    }

    #[test]
    fn test_health_score_midrange() {
        // balance 10000, savings 7000 -> ratio 70, score 90
        let score = health_score(&totals(10000.0, 0.0));
        assert_eq!(score, 90);
    }

    #[test]
    fn test_survival_days() {
        assert_eq!(survival_days(&totals(5000.0, 0.0)), 0);

        // balance 7000, burn 3000/30 = 100/day
        assert_eq!(survival_days(&totals(10000.0, 3000.0)), 70);

        // Negative balance yields a negative estimate
        assert_eq!(survival_days(&totals(0.0, 3000.0)), -30);
    }

    #[test]
    fn test_forecast_is_deterministic_for_a_pinned_date() {
        let t = Totals {
            income: 13000.0,
            expense: 3000.0,
            balance: 10000.0,
            savings: 7000.0,
        };
        let today = NaiveDate::from_ymd_opt(2026, 8, 10).unwrap();

        // avg daily 100, 20 days left -> 10000 - 2000
        assert_eq!(forecast(&t, today), 8000);
    }

    #[test]
    fn test_forecast_on_the_thirty_first() {
        let t = Totals {
            income: 13000.0,
            expense: 3000.0,
            balance: 10000.0,
            savings: 7000.0,
        };
        let today = NaiveDate::from_ymd_opt(2026, 8, 31).unwrap();

        // The fixed 30-day month makes days_left -1 on the 31st
        assert_eq!(forecast(&t, today), 10100);
    }
}
