//! Recurring bill persistence

use rusqlite::params;

use super::{parse_date, Database};
use crate::error::Result;
use crate::models::{Bill, BillCategory};

impl Database {
    /// Load all bills in insertion (id) order.
    pub fn load_bills(&self) -> Result<Vec<Bill>> {
        let mut stmt = self.conn().prepare(
            "SELECT id, name, amount, due, category, autopay FROM bills ORDER BY id",
        )?;

        let bills = stmt
            .query_map([], |row| {
                let due_str: String = row.get(3)?;
                let category_str: String = row.get(4)?;

                Ok(Bill {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    amount: row.get(2)?,
                    due: parse_date(&due_str, 3)?,
                    category: match category_str.as_str() {
                        "subscription" => BillCategory::Subscription,
                        _ => BillCategory::Ordinary,
                    },
                    autopay: row.get(5)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(bills)
    }

    /// Replace the stored bills with `bills`.
    pub fn save_bills(&self, bills: &[Bill]) -> Result<()> {
        let tx = self.conn().unchecked_transaction()?;
        tx.execute("DELETE FROM bills", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO bills (id, name, amount, due, category, autopay)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for b in bills {
                stmt.execute(params![
                    b.id,
                    b.name,
                    b.amount,
                    b.due.to_string(),
                    b.category.as_str(),
                    b.autopay,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}
