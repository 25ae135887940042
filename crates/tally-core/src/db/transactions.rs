//! Transaction log persistence

use rusqlite::params;

use super::{parse_date, Database};
use crate::error::Result;
use crate::models::{Transaction, TransactionKind};

impl Database {
    /// Load the transaction log in insertion (id) order.
    pub fn load_transactions(&self) -> Result<Vec<Transaction>> {
        let mut stmt = self.conn().prepare(
            "SELECT id, date, description, amount, kind FROM transactions ORDER BY id",
        )?;

        let transactions = stmt
            .query_map([], |row| {
                let date_str: String = row.get(1)?;
                let kind_str: String = row.get(4)?;

                Ok(Transaction {
                    id: row.get(0)?,
                    date: parse_date(&date_str, 1)?,
                    description: row.get(2)?,
                    amount: row.get(3)?,
                    // Binary classification: anything that isn't income is
                    // an expense
                    kind: match kind_str.as_str() {
                        "income" => TransactionKind::Income,
                        _ => TransactionKind::Expense,
                    },
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(transactions)
    }

    /// Replace the stored transaction log with `transactions`.
    pub fn save_transactions(&self, transactions: &[Transaction]) -> Result<()> {
        let tx = self.conn().unchecked_transaction()?;
        tx.execute("DELETE FROM transactions", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO transactions (id, date, description, amount, kind)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for t in transactions {
                stmt.execute(params![
                    t.id,
                    t.date.to_string(),
                    t.description,
                    t.amount,
                    t.kind.as_str(),
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}
