//! Recurring installment persistence

use rusqlite::params;

use super::{parse_date, Database};
use crate::error::Result;
use crate::models::Emi;

impl Database {
    /// Load all EMIs in insertion (id) order.
    pub fn load_emis(&self) -> Result<Vec<Emi>> {
        let mut stmt = self
            .conn()
            .prepare("SELECT id, name, amount, next_due FROM emis ORDER BY id")?;

        let emis = stmt
            .query_map([], |row| {
                let due_str: String = row.get(3)?;
                Ok(Emi {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    amount: row.get(2)?,
                    next_due: parse_date(&due_str, 3)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(emis)
    }

    /// Replace the stored EMIs with `emis`.
    pub fn save_emis(&self, emis: &[Emi]) -> Result<()> {
        let tx = self.conn().unchecked_transaction()?;
        tx.execute("DELETE FROM emis", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO emis (id, name, amount, next_due) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for e in emis {
                stmt.execute(params![e.id, e.name, e.amount, e.next_due.to_string()])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}
