//! Savings goal persistence

use rusqlite::params;

use super::Database;
use crate::error::Result;
use crate::models::Goal;

impl Database {
    /// Load all goals in insertion (id) order.
    pub fn load_goals(&self) -> Result<Vec<Goal>> {
        let mut stmt = self
            .conn()
            .prepare("SELECT id, name, target, saved FROM goals ORDER BY id")?;

        let goals = stmt
            .query_map([], |row| {
                Ok(Goal {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    target: row.get(2)?,
                    saved: row.get(3)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(goals)
    }

    /// Replace the stored goals with `goals`.
    pub fn save_goals(&self, goals: &[Goal]) -> Result<()> {
        let tx = self.conn().unchecked_transaction()?;
        tx.execute("DELETE FROM goals", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO goals (id, name, target, saved) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for g in goals {
                stmt.execute(params![g.id, g.name, g.target, g.saved])?;
            }
        }
        tx.commit()?;
        Ok(())
    }
}
