//! SQLite-backed expense store.
//!
//! Each operation opens its own connection and releases it before
//! returning. Nothing is cached between calls, so external writers and
//! concurrent tool calls always observe the current table contents.

use rusqlite::{Connection, OptionalExtension, params};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

use super::error::LedgerResult;
use super::model::{CategorySummary, DateRange, Expense, NewExpense};
use super::schema::{SCHEMA, WRITE_PROBE};

/// Handle to the expense database file.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
    busy_timeout: Duration,
}

impl LedgerStore {
    /// Open (and initialize if needed) the database at `path`.
    ///
    /// Enables WAL journaling, creates the table, and verifies that the file
    /// accepts writes. A read-only location fails here with
    /// [`LedgerError::PermissionDenied`](super::LedgerError::PermissionDenied)
    /// rather than on the first insert.
    pub fn open(path: impl Into<PathBuf>, busy_timeout: Duration) -> LedgerResult<Self> {
        let store = Self {
            path: path.into(),
            busy_timeout,
        };

        if let Some(parent) = store.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut conn = store.connect()?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        conn.execute_batch(SCHEMA)?;

        let tx = conn.transaction()?;
        tx.execute(WRITE_PROBE, [])?;
        tx.rollback()?;

        info!("Ledger database ready at {}", store.path.display());
        Ok(store)
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> LedgerResult<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.busy_timeout(self.busy_timeout)?;
        Ok(conn)
    }

    /// Insert a new expense and return its id.
    #[instrument(skip_all, fields(date = %expense.date, category = %expense.category))]
    pub fn create(&self, expense: &NewExpense) -> LedgerResult<i64> {
        let conn = self.connect()?;
        conn.execute(
            "INSERT INTO expenses (date, amount, category, subcategory, note)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                expense.date,
                expense.amount,
                expense.category,
                expense.subcategory,
                expense.note,
            ],
        )?;
        let id = conn.last_insert_rowid();
        debug!("Inserted expense {}", id);
        Ok(id)
    }

    /// Fetch a single expense by id.
    pub fn get(&self, id: i64) -> LedgerResult<Option<Expense>> {
        let conn = self.connect()?;
        let expense = conn
            .query_row(
                &format!("SELECT {} FROM expenses WHERE id = ?1", Expense::COLUMNS),
                params![id],
                Expense::from_row,
            )
            .optional()?;
        Ok(expense)
    }

    /// List expenses within the inclusive range, newest first.
    ///
    /// Ordering is `date DESC, id DESC`, so entries sharing a date come back
    /// most recently inserted first.
    #[instrument(skip_all, fields(start = %range.start(), end = %range.end()))]
    pub fn list(&self, range: &DateRange) -> LedgerResult<Vec<Expense>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM expenses
             WHERE date BETWEEN ?1 AND ?2
             ORDER BY date DESC, id DESC",
            Expense::COLUMNS
        ))?;
        let rows = stmt.query_map(params![range.start(), range.end()], Expense::from_row)?;
        let expenses = rows.collect::<Result<Vec<_>, _>>()?;
        debug!("Listed {} expense(s)", expenses.len());
        Ok(expenses)
    }

    /// Total and count per category within the inclusive range.
    ///
    /// An empty or absent `category` summarizes every category. Groups are
    /// ordered by `total_amount DESC`, ties broken by category name.
    #[instrument(skip_all, fields(start = %range.start(), end = %range.end()))]
    pub fn summarize(
        &self,
        range: &DateRange,
        category: Option<&str>,
    ) -> LedgerResult<Vec<CategorySummary>> {
        let category = category.filter(|c| !c.is_empty());
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT category, SUM(amount) AS total_amount, COUNT(*) AS count
             FROM expenses
             WHERE date BETWEEN ?1 AND ?2 AND (?3 IS NULL OR category = ?3)
             GROUP BY category
             ORDER BY total_amount DESC, category ASC",
        )?;
        let rows = stmt.query_map(params![range.start(), range.end(), category], |row| {
            Ok(CategorySummary {
                category: row.get(0)?,
                total_amount: row.get(1)?,
                count: row.get(2)?,
            })
        })?;
        let summary = rows.collect::<Result<Vec<_>, _>>()?;
        debug!("Summarized {} categor(ies)", summary.len());
        Ok(summary)
    }

    /// Delete an expense. Returns the number of rows removed (0 or 1).
    #[instrument(skip(self))]
    pub fn delete(&self, id: i64) -> LedgerResult<usize> {
        let conn = self.connect()?;
        let deleted = conn.execute("DELETE FROM expenses WHERE id = ?1", params![id])?;
        debug!("Deleted {} row(s)", deleted);
        Ok(deleted)
    }

    /// Replace every mutable field of an expense.
    ///
    /// Returns the number of rows updated (0 or 1).
    #[instrument(skip(self, expense))]
    pub fn update(&self, id: i64, expense: &NewExpense) -> LedgerResult<usize> {
        let conn = self.connect()?;
        let updated = conn.execute(
            "UPDATE expenses
             SET date = ?1, amount = ?2, category = ?3, subcategory = ?4, note = ?5
             WHERE id = ?6",
            params![
                expense.date,
                expense.amount,
                expense.category,
                expense.subcategory,
                expense.note,
                id,
            ],
        )?;
        debug!("Updated {} row(s)", updated);
        Ok(updated)
    }

    /// Fold the WAL back into the main database file.
    pub fn close(&self) -> LedgerResult<()> {
        let conn = self.connect()?;
        conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        info!("Ledger database closed");
        Ok(())
    }
}
