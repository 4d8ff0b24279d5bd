//! Expense records and the argument types accepted by the store.

use rusqlite::Row;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::error::{LedgerError, LedgerResult};

/// One row of the `expenses` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Expense {
    /// Auto-assigned identifier, never reused.
    pub id: i64,
    /// Expense date (YYYY-MM-DD).
    pub date: String,
    pub amount: f64,
    pub category: String,
    pub subcategory: String,
    pub note: String,
}

impl Expense {
    /// Column list matching [`Expense::from_row`].
    pub(crate) const COLUMNS: &'static str = "id, date, amount, category, subcategory, note";

    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            date: row.get(1)?,
            amount: row.get(2)?,
            category: row.get(3)?,
            subcategory: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
            note: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
        })
    }
}

/// The mutable fields of an expense, validated for storage.
///
/// Used both for inserts and for full-row updates.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub date: String,
    pub amount: f64,
    pub category: String,
    pub subcategory: String,
    pub note: String,
}

impl NewExpense {
    /// Validate and build a new expense.
    ///
    /// Only the storage format of `date` is checked; any finite amount and
    /// any category string are accepted.
    pub fn new(
        date: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
        subcategory: impl Into<String>,
        note: impl Into<String>,
    ) -> LedgerResult<Self> {
        let date = date.into();
        validate_date("date", &date)?;

        if !amount.is_finite() {
            return Err(LedgerError::validation(format!(
                "amount must be a finite number, got {}",
                amount
            )));
        }

        Ok(Self {
            date,
            amount,
            category: category.into(),
            subcategory: subcategory.into(),
            note: note.into(),
        })
    }
}

/// Inclusive `[start, end]` date range compared as zero-padded strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    start: String,
    end: String,
}

impl DateRange {
    /// Build a range, rejecting malformed endpoints.
    ///
    /// An inverted range is valid and simply matches nothing.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> LedgerResult<Self> {
        let start = start.into();
        let end = end.into();
        validate_date("start_date", &start)?;
        validate_date("end_date", &end)?;
        Ok(Self { start, end })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }
}

/// Aggregate of one category over a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CategorySummary {
    pub category: String,
    /// Sum of `amount` over the matching rows.
    pub total_amount: f64,
    /// Number of matching rows.
    pub count: i64,
}

/// Check that `value` is in `YYYY-MM-DD` form.
///
/// Lexicographic range filtering is only chronological for zero-padded
/// dates, so the shape is enforced. Calendar correctness is not.
pub fn validate_date(field: &str, value: &str) -> LedgerResult<()> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if well_formed {
        Ok(())
    } else {
        Err(LedgerError::validation(format!(
            "{} must be a YYYY-MM-DD date, got '{}'",
            field, value
        )))
    }
}
