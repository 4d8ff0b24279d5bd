pub(crate) const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS expenses (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    date        TEXT NOT NULL,
    amount      REAL NOT NULL,
    category    TEXT NOT NULL,
    subcategory TEXT DEFAULT '',
    note        TEXT DEFAULT ''
);

CREATE INDEX IF NOT EXISTS idx_expenses_date ON expenses(date);
"#;

/// Row inserted (and rolled back) at startup to prove the file is writable.
pub(crate) const WRITE_PROBE: &str =
    "INSERT INTO expenses (date, amount, category) VALUES ('2000-01-01', 0, '__write_probe__')";
