//! Editor actions the host performs on behalf of dialogs.
//!
//! The plugin layer never edits the document itself. Dialogs collect input,
//! then call into these traits, which the host editor implements.

/// Rows and columns of a table to insert, each in `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableDimensions {
    rows: u8,
    columns: u8,
}

impl TableDimensions {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;
    pub const DEFAULT: u8 = 3;

    /// Creates dimensions, clamping both values into range.
    pub fn new(rows: i64, columns: i64) -> Self {
        Self {
            rows: clamp(rows),
            columns: clamp(columns),
        }
    }

    /// Builds dimensions from raw form input.
    ///
    /// Non-numeric, empty or zero input counts as 1; decimals are truncated.
    /// The whole trimmed input must be a number, so `"2abc"` counts as 1.
    pub fn from_inputs(rows: &str, columns: &str) -> Self {
        Self::new(parse_count(rows), parse_count(columns))
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn columns(&self) -> u8 {
        self.columns
    }
}

impl Default for TableDimensions {
    fn default() -> Self {
        Self {
            rows: Self::DEFAULT,
            columns: Self::DEFAULT,
        }
    }
}

impl std::fmt::Display for TableDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}×{}", self.rows, self.columns)
    }
}

fn parse_count(input: &str) -> i64 {
    let input = input.trim();
    let value = input
        .parse::<i64>()
        .ok()
        .or_else(|| {
            input
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .map(|v| v.trunc() as i64)
        })
        .unwrap_or(0);

    if value == 0 { 1 } else { value }
}

fn clamp(value: i64) -> u8 {
    value.clamp(TableDimensions::MIN as i64, TableDimensions::MAX as i64) as u8
}

/// Host action that inserts a table at the current selection.
pub trait InsertTable {
    fn insert_table(&mut self, dimensions: TableDimensions);
}

/// Host action that links a node to a URL.
pub trait ApplyLink {
    type Key;

    /// Links `target` to `url`. The URL has already been sanitized.
    fn apply_link(&mut self, target: Self::Key, url: &str);
}
