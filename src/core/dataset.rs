use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{ChartError, ChartResult};

/// One record of tabular data: column name -> scalar value, in column order.
pub type Row = IndexMap<String, Value>;

/// Column count reported for a dataset with no rows.
///
/// Inherited convention: the hosting element historically assumed a two-column
/// sample shape when no rows were available to inspect. Kept as a named
/// constant rather than generalized into a schema rule.
pub const DEFAULT_COLUMN_COUNT: usize = 2;

/// Ordered sequence of rows with shape accessors computed from the rows once,
/// so callers never re-inspect loosely typed structures.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    #[must_use]
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Parses a JSON array of records into a dataset.
    ///
    /// The root must be an array and every element must be an object; anything
    /// else is rejected rather than coerced, since a half-parsed dataset would
    /// corrupt later append comparisons.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let rows: Vec<Row> = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse dataset rows: {e}")))?;
        Ok(Self::new(rows))
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, defined as the key count of the first row.
    ///
    /// An empty dataset reports [`DEFAULT_COLUMN_COUNT`].
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.rows
            .first()
            .map_or(DEFAULT_COLUMN_COUNT, IndexMap::len)
    }

    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    #[must_use]
    pub fn last_row(&self) -> Option<&Row> {
        self.rows.last()
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Captures the shape record retained between render cycles.
    #[must_use]
    pub fn snapshot(&self) -> DatasetSnapshot {
        DatasetSnapshot {
            row_count: self.row_count(),
            column_count: self.column_count(),
            last_row: self.rows.last().cloned(),
        }
    }
}

/// Immutable shape record of the previously rendered dataset.
///
/// Created once per successful render and replaced wholesale on the next one;
/// `last_row` is `None` exactly when `row_count` is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSnapshot {
    pub row_count: usize,
    pub column_count: usize,
    pub last_row: Option<Row>,
}

impl DatasetSnapshot {
    /// Snapshot standing in for "nothing rendered yet".
    #[must_use]
    pub fn empty() -> Self {
        Self {
            row_count: 0,
            column_count: DEFAULT_COLUMN_COUNT,
            last_row: None,
        }
    }
}
