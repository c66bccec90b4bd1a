use std::sync::Arc;

use serde::ser::{Serialize, SerializeMap, Serializer};

// ---------------------------------------------------------------------------
// Row – one record of the source file
// ---------------------------------------------------------------------------

/// A single record, keyed by column name.
///
/// All rows of a [`Dataset`] share one header allocation, so cloning a row
/// into a result set copies two reference counts and never the cell text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    header: Arc<[String]>,
    cells: Arc<[String]>,
}

impl Row {
    /// Build a row against a shared header. Cells are matched to header
    /// columns by position; a column with no cell reads as absent.
    pub fn new(header: Arc<[String]>, cells: Vec<String>) -> Self {
        Row {
            header,
            cells: cells.into(),
        }
    }

    /// Value of `column`, or `None` when the column is not part of the schema
    /// or the row is too short to have it.
    ///
    /// A header that repeats a name resolves to its last occurrence.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.header
            .iter()
            .rposition(|h| h == column)
            .and_then(|i| self.cells.get(i))
            .map(String::as_str)
    }

    pub fn contains_column(&self, column: &str) -> bool {
        self.header.iter().any(|h| h == column)
    }

    /// Column names in source order.
    pub fn columns(&self) -> &[String] {
        &self.header
    }

    /// `(column, value)` pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.header
            .iter()
            .map(String::as_str)
            .zip(self.cells.iter().map(String::as_str))
    }
}

/// Serialises as an object whose keys follow header order.
impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.header.len().min(self.cells.len())))?;
        for (column, value) in self.iter() {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// An ordered sequence of rows plus the header they were read with.
///
/// The header is kept even when there are no rows, so an empty file can
/// still be told apart from a filter that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub header: Arc<[String]>,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(header: Vec<String>) -> Self {
        Dataset {
            header: header.into(),
            rows: Vec::new(),
        }
    }

    /// Append a record. Cells are matched to the header by position.
    pub fn push(&mut self, cells: Vec<String>) {
        self.rows.push(Row::new(Arc::clone(&self.header), cells));
    }

    /// Same header, different rows. Used for filter results.
    pub fn with_rows(&self, rows: Vec<Row>) -> Self {
        Dataset {
            header: Arc::clone(&self.header),
            rows,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_names(&self) -> &[String] {
        &self.header
    }
}

/// Build a dataset from string literals. Test helper.
#[cfg(test)]
pub(crate) fn dataset_of(header: &[&str], rows: &[&[&str]]) -> Dataset {
    let mut ds = Dataset::new(header.iter().map(|h| h.to_string()).collect());
    for row in rows {
        ds.push(row.iter().map(|c| c.to_string()).collect());
    }
    ds
}

/// The phone catalogue used throughout the tests.
#[cfg(test)]
pub(crate) fn sample_phones() -> Dataset {
    dataset_of(
        &["name", "brand", "price", "rating"],
        &[
            &["iphone 15 pro", "apple", "999", "4.9"],
            &["galaxy s23 ultra", "samsung", "1199", "4.8"],
            &["redmi note 12", "xiaomi", "199", "4.6"],
            &["poco x5 pro", "xiaomi", "299", "4.4"],
        ],
    )
}
