use std::io;
use std::path::Path;

use log::info;

use super::model::Dataset;
use crate::error::{ProcessorError, Result};

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Options for reading a delimited text file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Field separator, a single ASCII byte.
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Read a delimited file into a [`Dataset`].
///
/// Layout: header row with column names, then one record per line. Every
/// record must have as many fields as the header; a ragged record fails the
/// whole read. A header-only file gives an empty dataset.
///
/// Repeated header names are kept; lookups by such a name see the value of
/// the last column carrying it.
pub fn read_csv(path: &Path, options: &LoadOptions) -> Result<Dataset> {
    let read_err = |source: csv::Error| {
        if is_not_found(&source) {
            ProcessorError::NotFound(path.to_path_buf())
        } else {
            ProcessorError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    };

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .from_path(path)
        .map_err(read_err)?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(read_err)?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut dataset = Dataset::new(headers);
    for result in reader.records() {
        let record = result.map_err(read_err)?;
        dataset.push(record.iter().map(|v| v.to_string()).collect());
    }

    info!(
        "Loaded {} rows with columns {:?} from {}",
        dataset.len(),
        dataset.column_names(),
        path.display()
    );
    Ok(dataset)
}

fn is_not_found(err: &csv::Error) -> bool {
    matches!(err.kind(), csv::ErrorKind::Io(e) if e.kind() == io::ErrorKind::NotFound)
}
