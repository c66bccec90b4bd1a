use log::debug;

use super::model::{Dataset, Row};
use super::operator::coerce_f64;
use super::query::{AggregationSpec, FilterSpec};
use crate::error::{ProcessorError, Result};

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Keep the rows whose `spec.column` satisfies the predicate, in input order.
///
/// The column is checked against the first row only, since all rows share
/// one schema. On an empty dataset there is no first row and any column
/// name is accepted.
pub fn filter(dataset: &Dataset, spec: &FilterSpec) -> Result<Dataset> {
    if let Some(first) = dataset.rows.first() {
        ensure_column(first, &spec.column)?;
    }

    let kept: Vec<Row> = dataset
        .rows
        .iter()
        .filter(|row| {
            row.get(&spec.column)
                .is_some_and(|value| spec.operator.apply(value, &spec.target))
        })
        .cloned()
        .collect();

    debug!(
        "filter {}={}={} kept {} of {} rows",
        spec.column,
        spec.operator,
        spec.target,
        kept.len(),
        dataset.len()
    );
    Ok(dataset.with_rows(kept))
}

/// Apply an optional filter. `None` returns the dataset unchanged.
pub fn filter_opt(dataset: Dataset, spec: Option<&FilterSpec>) -> Result<Dataset> {
    match spec {
        Some(spec) => filter(&dataset, spec),
        None => Ok(dataset),
    }
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Reduce the numeric values of `spec.column` with `spec.function`.
///
/// Checks run in this order:
/// * empty dataset → `0.0`, nothing else is looked at
/// * column missing from the schema → [`ProcessorError::UnknownColumn`]
/// * unknown function token → [`ProcessorError::UnsupportedFunction`]
/// * no cell parses as a number → [`ProcessorError::NoNumericData`]
///
/// Cells that do not parse as numbers are skipped.
pub fn aggregate(dataset: &Dataset, spec: &AggregationSpec) -> Result<f64> {
    let Some(first) = dataset.rows.first() else {
        return Ok(0.0);
    };
    ensure_column(first, &spec.column)?;
    let function = spec.function_kind()?;

    let values: Vec<f64> = dataset
        .rows
        .iter()
        .filter_map(|row| row.get(&spec.column).and_then(coerce_f64))
        .collect();

    if values.is_empty() {
        return Err(ProcessorError::NoNumericData(spec.column.clone()));
    }

    debug!(
        "{} over {} numeric values of '{}' ({} rows)",
        function,
        values.len(),
        spec.column,
        dataset.len()
    );
    Ok(function.calculate(&values))
}

fn ensure_column(row: &Row, column: &str) -> Result<()> {
    if row.contains_column(column) {
        Ok(())
    } else {
        Err(ProcessorError::UnknownColumn(column.to_string()))
    }
}
