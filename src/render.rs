use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;
use serde::Serialize;

use crate::data::model::Row;
use crate::data::query::AggregationSpec;
use crate::error::Result;

pub const NO_DATA: &str = "No data to display";

/// Header of the one-row table printed for an aggregation.
pub const AGGREGATION_HEADERS: [&str; 3] = ["Column", "Function", "Result"];

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Bordered text grid.
    #[default]
    Table,
    /// JSON array of row objects, or one result object for aggregations.
    Json,
}

/// Render `rows` as a grid. `headers` defaults to the first row's columns;
/// a header a row does not have renders as an empty cell.
pub fn render_table(rows: &[Row], headers: Option<&[String]>) -> Result<String> {
    let Some(first) = rows.first() else {
        return Ok(NO_DATA.to_string());
    };
    let headers = headers.unwrap_or(first.columns());

    let columns: Vec<Vec<&str>> = headers
        .iter()
        .map(|h| rows.iter().map(|r| r.get(h).unwrap_or("")).collect())
        .collect();
    grid(headers, columns)
}

/// Render a single aggregation result as a one-row grid.
///
/// The function is shown by its label (`Average`); an unrecognised token is
/// shown upper-cased. The value is printed with two decimals.
pub fn render_aggregation(spec: &AggregationSpec, value: f64) -> Result<String> {
    let function = function_label(spec);
    let result = format!("{value:.2}");
    let headers = AGGREGATION_HEADERS.map(String::from);
    let columns = vec![
        vec![spec.column.as_str()],
        vec![function.as_str()],
        vec![result.as_str()],
    ];
    grid(&headers, columns)
}

pub fn render_table_json(rows: &[Row]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

#[derive(Debug, Serialize)]
struct AggregationOutput<'a> {
    column: &'a str,
    function: &'a str,
    result: f64,
}

pub fn render_aggregation_json(spec: &AggregationSpec, value: f64) -> Result<String> {
    let out = AggregationOutput {
        column: &spec.column,
        function: &spec.function,
        result: value,
    };
    Ok(serde_json::to_string_pretty(&out)?)
}

fn function_label(spec: &AggregationSpec) -> String {
    spec.function_kind()
        .map(|f| f.label().to_string())
        .unwrap_or_else(|_| spec.function.to_uppercase())
}

/// Lay out text columns through Arrow's pretty printer.
fn grid(headers: &[String], columns: Vec<Vec<&str>>) -> Result<String> {
    let fields: Vec<Field> = headers
        .iter()
        .map(|h| Field::new(h.as_str(), DataType::Utf8, false))
        .collect();
    let arrays: Vec<ArrayRef> = columns
        .into_iter()
        .map(|values| Arc::new(StringArray::from(values)) as ArrayRef)
        .collect();

    let batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays)?;
    Ok(pretty_format_batches(&[batch])?.to_string())
}
