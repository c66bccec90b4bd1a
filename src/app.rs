use std::path::PathBuf;

use log::info;

use crate::data::engine;
use crate::data::loader::{self, LoadOptions};
use crate::data::query::{parse_aggregation, parse_filter};
use crate::error::Result;
use crate::render::{self, OutputFormat};

// ---------------------------------------------------------------------------
// One invocation of the tool
// ---------------------------------------------------------------------------

/// Everything needed for a single run, independent of the command line.
#[derive(Debug, Clone, Default)]
pub struct Request {
    pub path: PathBuf,
    /// Raw `column=operator=value` text.
    pub filter: Option<String>,
    /// Raw `column=function` text.
    pub aggregate: Option<String>,
    pub load: LoadOptions,
    pub format: OutputFormat,
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The file had a header but no records.
    EmptySource,
    /// The filter matched nothing.
    NoMatches,
    /// Rendered table or aggregation result.
    Rendered(String),
}

impl Outcome {
    /// Text to print on stdout.
    pub fn message(&self) -> &str {
        match self {
            Outcome::EmptySource => "CSV file is empty",
            Outcome::NoMatches => "No rows match the filter",
            Outcome::Rendered(text) => text,
        }
    }
}

/// Read, filter, aggregate, render.
///
/// Each spec string is parsed right before the stage that uses it. An empty
/// file ends the run before the filter is parsed, and an empty filter result
/// ends it before the aggregation is parsed, so neither outcome can be
/// turned into an error by a malformed later spec. The first error ends the
/// run.
pub fn run(request: &Request) -> Result<Outcome> {
    let dataset = loader::read_csv(&request.path, &request.load)?;
    if dataset.is_empty() {
        return Ok(Outcome::EmptySource);
    }

    let filter = parse_filter(request.filter.as_deref().unwrap_or(""))?;
    let dataset = engine::filter_opt(dataset, filter.as_ref())?;
    if dataset.is_empty() {
        return Ok(Outcome::NoMatches);
    }

    let aggregation = parse_aggregation(request.aggregate.as_deref().unwrap_or(""))?;

    let text = match (&aggregation, request.format) {
        (Some(spec), format) => {
            let value = engine::aggregate(&dataset, spec)?;
            info!("{}({}) = {value}", spec.function, spec.column);
            match format {
                OutputFormat::Table => render::render_aggregation(spec, value)?,
                OutputFormat::Json => render::render_aggregation_json(spec, value)?,
            }
        }
        (None, OutputFormat::Table) => render::render_table(&dataset.rows, None)?,
        (None, OutputFormat::Json) => render::render_table_json(&dataset.rows)?,
    };
    Ok(Outcome::Rendered(text))
}
