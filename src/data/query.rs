//! Parsers for the two `=`-delimited request strings.
//!
//! ```text
//!   filter:      column=operator=value     e.g.  price=gt=500, price=<=10
//!   aggregation: column=function           e.g.  price=avg
//! ```
//!
//! Splitting is done on every `=`. A filter value that itself contains `=`
//! cannot be expressed and is reported as a format error. There is no
//! escaping. For the same reason the `==` alias can never be reached
//! through `parse_filter`; use `eq`.

use super::aggregation::FunctionKind;
use super::operator::OperatorKind;
use crate::error::{ProcessorError, Result};

const FILTER_SHAPE: &str = "column=operator=value";
const AGGREGATION_SHAPE: &str = "column=function";

/// A single-column predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSpec {
    pub column: String,
    pub operator: OperatorKind,
    /// Raw target text. Numeric operators coerce it at comparison time.
    pub target: String,
}

/// A reduction of one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationSpec {
    pub column: String,
    /// Lowercased function token. Not checked until evaluation; see
    /// [`AggregationSpec::function_kind`].
    pub function: String,
}

impl AggregationSpec {
    pub fn function_kind(&self) -> Result<FunctionKind> {
        FunctionKind::from_token(&self.function)
    }
}

/// Parse `column=operator=value`. The empty string means "no filter".
pub fn parse_filter(input: &str) -> Result<Option<FilterSpec>> {
    if input.is_empty() {
        return Ok(None);
    }

    let parts: Vec<&str> = input.split('=').collect();
    let [column, operator, target] = parts[..] else {
        return Err(ProcessorError::Format {
            kind: "filter",
            shape: FILTER_SHAPE,
        });
    };

    Ok(Some(FilterSpec {
        column: column.trim().to_string(),
        operator: OperatorKind::from_token(operator)?,
        target: target.trim().to_string(),
    }))
}

/// Parse `column=function`. The empty string means "no aggregation".
pub fn parse_aggregation(input: &str) -> Result<Option<AggregationSpec>> {
    if input.is_empty() {
        return Ok(None);
    }

    let parts: Vec<&str> = input.split('=').collect();
    let [column, function] = parts[..] else {
        return Err(ProcessorError::Format {
            kind: "aggregation",
            shape: AGGREGATION_SHAPE,
        });
    };

    Ok(Some(AggregationSpec {
        column: column.trim().to_string(),
        function: function.trim().to_lowercase(),
    }))
}
