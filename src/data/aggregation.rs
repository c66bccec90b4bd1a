use std::fmt;

use crate::error::{ProcessorError, Result};

/// Reduction applied to the numeric values of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    Average,
    Minimum,
    Maximum,
}

impl FunctionKind {
    /// Resolve a lowercased function token (`avg`, `min`, `max`).
    pub fn from_token(token: &str) -> Result<Self> {
        match token {
            "avg" => Ok(FunctionKind::Average),
            "min" => Ok(FunctionKind::Minimum),
            "max" => Ok(FunctionKind::Maximum),
            other => Err(ProcessorError::UnsupportedFunction(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FunctionKind::Average => "avg",
            FunctionKind::Minimum => "min",
            FunctionKind::Maximum => "max",
        }
    }

    /// Human-readable name shown in the result table.
    pub fn label(self) -> &'static str {
        match self {
            FunctionKind::Average => "Average",
            FunctionKind::Minimum => "Minimum",
            FunctionKind::Maximum => "Maximum",
        }
    }

    /// Reduce `values`. An empty slice yields `0.0` for every function.
    ///
    /// Min and max start from the first value and only replace it on a
    /// strict comparison, so a leading NaN is returned as is while a later
    /// NaN never wins.
    pub fn calculate(self, values: &[f64]) -> f64 {
        let Some((&first, rest)) = values.split_first() else {
            return 0.0;
        };
        match self {
            FunctionKind::Average => values.iter().sum::<f64>() / values.len() as f64,
            FunctionKind::Minimum => rest
                .iter()
                .fold(first, |acc, &v| if v < acc { v } else { acc }),
            FunctionKind::Maximum => rest
                .iter()
                .fold(first, |acc, &v| if v > acc { v } else { acc }),
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
