/// Data layer: core types, loading, request parsing and evaluation.
///
/// Architecture:
/// ```text
///  file.csv          "price=gt=500"   "price=avg"
///     │                    │               │
///     ▼                    ▼               ▼
///  ┌────────┐         ┌──────────────────────┐
///  │ loader │         │        query         │  text → FilterSpec / AggregationSpec
///  └────────┘         └──────────────────────┘
///     │ Dataset                  │
///     ▼                          ▼
///  ┌──────────────────────────────────┐
///  │              engine              │  filter → rows, aggregate → f64
///  └──────────────────────────────────┘
///          │                  │
///     operator            aggregation     (closed enums, match dispatch)
/// ```

pub mod aggregation;
pub mod engine;
pub mod loader;
pub mod model;
pub mod operator;
pub mod query;
