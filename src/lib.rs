//! # csv-sieve
//!
//! Read a delimited text file, keep the rows matching one column predicate,
//! and optionally reduce one numeric column to a single value.
//!
//! ```text
//! csv-sieve phones.csv --filter "brand=eq=xiaomi" --aggregate "price=avg"
//! ```
//!
//! Filter operators: `eq` (case-insensitive text), `gt`, `lt` (numeric;
//! cells that are not numbers never match). `>`, `<`, `>=` and `<=` are
//! accepted as aliases, but `>=` and `<=` compare strictly.
//!
//! Aggregations: `avg`, `min`, `max` over the cells of a column that parse
//! as numbers.
//!
//! ```rust
//! use csv_sieve::data::{engine, model::Dataset, query};
//!
//! let mut ds = Dataset::new(vec!["brand".into(), "price".into()]);
//! ds.push(vec!["xiaomi".into(), "199".into()]);
//! ds.push(vec!["apple".into(), "999".into()]);
//! ds.push(vec!["xiaomi".into(), "299".into()]);
//!
//! let filter = query::parse_filter("brand=eq=xiaomi").unwrap().unwrap();
//! let xiaomi = engine::filter(&ds, &filter).unwrap();
//!
//! let avg = query::parse_aggregation("price=avg").unwrap().unwrap();
//! assert_eq!(engine::aggregate(&xiaomi, &avg).unwrap(), 249.0);
//! ```

pub mod app;
pub mod data;
pub mod error;
pub mod render;

pub use error::{ProcessorError, Result};
