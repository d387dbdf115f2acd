//! Shared helpers for working with analyzer data in Polars frames.
//!
//! - **cell**: `AnyValue` conversions (string/float extraction, parsing)
//! - **frame**: whole-column extraction, write-back, and row filtering

pub mod cell;
pub mod frame;

pub use cell::{cell_to_f64, cell_to_string, format_numeric, parse_f64};
pub use frame::{filter_rows, has_column, is_numeric_column, numeric_column, set_numeric_column};
