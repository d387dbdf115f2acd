//! Column-level helpers shared by the coercion and QC crates.
//!
//! QC rules work on whole columns: pull the column out as a `Vec`,
//! rewrite the cells, and push the result back under the same name.

use polars::prelude::{
    AnyValue, BooleanChunked, DataFrame, DataType, NamedFrom, NewChunkedArray, PolarsResult,
    Series,
};

use crate::cell::cell_to_f64;

/// Returns true when the frame has a column with the given name.
pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.column(name).is_ok()
}

/// Returns true when the column exists and holds a numeric dtype.
///
/// Threshold rules only touch numeric columns; anything else (raw text
/// that never went through coercion, for instance) must be left alone.
pub fn is_numeric_column(df: &DataFrame, name: &str) -> bool {
    let Ok(column) = df.column(name) else {
        return false;
    };
    matches!(
        column.dtype(),
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Extracts a column as `Vec<Option<f64>>`. Cells that are null or not
/// numeric (including unparseable strings) come back as None.
pub fn numeric_column(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<f64>>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(cell_to_f64(column.get(idx).unwrap_or(AnyValue::Null)));
    }
    Ok(values)
}

/// Replaces (or adds) a Float64 column under `name`.
pub fn set_numeric_column(
    df: &mut DataFrame,
    name: &str,
    values: Vec<Option<f64>>,
) -> PolarsResult<()> {
    let series = Series::new(name.into(), values);
    df.with_column(series)?;
    Ok(())
}

/// Keeps only the rows marked true in `keep`.
pub fn filter_rows(df: &DataFrame, keep: &[bool]) -> PolarsResult<DataFrame> {
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    df.filter(&mask)
}
