//! Declared-type coercion of raw analyzer columns.
//!
//! Instrument exports arrive as text with a handful of well-known junk
//! values. Numeric columns are stripped of those and cast to Float64;
//! categorical columns are normalized in place. The missing-value marker
//! is the Polars null throughout.

use polars::prelude::{AnyValue, DataFrame, DataType, NamedFrom, Series};
use tracing::debug;

use celldyn_common::cell_to_f64;
use celldyn_model::{CellDynError, DataDictionary, Result};

/// Artifact token produced by some exports (a non-breaking space).
const ARTIFACT_TOKEN: &str = "\u{a0}";
/// Typographic right single quote, normalized to a plain apostrophe.
const RIGHT_SINGLE_QUOTE: char = '\u{2019}';
/// Columns whose name starts with this marker are intentionally
/// duplicated shadows and are never cleaned.
const IGNORE_MARKER: char = '_';

/// Cleans a numeric column: blank cells, the artifact token and the
/// literal `nan` become null, everything else must parse as a float.
///
/// Fails with a type-conversion error on any other non-numeric cell;
/// silent coercion to null would corrupt downstream statistics.
pub fn clean_numeric_column(df: &DataFrame, name: &str) -> Result<Series> {
    let column = df.column(name)?;
    let mut values: Vec<Option<f64>> = Vec::with_capacity(df.height());

    for idx in 0..df.height() {
        let cell = column.get(idx).unwrap_or(AnyValue::Null);
        let parsed = match cell {
            AnyValue::Null => None,
            AnyValue::String(s) => parse_numeric_cell(name, s)?,
            AnyValue::StringOwned(s) => parse_numeric_cell(name, &s)?,
            other => cell_to_f64(other).filter(|v| !v.is_nan()),
        };
        values.push(parsed);
    }

    Ok(Series::new(name.into(), values))
}

fn parse_numeric_cell(column: &str, raw: &str) -> Result<Option<f64>> {
    if raw == ARTIFACT_TOKEN {
        return Ok(None);
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "nan" {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| CellDynError::TypeConversion {
            column: column.to_string(),
            value: raw.to_string(),
        })
}

/// Cleans a categorical column: values are trimmed, lower-cased and the
/// typographic apostrophe normalized; the artifact token becomes null.
/// Non-string columns pass through unchanged.
pub fn clean_categorical_column(df: &DataFrame, name: &str) -> Result<Series> {
    let column = df.column(name)?;
    if column.dtype() != &DataType::String {
        return Ok(column.as_materialized_series().clone());
    }

    let chunked = column.str()?;
    let values: Vec<Option<String>> = chunked
        .iter()
        .map(|cell| match cell {
            None => None,
            Some(s) if s == ARTIFACT_TOKEN => None,
            Some(s) => Some(
                s.trim()
                    .to_lowercase()
                    .replace(RIGHT_SINGLE_QUOTE, "'"),
            ),
        })
        .collect();

    Ok(Series::new(name.into(), values))
}

/// Cleans the given columns (all of them when `cols` is None) according
/// to their dictionary-declared type.
///
/// Dispatch per column:
/// - names starting with `_` are shadow columns and are skipped;
/// - numeric declared types get [`clean_numeric_column`];
/// - text declared types get [`clean_categorical_column`];
/// - any other declared type, or a column absent from the dictionary,
///   passes through unchanged with a diagnostic.
pub fn clean_frame(
    df: &DataFrame,
    dictionary: &DataDictionary,
    cols: Option<&[&str]>,
) -> Result<DataFrame> {
    let all_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let selected: Vec<&str> = match cols {
        Some(subset) => subset.to_vec(),
        None => all_names.iter().map(String::as_str).collect(),
    };

    let mut clean = df.clone();
    for name in selected {
        if name.starts_with(IGNORE_MARKER) {
            debug!(column = name, "shadow column; not cleaned");
            continue;
        }

        let Some(entry) = dictionary.lookup(name) else {
            debug!(column = name, "no dictionary entry; column not cleaned");
            continue;
        };

        if entry.param_type.is_numeric() {
            let series = clean_numeric_column(df, name)?;
            clean.with_column(series)?;
        } else if entry.param_type.is_text() {
            let series = clean_categorical_column(df, name)?;
            clean.with_column(series)?;
        } else {
            debug!(column = name, "declared type is neither numeric nor text; left as-is");
        }
    }

    Ok(clean)
}
