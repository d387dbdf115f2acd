//! Raw instrument headers -> canonical parameter names.
//!
//! Renaming is always the first pre-processing step: every later stage
//! (coercion, QC) keys on the canonical names.

use std::collections::HashMap;

use polars::prelude::{AnyValue, DataFrame};
use tracing::debug;

use celldyn_common::cell_to_string;
use celldyn_model::dictionary::{COL_COMPUTER_NAME, COL_NAME};
use celldyn_model::{CellDynError, Result};

/// Renames every column whose name matches a `Name` entry of the
/// dictionary frame to its `Computer name`. Columns with no match are
/// left as-is.
pub fn rename_columns(df: &DataFrame, dictionary_frame: &DataFrame) -> Result<DataFrame> {
    for required in [COL_NAME, COL_COMPUTER_NAME] {
        if dictionary_frame.column(required).is_err() {
            return Err(CellDynError::configuration(format!(
                "column '{required}' not present in the data dictionary"
            )));
        }
    }

    let raw_names = dictionary_frame.column(COL_NAME)?;
    let canonical_names = dictionary_frame.column(COL_COMPUTER_NAME)?;

    let mut mapping = HashMap::with_capacity(dictionary_frame.height());
    for idx in 0..dictionary_frame.height() {
        let raw = cell_to_string(raw_names.get(idx).unwrap_or(AnyValue::Null));
        let canonical = cell_to_string(canonical_names.get(idx).unwrap_or(AnyValue::Null));
        if raw.is_empty() || canonical.trim().is_empty() {
            continue;
        }
        mapping.insert(raw, canonical.trim().to_string());
    }

    let mut renamed = df.clone();
    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    for column in &columns {
        match mapping.get(column) {
            Some(canonical) => {
                renamed.rename(column, canonical.as_str().into())?;
            }
            None => debug!(column = %column, "no dictionary entry; column name kept as-is"),
        }
    }

    Ok(renamed)
}
