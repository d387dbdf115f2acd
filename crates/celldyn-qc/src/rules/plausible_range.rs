//! Dictionary-driven plausible range QC.
//!
//! The data dictionary declares a plausible [min, max] per parameter;
//! values outside it are nulled rather than clipped. Either side may be
//! absent ("no bound").

use polars::prelude::DataFrame;
use tracing::debug;

use celldyn_common::{is_numeric_column, numeric_column, set_numeric_column};
use celldyn_model::{DataDictionary, Result};

/// Applies the plausible-range rule to every column that has a
/// dictionary entry.
///
/// Per column, independently per side: cells strictly below the minimum
/// or strictly above the maximum become null; an absent bound skips that
/// side with a diagnostic. Columns without a dictionary entry are left
/// untouched.
pub fn qc_plausible_range(df: &DataFrame, dictionary: &DataDictionary) -> Result<DataFrame> {
    let mut qc = df.clone();

    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    for column in &columns {
        let Some(entry) = dictionary.lookup(column) else {
            debug!(column = %column, "not present in the data dictionary; no range QC");
            continue;
        };
        if entry.min.is_none() && entry.max.is_none() {
            debug!(column = %column, "no bounds declared; no range QC");
            continue;
        }
        if !is_numeric_column(df, column) {
            debug!(column = %column, "column is not numeric; no range QC");
            continue;
        }

        let mut values = numeric_column(df, column)?;

        match entry.min {
            Some(min) => {
                for value in &mut values {
                    if value.is_some_and(|v| v < min) {
                        *value = None;
                    }
                }
                debug!(column = %column, min, "range QC (min) applied");
            }
            None => debug!(column = %column, "no min bound; range QC (min) skipped"),
        }

        match entry.max {
            Some(max) => {
                for value in &mut values {
                    if value.is_some_and(|v| v > max) {
                        *value = None;
                    }
                }
                debug!(column = %column, max, "range QC (max) applied");
            }
            None => debug!(column = %column, "no max bound; range QC (max) skipped"),
        }

        set_numeric_column(&mut qc, column, values)?;
    }

    Ok(qc)
}
