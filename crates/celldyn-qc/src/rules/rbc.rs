//! QC of (some) red blood cell parameters.
//!
//! Values strictly below a per-parameter threshold are implausibly small
//! for these assays and are nulled. Unlike the WBC scatter rule, each
//! column is handled on its own; nothing is paired.

use polars::prelude::DataFrame;
use tracing::debug;

use celldyn_common::{has_column, is_numeric_column, numeric_column, set_numeric_column};
use celldyn_model::Result;
use celldyn_model::parameters::{RBC_PARAMS, rbc_threshold};

/// Applies the RBC low-value rule.
///
/// For every listed parameter present in the frame, rows with
/// `value < threshold` (strict) get that single cell nulled. Absent
/// columns are skipped with a diagnostic.
pub fn qc_rbc(df: &DataFrame) -> Result<DataFrame> {
    let mut qc = df.clone();

    for param in RBC_PARAMS {
        if !has_column(df, param) {
            debug!(parameter = param, "column not present; no RBC QC");
            continue;
        }
        if !is_numeric_column(df, param) {
            debug!(parameter = param, "column is not numeric; no RBC QC");
            continue;
        }

        let threshold = rbc_threshold(param);
        let mut values = numeric_column(df, param)?;
        for value in &mut values {
            if value.is_some_and(|v| v < threshold) {
                *value = None;
            }
        }

        set_numeric_column(&mut qc, param, values)?;
        debug!(parameter = param, threshold, "RBC QC applied");
    }

    Ok(qc)
}
