//! QC of the WBC scatter measurement parameters.
//!
//! Each scatter parameter carries a sibling coefficient-of-variation
//! column (`{parameter}_cv`). A near-zero CV means the optical
//! measurement did not actually happen, so both the parameter and its CV
//! are nulled for that row.

use polars::prelude::DataFrame;
use tracing::debug;

use celldyn_common::{has_column, is_numeric_column, numeric_column, set_numeric_column};
use celldyn_model::Result;
use celldyn_model::parameters::{WBC_SCATTER_PARAMS, cv_column_name};

/// CVs strictly below this are treated as "measurement never happened".
pub const DEFAULT_CV_THRESHOLD: f64 = 1e-14;

/// Applies the WBC scatter rule with the default CV threshold.
pub fn qc_wbc_scatter(df: &DataFrame) -> Result<DataFrame> {
    qc_wbc_scatter_with_threshold(df, DEFAULT_CV_THRESHOLD)
}

/// Applies the WBC scatter rule with an explicit CV threshold.
///
/// For every listed parameter whose value and CV columns are both
/// present: rows with `cv < threshold` (strict, so an exactly-threshold
/// CV survives) get both cells nulled. Pairs with either column absent
/// are skipped with a diagnostic. Idempotent: nulled cells never compare
/// below the threshold again.
pub fn qc_wbc_scatter_with_threshold(df: &DataFrame, threshold: f64) -> Result<DataFrame> {
    let mut qc = df.clone();

    for param in WBC_SCATTER_PARAMS {
        let cv_column = cv_column_name(param);
        if !has_column(df, param) || !has_column(df, &cv_column) {
            debug!(
                parameter = param,
                cv = %cv_column,
                "parameter and/or CV column not present; no WBC scatter QC"
            );
            continue;
        }
        if !is_numeric_column(df, param) || !is_numeric_column(df, &cv_column) {
            debug!(
                parameter = param,
                cv = %cv_column,
                "parameter and/or CV column not numeric; no WBC scatter QC"
            );
            continue;
        }

        let mut cv_values = numeric_column(df, &cv_column)?;
        let mut param_values = numeric_column(df, param)?;
        for idx in 0..cv_values.len() {
            if cv_values[idx].is_some_and(|cv| cv < threshold) {
                cv_values[idx] = None;
                param_values[idx] = None;
            }
        }

        set_numeric_column(&mut qc, param, param_values)?;
        set_numeric_column(&mut qc, &cv_column, cv_values)?;
        debug!(parameter = param, cv = %cv_column, "WBC scatter QC applied");
    }

    Ok(qc)
}
