//! Standard-value exclusion (discouraged).
//!
//! Keeps only the rows whose value for each listed parameter exactly
//! equals a hardcoded calibration constant, dropping every other row.
//!
//! **Not recommended.** Exact floating-point equality is fragile and the
//! row removal is order-sensitive; the rule exists solely to reproduce
//! historical analyses. It never runs unless selected explicitly (or via
//! `all`). Do not copy this pattern into new rules.

use polars::prelude::DataFrame;
use tracing::{debug, warn};

use celldyn_common::{filter_rows, has_column, is_numeric_column, numeric_column};
use celldyn_model::Result;
use celldyn_model::parameters::STANDARD_VALUES;

/// Applies the standard-value exclusion rule.
///
/// For each listed parameter present in the frame, rows whose value does
/// not exactly equal the expected constant are removed entirely; a
/// missing value does not equal anything and is removed too. Filters
/// fold left-to-right over the shrinking frame.
pub fn qc_standard_values(df: &DataFrame) -> Result<DataFrame> {
    warn!("standard-value exclusion is retained for historical reproduction only");
    let mut qc = df.clone();

    for (param, expected) in STANDARD_VALUES {
        if !has_column(&qc, param) {
            debug!(parameter = param, "column not present; no standard value QC");
            continue;
        }
        if !is_numeric_column(&qc, param) {
            debug!(parameter = param, "column is not numeric; no standard value QC");
            continue;
        }

        let values = numeric_column(&qc, param)?;
        let keep: Vec<bool> = values
            .iter()
            .map(|value| matches!(value, Some(v) if *v == expected))
            .collect();
        qc = filter_rows(&qc, &keep)?;
        debug!(parameter = param, expected, "standard value QC applied");
    }

    Ok(qc)
}
