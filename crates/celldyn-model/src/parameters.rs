//! Canonical parameter vocabulary for the fixed-threshold QC rules.
//!
//! These lists are tied to the Sapphire/Alinity panels; dictionary-driven
//! rules (plausible range, type coercion) get their per-parameter policy
//! from the data dictionary instead.

/// WBC scatter measurement parameters (not WBC counts or sizes). Each has
/// a sibling coefficient-of-variation column named `{parameter}_cv`.
pub const WBC_SCATTER_PARAMS: [&str; 7] = [
    "neutrophil_size_mean",
    "neutrophil_intracellular_complexity",
    "neutrophil_lobularity_polarized",
    "neutrophil_lobularity_depolarized",
    "neutrophil_dna_staining",
    "lymphocyte_size_mean",
    "lymphocyte_intracellular_complexity",
];

/// RBC parameters subject to the low-value QC rule. Not every RBC
/// parameter is listed on purpose.
pub const RBC_PARAMS: [&str; 15] = [
    "reticulocytes",
    "reticulocytes_perc",
    "irf",
    "rbc_intracellular_complexity",
    "rbc_intracellular_complexity_cv",
    "rbc_population_position",
    "rbc_population_position_cv",
    "reticulocyte_population_position",
    "reticulocyte_population_position_cv",
    "mchcr",
    "mchr_nl",
    "mcvr",
    "hdw",
    "rbc_hypochromic_perc",
    "rbc_hyperchromic_perc",
];

/// Per-parameter threshold for the RBC rule: values strictly below it are
/// nulled. The hypo/hyperchromic percentages get a near-zero cutoff; the
/// rest use 1e-4.
pub fn rbc_threshold(param: &str) -> f64 {
    match param {
        "rbc_hypochromic_perc" | "rbc_hyperchromic_perc" => 1e-30,
        _ => 1e-4,
    }
}

/// Expected constants for the standard-value exclusion rule. Rows whose
/// value differs from the constant are dropped entirely by that rule.
pub const STANDARD_VALUES: [(&str, f64); 14] = [
    ("rbc_intracellular_complexity", 182.0),
    ("rbc_population_position", 85.0),
    ("neutrophil_size_mean", 140.0),
    ("neutrophil_intracellular_complexity", 150.0),
    ("neutrophil_lobularity_polarized", 125.0),
    ("neutrophil_lobularity_depolarized", 28.0),
    ("neutrophil_dna_staining", 69.0),
    ("lymphocyte_size_mean", 100.0),
    ("lymphocyte_intracellular_complexity", 75.0),
    ("hb_nl", 6.206e-21),
    ("mch_usa", 0.6206),
    ("mchc_usa", 0.6206),
    ("rbc_intracellular_complexity_cv", 1.59341),
    ("rbc_population_position_cv", 7.2),
];

/// Name of the coefficient-of-variation column paired with a scatter
/// parameter.
pub fn cv_column_name(param: &str) -> String {
    format!("{param}_cv")
}

/// Name of the instrument flag column for a measurement parameter.
///
/// Unit-suffixed parameters share a single flag column (e.g. `hb_nl` and
/// `hb_usa` are both covered by `hb_flag`).
pub fn flag_column_name(param: &str) -> String {
    match param {
        "hb_nl" | "hb_usa" => "hb_flag".to_string(),
        "mch_nl" | "mch_usa" => "mch_flag".to_string(),
        "mchc_nl" | "mchc_usa" => "mchc_flag".to_string(),
        "mchr_nl" | "mchr_usa" => "mchr_flag".to_string(),
        other => format!("{other}_flag"),
    }
}

/// Recovers measurement column names from the `_flag` columns present in
/// a header list.
pub fn value_columns_from_flags<'a, I>(columns: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    columns
        .into_iter()
        .filter_map(|name| name.strip_suffix("_flag"))
        .map(str::to_string)
        .collect()
}
