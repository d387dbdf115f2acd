//! QC rule engine for Sapphire/Alinity hematology data.
//!
//! - **rules**: the independent, named QC rules (WBC scatter, RBC,
//!   plausible range, standard values)
//! - **engine**: synonym resolution and ordered rule application
//!
//! Datasets flow through as Polars frames; untrustworthy cells are
//! replaced with nulls, never mutated in place.

pub mod engine;
pub mod rules;

pub use engine::{
    ALL, ALL_RULES, DEFAULT_RULES, RuleKind, RuleSelection, perform_default_qc, perform_qc,
    resolve_rule,
};
pub use rules::{
    DEFAULT_CV_THRESHOLD, qc_plausible_range, qc_rbc, qc_standard_values, qc_wbc_scatter,
    qc_wbc_scatter_with_threshold,
};
