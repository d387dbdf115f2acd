//! Orchestrator behavior: rule list handling and sequential application.

use polars::prelude::{Column, DataFrame};

use celldyn_model::{CellDynError, DataDictionary, Machine};
use celldyn_model::dictionary::{COL_COMPUTER_NAME, COL_MAX, COL_MIN, COL_TYPE};
use celldyn_qc::{perform_default_qc, perform_qc};

fn sample_frame() -> DataFrame {
    DataFrame::new(vec![
        Column::new("neutrophil_size_mean".into(), vec![140.0, 150.0]),
        Column::new("neutrophil_size_mean_cv".into(), vec![0.0, 1.0]),
        Column::new("reticulocytes".into(), vec![9.9e-5, 0.5]),
        Column::new("glucose".into(), vec![150.0, 50.0]),
    ])
    .unwrap()
}

fn dictionary() -> DataDictionary {
    let frame = DataFrame::new(vec![
        Column::new(COL_COMPUTER_NAME.into(), vec!["glucose"]),
        Column::new(COL_TYPE.into(), vec!["float"]),
        Column::new(COL_MIN.into(), vec!["0"]),
        Column::new(COL_MAX.into(), vec!["100"]),
    ])
    .unwrap();
    DataDictionary::from_frame(&frame).unwrap()
}

fn f64_col(df: &DataFrame, name: &str, idx: usize) -> Option<f64> {
    df.column(name).unwrap().f64().unwrap().get(idx)
}

#[test]
fn empty_rule_list_is_an_error() {
    let rules: [&str; 0] = [];
    let err = perform_qc(&sample_frame(), &dictionary(), &rules, None).unwrap_err();
    assert!(matches!(err, CellDynError::EmptyRuleList));
}

#[test]
fn unknown_rule_is_skipped_and_the_frame_unchanged() {
    let df = sample_frame();
    let qc = perform_qc(&df, &dictionary(), &["not_a_real_rule"], None).unwrap();
    assert!(qc.equals_missing(&df));
}

#[test]
fn default_rules_apply_wbc_scatter_and_range_but_not_rbc() {
    let df = sample_frame();
    let qc = perform_default_qc(&df, &dictionary(), Some(Machine::Sapphire)).unwrap();

    // WBC scatter pair nulled where CV is zero.
    assert_eq!(f64_col(&qc, "neutrophil_size_mean", 0), None);
    assert_eq!(f64_col(&qc, "neutrophil_size_mean_cv", 0), None);
    // Plausible range nulls the out-of-range glucose.
    assert_eq!(f64_col(&qc, "glucose", 0), None);
    assert_eq!(f64_col(&qc, "glucose", 1), Some(50.0));
    // The default list names `rbc_scatter`, which is not a recognized
    // rule, so the below-threshold reticulocytes value survives.
    assert_eq!(f64_col(&qc, "reticulocytes", 0), Some(9.9e-5));
}

#[test]
fn explicit_rbc_selection_runs_the_rbc_rule() {
    let df = sample_frame();
    let qc = perform_qc(&df, &dictionary(), &["rbc"], None).unwrap();
    assert_eq!(f64_col(&qc, "reticulocytes", 0), None);
    assert_eq!(f64_col(&qc, "reticulocytes", 1), Some(0.5));
    // Nothing else ran.
    assert_eq!(f64_col(&qc, "neutrophil_size_mean", 0), Some(140.0));
}

#[test]
fn all_expands_to_the_full_canonical_set() {
    // A frame where the standard-value rule will drop the second row.
    let df = DataFrame::new(vec![
        Column::new("neutrophil_size_mean".into(), vec![140.0, 139.0]),
        Column::new("neutrophil_size_mean_cv".into(), vec![1.0, 1.0]),
        Column::new("glucose".into(), vec![150.0, 50.0]),
    ])
    .unwrap();

    let qc = perform_qc(&df, &dictionary(), &["all"], None).unwrap();
    // standard_values kept only the 140.0 row.
    assert_eq!(qc.height(), 1);
    // plausible_range nulled its glucose before that.
    assert_eq!(f64_col(&qc, "glucose", 0), None);
}

#[test]
fn rules_fold_left_to_right() {
    // Range first nulls the glucose cell; a later unknown rule changes
    // nothing more.
    let df = sample_frame();
    let qc = perform_qc(
        &df,
        &dictionary(),
        &["plausible_range", "bogus", "flags"],
        None,
    )
    .unwrap();
    assert_eq!(f64_col(&qc, "glucose", 0), None);
    assert_eq!(f64_col(&qc, "neutrophil_size_mean", 0), Some(140.0));
}

#[test]
fn no_op_rules_are_identity() {
    let df = sample_frame();
    let qc = perform_qc(&df, &dictionary(), &["flags", "fail"], None).unwrap();
    assert!(qc.equals_missing(&df));
}
