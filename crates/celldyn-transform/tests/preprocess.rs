//! End-to-end pre-processing: rename then clean against one dictionary.

use polars::prelude::{Column, DataFrame, DataType};

use celldyn_model::DataDictionary;
use celldyn_model::dictionary::{COL_COMPUTER_NAME, COL_MAX, COL_MIN, COL_NAME, COL_TYPE};
use celldyn_transform::{clean_frame, rename_columns};

fn dictionary_frame() -> DataFrame {
    DataFrame::new(vec![
        Column::new(
            COL_NAME.into(),
            vec!["WBC Count", "Sample Type", "Raw Blob"],
        ),
        Column::new(
            COL_COMPUTER_NAME.into(),
            vec!["wbc", "sample_type", "raw_blob"],
        ),
        Column::new(COL_TYPE.into(), vec!["float", "str", "bytes"]),
        Column::new(COL_MIN.into(), vec!["0", "-", "-"]),
        Column::new(COL_MAX.into(), vec!["500", "-", "-"]),
    ])
    .unwrap()
}

#[test]
fn rename_then_clean_pipeline() {
    let raw = DataFrame::new(vec![
        Column::new("WBC Count".into(), vec!["7.5", " ", "nan"]),
        Column::new("Sample Type".into(), vec!["  Venous  ", "\u{a0}", "EDTA"]),
        Column::new("Raw Blob".into(), vec!["a", "b", "c"]),
        Column::new("_wbc_shadow".into(), vec!["x", "y", "z"]),
    ])
    .unwrap();

    let dict_frame = dictionary_frame();
    let renamed = rename_columns(&raw, &dict_frame).unwrap();
    let dictionary = DataDictionary::from_frame(&dict_frame).unwrap();
    let clean = clean_frame(&renamed, &dictionary, None).unwrap();

    // Numeric column: parsed with sentinels nulled.
    let wbc = clean.column("wbc").unwrap();
    assert_eq!(wbc.dtype(), &DataType::Float64);
    assert_eq!(wbc.f64().unwrap().get(0), Some(7.5));
    assert_eq!(wbc.null_count(), 2);

    // Categorical column: trimmed and lower-cased, artifact nulled.
    let sample_type = clean.column("sample_type").unwrap();
    assert_eq!(sample_type.str().unwrap().get(0), Some("venous"));
    assert_eq!(sample_type.null_count(), 1);

    // Unhandled declared type and shadow column: untouched.
    assert_eq!(clean.column("raw_blob").unwrap().str().unwrap().get(0), Some("a"));
    assert_eq!(
        clean.column("_wbc_shadow").unwrap().str().unwrap().get(1),
        Some("y")
    );
}

#[test]
fn clean_subset_leaves_other_columns_raw() {
    let raw = DataFrame::new(vec![
        Column::new("wbc".into(), vec!["7.5", "8.0"]),
        Column::new("sample_type".into(), vec!["  A ", " B "]),
    ])
    .unwrap();
    let dictionary = DataDictionary::from_frame(&dictionary_frame()).unwrap();

    let clean = clean_frame(&raw, &dictionary, Some(&["wbc"])).unwrap();
    assert_eq!(clean.column("wbc").unwrap().dtype(), &DataType::Float64);
    // Not selected, so still raw.
    assert_eq!(
        clean.column("sample_type").unwrap().str().unwrap().get(0),
        Some("  A ")
    );
}
