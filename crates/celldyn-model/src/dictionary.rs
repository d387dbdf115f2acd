//! The data dictionary: per-parameter declared type and plausible range.
//!
//! Dictionaries are supplied externally as a tabular frame (one row per
//! canonical parameter). [`DataDictionary::from_frame`] validates the
//! frame once and turns it into a typed lookup structure; everything
//! downstream (coercion, plausible-range QC) works against the typed form.

use std::collections::HashMap;

use polars::prelude::{AnyValue, DataFrame};
use serde::{Deserialize, Serialize};

use celldyn_common::cell_to_string;

use crate::error::{CellDynError, Result};

/// Dictionary column holding the raw instrument header.
pub const COL_NAME: &str = "Name";
/// Dictionary column holding the canonical (post-rename) parameter name.
pub const COL_COMPUTER_NAME: &str = "Computer name";
/// Dictionary column holding the declared type.
pub const COL_TYPE: &str = "Type";
/// Dictionary column holding the measurement unit (unused by QC).
pub const COL_UNIT: &str = "Unit";
/// Dictionary column holding the plausible minimum.
pub const COL_MIN: &str = "Min";
/// Dictionary column holding the plausible maximum.
pub const COL_MAX: &str = "Max";

/// Placeholder in a Min/Max cell meaning "no bound".
const NO_BOUND: &str = "-";

/// Declared type of a parameter, parsed case-insensitively from the
/// dictionary's `Type` column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParameterType {
    Int,
    Float,
    /// Integers exported in scientific notation; cleaned as floats.
    IntScientific,
    Text,
    /// Anything else. Columns of this type are left untouched by
    /// coercion; an unrecognized type is not an error.
    Other(String),
}

impl ParameterType {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "int" => ParameterType::Int,
            "float" => ParameterType::Float,
            "int (scientific notation)" => ParameterType::IntScientific,
            "str" | "string" => ParameterType::Text,
            other => ParameterType::Other(other.to_string()),
        }
    }

    /// True for types cleaned as numbers.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ParameterType::Int | ParameterType::Float | ParameterType::IntScientific
        )
    }

    /// True for types cleaned as categorical text.
    pub fn is_text(&self) -> bool {
        matches!(self, ParameterType::Text)
    }
}

/// One dictionary row: declared type, unit, and plausible range.
///
/// `min`/`max` of None mean the corresponding side is unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub param_type: ParameterType,
    pub unit: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Typed data dictionary keyed by canonical parameter name.
#[derive(Debug, Clone, Default)]
pub struct DataDictionary {
    entries: HashMap<String, DictionaryEntry>,
}

impl DataDictionary {
    /// Builds a dictionary from its tabular form.
    ///
    /// Precondition: the frame must carry `Computer name`, `Type`, `Min`
    /// and `Max` columns, otherwise this fails with a configuration
    /// error. `Unit` is optional. Rows with a blank canonical name are
    /// skipped.
    pub fn from_frame(frame: &DataFrame) -> Result<Self> {
        for required in [COL_COMPUTER_NAME, COL_TYPE, COL_MIN, COL_MAX] {
            if frame.column(required).is_err() {
                return Err(CellDynError::configuration(format!(
                    "column '{required}' not present in the data dictionary"
                )));
            }
        }

        let names = frame.column(COL_COMPUTER_NAME)?;
        let types = frame.column(COL_TYPE)?;
        let mins = frame.column(COL_MIN)?;
        let maxs = frame.column(COL_MAX)?;
        let units = frame.column(COL_UNIT).ok();

        let mut entries = HashMap::with_capacity(frame.height());
        for idx in 0..frame.height() {
            let name = cell_to_string(names.get(idx).unwrap_or(AnyValue::Null));
            let name = name.trim();
            if name.is_empty() {
                continue;
            }

            let raw_type = cell_to_string(types.get(idx).unwrap_or(AnyValue::Null));
            let unit = units
                .map(|col| cell_to_string(col.get(idx).unwrap_or(AnyValue::Null)))
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty());

            let entry = DictionaryEntry {
                param_type: ParameterType::parse(&raw_type),
                unit,
                min: parse_bound(name, COL_MIN, mins.get(idx).unwrap_or(AnyValue::Null))?,
                max: parse_bound(name, COL_MAX, maxs.get(idx).unwrap_or(AnyValue::Null))?,
            };
            entries.insert(name.to_string(), entry);
        }

        Ok(Self { entries })
    }

    /// Looks up a canonical parameter name. Absent names are QC-exempt
    /// for dictionary-driven rules, so None is a routine answer.
    pub fn lookup(&self, name: &str) -> Option<&DictionaryEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over (canonical name, entry) pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DictionaryEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Parses a Min/Max cell. `-` and blank mean "no bound"; anything else
/// must be numeric.
fn parse_bound(param: &str, side: &str, value: AnyValue<'_>) -> Result<Option<f64>> {
    let raw = cell_to_string(value);
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == NO_BOUND {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| {
            CellDynError::configuration(format!(
                "{side} value {trimmed:?} for parameter '{param}' is neither numeric nor '-'"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::Column;

    fn dictionary_frame() -> DataFrame {
        DataFrame::new(vec![
            Column::new(
                COL_COMPUTER_NAME.into(),
                vec!["glucose", "wbc", "sample_type"],
            ),
            Column::new(COL_TYPE.into(), vec!["float", "Int", "str"]),
            Column::new(COL_UNIT.into(), vec!["mmol/L", "10^9/L", ""]),
            Column::new(COL_MIN.into(), vec!["0", "-", "-"]),
            Column::new(COL_MAX.into(), vec!["100", "500", "-"]),
        ])
        .unwrap()
    }

    #[test]
    fn bounds_and_types_are_parsed() {
        let dict = DataDictionary::from_frame(&dictionary_frame()).unwrap();

        let glucose = dict.lookup("glucose").unwrap();
        assert_eq!(glucose.param_type, ParameterType::Float);
        assert_eq!(glucose.min, Some(0.0));
        assert_eq!(glucose.max, Some(100.0));
        assert_eq!(glucose.unit.as_deref(), Some("mmol/L"));

        let wbc = dict.lookup("wbc").unwrap();
        assert_eq!(wbc.param_type, ParameterType::Int);
        assert_eq!(wbc.min, None);

        let sample_type = dict.lookup("sample_type").unwrap();
        assert!(sample_type.param_type.is_text());
        assert_eq!(sample_type.unit, None);

        assert!(dict.lookup("unknown_param").is_none());
    }

    #[test]
    fn non_numeric_bound_is_a_configuration_error() {
        let frame = DataFrame::new(vec![
            Column::new(COL_COMPUTER_NAME.into(), vec!["glucose"]),
            Column::new(COL_TYPE.into(), vec!["float"]),
            Column::new(COL_MIN.into(), vec!["abc"]),
            Column::new(COL_MAX.into(), vec!["100"]),
        ])
        .unwrap();
        let err = DataDictionary::from_frame(&frame).unwrap_err();
        assert!(matches!(err, CellDynError::Configuration { .. }));
    }

    #[test]
    fn missing_required_column_is_a_configuration_error() {
        let frame = DataFrame::new(vec![
            Column::new(COL_COMPUTER_NAME.into(), vec!["glucose"]),
            Column::new(COL_TYPE.into(), vec!["float"]),
        ])
        .unwrap();
        let err = DataDictionary::from_frame(&frame).unwrap_err();
        assert!(matches!(err, CellDynError::Configuration { .. }));
    }

    #[test]
    fn unknown_type_is_not_an_error() {
        let frame = DataFrame::new(vec![
            Column::new(COL_COMPUTER_NAME.into(), vec!["blob"]),
            Column::new(COL_TYPE.into(), vec!["datetime"]),
            Column::new(COL_MIN.into(), vec!["-"]),
            Column::new(COL_MAX.into(), vec!["-"]),
        ])
        .unwrap();
        let dict = DataDictionary::from_frame(&frame).unwrap();
        let entry = dict.lookup("blob").unwrap();
        assert_eq!(
            entry.param_type,
            ParameterType::Other("datetime".to_string())
        );
        assert!(!entry.param_type.is_numeric());
    }
}
