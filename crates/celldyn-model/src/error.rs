use thiserror::Error;

/// Failure taxonomy for the QC pipeline.
///
/// Configuration and type-conversion problems are unrecoverable and stop
/// the pipeline. Absent columns and unknown rule names are *not* errors;
/// they are handled locally with a diagnostic and a no-op.
#[derive(Debug, Error)]
pub enum CellDynError {
    /// The data dictionary is malformed: a required column is missing, or
    /// a Min/Max cell holds something other than a number or the `-` /
    /// blank "no bound" placeholder.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// A cell declared numeric could not be parsed after placeholder
    /// stripping.
    #[error("cannot convert value {value:?} in column {column} to a number")]
    TypeConversion { column: String, value: String },

    /// The orchestrator was invoked with an empty rule list.
    #[error("the QC rule list is empty")]
    EmptyRuleList,

    #[error(transparent)]
    Polars(#[from] polars::error::PolarsError),
}

impl CellDynError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CellDynError>;
