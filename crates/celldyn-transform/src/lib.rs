//! Pre-processing for Sapphire/Alinity exports.
//!
//! Two collaborators that run before QC:
//!
//! - **rename**: raw instrument headers -> canonical parameter names
//! - **clean**: declared-type coercion (numeric/categorical) with the
//!   data dictionary deciding how each column is handled

pub mod clean;
pub mod rename;

pub use clean::{clean_categorical_column, clean_frame, clean_numeric_column};
pub use rename::rename_columns;
