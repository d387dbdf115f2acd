//! Data model for Sapphire/Alinity analyzer QC.
//!
//! - **error**: shared failure taxonomy for the whole pipeline
//! - **machine**: analyzer platform identifiers
//! - **parameters**: canonical parameter vocabulary for fixed-threshold rules
//! - **dictionary**: the externally supplied data dictionary, typed

pub mod dictionary;
pub mod error;
pub mod machine;
pub mod parameters;

pub use dictionary::{DataDictionary, DictionaryEntry, ParameterType};
pub use error::{CellDynError, Result};
pub use machine::Machine;
