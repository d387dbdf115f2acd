//! The QC rule set.
//!
//! Each rule is a pure function of a frame (plus optional parameters) to
//! a new frame, independently callable outside the orchestrator. Rules
//! never raise on an absent column: they log and leave the frame as-is
//! for that column.

mod plausible_range;
mod rbc;
mod standard_values;
mod wbc_scatter;

pub use plausible_range::qc_plausible_range;
pub use rbc::qc_rbc;
pub use standard_values::qc_standard_values;
pub use wbc_scatter::{DEFAULT_CV_THRESHOLD, qc_wbc_scatter, qc_wbc_scatter_with_threshold};
