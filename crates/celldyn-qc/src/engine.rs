//! The QC orchestrator: rule names in, quality-controlled frame out.
//!
//! Free-form rule names are resolved against a closed synonym table
//! first, then dispatched over [`RuleKind`]; unknown names skip with a
//! diagnostic and never abort a batch run. Rules apply strictly left to
//! right, each consuming the previous output — order matters for rules
//! that touch overlapping columns.

use polars::prelude::DataFrame;
use tracing::{debug, warn};

use celldyn_model::{CellDynError, DataDictionary, Machine, Result};

use crate::rules::{qc_plausible_range, qc_rbc, qc_standard_values, qc_wbc_scatter};

/// The closed set of QC rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    /// WBC scatter CV rule; pairs each parameter with its `_cv` column.
    WbcScatter,
    /// RBC low-value rule with per-parameter thresholds.
    Rbc,
    /// Dictionary-driven plausible range rule.
    PlausibleRange,
    /// Flag-based invalidation. Recognized but not implemented yet:
    /// applying it is the identity.
    Flags,
    /// Failure-flag invalidation. Recognized but not implemented yet:
    /// applying it is the identity.
    Fail,
    /// Standard-value row exclusion. Discouraged; see the rule docs.
    StandardValues,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::WbcScatter => "wbc_scatter",
            RuleKind::Rbc => "rbc",
            RuleKind::PlausibleRange => "plausible_range",
            RuleKind::Flags => "flags",
            RuleKind::Fail => "fail",
            RuleKind::StandardValues => "standard_values",
        }
    }
}

/// Result of resolving a free-form rule name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSelection {
    Rule(RuleKind),
    /// Not a recognized rule name; skipped with a diagnostic.
    Unknown(String),
}

/// Resolves a rule name through the synonym table. Matching is
/// case-sensitive and exact.
pub fn resolve_rule(name: &str) -> RuleSelection {
    match name {
        "wbc_scatter" | "leuko_scatter" => RuleSelection::Rule(RuleKind::WbcScatter),
        "rbc" | "erythro" => RuleSelection::Rule(RuleKind::Rbc),
        "plausible_range" => RuleSelection::Rule(RuleKind::PlausibleRange),
        "flags" | "suspicious_flags" => RuleSelection::Rule(RuleKind::Flags),
        "fail" | "failure" => RuleSelection::Rule(RuleKind::Fail),
        "standard_values" => RuleSelection::Rule(RuleKind::StandardValues),
        other => RuleSelection::Unknown(other.to_string()),
    }
}

/// Rule-list entry that expands to [`ALL_RULES`].
pub const ALL: &str = "all";

/// The historical default rule list.
///
/// Note: `rbc_scatter` has never been a recognized name (only `rbc` /
/// `erythro` select the RBC rule), so the RBC rule does not run via this
/// list; the name is skipped with a diagnostic. Kept verbatim for
/// compatibility with existing analyses pending clarification with the
/// lab.
pub const DEFAULT_RULES: [&str; 4] = ["wbc_scatter", "rbc_scatter", "plausible_range", "flags"];

/// The `all` expansion. Carries the same unrecognized `rbc_scatter`
/// placeholder as [`DEFAULT_RULES`].
pub const ALL_RULES: [&str; 6] = [
    "wbc_scatter",
    "rbc_scatter",
    "plausible_range",
    "flags",
    "fail",
    "standard_values",
];

/// Runs the named QC rules over the frame, left to right.
///
/// Fails fast with [`CellDynError::EmptyRuleList`] on an empty list. A
/// list containing `all` expands to [`ALL_RULES`]. Unknown names are
/// logged and skipped. The machine identifier has no effect yet; it is
/// reserved for per-platform branching.
pub fn perform_qc<S: AsRef<str>>(
    df: &DataFrame,
    dictionary: &DataDictionary,
    rules: &[S],
    machine: Option<Machine>,
) -> Result<DataFrame> {
    if rules.is_empty() {
        return Err(CellDynError::EmptyRuleList);
    }

    if let Some(machine) = machine {
        debug!(%machine, "machine identifier recorded; no per-machine QC yet");
    }

    let names: Vec<&str> = if rules.iter().any(|rule| rule.as_ref() == ALL) {
        ALL_RULES.to_vec()
    } else {
        rules.iter().map(AsRef::as_ref).collect()
    };

    let mut qc = df.clone();
    for name in names {
        match resolve_rule(name) {
            RuleSelection::Rule(kind) => {
                debug!(rule = kind.as_str(), "performing QC");
                qc = apply_rule(&qc, kind, dictionary)?;
            }
            RuleSelection::Unknown(unknown) => {
                warn!(rule = %unknown, "not a valid QC rule; skipped");
            }
        }
    }

    Ok(qc)
}

/// Runs the historical default rule list.
pub fn perform_default_qc(
    df: &DataFrame,
    dictionary: &DataDictionary,
    machine: Option<Machine>,
) -> Result<DataFrame> {
    perform_qc(df, dictionary, &DEFAULT_RULES, machine)
}

fn apply_rule(df: &DataFrame, kind: RuleKind, dictionary: &DataDictionary) -> Result<DataFrame> {
    match kind {
        RuleKind::WbcScatter => qc_wbc_scatter(df),
        RuleKind::Rbc => qc_rbc(df),
        RuleKind::PlausibleRange => qc_plausible_range(df, dictionary),
        // Explicit identity: recognized names reserved for flag-based QC.
        RuleKind::Flags | RuleKind::Fail => Ok(df.clone()),
        RuleKind::StandardValues => qc_standard_values(df),
    }
}
