//! Analyzer platform identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The hematology analyzer a dataset came from.
///
/// Every QC entry point accepts an optional machine so per-platform
/// branching can be added without touching call sites. No rule branches
/// on it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Machine {
    /// Abbott CELL-DYN Sapphire.
    Sapphire,
    /// Abbott Alinity hq.
    Alinity,
}

impl Machine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Machine::Sapphire => "sapphire",
            Machine::Alinity => "alinity",
        }
    }
}

impl fmt::Display for Machine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Machine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sapphire" | "sapph" => Ok(Machine::Sapphire),
            "alinity" | "alin" | "alinity hq" => Ok(Machine::Alinity),
            other => Err(format!("unknown machine: {other}")),
        }
    }
}
