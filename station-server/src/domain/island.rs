//! Neighbouring islands used for out-of-region guidance.

use std::fmt;

use serde::Serialize;

/// An island other than the one being served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Island {
    Oahu,
    Maui,
    Kauai,
    MolokaiOrLanai,
    /// Inside the island chain but matching none of the coarse boxes.
    Other,
}

impl Island {
    /// Human-readable name for messages.
    pub fn label(&self) -> &'static str {
        match self {
            Island::Oahu => "Oahu",
            Island::Maui => "Maui",
            Island::Kauai => "Kauai",
            Island::MolokaiOrLanai => "Molokai or Lanai",
            Island::Other => "another Hawaiian island",
        }
    }
}

impl fmt::Display for Island {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
