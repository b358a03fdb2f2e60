use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    Morning,   // M
    Afternoon, // A
}

impl Shift {
    pub fn code(&self) -> &'static str {
        match self {
            Shift::Morning => "morning",
            Shift::Afternoon => "afternoon",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Shift::Morning => Shift::Afternoon,
            Shift::Afternoon => Shift::Morning,
        }
    }

    /// Helper: convert input code from CLI (`morning`, `m`, `AFTERNOON`, ...)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "morning" | "m" | "1" => Some(Shift::Morning),
            "afternoon" | "a" | "2" => Some(Shift::Afternoon),
            _ => None,
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// How the machine is staffed on weekdays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Coverage {
    /// Both shifts back-to-back, merged into one window.
    Continuous,
    /// Only the given shift (the starting shift when weeks alternate).
    Single(Shift),
}

impl Coverage {
    pub fn code(&self) -> &'static str {
        match self {
            Coverage::Continuous => "continuous",
            Coverage::Single(s) => s.code(),
        }
    }

    /// `continuous` / `c`, or any shift code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "continuous" | "c" | "both" => Some(Coverage::Continuous),
            other => Shift::from_code(other).map(Coverage::Single),
        }
    }

    pub fn single_shift(&self) -> Option<Shift> {
        match self {
            Coverage::Continuous => None,
            Coverage::Single(s) => Some(*s),
        }
    }
}

impl fmt::Display for Coverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
