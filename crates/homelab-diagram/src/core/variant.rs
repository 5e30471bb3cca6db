//! Diagram variant selection

use std::fmt;
use std::str::FromStr;

use super::DiagramError;
use crate::diagrams::{FULL_DIAGRAM, SUMMARY_DIAGRAM};

/// The editions of the home-lab diagram
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Every service, including bridges and container management
    Full,
    /// The home automation core with its databases and dashboards
    Summary,
}

impl Variant {
    /// All variants, full edition first
    pub const ALL: [Variant; 2] = [Variant::Full, Variant::Summary];

    /// Lower-case name used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Full => "full",
            Variant::Summary => "summary",
        }
    }

    /// One-line summary shown by `variants`
    pub fn description(&self) -> &'static str {
        match self {
            Variant::Full => "All home-lab services and their connections",
            Variant::Summary => "Home automation core, databases and dashboards",
        }
    }

    /// The Mermaid source for this variant
    pub fn diagram(&self) -> &'static str {
        match self {
            Variant::Full => FULL_DIAGRAM,
            Variant::Summary => SUMMARY_DIAGRAM,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = DiagramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(Variant::Full),
            "summary" => Ok(Variant::Summary),
            _ => Err(DiagramError::unknown_variant(s.to_string())),
        }
    }
}
