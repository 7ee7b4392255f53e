//! Human-readable scan report.

use std::fmt;

use crate::blockchain::checksummed;
use crate::scanner::types::ScanResult;

const RULE_WIDTH: usize = 60;

/// Qualitative reading of the new signature index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Index above 85%.
    CriticalMass,
    /// Index above 50%.
    SteadySignal,
    StableEcosystem,
}

impl Verdict {
    pub fn from_index(index: f64) -> Self {
        if index > 85.0 {
            Verdict::CriticalMass
        } else if index > 50.0 {
            Verdict::SteadySignal
        } else {
            Verdict::StableEcosystem
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Verdict::CriticalMass => {
                "Critical mass: a surge of new signatures is reaching the contract."
            }
            Verdict::SteadySignal => {
                "Steady signal: the contract keeps attracting new signatures."
            }
            Verdict::StableEcosystem => {
                "Stable ecosystem: activity is carried by known signatures."
            }
        }
    }
}

/// Display adapter that renders a [`ScanResult`] as the final report.
pub struct Report<'a>(pub &'a ScanResult);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        let index = result.new_signature_index();
        let rule = "=".repeat(RULE_WIDTH);

        writeln!(f, "Target contract: {}", checksummed(&result.target))?;
        writeln!(
            f,
            "Scan depth:      {} blocks ({} to {})",
            result.window.len(),
            result.window.start,
            result.window.end
        )?;
        writeln!(f)?;
        writeln!(f, "Signature scan results")?;
        writeln!(f, "{}", rule)?;
        writeln!(f, "Total interactions with target: {}", result.total_interactions)?;
        writeln!(f, "Unique signatures detected:     {}", result.unique_signatures())?;
        if !result.skipped.is_empty() {
            writeln!(
                f,
                "Blocks skipped after errors:    {} of {}",
                result.skipped.len(),
                result.window.len()
            )?;
        }
        writeln!(f)?;
        writeln!(f, "New signature index: {:.2}%", index)?;
        writeln!(f, "  (share of previously unknown signatures among all seen)")?;
        writeln!(f, "{}", rule)?;
        write!(f, "VERDICT: {}", Verdict::from_index(index).message())
    }
}
