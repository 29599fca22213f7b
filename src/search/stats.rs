//! Lookahead statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one lookahead search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Own planets eligible as a source.
    pub sources: u32,

    /// Foreign planets eligible as a destination.
    pub targets: u32,

    /// Simulated branches evaluated.
    pub branches: u32,

    /// Score of the chosen branch, if any.
    pub best_score: Option<f64>,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Simulated branches per second of search time.
    #[must_use]
    pub fn branches_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            f64::from(self.branches) / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
