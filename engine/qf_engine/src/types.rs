//! # Types
//!
//! Shared data structures used across the matching engine and the simulator.
//!
//! ## Design decisions
//!
//! ### Contribution / result split
//!
//! A round is described by two parallel lists:
//!
//! - [`ProjectContribution`] — the editable input, one record per project.
//! - [`ProjectFundingResult`] — the computed output, rebuilt wholesale on
//!   every edit and never patched in place.
//!
//! ### Monetary values are plain `f64`
//!
//! No currency rounding happens inside the engine. Rounding to display
//! precision is a presentation concern; keeping the raw values means repeated
//! recomputation after successive edits does not accumulate rounding error.

use serde::{Deserialize, Serialize};

/// One contribution record per project in a funding round.
///
/// The model assumes every contributor to a project gives the same amount,
/// so a record is fully described by the per-contributor amount and the
/// number of contributors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectContribution {
    /// Opaque stable identifier; must name an entry in the project catalog.
    pub project_id: String,
    /// Per-contributor amount. Non-negative and finite.
    pub contribution_amount: f64,
    /// Number of distinct contributors.
    pub contributor_count: u32,
    /// Classification label, carried through to results for display grouping
    /// only. Never enters the matching math.
    pub category: String,
}

impl ProjectContribution {
    /// Raw total raised by this project: amount × contributor count.
    pub fn total_contribution(&self) -> f64 {
        self.contribution_amount * f64::from(self.contributor_count)
    }
}

/// Engine output for a single project.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectFundingResult {
    /// Identifier of the project this result belongs to.
    pub project_id: String,
    /// Display title, taken from the catalog.
    pub title: String,
    /// Display category, carried over from the contribution record.
    pub category: String,
    /// Raw total raised: amount × contributor count.
    pub total_contribution: f64,
    /// Scalar used only as a ratio against the round's total weight.
    pub funding_weight: f64,
    /// Share of the matching pool assigned to this project.
    pub matching_amount: f64,
    /// Raw total plus the match.
    pub total_funding: f64,
    /// Share of the funding target covered, capped at 100.
    pub percent_funded: f64,
}
