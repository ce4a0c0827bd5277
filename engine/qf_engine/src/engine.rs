//! # Matching engine
//!
//! Converts a contribution set and a matching pool into one funding result
//! per project. Pure computation: no I/O, no state, identical inputs yield
//! identical outputs.
//!
//! ## Design decisions
//!
//! ### Weight formula
//!
//! A project's weight is `sqrt(total contribution) × sqrt(contributor
//! count)`. The weight grows sublinearly in the money raised and in the
//! breadth of support, so two projects with the same raw total diverge by
//! contributor count: the one backed by more, smaller contributions carries
//! the larger weight. The pool is split proportionally to these weights.
//!
//! ### Validation before computation
//!
//! Every record is checked before any result is produced. A rejected input
//! returns an error and nothing else; callers never see a partial round.

use crate::catalog::{CatalogProject, ProjectCatalog};
use crate::types::{ProjectContribution, ProjectFundingResult};
use crate::{EngineError, Result};

/// Funding weight of a single contribution record.
///
/// Used only as a ratio against the round's total weight; the absolute
/// magnitude carries no meaning.
pub fn funding_weight(contribution: &ProjectContribution) -> f64 {
    contribution.total_contribution().sqrt() * f64::from(contribution.contributor_count).sqrt()
}

/// Distribute `pool` across `contributions` and derive the per-project
/// funding readouts.
///
/// Whenever at least one project carries nonzero weight, the returned
/// matching amounts sum to `pool` (up to floating-point tolerance). A round
/// where every project has zero weight is valid: every matching amount is
/// zero and no division occurs.
///
/// Errors on a non-finite or negative pool, a non-finite or negative
/// contribution amount, a project id missing from `catalog`, or an empty
/// contribution list.
pub fn compute_round(
    catalog: &ProjectCatalog,
    contributions: &[ProjectContribution],
    pool: f64,
) -> Result<Vec<ProjectFundingResult>> {
    if !pool.is_finite() || pool < 0.0 {
        return Err(EngineError::InvalidPool { pool });
    }
    if contributions.is_empty() {
        return Err(EngineError::EmptyRound);
    }

    // First pass: validate every record and take its weight.
    let mut weighted: Vec<(&ProjectContribution, &CatalogProject, f64)> =
        Vec::with_capacity(contributions.len());
    for contribution in contributions {
        let project = catalog
            .get(&contribution.project_id)
            .ok_or_else(|| EngineError::UnknownProject(contribution.project_id.clone()))?;
        let amount = contribution.contribution_amount;
        if !amount.is_finite() || amount < 0.0 {
            return Err(EngineError::InvalidContributionAmount {
                project_id: contribution.project_id.clone(),
                amount,
            });
        }
        weighted.push((contribution, project, funding_weight(contribution)));
    }

    let total_weight: f64 = weighted.iter().map(|(_, _, w)| w).sum();

    // Second pass: split the pool by weight share.
    let results = weighted
        .into_iter()
        .map(|(contribution, project, weight)| {
            let matching_amount = if total_weight == 0.0 {
                0.0
            } else {
                weight / total_weight * pool
            };
            let total_contribution = contribution.total_contribution();
            let total_funding = total_contribution + matching_amount;
            ProjectFundingResult {
                project_id: contribution.project_id.clone(),
                title: project.title.clone(),
                category: contribution.category.clone(),
                total_contribution,
                funding_weight: weight,
                matching_amount,
                total_funding,
                percent_funded: percent_funded(total_funding, project.target_amount),
            }
        })
        .collect();

    Ok(results)
}

/// Share of the funding target covered, capped at 100.
///
/// A zero target cannot be divided by: any funding at all counts as fully
/// funded, none as unfunded.
fn percent_funded(total_funding: f64, target_amount: f64) -> f64 {
    if target_amount > 0.0 {
        (total_funding / target_amount * 100.0).min(100.0)
    } else if total_funding > 0.0 {
        100.0
    } else {
        0.0
    }
}
