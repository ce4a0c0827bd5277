#![allow(dead_code)]

use crate::types::{ProjectContribution, ProjectFundingResult};

/// Relative tolerance for floating-point conservation checks.
pub const REL_TOLERANCE: f64 = 1e-6;

/// INV-1: the pool is conserved — matching amounts sum to the pool whenever
/// any project carries weight, and to exactly zero otherwise.
pub fn assert_pool_conserved(results: &[ProjectFundingResult], pool: f64) {
    let total_weight: f64 = results.iter().map(|r| r.funding_weight).sum();
    let matched: f64 = results.iter().map(|r| r.matching_amount).sum();
    if total_weight == 0.0 {
        assert_eq!(
            matched, 0.0,
            "INV-1 violated: zero-weight round distributed {}",
            matched
        );
    } else {
        let tolerance = REL_TOLERANCE * pool.max(1.0);
        assert!(
            (matched - pool).abs() <= tolerance,
            "INV-1 violated: matching amounts sum to {}, pool is {}",
            matched,
            pool
        );
    }
}

/// INV-2: no computed value is negative.
pub fn assert_non_negative(results: &[ProjectFundingResult]) {
    for r in results {
        assert!(
            r.funding_weight >= 0.0,
            "INV-2 violated: project {} has negative weight {}",
            r.project_id,
            r.funding_weight
        );
        assert!(
            r.matching_amount >= 0.0,
            "INV-2 violated: project {} has negative match {}",
            r.project_id,
            r.matching_amount
        );
        assert!(
            r.total_funding >= 0.0,
            "INV-2 violated: project {} has negative total funding {}",
            r.project_id,
            r.total_funding
        );
    }
}

/// INV-3: total funding is the contribution total plus the match.
pub fn assert_totals_consistent(results: &[ProjectFundingResult]) {
    for r in results {
        assert_eq!(
            r.total_funding,
            r.total_contribution + r.matching_amount,
            "INV-3 violated: project {} totals are inconsistent",
            r.project_id
        );
    }
}

/// INV-4: percent funded stays within 0..=100.
pub fn assert_percent_bounds(results: &[ProjectFundingResult]) {
    for r in results {
        assert!(
            (0.0..=100.0).contains(&r.percent_funded),
            "INV-4 violated: project {} percent funded is {}",
            r.project_id,
            r.percent_funded
        );
    }
}

/// INV-5: results line up one-to-one, in order, with the contribution set.
pub fn assert_matches_contributions(
    contributions: &[ProjectContribution],
    results: &[ProjectFundingResult],
) {
    assert_eq!(
        contributions.len(),
        results.len(),
        "INV-5 violated: {} contributions produced {} results",
        contributions.len(),
        results.len()
    );
    for (c, r) in contributions.iter().zip(results) {
        assert_eq!(
            c.project_id, r.project_id,
            "INV-5 violated: result order does not follow contribution order"
        );
        assert_eq!(
            r.total_contribution,
            c.total_contribution(),
            "INV-5 violated: project {} total contribution mismatch",
            c.project_id
        );
    }
}

/// Run all round invariants against one computed result set.
pub fn assert_round_invariants(
    contributions: &[ProjectContribution],
    results: &[ProjectFundingResult],
    pool: f64,
) {
    assert_matches_contributions(contributions, results);
    assert_pool_conserved(results, pool);
    assert_non_negative(results);
    assert_totals_consistent(results);
    assert_percent_bounds(results);
}
