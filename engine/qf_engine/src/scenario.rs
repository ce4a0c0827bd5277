//! # Scenario archetypes
//!
//! Named synthetic contribution-pattern generators. An archetype is policy,
//! not formula: it decides each project's per-contributor amount and
//! contributor count from the catalog entry, and the engine does the rest.
//! All bounds live in the constants below.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::ProjectCatalog;
use crate::types::ProjectContribution;

// ── Archetype parameters ─────────────────────────────────────────────

/// Per-contributor amount range for `realistic`.
const REALISTIC_MIN_AMOUNT: f64 = 10.0;
const REALISTIC_MAX_AMOUNT: f64 = 60.0;

/// Fixed per-contributor amount for whale-backed projects.
const WHALE_AMOUNT: f64 = 1_000.0;
/// Contributor count for whale-backed projects.
const WHALE_CONTRIBUTORS: u32 = 3;
/// How many catalog entries (from the front) the whales back.
const WHALE_PROJECT_COUNT: usize = 2;
/// Amount range for the projects the whales ignore.
const WHALE_REST_MIN_AMOUNT: f64 = 5.0;
const WHALE_REST_MAX_AMOUNT: f64 = 20.0;

/// Amount range for `grassroots`.
const GRASSROOTS_MIN_AMOUNT: f64 = 2.0;
const GRASSROOTS_MAX_AMOUNT: f64 = 15.0;

/// Uniform amount and contributor count for `balanced`.
const BALANCED_AMOUNT: f64 = 25.0;
const BALANCED_CONTRIBUTORS: u32 = 50;

/// Named donor-behavior patterns used to explore how the matching formula
/// reacts to different contribution shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    /// Independent mid-sized amounts; contributor counts from the catalog.
    Realistic,
    /// A small identifiable subset backed by deep pockets with very few
    /// contributors; everyone else small, with catalog counts halved.
    Whales,
    /// Wide and shallow: small amounts, catalog counts doubled.
    Grassroots,
    /// Symmetric control case: identical support for every project.
    Balanced,
}

impl Archetype {
    /// Short identifier string, e.g. for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Realistic => "realistic",
            Self::Whales => "whales",
            Self::Grassroots => "grassroots",
            Self::Balanced => "balanced",
        }
    }
}

/// Build a full contribution set for `archetype` over `catalog`.
///
/// Produces exactly one record per catalog entry, in catalog order.
pub fn generate(
    archetype: Archetype,
    catalog: &ProjectCatalog,
    rng: &mut impl Rng,
) -> Vec<ProjectContribution> {
    catalog
        .projects()
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let (contribution_amount, contributor_count) = match archetype {
                Archetype::Realistic => (
                    rng.gen_range(REALISTIC_MIN_AMOUNT..=REALISTIC_MAX_AMOUNT),
                    project.default_contributors,
                ),
                Archetype::Whales if i < WHALE_PROJECT_COUNT => (WHALE_AMOUNT, WHALE_CONTRIBUTORS),
                Archetype::Whales => (
                    rng.gen_range(WHALE_REST_MIN_AMOUNT..=WHALE_REST_MAX_AMOUNT),
                    project.default_contributors / 2,
                ),
                Archetype::Grassroots => (
                    rng.gen_range(GRASSROOTS_MIN_AMOUNT..=GRASSROOTS_MAX_AMOUNT),
                    project.default_contributors.saturating_mul(2),
                ),
                Archetype::Balanced => (BALANCED_AMOUNT, BALANCED_CONTRIBUTORS),
            };
            ProjectContribution {
                project_id: project.id.clone(),
                contribution_amount,
                contributor_count,
                category: project.category.clone(),
            }
        })
        .collect()
}
