//! # Simulation session
//!
//! A [`SimulationSession`] is the single owned object holding everything one
//! simulation run needs: the catalog it draws from, the current contribution
//! set, the matching pool, the latest results, and its own RNG. There is no
//! ambient state; callers pass the session wherever it is needed, which
//! keeps the engine testable in isolation.
//!
//! ## Design decisions
//!
//! ### Wholesale recompute
//!
//! Every mutation reruns the engine over the entire contribution set and
//! replaces the result list in one assignment. Rounds are tens of projects,
//! so a full recompute is cheap enough to run on every keystroke, and
//! callers can never observe a partially updated result list.
//!
//! ### Validate, then commit
//!
//! A mutation builds the candidate contribution set, asks the engine to
//! compute over it, and only adopts both on success. A rejected input
//! leaves contributions, pool, and results exactly as they were.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::catalog::ProjectCatalog;
use crate::engine;
use crate::scenario::{self, Archetype};
use crate::types::{ProjectContribution, ProjectFundingResult};
use crate::{EngineError, Result};

/// One interactive simulation run. See the module docs for the state model.
#[derive(Debug)]
pub struct SimulationSession {
    catalog: ProjectCatalog,
    contributions: Vec<ProjectContribution>,
    pool: f64,
    results: Vec<ProjectFundingResult>,
    rng: StdRng,
}

impl SimulationSession {
    /// Open a session seeded from OS entropy.
    pub fn new(catalog: ProjectCatalog, pool: f64, archetype: Archetype) -> Result<Self> {
        Self::with_rng(catalog, pool, archetype, StdRng::from_entropy())
    }

    /// Open a session with a fixed seed. Identical seeds replay identical
    /// random scenarios.
    pub fn with_seed(
        catalog: ProjectCatalog,
        pool: f64,
        archetype: Archetype,
        seed: u64,
    ) -> Result<Self> {
        Self::with_rng(catalog, pool, archetype, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        catalog: ProjectCatalog,
        pool: f64,
        archetype: Archetype,
        mut rng: StdRng,
    ) -> Result<Self> {
        let contributions = scenario::generate(archetype, &catalog, &mut rng);
        let results = engine::compute_round(&catalog, &contributions, pool)?;
        Ok(Self {
            catalog,
            contributions,
            pool,
            results,
            rng,
        })
    }

    // ── Read access ──────────────────────────────────────────────────

    pub fn catalog(&self) -> &ProjectCatalog {
        &self.catalog
    }

    /// The current contribution set, in catalog order.
    pub fn contributions(&self) -> &[ProjectContribution] {
        &self.contributions
    }

    /// The current matching pool.
    pub fn pool(&self) -> f64 {
        self.pool
    }

    /// Results computed from the current contribution set and pool.
    /// Never stale: every constructor and mutation recomputes before
    /// returning.
    pub fn results(&self) -> &[ProjectFundingResult] {
        &self.results
    }

    // ── Mutations — each one a complete synchronous recompute ────────

    /// Set one project's per-contributor amount.
    pub fn set_contribution_amount(&mut self, project_id: &str, amount: f64) -> Result<()> {
        let index = self.contribution_index(project_id)?;
        let mut next = self.contributions.clone();
        next[index].contribution_amount = amount;
        self.commit(next)
    }

    /// Set one project's contributor count.
    pub fn set_contributor_count(&mut self, project_id: &str, count: u32) -> Result<()> {
        let index = self.contribution_index(project_id)?;
        let mut next = self.contributions.clone();
        next[index].contributor_count = count;
        self.commit(next)
    }

    /// Set the matching pool.
    pub fn set_matching_pool(&mut self, pool: f64) -> Result<()> {
        let results = engine::compute_round(&self.catalog, &self.contributions, pool)?;
        self.pool = pool;
        self.results = results;
        Ok(())
    }

    /// Replace the whole contribution set with a fresh archetype draw.
    pub fn load_scenario(&mut self, archetype: Archetype) -> Result<()> {
        let next = scenario::generate(archetype, &self.catalog, &mut self.rng);
        self.commit(next)
    }

    fn contribution_index(&self, project_id: &str) -> Result<usize> {
        self.contributions
            .iter()
            .position(|c| c.project_id == project_id)
            .ok_or_else(|| EngineError::UnknownProject(project_id.to_string()))
    }

    /// Recompute over `next` and adopt contributions and results together,
    /// or return the engine's error with the session untouched.
    fn commit(&mut self, next: Vec<ProjectContribution>) -> Result<()> {
        let results = engine::compute_round(&self.catalog, &next, self.pool)?;
        self.contributions = next;
        self.results = results;
        Ok(())
    }
}
