//! # Quadratic Funding Engine
//!
//! This crate is the computational core of a civic crowdfunding platform:
//! a quadratic-funding matching engine and the scenario simulator built on
//! top of it. Everything here is synchronous, in-process, and free of I/O;
//! UI surfaces and catalog sources are external collaborators.
//!
//! | Concern                         | Module       |
//! |---------------------------------|--------------|
//! | Matching math                   | [`engine`]   |
//! | Session state + mutations       | [`session`]  |
//! | Archetype generators            | [`scenario`] |
//! | Catalog types                   | [`catalog`]  |
//! | Contribution / result records   | [`types`]    |
//!
//! ## Architecture
//!
//! The engine ([`compute_round`]) is a pure function: a catalog, a
//! contribution set, and a pool in; one [`ProjectFundingResult`] per record
//! out. All mutable state lives in [`SimulationSession`], which owns the
//! current contribution set and pool, and reruns the engine in full on every
//! mutation. Nothing is persisted; a session's state dies with it.

mod catalog;
mod engine;
mod scenario;
mod session;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_scenarios;

pub use catalog::{CatalogProject, ProjectCatalog};
pub use engine::{compute_round, funding_weight};
pub use scenario::Archetype;
pub use session::SimulationSession;
pub use types::{ProjectContribution, ProjectFundingResult};

use thiserror::Error;

/// Errors surfaced by the engine and the simulator session.
///
/// Every variant is a caller contract violation, surfaced immediately and
/// never retried: the computation is deterministic and has no I/O, so a
/// failure is an input or programming error, not a transient condition.
/// A rejected input is never partially applied.
///
/// Note that a round where every project has zero weight is *not* an error;
/// the pool simply goes undistributed.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EngineError {
    #[error("project {project_id}: contribution amount must be finite and non-negative (got {amount})")]
    InvalidContributionAmount { project_id: String, amount: f64 },

    #[error("matching pool must be finite and non-negative (got {pool})")]
    InvalidPool { pool: f64 },

    #[error("project {project_id}: target amount must be finite and non-negative (got {target})")]
    InvalidTargetAmount { project_id: String, target: f64 },

    #[error("unknown project id: {0}")]
    UnknownProject(String),

    #[error("duplicate project id in catalog: {0}")]
    DuplicateProject(String),

    #[error("a project catalog must contain at least one project")]
    EmptyCatalog,

    #[error("a funding round must contain at least one contribution record")]
    EmptyRound,
}

pub type Result<T> = std::result::Result<T, EngineError>;
