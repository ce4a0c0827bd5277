//! # Project catalog
//!
//! The catalog is supplied by an external collaborator (a deployment file or
//! a hard-coded demo set) and is read-only for the lifetime of a session.
//! The engine consumes `target_amount` for the percent-funded readout and
//! `title` for result enrichment; the display metadata (`color`, `icon`)
//! passes through untouched and never enters the matching math.

use serde::{Deserialize, Serialize};

use crate::{EngineError, Result};

/// One catalog entry, as supplied by the deployment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogProject {
    /// Opaque stable identifier, unique within the catalog.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Classification label used for display grouping.
    pub category: String,
    /// Funding target; a zero target is allowed and handled by the
    /// percent-funded guard.
    pub target_amount: f64,
    /// Contributor count used by scenarios that keep catalog counts.
    pub default_contributors: u32,
    /// Display color, e.g. a hex string. Enrichment only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Display icon name. Enrichment only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// An ordered, validated collection of catalog entries.
///
/// Construction is the single validation point: ids must be unique and
/// targets finite and non-negative. Everything downstream can rely on that.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectCatalog {
    projects: Vec<CatalogProject>,
}

impl ProjectCatalog {
    /// Validate and wrap a list of catalog entries.
    pub fn new(projects: Vec<CatalogProject>) -> Result<Self> {
        if projects.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }
        for (i, project) in projects.iter().enumerate() {
            if !project.target_amount.is_finite() || project.target_amount < 0.0 {
                return Err(EngineError::InvalidTargetAmount {
                    project_id: project.id.clone(),
                    target: project.target_amount,
                });
            }
            if projects[..i].iter().any(|p| p.id == project.id) {
                return Err(EngineError::DuplicateProject(project.id.clone()));
            }
        }
        Ok(Self { projects })
    }

    /// All entries, in catalog order.
    pub fn projects(&self) -> &[CatalogProject] {
        &self.projects
    }

    /// Look up an entry by id.
    pub fn get(&self, id: &str) -> Option<&CatalogProject> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Number of entries. Always at least one.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
