//! Project catalog loading.
//!
//! The catalog is deployment data, not simulation state: either a JSON file
//! named by `CATALOG_PATH` (an array of catalog entries) or the built-in
//! demo catalog below.

use tracing::info;

use qf_engine::{CatalogProject, ProjectCatalog};

use crate::errors::Result;

/// Load the catalog from `path`, or fall back to the demo catalog.
pub fn load(path: Option<&str>) -> Result<ProjectCatalog> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)?;
            let projects: Vec<CatalogProject> = serde_json::from_str(&raw)?;
            info!("Loaded {} catalog projects from {path}", projects.len());
            Ok(ProjectCatalog::new(projects)?)
        }
        None => {
            info!("CATALOG_PATH not set — using the built-in demo catalog");
            Ok(demo_catalog())
        }
    }
}

/// The built-in demo catalog: a handful of civic projects with plausible
/// targets and contributor bases.
pub fn demo_catalog() -> ProjectCatalog {
    let entries = [
        (
            "community-solar",
            "Community Solar Co-op",
            "Environment",
            50_000.0,
            85u32,
            "#2f9e44",
            "sun",
        ),
        (
            "river-cleanup",
            "Riverbank Cleanup Crew",
            "Environment",
            12_000.0,
            140,
            "#1971c2",
            "droplets",
        ),
        (
            "tool-library",
            "Neighborhood Tool Library",
            "Community",
            8_000.0,
            60,
            "#e8590c",
            "wrench",
        ),
        (
            "after-school-code",
            "After-School Coding Lab",
            "Education",
            20_000.0,
            45,
            "#6741d9",
            "laptop",
        ),
        (
            "open-streets",
            "Open Streets Festival",
            "Community",
            15_000.0,
            110,
            "#c2255c",
            "music",
        ),
        (
            "bike-lanes",
            "Protected Bike Lane Pilot",
            "Infrastructure",
            65_000.0,
            95,
            "#0c8599",
            "bike",
        ),
    ];

    let projects = entries
        .iter()
        .map(
            |&(id, title, category, target_amount, default_contributors, color, icon)| {
                CatalogProject {
                    id: id.to_string(),
                    title: title.to_string(),
                    category: category.to_string(),
                    target_amount,
                    default_contributors,
                    color: Some(color.to_string()),
                    icon: Some(icon.to_string()),
                }
            },
        )
        .collect();

    ProjectCatalog::new(projects).expect("demo catalog is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_is_valid() {
        let catalog = demo_catalog();
        assert!(catalog.len() >= 2);
        assert!(catalog.get("community-solar").is_some());
    }

    #[test]
    fn test_missing_catalog_file_is_an_error() {
        assert!(load(Some("/nonexistent/catalog.json")).is_err());
    }
}
