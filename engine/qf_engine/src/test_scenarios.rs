use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::scenario::{self, Archetype};
use crate::{CatalogProject, ProjectCatalog};

fn demo_catalog() -> ProjectCatalog {
    let projects = [
        ("solar", "Environment", 50_000.0, 85u32),
        ("river", "Environment", 12_000.0, 140),
        ("tools", "Community", 8_000.0, 60),
        ("coding", "Education", 20_000.0, 45),
        ("streets", "Community", 15_000.0, 110),
    ]
    .iter()
    .map(|&(id, category, target, contributors)| CatalogProject {
        id: id.to_string(),
        title: id.to_string(),
        category: category.to_string(),
        target_amount: target,
        default_contributors: contributors,
        color: None,
        icon: None,
    })
    .collect();
    ProjectCatalog::new(projects).expect("demo catalog is valid")
}

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn test_every_archetype_covers_the_whole_catalog() {
    let catalog = demo_catalog();
    for archetype in [
        Archetype::Realistic,
        Archetype::Whales,
        Archetype::Grassroots,
        Archetype::Balanced,
    ] {
        let contributions = scenario::generate(archetype, &catalog, &mut rng(1));
        assert_eq!(contributions.len(), catalog.len());
        for (c, p) in contributions.iter().zip(catalog.projects()) {
            assert_eq!(c.project_id, p.id);
            assert_eq!(c.category, p.category);
        }
    }
}

#[test]
fn test_realistic_keeps_catalog_counts_and_bounds_amounts() {
    let catalog = demo_catalog();
    let contributions = scenario::generate(Archetype::Realistic, &catalog, &mut rng(2));

    for (c, p) in contributions.iter().zip(catalog.projects()) {
        assert_eq!(c.contributor_count, p.default_contributors);
        assert!(
            (10.0..=60.0).contains(&c.contribution_amount),
            "realistic amount {} out of range",
            c.contribution_amount
        );
    }
}

#[test]
fn test_whales_back_an_identifiable_subset() {
    let catalog = demo_catalog();
    let contributions = scenario::generate(Archetype::Whales, &catalog, &mut rng(3));

    // The first two catalog entries are whale-backed: high fixed amount,
    // very few contributors.
    for c in &contributions[..2] {
        assert_eq!(c.contribution_amount, 1_000.0);
        assert_eq!(c.contributor_count, 3);
    }
    // Everyone else: small amounts, catalog counts halved.
    for (c, p) in contributions[2..].iter().zip(&catalog.projects()[2..]) {
        assert!(
            (5.0..=20.0).contains(&c.contribution_amount),
            "non-whale amount {} out of range",
            c.contribution_amount
        );
        assert_eq!(c.contributor_count, p.default_contributors / 2);
    }
}

#[test]
fn test_grassroots_doubles_catalog_counts() {
    let catalog = demo_catalog();
    let contributions = scenario::generate(Archetype::Grassroots, &catalog, &mut rng(4));

    for (c, p) in contributions.iter().zip(catalog.projects()) {
        assert_eq!(c.contributor_count, p.default_contributors * 2);
        assert!(
            (2.0..=15.0).contains(&c.contribution_amount),
            "grassroots amount {} out of range",
            c.contribution_amount
        );
    }
}

#[test]
fn test_balanced_is_uniform() {
    let catalog = demo_catalog();
    let contributions = scenario::generate(Archetype::Balanced, &catalog, &mut rng(5));

    let first = &contributions[0];
    for c in &contributions {
        assert_eq!(c.contribution_amount, first.contribution_amount);
        assert_eq!(c.contributor_count, first.contributor_count);
    }
}

#[test]
fn test_generation_is_deterministic_per_seed() {
    let catalog = demo_catalog();
    let first = scenario::generate(Archetype::Realistic, &catalog, &mut rng(9));
    let second = scenario::generate(Archetype::Realistic, &catalog, &mut rng(9));
    assert_eq!(first, second);
}
