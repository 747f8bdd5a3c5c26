use gicm::error::GicmError;
use gicm::registry::catalog;
use gicm::registry::{ItemDefinition, ItemKind, Registry};
use gicm::site::PageManifest;

fn definition(id: &str) -> ItemDefinition {
    toml::from_str(&format!(
        "id = \"{}\"\nname = \"{}\"\ndescription = \"test item\"\n",
        id, id
    ))
    .expect("definition should parse")
}

#[test]
fn test_embedded_registry_loads() {
    let registry = catalog::load_embedded().expect("Failed to load embedded catalog");
    assert!(!registry.is_empty());
}

#[test]
fn test_by_id_returns_every_item() {
    let registry = catalog::load_embedded().expect("Failed to load registry");
    for item in registry.all() {
        let found = registry.by_id(item.id()).expect("item should resolve");
        assert_eq!(found, item);
    }
}

#[test]
fn test_registry_order_is_kind_grouped() {
    let registry = catalog::load_embedded().expect("Failed to load registry");
    let kinds: Vec<ItemKind> = registry.all().iter().map(|i| i.kind).collect();
    let mut sorted = kinds.clone();
    sorted.sort();
    assert_eq!(kinds, sorted, "items should be grouped in kind order");
}

#[test]
fn test_counts_match_content() {
    let registry = catalog::load_embedded().expect("Failed to load registry");
    let total: usize = registry.counts().iter().map(|(_, n)| n).sum();
    assert_eq!(total, registry.len());
}

#[test]
fn test_duplicate_id_always_fails() {
    for (first, second) in [
        (ItemKind::Agent, ItemKind::Agent),
        (ItemKind::Skill, ItemKind::Mcp),
        (ItemKind::Setting, ItemKind::Command),
    ] {
        let mut builder = Registry::builder();
        builder
            .add_group(first, "first.toml", vec![definition("same-id")])
            .unwrap();
        let result = builder.add_group(second, "second.toml", vec![definition("same-id")]);
        assert!(matches!(result, Err(GicmError::DuplicateId { .. })));
    }
}

#[test]
fn test_unknown_id_is_not_found() {
    let registry = catalog::load_embedded().expect("Failed to load registry");
    assert!(matches!(
        registry.by_id("does-not-exist"),
        Err(GicmError::NotFound(_))
    ));
}

#[test]
fn test_search_finds_solana_items() {
    let registry = catalog::load_embedded().expect("Failed to load registry");
    let hits = registry.search("solana");
    assert!(hits.iter().any(|h| h.item.id() == "solana-mastery"));
    assert!(hits.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_page_manifest_covers_registry() {
    let registry = catalog::load_embedded().expect("Failed to load registry");
    let manifest = PageManifest::build(&registry);
    assert_eq!(manifest.listings().count(), ItemKind::ALL.len());
    assert_eq!(manifest.details().count(), registry.len());
}

#[test]
fn test_embedded_catalog_passes_audit() {
    let registry = catalog::load_embedded().expect("Failed to load registry");
    let findings = gicm::audit::audit(&registry);
    assert!(findings.is_empty(), "unexpected findings: {:?}", findings);
}

#[test]
fn test_search_by_env_key() {
    let registry = catalog::load_embedded().expect("Failed to load registry");
    let hits = registry.search("GITHUB_PERSONAL_ACCESS_TOKEN");
    assert!(hits.iter().any(|h| h.item.id() == "github"));
}
