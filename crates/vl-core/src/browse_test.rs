use super::*;
use crate::test_utils::{make_catalog, make_tool, slugs, ToolExt};

fn catalog() -> Catalog {
    make_catalog(vec![
        make_tool("atlas")
            .named("Atlas")
            .scored(70)
            .in_industries(&[Industry::Legal])
            .reviewed(40),
        make_tool("beacon")
            .named("Beacon")
            .scored(85)
            .verified()
            .in_industries(&[Industry::Healthcare])
            .certified(&[Certification::Hipaa])
            .reviewed(12),
        make_tool("cipher")
            .named("Cipher")
            .scored(92)
            .in_industries(&[Industry::Finance])
            .priced(PricingTier::Enterprise)
            .reviewed(80),
    ])
}

#[test]
fn test_new_session_lists_everything() {
    let catalog = catalog();
    let session = BrowseSession::new(&catalog);
    assert_eq!(slugs(session.results()), vec!["beacon", "cipher", "atlas"]);
    assert_eq!(session.total(), 3);
    assert_eq!(session.recompute_count(), 1);
}

#[test]
fn test_every_mutation_recomputes() {
    let catalog = catalog();
    let mut session = BrowseSession::new(&catalog);

    session.set_sort(SortOption::Reviews);
    assert_eq!(slugs(session.results()), vec!["cipher", "atlas", "beacon"]);

    session.toggle_industry(Industry::Legal);
    session.toggle_industry(Industry::Finance);
    assert_eq!(slugs(session.results()), vec!["cipher", "atlas"]);

    session.set_min_score(80);
    assert_eq!(slugs(session.results()), vec!["cipher"]);

    session.set_search("atlas");
    assert!(session.results().is_empty());

    assert_eq!(session.recompute_count(), 6);
}

#[test]
fn test_clear_filters_keeps_search_and_sort() {
    let catalog = catalog();
    let mut session = BrowseSession::new(&catalog);
    session.set_search("ph");
    session.set_sort_key("name");
    session.set_verified(true);
    assert!(session.results().is_empty());

    session.clear_filters();
    assert!(session.filters().is_default());
    assert_eq!(session.search(), "ph");
    assert_eq!(session.sort(), SortOption::Name);
    assert_eq!(slugs(session.results()), vec!["cipher"]);
}

#[test]
fn test_unknown_sort_key_selects_relevance() {
    let catalog = catalog();
    let mut session = BrowseSession::new(&catalog);
    session.set_sort(SortOption::Name);
    session.set_sort_key("bogus-key");
    assert_eq!(session.sort(), SortOption::Relevance);
}

#[test]
fn test_hydrated_session_and_share_link() {
    let catalog = catalog();
    let session = BrowseSession::from_query_string(&catalog, "certification=hipaa&sort=score&industry=mars");
    assert_eq!(slugs(session.results()), vec!["beacon"]);
    assert_eq!(session.share_query(), "certification=hipaa&sort=score");
}

#[test]
fn test_other_filter_toggles() {
    let catalog = catalog();
    let mut session = BrowseSession::new(&catalog);
    session.toggle_pricing(PricingTier::Enterprise);
    assert_eq!(slugs(session.results()), vec!["cipher"]);
    session.toggle_pricing(PricingTier::Enterprise);
    session.toggle_deployment_option(DeploymentOption::Cloud);
    assert!(session.results().is_empty());
    session.toggle_deployment_option(DeploymentOption::Cloud);
    session.toggle_use_case(UseCase::Research);
    assert!(session.results().is_empty());
}

#[test]
fn test_empty_catalog_session() {
    let catalog = Catalog::empty();
    let mut session = BrowseSession::new(&catalog);
    session.set_search("x");
    assert!(session.results().is_empty());
}
