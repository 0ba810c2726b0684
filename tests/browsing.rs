//! Browsing sessions driven through the public API.

use shopdir::api::ShopdirApi;
use shopdir::card::cards;
use shopdir::commands::{FilterEvent, SelectionPolicy};
use shopdir::model::Facet;
use shopdir::store::fs::FileSource;
use shopdir::store::memory::InMemorySource;
use shopdir::store::{FallbackMode, LoadOrigin};

const SHOPS: &str = r#"[
  {"id": 1, "name": "Urban Coffee House", "category": "Coffee & Tea", "subcategory": "Cafe",
   "description": "Roastery", "address": "1 Main St", "rating": 4.5, "reviews": 10},
  {"id": 2, "name": "Tech Solutions Store", "category": "Electronics", "subcategory": "Computer",
   "description": "Laptops", "address": "2 Main St"},
  {"id": 3, "name": "Leaf House", "category": "Coffee & Tea", "subcategory": "Tea",
   "description": "Tea", "address": "3 Main St", "rating": 0}
]"#;

async fn file_session(policy: SelectionPolicy) -> (tempfile::TempDir, ShopdirApi<FileSource>) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shops.json");
    std::fs::write(&path, SHOPS).unwrap();
    let api = ShopdirApi::load(FileSource::new(path), FallbackMode::Disabled, policy)
        .await
        .unwrap();
    (dir, api)
}

fn category(value: &str) -> FilterEvent {
    FilterEvent::SelectCategory(Facet::value(value))
}

fn subcategory(value: &str) -> FilterEvent {
    FilterEvent::SelectSubcategory(Facet::value(value))
}

fn search(text: &str) -> FilterEvent {
    FilterEvent::SetSearch(text.to_string())
}

fn names(api: &ShopdirApi<FileSource>) -> Vec<String> {
    api.current()
        .listed_shops
        .into_iter()
        .map(|r| r.name)
        .collect()
}

#[tokio::test]
async fn category_subcategory_then_new_category() {
    let (_dir, mut api) = file_session(SelectionPolicy::default()).await;

    api.dispatch(category("Coffee & Tea")).unwrap();
    api.dispatch(subcategory("Cafe")).unwrap();
    assert_eq!(names(&api), vec!["Urban Coffee House"]);

    let result = api.dispatch(category("Electronics")).unwrap();
    assert_eq!(result.state.subcategory, Facet::All);
    assert_eq!(names(&api), vec!["Tech Solutions Store"]);
}

#[tokio::test]
async fn search_overrides_and_clear_restores_all() {
    let (_dir, mut api) = file_session(SelectionPolicy::default()).await;

    api.dispatch(category("Electronics")).unwrap();
    let result = api.dispatch(search("main st")).unwrap();
    assert_eq!(result.listed_shops.len(), 3);
    assert!(result.selection.search_active);

    let result = api.dispatch(FilterEvent::ClearSearch).unwrap();
    assert_eq!(result.state.category, Facet::All);
    assert_eq!(result.listed_shops.len(), 3);
}

#[tokio::test]
async fn category_pick_during_search_keeps_search_by_default() {
    let (_dir, mut api) = file_session(SelectionPolicy::default()).await;

    api.dispatch(search("laptops")).unwrap();
    let result = api.dispatch(category("Coffee & Tea")).unwrap();
    assert_eq!(result.state.search_text, "laptops");
    assert_eq!(names(&api), vec!["Tech Solutions Store"]);

    // The menu shows the stored pick, and its subcategories can be chosen
    assert_eq!(result.selection.category, Facet::value("Coffee & Tea"));
    assert!(result.selection.search_active);
    let active: Vec<_> = result
        .menu
        .categories
        .iter()
        .filter(|o| o.active)
        .map(|o| o.value.as_str())
        .collect();
    assert_eq!(active, vec!["Coffee & Tea"]);
    let subs: Vec<_> = result
        .menu
        .subcategories
        .iter()
        .map(|o| o.value.as_str())
        .collect();
    assert_eq!(subs, vec!["all", "Cafe", "Tea"]);
    api.dispatch(subcategory("Tea")).unwrap();

    let result = api.dispatch(FilterEvent::ClearSearch).unwrap();
    assert_eq!(result.selection.category, Facet::value("Coffee & Tea"));
    assert!(!result.selection.search_active);
    assert_eq!(names(&api), vec!["Leaf House"]);
}

#[tokio::test]
async fn category_pick_can_clear_search() {
    let policy = SelectionPolicy {
        clear_search_on_category: true,
    };
    let (_dir, mut api) = file_session(policy).await;

    api.dispatch(search("laptops")).unwrap();
    api.dispatch(category("Coffee & Tea")).unwrap();
    assert_eq!(names(&api), vec!["Urban Coffee House", "Leaf House"]);
}

#[tokio::test]
async fn cards_follow_rating_rules() {
    let (_dir, api) = file_session(SelectionPolicy::default()).await;
    let shown = cards(&api.current().listed_shops);

    let urban = shown[0].rating.as_ref().unwrap();
    assert_eq!(urban.stars, "★★★★⯪");
    assert_eq!(urban.text, "4.5/5 (10 reviews)");

    assert!(shown[1].rating.is_none());

    let leaf = shown[2].rating.as_ref().unwrap();
    assert_eq!(leaf.stars, "☆☆☆☆☆");
    assert_eq!(leaf.text, "0/5 (0 reviews)");
}

#[tokio::test]
async fn failed_load_browses_the_bundled_list() {
    let mut api = ShopdirApi::load(
        InMemorySource::failing(),
        FallbackMode::Embedded,
        SelectionPolicy::default(),
    )
    .await
    .unwrap();

    assert!(matches!(api.origin(), LoadOrigin::Fallback { .. }));
    let result = api.dispatch(category("Electronics")).unwrap();
    assert!(!result.listed_shops.is_empty());
    assert!(result.listed_shops.iter().all(|r| r.category == "Electronics"));
}

#[tokio::test]
async fn failed_load_without_fallback_is_an_error() {
    let result = ShopdirApi::load(
        InMemorySource::failing(),
        FallbackMode::Disabled,
        SelectionPolicy::default(),
    )
    .await;
    assert!(result.is_err());
}
