//! Filter state transitions.
//!
//! Every user interaction is a [`FilterEvent`]. [`apply`] is a pure function
//! from the previous state to the next one; it never touches the records
//! beyond checking the facet index for the values it is asked to select.

use super::facets::FacetIndex;
use crate::error::{Result, ShopdirError};
use crate::model::{Facet, FilterState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    SelectCategory(Facet),
    SelectSubcategory(Facet),
    SetSearch(String),
    ClearSearch,
}

/// How selecting a category interacts with an active search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionPolicy {
    /// When set, picking a category also empties the search text so the
    /// pick has a visible effect. When unset, search keeps precedence.
    pub clear_search_on_category: bool,
}

pub fn apply(
    state: &FilterState,
    event: FilterEvent,
    facets: &FacetIndex,
    policy: SelectionPolicy,
) -> Result<FilterState> {
    let next = match event {
        FilterEvent::SelectCategory(category) => {
            if let Some(value) = category.as_value() {
                if !facets.has_category(value) {
                    return Err(unknown("category", value));
                }
            }
            let search_text = if policy.clear_search_on_category {
                String::new()
            } else {
                state.search_text.clone()
            };
            FilterState {
                category,
                subcategory: Facet::All,
                search_text,
            }
        }
        FilterEvent::SelectSubcategory(subcategory) => {
            if let Some(value) = subcategory.as_value() {
                if !facets.has_subcategory(value) {
                    return Err(unknown("subcategory", value));
                }
            }
            FilterState {
                subcategory,
                ..state.clone()
            }
        }
        FilterEvent::SetSearch(text) => {
            if text.trim().is_empty() {
                FilterState {
                    search_text: text,
                    ..state.clone()
                }
            } else {
                // Entering search resets both selectors so that clearing it
                // later lands on the all/all view.
                FilterState {
                    category: Facet::All,
                    subcategory: Facet::All,
                    search_text: text,
                }
            }
        }
        FilterEvent::ClearSearch => FilterState {
            search_text: String::new(),
            ..state.clone()
        },
    };
    Ok(next)
}

fn unknown(facet: &'static str, value: &str) -> ShopdirError {
    ShopdirError::UnknownFacet {
        facet,
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facets_for(category: &str) -> FacetIndex {
        let subcategories = match category {
            "Coffee & Tea" => vec!["Cafe".to_string(), "Tea Room".to_string()],
            "Electronics" => vec!["Computer".to_string()],
            _ => vec![
                "Cafe".to_string(),
                "Tea Room".to_string(),
                "Computer".to_string(),
            ],
        };
        FacetIndex {
            categories: vec!["Coffee & Tea".to_string(), "Electronics".to_string()],
            subcategories,
        }
    }

    fn step(state: &FilterState, event: FilterEvent) -> FilterState {
        let facets = facets_for(&state.category.to_string());
        apply(state, event, &facets, SelectionPolicy::default()).unwrap()
    }

    #[test]
    fn selecting_category_resets_subcategory() {
        let s = FilterState::default();
        let s = step(&s, FilterEvent::SelectCategory(Facet::value("Coffee & Tea")));
        let s = step(&s, FilterEvent::SelectSubcategory(Facet::value("Cafe")));
        assert_eq!(s.subcategory, Facet::value("Cafe"));

        let s = step(&s, FilterEvent::SelectCategory(Facet::value("Electronics")));
        assert_eq!(s.category, Facet::value("Electronics"));
        assert_eq!(s.subcategory, Facet::All);
    }

    #[test]
    fn selecting_subcategory_keeps_category() {
        let s = step(
            &FilterState::default(),
            FilterEvent::SelectCategory(Facet::value("Coffee & Tea")),
        );
        let s = step(&s, FilterEvent::SelectSubcategory(Facet::value("Tea Room")));
        assert_eq!(s.category, Facet::value("Coffee & Tea"));
    }

    #[test]
    fn subcategory_outside_category_is_rejected() {
        let s = step(
            &FilterState::default(),
            FilterEvent::SelectCategory(Facet::value("Electronics")),
        );
        let err = apply(
            &s,
            FilterEvent::SelectSubcategory(Facet::value("Cafe")),
            &facets_for("Electronics"),
            SelectionPolicy::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ShopdirError::UnknownFacet { facet: "subcategory", .. }));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let result = apply(
            &FilterState::default(),
            FilterEvent::SelectCategory(Facet::value("Bakery")),
            &facets_for("all"),
            SelectionPolicy::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn entering_search_resets_selectors() {
        let s = step(
            &FilterState::default(),
            FilterEvent::SelectCategory(Facet::value("Coffee & Tea")),
        );
        let s = step(&s, FilterEvent::SelectSubcategory(Facet::value("Cafe")));
        let s = step(&s, FilterEvent::SetSearch("kettle".into()));
        assert_eq!(s.category, Facet::All);
        assert_eq!(s.subcategory, Facet::All);
        assert_eq!(s.search_text, "kettle");
    }

    #[test]
    fn clearing_search_returns_to_all_all() {
        let s = step(
            &FilterState::default(),
            FilterEvent::SelectCategory(Facet::value("Electronics")),
        );
        let s = step(&s, FilterEvent::SetSearch("laptop".into()));
        let s = step(&s, FilterEvent::ClearSearch);
        assert_eq!(s, FilterState::default());
    }

    #[test]
    fn blank_search_does_not_reset_selectors() {
        let s = step(
            &FilterState::default(),
            FilterEvent::SelectCategory(Facet::value("Electronics")),
        );
        let s = step(&s, FilterEvent::SetSearch("   ".into()));
        assert_eq!(s.category, Facet::value("Electronics"));
    }

    #[test]
    fn category_pick_during_search_keeps_search_by_default() {
        let s = step(&FilterState::default(), FilterEvent::SetSearch("tea".into()));
        let s = step(&s, FilterEvent::SelectCategory(Facet::value("Electronics")));
        assert_eq!(s.search_text, "tea");
        assert_eq!(s.category, Facet::value("Electronics"));
    }

    #[test]
    fn category_pick_can_clear_search() {
        let s = step(&FilterState::default(), FilterEvent::SetSearch("tea".into()));
        let policy = SelectionPolicy {
            clear_search_on_category: true,
        };
        let s = apply(
            &s,
            FilterEvent::SelectCategory(Facet::value("Electronics")),
            &facets_for("all"),
            policy,
        )
        .unwrap();
        assert!(s.search_text.is_empty());
        assert_eq!(s.category, Facet::value("Electronics"));
    }

    #[test]
    fn selecting_all_is_always_accepted() {
        let facets = FacetIndex::default();
        let s = apply(
            &FilterState::default(),
            FilterEvent::SelectSubcategory(Facet::All),
            &facets,
            SelectionPolicy::default(),
        )
        .unwrap();
        assert_eq!(s, FilterState::default());
    }
}
