//! Facet index builder.
//!
//! Derives the selectable category and subcategory values from the loaded
//! records. Values are de-duplicated and kept in first-occurrence order, so the
//! filter menu follows the dataset order rather than any sorting.

use crate::model::{Facet, FilterState, ShopRecord, ALL};
use serde::Serialize;
use std::collections::HashSet;

/// Distinct category values, first-occurrence order.
pub fn categories(records: &[ShopRecord]) -> Vec<String> {
    distinct(records.iter().map(|r| r.category.as_str()))
}

/// Distinct non-empty subcategory values among records in `category`
/// (or among all records for the `"all"` sentinel), first-occurrence order.
pub fn subcategories(records: &[ShopRecord], category: &Facet) -> Vec<String> {
    distinct(
        records
            .iter()
            .filter(|r| category.admits(Some(r.category.as_str())))
            .filter_map(|r| r.subcategory()),
    )
}

/// A value spelled like the `"all"` sentinel can never be selected, so it is
/// left out of the facet.
fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| *v != ALL)
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

/// Number of records per category, in facet order.
pub fn category_counts(records: &[ShopRecord]) -> Vec<(String, usize)> {
    categories(records)
        .into_iter()
        .map(|c| {
            let n = records.iter().filter(|r| r.category == c).count();
            (c, n)
        })
        .collect()
}

/// Number of records per subcategory within `category`, in facet order.
pub fn subcategory_counts(records: &[ShopRecord], category: &Facet) -> Vec<(String, usize)> {
    subcategories(records, category)
        .into_iter()
        .map(|s| {
            let n = records
                .iter()
                .filter(|r| category.admits(Some(r.category.as_str())))
                .filter(|r| r.subcategory() == Some(s.as_str()))
                .count();
            (s, n)
        })
        .collect()
}

/// Cached facet values for the current category selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetIndex {
    pub categories: Vec<String>,
    pub subcategories: Vec<String>,
}

impl FacetIndex {
    pub fn build(records: &[ShopRecord], category: &Facet) -> Self {
        Self {
            categories: categories(records),
            subcategories: subcategories(records, category),
        }
    }

    pub fn has_category(&self, value: &str) -> bool {
        self.categories.iter().any(|c| c == value)
    }

    pub fn has_subcategory(&self, value: &str) -> bool {
        self.subcategories.iter().any(|s| s == value)
    }
}

/// Which facet values are highlighted for a given filter state.
///
/// Always the stored selectors, so the subcategory row and the highlighted
/// category agree even when a category is picked while a search is active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActiveSelection {
    pub category: Facet,
    pub subcategory: Facet,
    pub search_active: bool,
}

impl ActiveSelection {
    pub fn project(state: &FilterState) -> Self {
        Self {
            category: state.category.clone(),
            subcategory: state.subcategory.clone(),
            search_active: state.is_searching(),
        }
    }
}

/// One selectable entry in a filter menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub value: String,
    pub label: String,
    pub active: bool,
}

/// The complete filter menu: an "all" entry followed by each facet value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetMenu {
    pub categories: Vec<FacetOption>,
    pub subcategories: Vec<FacetOption>,
}

impl FacetMenu {
    pub fn new(index: &FacetIndex, active: &ActiveSelection) -> Self {
        Self {
            categories: options(&index.categories, &active.category, "All Shops"),
            subcategories: options(&index.subcategories, &active.subcategory, "All"),
        }
    }
}

fn options(values: &[String], selected: &Facet, all_label: &str) -> Vec<FacetOption> {
    let all = FacetOption {
        value: Facet::All.to_string(),
        label: all_label.to_string(),
        active: selected.is_all(),
    };
    std::iter::once(all)
        .chain(values.iter().map(|v| FacetOption {
            value: v.clone(),
            label: v.clone(),
            active: selected.as_value() == Some(v.as_str()),
        }))
        .collect()
}
