//! The query engine: narrows the record list to what the user should see.
//!
//! Search mode (non-empty trimmed search text) wins over the facet selectors.
//! Otherwise the category selector is applied, then the subcategory selector.
//! Output is always a subsequence of the input, in input order.

use crate::model::{FilterState, ShopRecord};

pub fn visible<'a>(records: &'a [ShopRecord], state: &FilterState) -> Vec<&'a ShopRecord> {
    match state.search_query() {
        Some(query) => {
            let needle = query.to_lowercase();
            records
                .iter()
                .filter(|r| matches_search(r, &needle))
                .collect()
        }
        None => records
            .iter()
            .filter(|r| state.category.admits(Some(r.category.as_str())))
            .filter(|r| state.subcategory.admits(r.subcategory()))
            .collect(),
    }
}

/// Case-insensitive substring match. `needle` must already be lowercased.
pub fn matches_search(record: &ShopRecord, needle: &str) -> bool {
    let contains = |field: &str| field.to_lowercase().contains(needle);

    contains(&record.name)
        || contains(&record.description)
        || contains(&record.category)
        || record.subcategory().is_some_and(contains)
        || contains(&record.address)
}
