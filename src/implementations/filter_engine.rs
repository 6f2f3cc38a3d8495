//! Client-side listing filters.
//!
//! Both entry points are pure and stable: the output is a subsequence of
//! the input in its original order. Catalogs are tens of records, so every
//! change of filter state simply recomputes from scratch.

use crate::models::common::TypeSelector;
use crate::models::filter::FilterState;
use crate::models::property::Property;

/// Properties matching every active predicate of `filters`
pub fn apply(catalog: &[Property], filters: &FilterState) -> Vec<Property> {
    let needle = filters.search.to_lowercase();
    catalog
        .iter()
        .filter(|p| matches_search(p, &needle))
        .filter(|p| filters.price_range.contains(p.price))
        .filter(|p| filters.property_type.matches(&p.property_type))
        .filter(|p| matches_capacity(p, filters.min_capacity))
        .cloned()
        .collect()
}

/// Dashboard listing filter: search over title or location, plus type
pub fn apply_admin(catalog: &[Property], search: &str, selector: &TypeSelector) -> Vec<Property> {
    let needle = search.to_lowercase();
    catalog
        .iter()
        .filter(|p| {
            needle.is_empty()
                || p.title.to_lowercase().contains(&needle)
                || p.location.to_lowercase().contains(&needle)
        })
        .filter(|p| selector.matches(&p.property_type))
        .cloned()
        .collect()
}

/// `needle` must already be lowercased
fn matches_search(property: &Property, needle: &str) -> bool {
    needle.is_empty()
        || property.title.to_lowercase().contains(needle)
        || property.description.to_lowercase().contains(needle)
}

// A descriptor without digits never satisfies a threshold.
fn matches_capacity(property: &Property, threshold: Option<u32>) -> bool {
    match threshold {
        None => true,
        Some(min) => property.guest_capacity().is_some_and(|n| n >= min),
    }
}
