use crate::types::filter_state::FilterState;
use crate::types::restaurant_record::RestaurantRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Everything derived from the source dataset and the current filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedView {
    /// Distinct cuisines of the full dataset, sorted ascending.
    pub cuisines: Vec<String>,
    /// Records passing the filter, in dataset order.
    pub restaurants: Vec<RestaurantRecord>,
}

impl DerivedView {
    /// Recomputes both outputs with a linear scan of `source`.
    pub fn compute(source: &[RestaurantRecord], filter: &FilterState) -> Self {
        Self {
            cuisines: unique_cuisines(source),
            restaurants: filter_restaurants(source, filter),
        }
    }
}

pub fn unique_cuisines(source: &[RestaurantRecord]) -> Vec<String> {
    source
        .iter()
        .map(|record| record.cuisine.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn filter_restaurants(source: &[RestaurantRecord], filter: &FilterState) -> Vec<RestaurantRecord> {
    source
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

/// State of the map component as seen from outside.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapStateDTO {
    /// Current filter inputs.
    pub filter: FilterState,
    /// Size of the source dataset.
    pub total_restaurants: usize,
    /// Output of the last recomputation.
    pub view: DerivedView,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::filter_state::CuisineSelection;

    fn dataset() -> Vec<RestaurantRecord> {
        vec![
            RestaurantRecord::new("A", "Italian", "1 St", 40.7, -73.9),
            RestaurantRecord::new("B", "Thai", "2 St", 40.8, -74.0),
            RestaurantRecord::new("Casa Bella", "Italian", "3 St", 40.75, -73.95),
            RestaurantRecord::new("Zen", "Japanese", "4 St", 40.72, -73.99),
        ]
    }

    fn filter(cuisine: &str, search: &str) -> FilterState {
        FilterState {
            selected_cuisine: CuisineSelection::from_value(cuisine),
            search_text: search.to_string(),
        }
    }

    #[test]
    fn test_cuisines_sorted_unique_and_from_full_dataset() {
        let view = DerivedView::compute(&dataset(), &filter("Thai", ""));
        assert_eq!(view.cuisines, vec!["Italian", "Japanese", "Thai"]);
        assert_eq!(view.restaurants.len(), 1);
    }

    #[test]
    fn test_pass_through_filter_returns_the_dataset() {
        let source = dataset();
        let view = DerivedView::compute(&source, &FilterState::default());
        assert_eq!(view.restaurants, source);
    }

    #[test]
    fn test_filtered_is_a_subset_satisfying_the_predicate() {
        let source = dataset();
        let inputs = [
            filter("all", ""),
            filter("all", "a"),
            filter("Italian", ""),
            filter("Italian", "BELLA"),
            filter("Japanese", "x"),
            filter("Mexican", ""),
        ];
        for state in inputs {
            let view = DerivedView::compute(&source, &state);
            for record in &view.restaurants {
                assert!(source.contains(record));
                assert!(state.matches(record));
            }
            let expected = source.iter().filter(|r| state.matches(r)).count();
            assert_eq!(view.restaurants.len(), expected);
        }
    }

    #[test]
    fn test_two_record_scenarios() {
        let source = vec![
            RestaurantRecord::new("A", "Italian", "1 St", 40.7, -73.9),
            RestaurantRecord::new("B", "Thai", "2 St", 40.8, -74.0),
        ];
        let italian = DerivedView::compute(&source, &filter("Italian", ""));
        assert_eq!(italian.restaurants, vec![source[0].clone()]);
        assert_eq!(italian.cuisines, vec!["Italian", "Thai"]);

        let search_b = DerivedView::compute(&source, &filter("all", "b"));
        assert_eq!(search_b.restaurants, vec![source[1].clone()]);
    }

    #[test]
    fn test_empty_dataset() {
        let view = DerivedView::compute(&[], &FilterState::default());
        assert!(view.cuisines.is_empty());
        assert!(view.restaurants.is_empty());
    }
}
