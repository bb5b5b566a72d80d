use crate::constants::ALL_CUISINES;
use crate::types::restaurant_record::RestaurantRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of the cuisine selector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CuisineSelection {
    /// Pass-through: every cuisine is shown.
    #[default]
    All,
    /// Exact, case-sensitive match on the record's cuisine.
    Cuisine(String),
}

impl CuisineSelection {
    /// Reads a selector value where `"all"` is the pass-through sentinel.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_CUISINES {
            CuisineSelection::All
        } else {
            CuisineSelection::Cuisine(value.to_string())
        }
    }

    pub fn accepts(&self, cuisine: &str) -> bool {
        match self {
            CuisineSelection::All => true,
            CuisineSelection::Cuisine(selected) => selected == cuisine,
        }
    }
}

impl fmt::Display for CuisineSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CuisineSelection::All => write!(f, "All Cuisines"),
            CuisineSelection::Cuisine(name) => write!(f, "{}", name),
        }
    }
}

/// The user's filter inputs. Lives for the whole session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub selected_cuisine: CuisineSelection,
    pub search_text: String,
}

impl FilterState {
    /// Conjunction of the cuisine match and the case-insensitive name search.
    /// An empty search text matches every name.
    pub fn matches(&self, record: &RestaurantRecord) -> bool {
        self.selected_cuisine.accepts(&record.cuisine) && self.name_matches(&record.name)
    }

    fn name_matches(&self, name: &str) -> bool {
        self.search_text.is_empty()
            || name
                .to_lowercase()
                .contains(&self.search_text.to_lowercase())
    }

    pub fn reset(&mut self) {
        *self = FilterState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, cuisine: &str) -> RestaurantRecord {
        RestaurantRecord::new(name, cuisine, "1 St", 40.7, -73.9)
    }

    #[test]
    fn test_default_filter_matches_everything() {
        let filter = FilterState::default();
        assert_eq!(filter.selected_cuisine, CuisineSelection::All);
        assert!(filter.search_text.is_empty());
        assert!(filter.matches(&record("Anything", "Whatever")));
    }

    #[test]
    fn test_cuisine_match_is_exact() {
        let filter = FilterState {
            selected_cuisine: CuisineSelection::from_value("Italian"),
            search_text: String::new(),
        };
        assert!(filter.matches(&record("A", "Italian")));
        assert!(!filter.matches(&record("A", "italian")));
        assert!(!filter.matches(&record("A", "Thai")));
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let filter = FilterState {
            selected_cuisine: CuisineSelection::All,
            search_text: "BISTRO".to_string(),
        };
        assert!(filter.matches(&record("Le Petit Bistro", "French")));
        assert!(!filter.matches(&record("Le Petit Café", "French")));
    }

    #[test]
    fn test_both_conditions_must_hold() {
        let filter = FilterState {
            selected_cuisine: CuisineSelection::from_value("Thai"),
            search_text: "b".to_string(),
        };
        assert!(filter.matches(&record("Bangkok House", "Thai")));
        assert!(!filter.matches(&record("Bangkok House", "Italian")));
        assert!(!filter.matches(&record("Siam", "Thai")));
    }

    #[test]
    fn test_all_sentinel_and_reset() {
        assert_eq!(CuisineSelection::from_value("all"), CuisineSelection::All);
        let mut filter = FilterState {
            selected_cuisine: CuisineSelection::from_value("Thai"),
            search_text: "x".to_string(),
        };
        filter.reset();
        assert_eq!(filter, FilterState::default());
    }
}
