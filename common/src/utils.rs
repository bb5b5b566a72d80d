use crate::constants::{LOGGED_CUISINE_SAMPLE, PANEL_SUBTITLE, PANEL_TITLE};
use crate::types::restaurant_record::RestaurantRecord;
use colored::*;

pub fn print_welcome_message() {
    println!("{}", "=".repeat(48).dimmed());
    println!("{}", PANEL_TITLE.bold().bright_blue());
    println!("{}", PANEL_SUBTITLE.italic());
    println!("Type `help` to see the available filter commands.");
    println!("{}", "=".repeat(48).dimmed());
}

/// One-line description of a freshly loaded dataset: size, first entry and
/// the cuisines of the first few entries.
pub fn summarize_dataset(records: &[RestaurantRecord]) -> String {
    let first = records
        .first()
        .map(|r| format!("{} ({}, {})", r.name, r.cuisine, r.address))
        .unwrap_or_else(|| "none".to_string());
    let sample: Vec<&str> = records
        .iter()
        .take(LOGGED_CUISINE_SAMPLE)
        .map(|r| r.cuisine.as_str())
        .collect();
    format!(
        "{} restaurants, first: {}, sample cuisines: [{}]",
        records.len(),
        first,
        sample.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize_dataset() {
        let records = vec![
            RestaurantRecord::new("A", "Italian", "1 St", 40.7, -73.9),
            RestaurantRecord::new("B", "Thai", "2 St", 40.8, -74.0),
        ];
        assert_eq!(
            summarize_dataset(&records),
            "2 restaurants, first: A (Italian, 1 St), sample cuisines: [Italian, Thai]"
        );
        assert_eq!(
            summarize_dataset(&[]),
            "0 restaurants, first: none, sample cuisines: []"
        );
    }
}
