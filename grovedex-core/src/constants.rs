//! Shared display constants for the catalog tables.

use std::sync::LazyLock;

use crate::time::to_12_hour;

/// The 24 hour-picker labels in clock order ("12 AM" .. "11 PM").
pub static HOUR_OPTIONS: LazyLock<Vec<String>> =
    LazyLock::new(|| (0..24).map(to_12_hour).collect());

/// Empty-view marker for the recipe table.
pub const NO_RECIPES_MESSAGE: &str = "No recipes found. 😕";

/// Empty-view marker for the critter table.
pub const NO_CRITTERS_MESSAGE: &str = "No critters found. 🐾";

/// Shown by the ingredient picker when every candidate is chosen.
pub const NO_MORE_ITEMS_MESSAGE: &str = "No more items.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_options_cover_the_clock() {
        assert_eq!(HOUR_OPTIONS.len(), 24);
        assert_eq!(HOUR_OPTIONS[0], "12 AM");
        assert_eq!(HOUR_OPTIONS[12], "12 PM");
        assert_eq!(HOUR_OPTIONS[23], "11 PM");
    }
}
