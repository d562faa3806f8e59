//! Terminal colours for schedule output.

use crate::models::timing::TimingCategory;
use ansi_term::Colour;

/// Colour used for a timing category in tables and summaries
pub fn colour_for_timing(category: TimingCategory) -> Colour {
    match category {
        TimingCategory::AfterMeal => Colour::Green,
        TimingCategory::BeforeMeal => Colour::Yellow,
        TimingCategory::BetweenMeals => Colour::Cyan,
        TimingCategory::BeforeSleep => Colour::Purple,
        TimingCategory::Fasting => Colour::RGB(255, 153, 51), // orange
        TimingCategory::Unknown => Colour::Fixed(245),
    }
}

pub fn paint_timing(category: TimingCategory, text: &str) -> String {
    colour_for_timing(category).paint(text).to_string()
}

/// Greys out values that were not found in the text ("0", "", "-")
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "0" || v == "-" {
        Colour::Fixed(245).paint(value).to_string()
    } else {
        value.to_string()
    }
}
