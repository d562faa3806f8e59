use serde::{Deserialize, Serialize};
use std::fmt;

/// When a dose is taken relative to meals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimingCategory {
    AfterMeal,
    BeforeMeal,
    BetweenMeals,
    BeforeSleep,
    Fasting,
    #[default]
    Unknown,
}

impl TimingCategory {
    pub const ALL: [TimingCategory; 6] = [
        TimingCategory::AfterMeal,
        TimingCategory::BeforeMeal,
        TimingCategory::BetweenMeals,
        TimingCategory::BeforeSleep,
        TimingCategory::Fasting,
        TimingCategory::Unknown,
    ];

    /// Canonical Korean label. Every label except `정보없음` is matched by
    /// its own normalizer rule.
    pub fn label(&self) -> &'static str {
        match self {
            TimingCategory::AfterMeal => "식후",
            TimingCategory::BeforeMeal => "식전",
            TimingCategory::BetweenMeals => "식간",
            TimingCategory::BeforeSleep => "취침전",
            TimingCategory::Fasting => "공복",
            TimingCategory::Unknown => "정보없음",
        }
    }

    /// Kebab-case name used on the command line and in CSV output.
    pub fn code(&self) -> &'static str {
        match self {
            TimingCategory::AfterMeal => "after-meal",
            TimingCategory::BeforeMeal => "before-meal",
            TimingCategory::BetweenMeals => "between-meals",
            TimingCategory::BeforeSleep => "before-sleep",
            TimingCategory::Fasting => "fasting",
            TimingCategory::Unknown => "unknown",
        }
    }

    /// Parse a category name: the Rust variant name, the kebab-case code or
    /// the Korean label. Free text is not handled here, see
    /// `core::timing::normalize_timing`.
    pub fn from_name(s: &str) -> Option<Self> {
        let t = s.trim();
        Self::ALL.into_iter().find(|c| {
            t.eq_ignore_ascii_case(c.code())
                || t == c.label()
                || t.eq_ignore_ascii_case(&format!("{:?}", c))
        })
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, TimingCategory::Unknown)
    }
}

impl fmt::Display for TimingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_accepts_all_spellings() {
        assert_eq!(
            TimingCategory::from_name("after-meal"),
            Some(TimingCategory::AfterMeal)
        );
        assert_eq!(
            TimingCategory::from_name("BeforeSleep"),
            Some(TimingCategory::BeforeSleep)
        );
        assert_eq!(
            TimingCategory::from_name(" 식간 "),
            Some(TimingCategory::BetweenMeals)
        );
        assert_eq!(TimingCategory::from_name("식후 30분"), None);
    }

    #[test]
    fn default_is_unknown() {
        assert_eq!(TimingCategory::default(), TimingCategory::Unknown);
        assert!(!TimingCategory::default().is_known());
    }
}
