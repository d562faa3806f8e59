use crate::utils::time::hhmm_opt;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Meal {
    Breakfast,
    Lunch,
    Dinner,
}

impl Meal {
    pub fn label(&self) -> &'static str {
        match self {
            Meal::Breakfast => "아침",
            Meal::Lunch => "점심",
            Meal::Dinner => "저녁",
        }
    }

    pub fn default_time(&self) -> NaiveTime {
        match self {
            Meal::Breakfast => NaiveTime::from_hms_opt(8, 0, 0),
            Meal::Lunch => NaiveTime::from_hms_opt(12, 0, 0),
            Meal::Dinner => NaiveTime::from_hms_opt(19, 0, 0),
        }
        .unwrap_or(NaiveTime::MIN)
    }
}

/// The user's three daily meal anchors. Each missing time falls back to
/// its own default independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSchedule {
    #[serde(default, with = "hhmm_opt")]
    pub breakfast: Option<NaiveTime>,
    #[serde(default, with = "hhmm_opt")]
    pub lunch: Option<NaiveTime>,
    #[serde(default, with = "hhmm_opt")]
    pub dinner: Option<NaiveTime>,
}

/// A `MealSchedule` with every slot filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedMeals {
    pub breakfast: NaiveTime,
    pub lunch: NaiveTime,
    pub dinner: NaiveTime,
}

impl MealSchedule {
    pub fn new(
        breakfast: Option<NaiveTime>,
        lunch: Option<NaiveTime>,
        dinner: Option<NaiveTime>,
    ) -> Self {
        Self {
            breakfast,
            lunch,
            dinner,
        }
    }

    pub fn resolve(&self) -> ResolvedMeals {
        ResolvedMeals {
            breakfast: self.breakfast.unwrap_or(Meal::Breakfast.default_time()),
            lunch: self.lunch.unwrap_or(Meal::Lunch.default_time()),
            dinner: self.dinner.unwrap_or(Meal::Dinner.default_time()),
        }
    }

    /// Fill the gaps of `self` from `fallback`, keeping values already set.
    pub fn or(self, fallback: MealSchedule) -> MealSchedule {
        MealSchedule {
            breakfast: self.breakfast.or(fallback.breakfast),
            lunch: self.lunch.or(fallback.lunch),
            dinner: self.dinner.or(fallback.dinner),
        }
    }
}

impl ResolvedMeals {
    pub fn time_of(&self, meal: Meal) -> NaiveTime {
        match meal {
            Meal::Breakfast => self.breakfast,
            Meal::Lunch => self.lunch,
            Meal::Dinner => self.dinner,
        }
    }
}
