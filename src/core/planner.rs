//! Alarm time planner: maps a timing category onto the user's meals.

use crate::models::meal::{Meal, MealSchedule, ResolvedMeals};
use crate::models::timing::TimingCategory;
use crate::utils::time::{format_hhmm, midpoint, shift_minutes};
use chrono::NaiveTime;

pub const MAX_DAILY_SLOTS: usize = 3;

const AFTER_MEAL_OFFSET: i64 = 30;
const BEFORE_MEAL_OFFSET: i64 = -30;
const EVENING_BETWEEN_OFFSET: i64 = 90;
const BEDTIME_OFFSET: i64 = 120;
const EMPTY_STOMACH_OFFSET: i64 = 120;

/// A candidate clock time and the meal it hangs off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedSlot {
    pub meal: Meal,
    pub time: NaiveTime,
}

impl PlannedSlot {
    fn at(meal: Meal, time: NaiveTime) -> Self {
        Self { meal, time }
    }
}

fn offset_each(meals: &ResolvedMeals, mins: i64) -> [PlannedSlot; MAX_DAILY_SLOTS] {
    [Meal::Breakfast, Meal::Lunch, Meal::Dinner]
        .map(|meal| PlannedSlot::at(meal, shift_minutes(meals.time_of(meal), mins)))
}

fn candidates(category: TimingCategory, meals: &ResolvedMeals) -> [PlannedSlot; MAX_DAILY_SLOTS] {
    match category {
        TimingCategory::AfterMeal => offset_each(meals, AFTER_MEAL_OFFSET),
        TimingCategory::BeforeMeal => offset_each(meals, BEFORE_MEAL_OFFSET),
        TimingCategory::BetweenMeals => [
            PlannedSlot::at(Meal::Breakfast, midpoint(meals.breakfast, meals.lunch)),
            PlannedSlot::at(Meal::Lunch, midpoint(meals.lunch, meals.dinner)),
            PlannedSlot::at(
                Meal::Dinner,
                shift_minutes(meals.dinner, EVENING_BETWEEN_OFFSET),
            ),
        ],
        TimingCategory::BeforeSleep => {
            let bedtime = PlannedSlot::at(Meal::Dinner, shift_minutes(meals.dinner, BEDTIME_OFFSET));
            [bedtime; MAX_DAILY_SLOTS]
        }
        // Unclassified timing is treated as "on an empty stomach between meals".
        TimingCategory::Fasting | TimingCategory::Unknown => {
            offset_each(meals, EMPTY_STOMACH_OFFSET)
        }
    }
}

/// The first `max(1, times_needed)` candidate slots, never more than three,
/// in candidate order.
pub fn plan_slots(
    category: TimingCategory,
    meals: &MealSchedule,
    times_needed: u32,
) -> Vec<PlannedSlot> {
    let resolved = meals.resolve();
    let take = (times_needed.max(1) as usize).min(MAX_DAILY_SLOTS);
    candidates(category, &resolved)
        .into_iter()
        .take(take)
        .collect()
}

pub fn plan_times_by_timing(
    category: TimingCategory,
    meals: &MealSchedule,
    times_needed: u32,
) -> Vec<String> {
    plan_slots(category, meals, times_needed)
        .into_iter()
        .map(|slot| format_hhmm(slot.time))
        .collect()
}
