use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::planner::plan_slots;
use crate::core::scheduler::condition_label;
use crate::errors::{AppError, AppResult};
use crate::models::meal::MealSchedule;
use crate::models::timing::TimingCategory;
use crate::utils::time::{format_hhmm, parse_optional_time};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Plan {
        timing,
        times,
        breakfast,
        lunch,
        dinner,
    } = cmd
    {
        let category = TimingCategory::from_name(timing)
            .ok_or_else(|| AppError::InvalidTiming(timing.clone()))?;

        let meals = MealSchedule::new(
            parse_optional_time(breakfast.as_ref())?,
            parse_optional_time(lunch.as_ref())?,
            parse_optional_time(dinner.as_ref())?,
        )
        .or(cfg.meals);

        for slot in plan_slots(category, &meals, *times) {
            println!(
                "{}  {}",
                format_hhmm(slot.time),
                condition_label(category, &slot)
            );
        }
    }
    Ok(())
}
