use crate::cli::commands::{age_on, read_input};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::build_schedule;
use crate::core::lookup::{NoLookup, UsageCatalog, UsageLookup};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::prescription::{Profile, ScheduleRequest};
use crate::ui::messages::{info, warning};
use crate::utils::date::today;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Schedule {
        input,
        catalog,
        format,
        file,
        force,
    } = cmd
    {
        let request: ScheduleRequest = read_input(input)?;
        if request.medicines.is_empty() {
            warning("No medicines in the input, the schedule is empty");
        }

        let profile = merge_profile(request.profile, cfg);
        let today = today();
        // rejects a birthdate in the future before any planning happens
        age_on(profile.birthdate, today)?;

        let catalog_path = catalog
            .as_deref()
            .map(expand_tilde)
            .or_else(|| cfg.usage_catalog_path());

        let loaded;
        let lookup: &dyn UsageLookup = match catalog_path {
            Some(path) => {
                loaded = UsageCatalog::load(&path)?;
                info(format!(
                    "Usage catalog {} ({} entries)",
                    path.display(),
                    loaded.len()
                ));
                &loaded
            }
            None => {
                log::debug!("no usage catalog configured, planning from prescriptions only");
                &NoLookup
            }
        };

        let result = build_schedule(&profile, &request.medicines, lookup, today);
        ExportLogic::export_schedule(&result, format, file.as_deref(), *force)?;
    }
    Ok(())
}

/// Request values win; missing meals and birthdate come from the config.
fn merge_profile(requested: Option<Profile>, cfg: &Config) -> Profile {
    let requested = requested.unwrap_or_default();
    Profile {
        birthdate: requested.birthdate.or(cfg.birthdate),
        meals: requested.meals.or(cfg.meals),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::meal::MealSchedule;
    use crate::utils::time::parse_time;
    use chrono::NaiveDate;

    #[test]
    fn request_profile_overrides_config_per_field() {
        let cfg = Config {
            birthdate: NaiveDate::from_ymd_opt(1980, 1, 1),
            ..Config::default()
        };
        let requested = Profile {
            birthdate: None,
            meals: MealSchedule::new(parse_time("07:00"), None, None),
        };

        let merged = merge_profile(Some(requested), &cfg);
        assert_eq!(merged.birthdate, NaiveDate::from_ymd_opt(1980, 1, 1));
        assert_eq!(merged.meals.breakfast, parse_time("07:00"));
        assert_eq!(merged.meals.lunch, parse_time("12:00"));
        assert_eq!(merged.meals.dinner, parse_time("19:00"));
    }

    #[test]
    fn missing_profile_uses_config() {
        let merged = merge_profile(None, &Config::default());
        assert_eq!(merged.birthdate, None);
        assert_eq!(merged.meals, Config::default().meals);
    }
}
