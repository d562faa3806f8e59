//! Scheduling pipeline: usage lookup → age block → timing and dose →
//! planned alarm slots, one medicine after another.

use crate::core::age::age_from_birthdate;
use crate::core::age_block::select_age_block;
use crate::core::dose::{parse_age_ranges, parse_dose_freq, parse_usage_ranges};
use crate::core::lookup::UsageLookup;
use crate::core::planner::{PlannedSlot, plan_slots};
use crate::core::timing::{normalize_timing, resolve_timing_field};
use crate::models::alarm::AlarmSlot;
use crate::models::meal::MealSchedule;
use crate::models::prescription::{MedicinePlan, Prescription, Profile, ScheduleResult};
use crate::models::timing::TimingCategory;
use crate::utils::time::format_hhmm;
use chrono::NaiveDate;

/// Condition text shown next to an alarm, e.g. "아침 식후".
pub fn condition_label(category: TimingCategory, slot: &PlannedSlot) -> String {
    match category {
        TimingCategory::BeforeSleep => "취침 전".to_string(),
        TimingCategory::Unknown => slot.meal.label().to_string(),
        other => format!("{} {}", slot.meal.label(), other.label()),
    }
}

/// Decide timing and amounts for one medicine from its usage text, with the
/// prescription as fallback.
pub fn plan_medicine(prescription: &Prescription, usage: &str, age: Option<u32>) -> MedicinePlan {
    let selected = select_age_block(usage, age);

    let mut timing = normalize_timing(Some(&selected));
    if !timing.is_known() {
        timing = resolve_timing_field(&prescription.timing);
    }

    let extracted = parse_dose_freq(&selected);
    let frequency = if extracted.frequency == 0 {
        prescription.frequency
    } else {
        extracted.frequency
    };
    let per_dose = if extracted.per_dose == 0 {
        prescription.per_dose
    } else {
        extracted.per_dose
    };

    let ranges = parse_age_ranges(usage);
    let mut unit = parse_usage_ranges(&selected).dose.unit;
    if unit.is_empty() {
        unit = ranges.preferred().1;
    }

    MedicinePlan {
        name: prescription.name.clone(),
        timing,
        per_dose,
        unit,
        frequency,
        duration: prescription.duration,
        usage: selected,
        ranges,
    }
}

pub fn alarms_for(plan: &MedicinePlan, meals: &MealSchedule) -> Vec<AlarmSlot> {
    plan_slots(plan.timing, meals, plan.frequency)
        .iter()
        .map(|slot| AlarmSlot {
            medicine: plan.name.clone(),
            time: format_hhmm(slot.time),
            condition: plan.timing,
            label: condition_label(plan.timing, slot),
            per_dose: plan.per_dose,
        })
        .collect()
}

/// Run the whole pipeline. Lookup failures never abort the run: the
/// medicine is planned from an empty usage text instead.
pub fn build_schedule(
    profile: &Profile,
    prescriptions: &[Prescription],
    lookup: &dyn UsageLookup,
    today: NaiveDate,
) -> ScheduleResult {
    let age = age_from_birthdate(profile.birthdate, today);
    log::debug!("scheduling {} medicines, age={:?}", prescriptions.len(), age);

    let mut medicines = Vec::with_capacity(prescriptions.len());
    let mut alarms = Vec::new();

    for prescription in prescriptions {
        let usage = match lookup.lookup_usage(&prescription.name) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("usage lookup for '{}' failed: {e}", prescription.name);
                String::new()
            }
        };

        let plan = plan_medicine(prescription, &usage, age);
        alarms.extend(alarms_for(&plan, &profile.meals));
        medicines.push(plan);
    }

    ScheduleResult { medicines, alarms }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::lookup::{NoLookup, UsageCatalog};
    use crate::utils::time::parse_time;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    fn rx(name: &str, timing: &str, frequency: u32) -> Prescription {
        Prescription {
            name: name.to_string(),
            timing: timing.to_string(),
            frequency,
            ..Default::default()
        }
    }

    #[test]
    fn usage_text_drives_the_plan() {
        let catalog = UsageCatalog::from_entries([(
            "이브",
            "성인 및 15세 이상: 1회 1캡슐, 1일 3회 공복을 피하여 복용한다.\n소아: 1회 1캡슐, 1일 1회 취침 전 복용한다.",
        )]);
        let profile = Profile {
            birthdate: NaiveDate::from_ymd_opt(1990, 1, 1),
            meals: MealSchedule::default(),
        };

        let result = build_schedule(&profile, &[rx("이브", "", 0)], &catalog, today());

        assert_eq!(result.medicines[0].timing, TimingCategory::AfterMeal);
        assert_eq!(result.medicines[0].frequency, 3);
        assert_eq!(result.medicines[0].per_dose, 1);
        let times: Vec<&str> = result.alarms.iter().map(|a| a.time.as_str()).collect();
        assert_eq!(times, vec!["08:30", "12:30", "19:30"]);
        assert_eq!(result.alarms[0].label, "아침 식후");
    }

    #[test]
    fn child_profile_gets_child_regimen() {
        let catalog = UsageCatalog::from_entries([(
            "이브",
            "성인: 1회 2캡슐, 1일 3회 식후 복용. 어린이: 1회 1캡슐, 1일 1회 취침 전 복용",
        )]);
        let profile = Profile {
            birthdate: NaiveDate::from_ymd_opt(2016, 6, 1),
            meals: MealSchedule::default(),
        };

        let result = build_schedule(&profile, &[rx("이브", "", 0)], &catalog, today());

        assert_eq!(result.medicines[0].timing, TimingCategory::BeforeSleep);
        assert_eq!(result.alarms.len(), 1);
        assert_eq!(result.alarms[0].time, "21:00");
        assert_eq!(result.alarms[0].label, "취침 전");
    }

    #[test]
    fn repeated_bedtime_doses_keep_every_slot() {
        let plan = plan_medicine(&rx("수면제", "", 3), "1회 1정 취침 전 복용", None);
        assert_eq!(plan.timing, TimingCategory::BeforeSleep);
        assert_eq!(plan.frequency, 3);

        let alarms = alarms_for(&plan, &MealSchedule::default());
        let summary: Vec<(&str, &str)> = alarms
            .iter()
            .map(|a| (a.time.as_str(), a.label.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![("21:00", "취침 전"), ("21:00", "취침 전"), ("21:00", "취침 전")]
        );
        assert!(alarms.iter().all(|a| a.condition == TimingCategory::BeforeSleep));
    }

    #[test]
    fn dose_unit_comes_from_the_selected_block() {
        let usage = "성인: 1회 2캡슐, 1일 3회 식후 복용. 어린이: 1회 1정, 1일 2회 식후 복용";
        let adult = plan_medicine(&rx("감기약", "", 0), usage, Some(40));
        assert_eq!((adult.per_dose, adult.unit.as_str()), (2, "캡슐"));

        let child = plan_medicine(&rx("감기약", "", 0), usage, Some(9));
        assert_eq!((child.per_dose, child.unit.as_str()), (1, "정"));

        let bare = plan_medicine(&rx("감기약", "", 0), "", None);
        assert_eq!(bare.unit, "");
    }

    #[test]
    fn failed_lookup_falls_back_to_prescription() {
        let profile = Profile {
            birthdate: None,
            meals: MealSchedule::new(parse_time("07:00"), parse_time("12:00"), parse_time("18:00")),
        };

        let result = build_schedule(
            &profile,
            &[rx("A정", "식전 30분", 2), rx("B정", "", 0)],
            &NoLookup,
            today(),
        );

        let summary: Vec<(&str, &str, &str)> = result
            .alarms
            .iter()
            .map(|a| (a.medicine.as_str(), a.time.as_str(), a.label.as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("A정", "06:30", "아침 식전"),
                ("A정", "11:30", "점심 식전"),
                ("B정", "09:00", "아침"),
            ]
        );
        assert_eq!(result.medicines[1].timing, TimingCategory::Unknown);
    }
}
