pub mod alarm;
pub mod dose;
pub mod meal;
pub mod prescription;
pub mod timing;

pub use alarm::AlarmSlot;
pub use dose::{AgeRanges, DoseFrequency, UsageRanges};
pub use meal::{Meal, MealSchedule};
pub use prescription::{Prescription, Profile, ScheduleResult};
pub use timing::TimingCategory;
