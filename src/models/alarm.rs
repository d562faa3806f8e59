use crate::models::timing::TimingCategory;
use serde::Serialize;

/// One scheduled clock time for one medicine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlarmSlot {
    pub medicine: String,
    pub time: String,
    pub condition: TimingCategory,
    pub label: String,
    pub per_dose: u32,
}
