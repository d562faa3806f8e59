// src/export/model.rs

use crate::models::alarm::AlarmSlot;
use serde::Serialize;

/// Flat alarm row for CSV and table output.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct AlarmExport {
    pub time: String,
    pub medicine: String,
    pub timing: String,
    pub condition: String,
    pub per_dose: u32,
}

impl From<&AlarmSlot> for AlarmExport {
    fn from(a: &AlarmSlot) -> Self {
        Self {
            time: a.time.clone(),
            medicine: a.medicine.clone(),
            timing: a.condition.code().to_string(),
            condition: a.label.clone(),
            per_dose: a.per_dose,
        }
    }
}

/// Header for CSV / table
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["time", "medicine", "timing", "condition", "per_dose"]
}

pub(crate) fn alarm_to_row(a: &AlarmExport) -> Vec<String> {
    vec![
        a.time.clone(),
        a.medicine.clone(),
        a.timing.clone(),
        a.condition.clone(),
        a.per_dose.to_string(),
    ]
}

pub(crate) fn alarms_to_export(alarms: &[AlarmSlot]) -> Vec<AlarmExport> {
    alarms.iter().map(AlarmExport::from).collect()
}
