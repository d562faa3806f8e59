use crate::models::alarm::AlarmSlot;
use crate::models::dose::AgeRanges;
use crate::models::meal::MealSchedule;
use crate::models::timing::TimingCategory;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A medicine as recognised on the prescription. Its values are the
/// fallback whenever the usage text does not yield its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub name: String,
    /// Category name or free text such as "식후 30분".
    #[serde(default)]
    pub timing: String,
    #[serde(default)]
    pub frequency: u32,
    /// Treatment length in days.
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub per_dose: u32,
}

/// Age and meal anchors of the patient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub birthdate: Option<NaiveDate>,
    #[serde(default)]
    pub meals: MealSchedule,
}

/// Input document of the `schedule` command.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleRequest {
    #[serde(default)]
    pub profile: Option<Profile>,
    pub medicines: Vec<Prescription>,
}

/// Input document of the `scan` command: recognised OCR lines with their
/// optional confidence scores.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OcrLines {
    pub texts: Vec<String>,
    #[serde(default)]
    pub scores: Option<Vec<f64>>,
}

/// What the pipeline decided for one medicine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MedicinePlan {
    pub name: String,
    pub timing: TimingCategory,
    pub per_dose: u32,
    /// Dose unit such as 정, 캡슐, 포 or ml; empty when the text names none.
    pub unit: String,
    pub frequency: u32,
    pub duration: u32,
    /// The age-selected part of the usage text the values came from.
    pub usage: String,
    pub ranges: AgeRanges,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleResult {
    pub medicines: Vec<MedicinePlan>,
    pub alarms: Vec<AlarmSlot>,
}
