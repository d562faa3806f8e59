use crate::models::timing::TimingCategory;
use serde::Serialize;

/// Per-dose amount and daily frequency. Zero means "not found in the text",
/// not "zero prescribed".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DoseFrequency {
    pub per_dose: u32,
    pub frequency: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DoseRange {
    pub min: Option<u32>,
    pub max: Option<u32>,
    pub unit: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FreqRange {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

/// Full dose/frequency ranges of one usage block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UsageRanges {
    pub dose: DoseRange,
    pub freq: FreqRange,
    pub timing: TimingCategory,
}

/// Ranges of an age bracket, with the bracket's age bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketRanges {
    pub age_min: u32,
    pub age_max: Option<u32>,
    #[serde(flatten)]
    pub ranges: UsageRanges,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeRanges {
    pub child: BracketRanges,
    pub adult: BracketRanges,
}

impl AgeRanges {
    pub const CHILD_AGE_MIN: u32 = 8;
    pub const CHILD_AGE_MAX: u32 = 14;
    pub const ADULT_AGE_MIN: u32 = 15;

    pub fn new(child: UsageRanges, adult: UsageRanges) -> Self {
        Self {
            child: BracketRanges {
                age_min: Self::CHILD_AGE_MIN,
                age_max: Some(Self::CHILD_AGE_MAX),
                ranges: child,
            },
            adult: BracketRanges {
                age_min: Self::ADULT_AGE_MIN,
                age_max: None,
                ranges: adult,
            },
        }
    }

    /// Single values preferring the adult bracket, then the child one:
    /// upper per-dose bound, unit, upper frequency bound and timing.
    pub fn preferred(&self) -> (u32, String, u32, TimingCategory) {
        let adult = &self.adult.ranges;
        let child = &self.child.ranges;

        let per_dose = adult.dose.max.or(child.dose.max).unwrap_or(0);
        let unit = if adult.dose.unit.is_empty() {
            child.dose.unit.clone()
        } else {
            adult.dose.unit.clone()
        };
        let freq = adult.freq.max.or(child.freq.max).unwrap_or(0);
        let timing = if adult.timing.is_known() {
            adult.timing
        } else {
            child.timing
        };

        (per_dose, unit, freq, timing)
    }
}
