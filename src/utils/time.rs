//! Time utilities: parsing and formatting HH:MM, minute offsets, midpoints.

use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn format_hhmm(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Shift a clock time by `mins` minutes. The day component is discarded,
/// so offsets past midnight land on the other side of 00:00.
pub fn shift_minutes(t: NaiveTime, mins: i64) -> NaiveTime {
    let (shifted, _days) = t.overflowing_add_signed(Duration::minutes(mins));
    shifted
}

/// Elapsed-time midpoint of two clock times on the same day.
pub fn midpoint(start: NaiveTime, end: NaiveTime) -> NaiveTime {
    let half = (end - start).num_minutes() / 2;
    shift_minutes(start, half)
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Serde adapter for optional `"HH:MM"` fields.
pub mod hhmm_opt {
    use super::{format_hhmm, parse_time};
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(value: &Option<NaiveTime>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(t) => s.serialize_str(&format_hhmm(*t)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        match raw {
            None => Ok(None),
            Some(s) if s.trim().is_empty() => Ok(None),
            Some(s) => parse_time(&s)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("invalid HH:MM time '{s}'"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> NaiveTime {
        parse_time(s).unwrap()
    }

    #[test]
    fn parses_and_formats_zero_padded() {
        assert_eq!(format_hhmm(t("08:05")), "08:05");
        assert!(parse_time("25:00").is_none());
        assert!(parse_time("noon").is_none());
    }

    #[test]
    fn shift_wraps_past_midnight() {
        assert_eq!(format_hhmm(shift_minutes(t("23:30"), 120)), "01:30");
        assert_eq!(format_hhmm(shift_minutes(t("00:10"), -30)), "23:40");
    }

    #[test]
    fn midpoint_of_meals() {
        assert_eq!(format_hhmm(midpoint(t("08:00"), t("12:00"))), "10:00");
        assert_eq!(format_hhmm(midpoint(t("12:00"), t("19:00"))), "15:30");
    }
}
