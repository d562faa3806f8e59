//! Formatting utilities used for CLI outputs.

use crate::models::dose::{BracketRanges, DoseRange, FreqRange};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// "1~2정", "2정", or "-" when nothing was found.
pub fn describe_dose_range(r: &DoseRange) -> String {
    match (r.min, r.max) {
        (Some(lo), Some(hi)) if lo != hi => format!("{lo}~{hi}{}", r.unit),
        (Some(v), _) | (None, Some(v)) => format!("{v}{}", r.unit),
        (None, None) => "-".to_string(),
    }
}

/// "1일 2~3회", "1일 3회", or "-".
pub fn describe_freq_range(r: &FreqRange) -> String {
    match (r.min, r.max) {
        (Some(lo), Some(hi)) if lo != hi => format!("1일 {lo}~{hi}회"),
        (Some(v), _) | (None, Some(v)) => format!("1일 {v}회"),
        (None, None) => "-".to_string(),
    }
}

pub fn describe_bracket(b: &BracketRanges) -> String {
    let ages = match b.age_max {
        Some(max) => format!("{}~{}세", b.age_min, max),
        None => format!("{}세 이상", b.age_min),
    };
    format!(
        "{ages}: 1회 {} | {} | {}",
        describe_dose_range(&b.ranges.dose),
        describe_freq_range(&b.ranges.freq),
        b.ranges.timing.label()
    )
}
