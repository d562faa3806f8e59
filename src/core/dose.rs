//! Dose and frequency extraction from usage text.

use crate::core::age_block::split_usage_by_age;
use crate::core::timing::{normalize_timing, rewrite_negations};
use crate::models::dose::{AgeRanges, DoseFrequency, DoseRange, FreqRange, UsageRanges};
use regex::{Captures, Regex};
use std::num::IntErrorKind;
use std::sync::LazyLock;

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| Regex::new(p).unwrap()).collect()
}

/// "1회 2정", "1회에 1~2캡슐", then "2정씩".
static PER_DOSE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"1회\s*(?:에\s*)?([0-9]+)(?:\s*~\s*[0-9]+)?\s*(?:정|캡슐)",
        r"([0-9]+)(?:\s*~\s*[0-9]+)?\s*(?:정|캡슐)\s*씩",
    ])
});

/// "1일 3회", "하루 2~3번", then "3회 복용".
static FREQUENCY: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"(?:1일|하루|매일)\s*([0-9]+)(?:\s*~\s*([0-9]+))?\s*(?:회|번)",
        r"([0-9]+)(?:\s*~\s*([0-9]+))?\s*(?:회|번)\s*(?:복용|투여)",
    ])
});

/// Same anchors as `PER_DOSE`, with the upper bound and unit captured.
static DOSE_RANGE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile(&[
        r"1회\s*(?:에\s*)?([0-9]+)(?:\s*~\s*([0-9]+))?\s*(정|캡슐|포|ml|mL)",
        r"([0-9]+)(?:\s*~\s*([0-9]+))?\s*(정|캡슐|포|ml|mL)\s*씩",
    ])
});

fn first_match<'t>(rules: &[Regex], text: &'t str) -> Option<Captures<'t>> {
    rules.iter().find_map(|re| re.captures(text))
}

/// Captures are ASCII digits only, so the one parse failure left is an
/// overflow. It saturates and the planner caps it later.
fn group_u32(caps: &Captures, idx: usize) -> Option<u32> {
    let digits = caps.get(idx)?.as_str();
    match digits.parse::<u32>() {
        Ok(n) => Some(n),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u32::MAX),
        Err(_) => None,
    }
}

/// `(lower, upper)` bounds of a `N` or `N~M` capture.
fn bounds(caps: &Captures) -> (Option<u32>, Option<u32>) {
    let lo = group_u32(caps, 1);
    let hi = group_u32(caps, 2).or(lo);
    (lo, hi)
}

pub fn parse_dose_freq(text: &str) -> DoseFrequency {
    let mut result = DoseFrequency::default();
    if text.trim().is_empty() {
        return result;
    }

    let norm = rewrite_negations(text);

    if let Some(caps) = first_match(&PER_DOSE, &norm) {
        result.per_dose = group_u32(&caps, 1).unwrap_or(0);
        log::debug!("per_dose matched '{}' -> {}", &caps[0], result.per_dose);
    }

    // The upper bound of a range wins: reminding too often is safer than
    // missing a dose.
    if let Some(caps) = first_match(&FREQUENCY, &norm) {
        result.frequency = bounds(&caps).1.unwrap_or(0);
        log::debug!("frequency matched '{}' -> {}", &caps[0], result.frequency);
    }

    result
}

pub fn parse_usage_ranges(text: &str) -> UsageRanges {
    let mut res = UsageRanges::default();
    if text.trim().is_empty() {
        return res;
    }

    let norm = rewrite_negations(text);

    if let Some(caps) = first_match(&DOSE_RANGE, &norm) {
        let (min, max) = bounds(&caps);
        res.dose = DoseRange {
            min,
            max,
            unit: caps.get(3).map(|m| m.as_str().to_string()).unwrap_or_default(),
        };
    }

    if let Some(caps) = first_match(&FREQUENCY, &norm) {
        let (min, max) = bounds(&caps);
        res.freq = FreqRange { min, max };
    }

    res.timing = normalize_timing(Some(&norm));
    res
}

/// Ranges of the child and adult blocks, each parsed on its own.
pub fn parse_age_ranges(text: &str) -> AgeRanges {
    let blocks = split_usage_by_age(text);
    let child = blocks
        .child
        .as_deref()
        .map(parse_usage_ranges)
        .unwrap_or_default();
    let adult = blocks
        .adult
        .as_deref()
        .map(parse_usage_ranges)
        .unwrap_or_default();
    AgeRanges::new(child, adult)
}
