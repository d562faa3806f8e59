//! Timing normalizer: classifies dosing text into a `TimingCategory`.

use crate::models::timing::TimingCategory;
use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Phrases that negate a fasting instruction ("avoid an empty stomach",
/// "do not skip a meal"). They are read as "after meals".
static NEGATED_FASTING: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"공복[^가-힣A-Za-z0-9]{0,5}을\s*피하[세요]*",
        r"공복[^가-힣A-Za-z0-9]{0,5}피하여",
        r"빈\s*속을\s*피하[세요]*",
        r"식사를?\s*거르지\s*(?:말|않)",
    ]
    .into_iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Evaluated top to bottom, first match wins. Usage texts often name a
/// default and an exception together, so the order decides the result.
static TIMING_RULES: LazyLock<Vec<(Regex, TimingCategory)>> = LazyLock::new(|| {
    [
        (r"식후", TimingCategory::AfterMeal),
        (r"식전", TimingCategory::BeforeMeal),
        (r"식간", TimingCategory::BetweenMeals),
        (r"취침\s*전", TimingCategory::BeforeSleep),
        (r"공복", TimingCategory::Fasting),
    ]
    .into_iter()
    .map(|(p, c)| (Regex::new(p).unwrap(), c))
    .collect()
});

/// Fullwidth digits and tilde as OCR often returns them, folded to ASCII.
fn fold_fullwidth(c: char) -> char {
    match c {
        '\u{FF10}'..='\u{FF19}' => char::from(b'0' + (c as u32 - 0xFF10) as u8),
        '\u{FF5E}' => '~',
        _ => c,
    }
}

/// Collapse whitespace runs, fold fullwidth digits to ASCII and rewrite
/// negated-fasting phrases to `식후`. Number values are kept, so the dose
/// extractor works on the same text.
pub fn rewrite_negations(text: &str) -> String {
    let folded: String = text.trim().chars().map(fold_fullwidth).collect();
    let mut out = WHITESPACE.replace_all(&folded, " ").into_owned();
    for re in NEGATED_FASTING.iter() {
        if re.is_match(&out) {
            out = re.replace_all(&out, "식후").into_owned();
        }
    }
    out
}

pub fn normalize_timing(text: Option<&str>) -> TimingCategory {
    let Some(raw) = text else {
        return TimingCategory::Unknown;
    };
    if raw.trim().is_empty() {
        return TimingCategory::Unknown;
    }

    let norm = rewrite_negations(raw);

    for (re, category) in TIMING_RULES.iter() {
        if re.is_match(&norm) {
            log::debug!("timing rule '{}' matched -> {:?}", re.as_str(), category);
            return *category;
        }
    }

    TimingCategory::Unknown
}

/// Resolve a prescription timing field: a category name first, free text
/// otherwise.
pub fn resolve_timing_field(field: &str) -> TimingCategory {
    TimingCategory::from_name(field).unwrap_or_else(|| normalize_timing(Some(field)))
}
