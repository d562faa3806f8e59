//! Cleanup of recognised OCR lines before lexicon matching.

use regex::Regex;
use std::sync::LazyLock;

pub const DEFAULT_MIN_SCORE: f64 = 0.5;

/// Receipt and envelope boilerplate that never names a medicine.
const NOISE_KEYWORDS: &[&str] = &[
    "환자정보",
    "병원정보",
    "영수증",
    "현금",
    "사업자등록",
    "사업장소재지",
    "발행일",
    "교부번호",
    "약제비",
    "본인부담",
    "보험자부담",
    "총수납",
    "주의사항",
    "복약안내",
    "약품사진",
    "약품명",
    "투약량",
    "횟수",
    "일수",
    "표시대로복용",
    "아침",
    "점심",
    "저녁",
    "취침전",
    "약국",
    "조제약",
    "복약",
    "조제일자",
    "발행기관",
    "현금승인",
    "복용완료일",
    "생리통에",
    "효과",
    "일반",
    "제와",
];

static PUNCT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"[`'"\[\]<>･·]"#).unwrap());
static SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static L_BETWEEN_DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d)l(\d)").unwrap());
static TEN_MG_E: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(정)1[에eE][mM]9\b").unwrap());
static TEN_MG_I: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(정)1[이iIlL][mM]\b").unwrap());
static DIGIT_LM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d)lm\b").unwrap());
static DIGIT_M: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d)m\b").unwrap());

static NOISE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^\d{2,}원$",
        r"^\d{3,}-?\d{2}-?\d{5}$",
        r"^\d{8}$",
        r"^\d{4}-?\d{2}-?\d{2}$",
    ]
    .into_iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Undo common OCR confusions. Digits and units are kept, they carry the
/// strength of the medicine.
pub fn normalize_ocr_line(s: &str) -> String {
    let t = PUNCT.replace_all(s, "");
    let t = SPACES.replace_all(&t, "");
    let t = L_BETWEEN_DIGITS.replace_all(&t, "${1}1${2}");
    let t = t.replace('O', "0").replace('|', "1");
    let t = TEN_MG_E.replace_all(&t, "${1}10mg");
    let t = TEN_MG_I.replace_all(&t, "${1}10mg");
    let t = DIGIT_LM.replace_all(&t, "${1}10mg");
    DIGIT_M.replace_all(&t, "${1}mg").into_owned()
}

pub fn is_noise_line(t: &str) -> bool {
    if t.chars().count() <= 1 {
        return true;
    }
    if NOISE_KEYWORDS.iter().any(|k| t.contains(k)) {
        return true;
    }
    NOISE_PATTERNS.iter().any(|re| re.is_match(t))
}

/// Normalized lines worth matching. Lines whose confidence is below
/// `min_score` are dropped; lines without a score are kept.
pub fn clean_ocr_lines(texts: &[String], scores: Option<&[f64]>, min_score: f64) -> Vec<String> {
    texts
        .iter()
        .enumerate()
        .filter_map(|(idx, raw)| {
            let norm = normalize_ocr_line(raw);
            if norm.is_empty() {
                return None;
            }
            let score = scores.and_then(|s| s.get(idx)).copied();
            if score.is_some_and(|sc| sc < min_score) {
                log::debug!("dropping low-confidence line '{norm}' ({score:?})");
                return None;
            }
            if is_noise_line(&norm) {
                return None;
            }
            Some(norm)
        })
        .collect()
}
