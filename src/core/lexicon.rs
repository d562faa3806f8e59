//! Drug lexicon: matches cleaned OCR lines against known medicine names
//! and turns the hits into prescription records.

use crate::core::ocr::{clean_ocr_lines, normalize_ocr_line};
use crate::errors::AppResult;
use crate::models::prescription::Prescription;
use crate::models::timing::TimingCategory;
use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

const MIN_MATCH_SCORE: f64 = 0.4;
const SIMILARITY_WEIGHT: f64 = 0.9;
const STRENGTH_WINDOW: usize = 2;

pub const UNMATCHED_PLACEHOLDER: &str = "약 정보 없음 (Lexicon 확인 필요)";

static HANGUL_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[가-힣]+").unwrap());
static STRENGTH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*(mg|g|ml|%|밀리그램)").unwrap());

#[derive(Debug, Clone)]
struct LexiconEntry {
    canonical: String,
    aliases: Vec<String>,
    tokens: BTreeSet<String>,
    normalized_aliases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LexiconMatch {
    pub canonical: String,
    pub score: f64,
    pub matched_tokens: Vec<String>,
    pub matched_line: String,
    pub line_index: usize,
}

/// Prescription records together with the lexicon hits they came from, so
/// the caller can see why each medicine was picked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanResult {
    pub medicines: Vec<Prescription>,
    pub candidates: Vec<LexiconMatch>,
}

#[derive(Debug, Clone, Default)]
pub struct DrugLexicon {
    drugs: Vec<LexiconEntry>,
}

fn hangul_tokens(s: &str) -> BTreeSet<String> {
    HANGUL_RUN
        .find_iter(s)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Share of `line` characters found in `alias`, over the longer length.
fn char_similarity(line: &str, alias: &str) -> f64 {
    let longest = line.chars().count().max(alias.chars().count());
    if longest == 0 {
        return 0.0;
    }
    let common = line.chars().filter(|c| alias.contains(*c)).count();
    common as f64 / longest as f64
}

impl DrugLexicon {
    /// Parse `canonical | alias | alias` lines. Blank lines and `#`
    /// comments are skipped.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut drugs = Vec::new();

        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let aliases: Vec<String> = line
                .split('|')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(String::from)
                .collect();
            let Some(canonical) = aliases.first().cloned() else {
                continue;
            };

            let normalized_aliases: Vec<String> =
                aliases.iter().map(|a| normalize_ocr_line(a)).collect();
            // digits and latin letters are strength, not name
            let tokens = normalized_aliases
                .iter()
                .flat_map(|a| hangul_tokens(a))
                .filter(|t| t.chars().count() >= 2)
                .collect();

            drugs.push(LexiconEntry {
                canonical,
                aliases,
                tokens,
                normalized_aliases,
            });
        }

        log::debug!("lexicon loaded: {} drugs", drugs.len());
        Self { drugs }
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        let lines: Vec<&str> = content.lines().collect();
        Ok(Self::from_lines(&lines))
    }

    pub fn len(&self) -> usize {
        self.drugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drugs.is_empty()
    }

    fn score(
        drug: &LexiconEntry,
        norm_line: &str,
        line_tokens: &BTreeSet<String>,
    ) -> Option<(f64, Vec<String>)> {
        let matched: Vec<String> = line_tokens.intersection(&drug.tokens).cloned().collect();
        if matched.is_empty() {
            return None;
        }

        let mut score: f64 = 0.0;
        if matched.len() == 1 && line_tokens.len() == 1 {
            let token = &matched[0];
            let standalone = drug
                .aliases
                .iter()
                .any(|alias| alias.split_whitespace().any(|w| w == token));
            score = if standalone { 0.6 } else { 0.5 };
        } else if matched.len() >= 2 {
            score = 0.8;
        }

        let mut similarity: f64 = 0.0;
        for alias in &drug.normalized_aliases {
            if norm_line.contains(alias.as_str()) || alias.contains(norm_line) {
                similarity = 1.0;
                break;
            }
            similarity = similarity.max(char_similarity(norm_line, alias));
        }

        Some((score.max(similarity * SIMILARITY_WEIGHT), matched))
    }

    /// Best match per canonical name, highest score first.
    pub fn match_lines(&self, lines: &[String]) -> Vec<LexiconMatch> {
        let mut best: HashMap<&str, LexiconMatch> = HashMap::new();

        for (line_index, line) in lines.iter().enumerate() {
            let norm_line = normalize_ocr_line(line);
            let line_tokens = hangul_tokens(&norm_line);
            if line_tokens.is_empty() {
                continue;
            }

            for drug in &self.drugs {
                let Some((score, matched_tokens)) = Self::score(drug, &norm_line, &line_tokens)
                else {
                    continue;
                };
                if score < MIN_MATCH_SCORE {
                    continue;
                }

                let better = best
                    .get(drug.canonical.as_str())
                    .is_none_or(|prev| score > prev.score);
                if better {
                    best.insert(
                        drug.canonical.as_str(),
                        LexiconMatch {
                            canonical: drug.canonical.clone(),
                            score,
                            matched_tokens,
                            matched_line: line.clone(),
                            line_index,
                        },
                    );
                }
            }
        }

        let mut out: Vec<LexiconMatch> = best.into_values().collect();
        out.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.line_index.cmp(&b.line_index))
        });
        out
    }
}

/// Strength such as "500mg" found within two lines of `target`.
pub fn extract_strength(lines: &[String], target: usize) -> Option<String> {
    let start = target.saturating_sub(STRENGTH_WINDOW);
    let end = (target + STRENGTH_WINDOW + 1).min(lines.len());

    lines.get(start..end)?.iter().find_map(|line| {
        STRENGTH.captures(line).map(|caps| {
            let unit = caps[2].replace("밀리그램", "mg");
            format!("{}{}", &caps[1], unit)
        })
    })
}

/// OCR lines → prescription records. Timing and amounts are left for the
/// usage text to fill in. An empty scan yields one placeholder record so
/// the caller always has something to show.
pub fn scan_prescription(
    lexicon: &DrugLexicon,
    texts: &[String],
    scores: Option<&[f64]>,
    min_score: f64,
) -> ScanResult {
    let lines = clean_ocr_lines(texts, scores, min_score);
    log::debug!("cleaned OCR lines: {lines:?}");

    let candidates = lexicon.match_lines(&lines);
    let mut medicines: Vec<Prescription> = candidates
        .iter()
        .map(|m| {
            let name = match extract_strength(&lines, m.line_index) {
                Some(strength) => format!("{} {}", m.canonical, strength),
                None => m.canonical.clone(),
            };
            Prescription {
                name,
                timing: TimingCategory::Unknown.code().to_string(),
                ..Default::default()
            }
        })
        .collect();

    if medicines.is_empty() {
        medicines.push(Prescription {
            name: UNMATCHED_PLACEHOLDER.to_string(),
            timing: TimingCategory::Unknown.code().to_string(),
            ..Default::default()
        });
    }

    ScanResult {
        medicines,
        candidates,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> DrugLexicon {
        DrugLexicon::from_lines(&[
            "# canonical | aliases",
            "이지엔6 이브 | 이브A정 | 이브",
            "타이레놀 | 타이레놀정",
            "",
        ])
    }

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn comments_and_blanks_are_skipped() {
        assert_eq!(lexicon().len(), 2);
    }

    #[test]
    fn single_token_line_matches_alias() {
        let hits = lexicon().match_lines(&lines(&["이브", "파마브롬"]));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].canonical, "이지엔6 이브");
        assert_eq!(hits[0].line_index, 0);
        // "이브" is a whole alias, so containment gives 0.9
        assert!((hits[0].score - 0.9).abs() < 1e-9);
    }

    #[test]
    fn best_line_per_drug_is_kept() {
        let hits = lexicon().match_lines(&lines(&["타이레놀정", "타이레놀현탁액시럽"]));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].matched_line, "타이레놀정");
    }

    #[test]
    fn strength_is_taken_from_neighbouring_lines() {
        let ls = lines(&["이브", "30", "200mg", "기타"]);
        assert_eq!(extract_strength(&ls, 0), Some("200mg".into()));
        assert_eq!(extract_strength(&ls, 3), Some("200mg".into()));
        assert_eq!(extract_strength(&lines(&["500밀리그램"]), 0), Some("500mg".into()));
        assert_eq!(extract_strength(&lines(&["이브"]), 0), None);
    }

    #[test]
    fn scan_builds_prescriptions() {
        let texts = lines(&["약국", "타이레놀", "500mg", "영수증"]);
        let scan = scan_prescription(&lexicon(), &texts, None, 0.5);
        assert_eq!(scan.medicines.len(), 1);
        assert_eq!(scan.medicines[0].name, "타이레놀 500mg");
        assert_eq!(scan.medicines[0].frequency, 0);

        assert_eq!(scan.candidates.len(), 1);
        assert_eq!(scan.candidates[0].canonical, "타이레놀");
        assert_eq!(scan.candidates[0].matched_line, "타이레놀");
        assert_eq!(scan.candidates[0].matched_tokens, vec!["타이레놀".to_string()]);
        assert!((scan.candidates[0].score - 0.9).abs() < 1e-9);
    }

    #[test]
    fn empty_scan_yields_placeholder() {
        let scan = scan_prescription(&lexicon(), &lines(&["영수증"]), None, 0.5);
        assert_eq!(scan.medicines.len(), 1);
        assert_eq!(scan.medicines[0].name, UNMATCHED_PLACEHOLDER);
        assert!(scan.candidates.is_empty());
    }
}
