//! Age-block selection: usage texts often carry a pediatric and an adult
//! regimen side by side. Only the one matching the patient may reach the
//! extractor.

use regex::Regex;
use std::sync::LazyLock;

pub const ADULT_AGE: u32 = 15;

static SENTENCE_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\n.]+").unwrap());

static CHILD_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"만\s*8세|(?:만\s*)?15세\s*미만|소아|어린이|미성년").unwrap()
});

static ADULT_MARKERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"성인|(?:만\s*)?15세\s*이상").unwrap());

/// Child and adult sentences of a usage text, each joined with a space.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgeBlocks {
    pub child: Option<String>,
    pub adult: Option<String>,
}

fn sentences(text: &str) -> Vec<&str> {
    SENTENCE_SPLIT
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn join_matching(lines: &[&str], markers: &Regex) -> Option<String> {
    let picked: Vec<&str> = lines
        .iter()
        .copied()
        .filter(|s| markers.is_match(s))
        .collect();

    if picked.is_empty() {
        None
    } else {
        Some(picked.join(" "))
    }
}

pub fn split_usage_by_age(text: &str) -> AgeBlocks {
    if text.trim().is_empty() {
        return AgeBlocks::default();
    }

    let lines = sentences(text);
    AgeBlocks {
        child: join_matching(&lines, &CHILD_MARKERS),
        adult: join_matching(&lines, &ADULT_MARKERS),
    }
}

/// Narrow `text` to the block for `age`. Unknown age, empty text or a
/// missing block leave the text untouched.
pub fn select_age_block(text: &str, age: Option<u32>) -> String {
    let Some(age) = age else {
        return text.to_string();
    };
    if text.is_empty() {
        return text.to_string();
    }

    let blocks = split_usage_by_age(text);
    let picked = if age < ADULT_AGE {
        blocks.child
    } else {
        blocks.adult
    };

    match picked {
        Some(block) => {
            log::debug!("age {age}: narrowed usage to '{block}'");
            block
        }
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_REGIMENS: &str =
        "성인 및 15세 이상: 1회 2정, 1일 3회 복용한다.\n만 8세 이상 15세 미만 소아: 1회 1정, 1일 2회 복용한다.";

    #[test]
    fn child_gets_only_child_sentence() {
        let out = select_age_block(TWO_REGIMENS, Some(10));
        assert_eq!(out, "만 8세 이상 15세 미만 소아: 1회 1정, 1일 2회 복용한다");
    }

    #[test]
    fn adult_gets_only_adult_sentence() {
        let out = select_age_block(TWO_REGIMENS, Some(40));
        assert_eq!(out, "성인 및 15세 이상: 1회 2정, 1일 3회 복용한다");
    }

    #[test]
    fn boundary_age_is_adult() {
        let out = select_age_block(TWO_REGIMENS, Some(ADULT_AGE));
        assert!(out.starts_with("성인"));
    }

    #[test]
    fn unknown_age_or_empty_text_is_untouched() {
        assert_eq!(select_age_block(TWO_REGIMENS, None), TWO_REGIMENS);
        assert_eq!(select_age_block("", Some(10)), "");
    }

    #[test]
    fn missing_block_falls_back_to_original() {
        let text = "성인: 1회 1정 1일 3회";
        assert_eq!(select_age_block(text, Some(9)), text);
    }

    #[test]
    fn several_sentences_are_joined_with_space() {
        let text = "어린이는 1회 1정. 성인은 1회 2정. 어린이는 1일 2회 복용";
        let blocks = split_usage_by_age(text);
        assert_eq!(blocks.child.as_deref(), Some("어린이는 1회 1정 어린이는 1일 2회 복용"));
        assert_eq!(blocks.adult.as_deref(), Some("성인은 1회 2정"));
    }
}
