use std::sync::LazyLock;

use regex::Regex;

use crate::models::NameList;

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s,/]+").unwrap());
static COHORT_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]{1,2}기").unwrap());
static SINGLE_LETTER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z]$").unwrap());

/// Pulls the names following the last colon of a labelled line.
///
/// Cohort codes ("13기") and single-letter initials are dropped. The result
/// is sorted but not deduplicated; a line without a payload yields nothing.
pub fn extract_names(line: &str) -> NameList {
    let payload = match line.rfind(':') {
        Some(idx) => &line[idx + 1..],
        None => line,
    };

    let mut names: NameList = SEPARATORS
        .split(payload.trim())
        .filter(|token| !token.is_empty())
        .filter(|token| !COHORT_CODE.is_match(token) && !SINGLE_LETTER.is_match(token))
        .map(str::to_string)
        .collect();
    names.sort();
    names
}
