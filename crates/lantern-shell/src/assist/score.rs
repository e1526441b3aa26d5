//! Match scoring for suggestion ranking.
//!
//! A query scores against a candidate string from three weighted components:
//! a flat base for matching at all, the matched span's share of the
//! candidate, and how close to the start the match sits. Non-matches score
//! below zero so callers can filter on the sign.

use regex::Regex;

/// Flat component awarded to any match.
const BASE_WEIGHT: f32 = 0.3;
/// Component scaled by the matched span's share of the candidate.
const LENGTH_WEIGHT: f32 = 0.25;

/// Build a case-insensitive literal pattern for a query.
pub fn pattern(input: &str) -> Regex {
    Regex::new(&format!("(?i){}", regex::escape(input)))
        .expect("escaped literal is a valid pattern")
}

/// Score `input` against the pattern; negative means no match.
pub fn score(pattern: &Regex, input: &str) -> f32 {
    let index_weight = 1.0 - BASE_WEIGHT - LENGTH_WEIGHT;
    let count = input.len();
    if count == 0 {
        return -1.0;
    }

    match pattern.find(input) {
        None => -1.0,
        Some(found) => {
            let span = found.as_str().len() as f32 / count as f32;
            let position = found.start() as f32 / count as f32;
            BASE_WEIGHT + LENGTH_WEIGHT * span.sqrt() + index_weight * (1.0 - position)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_match_at_the_start_scores_highest() {
        let p = pattern("rust");
        let exact = score(&p, "rust");
        let prefix = score(&p, "rust lang");
        let middle = score(&p, "the rust lang");
        assert!(exact > prefix);
        assert!(prefix > middle);
    }

    #[test]
    fn non_matches_score_negative() {
        let p = pattern("rust");
        assert!(score(&p, "golang") < 0.0);
        assert!(score(&p, "") < 0.0);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let p = pattern("RuSt");
        assert!(score(&p, "Rust Programming") > 0.0);
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let p = pattern("c++ (tutorial)");
        assert!(score(&p, "learn c++ (tutorial) online") > 0.0);
    }
}
