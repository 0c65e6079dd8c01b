//! Trailing flag extraction.
//!
//! A flag is a dash-prefixed token the user appends to a prompt, e.g.
//! `fix the login bug -e -test`. Only a maximal trailing run counts; a dash
//! token in the middle of the prompt is ordinary text. Hyphens are allowed
//! inside a token (`-bmad-story`) and are normalized to underscores at lookup.

use once_cell::sync::Lazy;
use regex::Regex;

static TRAILING_FLAGS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"((?:^|\s+)-[A-Za-z][A-Za-z_-]*)+$").expect("hard-coded pattern compiles")
});

static FLAG_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-([A-Za-z][A-Za-z_-]*)").expect("hard-coded pattern compiles"));

/// Split a raw prompt into (clean prompt, ordered flag tokens).
///
/// If no trailing flag run exists the prompt is returned unchanged with an
/// empty token list. Case is preserved; duplicates are kept in order.
pub fn parse_flags(prompt: &str) -> (String, Vec<String>) {
    match TRAILING_FLAGS.find(prompt) {
        Some(m) => {
            let clean = prompt[..m.start()].trim_end().to_string();
            let flags = FLAG_TOKEN
                .captures_iter(m.as_str())
                .map(|c| c[1].to_string())
                .collect();
            (clean, flags)
        }
        None => (prompt.to_string(), Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_flags_returns_prompt_unchanged() {
        let (clean, flags) = parse_flags("fix the login bug");
        assert_eq!(clean, "fix the login bug");
        assert!(flags.is_empty());
    }

    #[test]
    fn trailing_run_is_extracted_in_order() {
        let (clean, flags) = parse_flags("fix the login bug -e -test");
        assert_eq!(clean, "fix the login bug");
        assert_eq!(flags, vec!["e", "test"]);
    }

    #[test]
    fn interior_dash_token_is_not_a_flag() {
        let (clean, flags) = parse_flags("run with -v output then summarize");
        assert_eq!(clean, "run with -v output then summarize");
        assert!(flags.is_empty());
    }

    #[test]
    fn flags_only_prompt_yields_empty_clean() {
        let (clean, flags) = parse_flags("-bmad-story -e");
        assert_eq!(clean, "");
        assert_eq!(flags, vec!["bmad-story", "e"]);
    }

    #[test]
    fn hyphenated_word_is_not_extracted() {
        let (clean, flags) = parse_flags("explain the well-known issue");
        assert_eq!(clean, "explain the well-known issue");
        assert!(flags.is_empty());
    }

    #[test]
    fn case_is_preserved() {
        let (_, flags) = parse_flags("do it -E -NG");
        assert_eq!(flags, vec!["E", "NG"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let (_, flags) = parse_flags("do it -e -e");
        assert_eq!(flags, vec!["e", "e"]);
    }

    #[test]
    fn trailing_whitespace_is_trimmed_from_clean() {
        let (clean, flags) = parse_flags("do it   -u");
        assert_eq!(clean, "do it");
        assert_eq!(flags, vec!["u"]);
    }

    #[test]
    fn extraction_is_idempotent() {
        let (clean, _) = parse_flags("fix the bug -e -u -p");
        let (again, residual) = parse_flags(&clean);
        assert_eq!(again, clean);
        assert!(residual.is_empty());
    }

    #[test]
    fn bare_dash_is_not_a_flag() {
        let (clean, flags) = parse_flags("compute a - b");
        assert_eq!(clean, "compute a - b");
        assert!(flags.is_empty());
    }
}
