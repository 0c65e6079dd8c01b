//! Default-guidance policy.
//!
//! Low-stakes prompts (greetings, bare lookups, shell one-liners) should not
//! have the engineering-standards block auto-injected. Matching is purely
//! prefix/pattern based against the case-folded clean prompt.

use once_cell::sync::Lazy;
use regex::Regex;

static SKIP_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Shell/inspection commands and interrogatives
        r"^(ls|dir|pwd|cd|cat|grep|find|which|what|where|who|when|how much|how many)\b",
        // Simple retrieval phrasing: "show me the ...", "list ..."
        r"^(show|list|display|get|fetch)\s+(me\s+)?(the\s+)?",
        // Bare question mark
        r"^\?",
        // Greetings and farewells
        r"^(hi|hello|hey|thanks|thank you|bye)\b",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("hard-coded pattern compiles"))
    .collect()
});

/// Whether baseline guidance should be auto-applied for this clean prompt.
pub fn should_apply_defaults(clean_prompt: &str) -> bool {
    let lower = clean_prompt.to_lowercase();
    !SKIP_PATTERNS.iter().any(|re| re.is_match(&lower))
}
