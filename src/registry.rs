//! Flag registry: maps a flag token to the context fragment it produces.
//!
//! Lookup is case-insensitive and hyphen/underscore agnostic. The enhanced
//! vocabulary defined here is checked first; anything else falls through to an
//! optional generic [`FlagSet`] chosen at construction. When no generic set is
//! available those tokens simply resolve to nothing — unknown flags are never
//! an error.

use crate::workflow::{self, WorkflowProbe};

/// A pluggable set of flag handlers.
///
/// `expand` receives a normalized token (lowercase, underscores) and returns
/// the fragment for it, or `None` if the token is not part of this set.
/// Handlers never fail: anything that could go wrong inside one narrows the
/// fragment instead of erroring.
pub trait FlagSet {
    fn expand(&self, token: &str) -> Option<String>;
}

/// Normalize a raw flag token for lookup: lowercase, hyphens to underscores.
pub fn normalize_token(raw: &str) -> String {
    raw.to_ascii_lowercase().replace('-', "_")
}

const ENGINEERING_STANDARDS: &str = "\
Follow the project's principal engineering standards. No shortcuts, stubs, or hardcoded values. We build it right the first time: clean, robust, and production ready. No halfway measures.

Keep it tight. Use the simplest solution that meets the need with high quality. Do not overengineer. Do not create new files, layers, or abstractions unless they are clearly necessary. Every line of code should earn its place. Simplicity is earned through understanding, not guesswork.

Make it clean. Make it count.

If you encounter uncertainty, lack context, or are not confident in the solution, stop. Do not guess or make things up. It is not only okay, it is expected, to ask for clarification or help. Excellence includes knowing when to pause.";

const ANTI_WRAPPER_RULE: &str = "\
CRITICAL DEVELOPMENT RULE:
Don't write or generate any wrapper or replacement code for existing third-party packages.

Use the official API of the specified package directly, as documented.

A successful solution must:
\u{2022} Solve only the exact problem specified
\u{2022} Use the provided third-party package without modification or abstraction
\u{2022} Require minimal integration effort with the existing system
\u{2022} Preserve existing architecture and patterns
\u{2022} Include concise explanations of the API calls used and why

Don't write or change any code until you're at least 95% confident in what needs to be done. If anything is unclear, ask for more information.";

const NO_GUESS: &str = "Do not guess or make assumptions. If something is unclear or you lack necessary context, stop and ask for clarification. It's better to ask than to implement incorrectly.";

const FLAG_REFERENCE: &str = "\
The user has just asked for help understanding the UserPromptSubmit hooks. Please display the following help message:
Here are all available UserPromptSubmit hook flags:

\u{1f9e0} THINKING MODES
- -u, -ultrathink    Maximum thinking budget (31,999 tokens) for complex problems
- -th, -think_hard   Enhanced thinking for challenging tasks
- -t, -think         Step-by-step thinking for standard problems

\u{1f3d7}\u{fe0f} QUALITY & STANDARDS
- -e, -eng, -standards    Apply engineering standards (no shortcuts, production-ready)
- -clean                  Follow clean code principles (SOLID, DRY, meaningful names)

\u{1f4bb} DEVELOPMENT MODES
- -p, -plan          Create detailed plan before implementation
- -v, -verbose       Include verbose explanations and detailed comments
- -s, -sec, -security    Focus on security best practices
- -test              Include comprehensive unit tests
- -doc               Provide detailed documentation with examples
- -perf              Optimize for performance with benchmarks
- -review            Critical code review mode
- -refactor          Refactor for clarity and maintainability
- -debug             Systematic debugging approach
- -api               API design best practices

\u{1f527} OTHER OPTIONS
- -ng, -no_guess     Never guess; ask for clarification instead
- -ctx, -context     Include project context (package managers, tools)
- -hh, -hhelp        Show this help message

\u{1f3af} WORKFLOW FLAGS
- -bmad              BMad Method context and patterns
- -bmad-story        BMad story implementation mode
- -bmad-review       BMad review and QA mode

\u{1f4a1} COMMON COMBINATIONS
Complex problem:     -u -p        (ultrathink + plan)
Production feature:  -e -test -doc (standards + tests + docs)
Code review:        -review -u    (review + deep thinking)
BMad workflow:      -bmad -u -p   (BMad context + ultrathink + plan)
BMad story impl:    -bmad-story -e -test (BMad story + standards + tests)

Note: Engineering standards include anti-wrapper rule enforcement.";

/// Engineering-standards guidance block, anti-wrapper rule appended.
///
/// Also used by the orchestrator for the auto-applied baseline, which is why
/// an explicit `-e` suppresses the auto-injection: both paths produce this
/// exact text.
pub fn engineering_standards() -> String {
    format!("{ENGINEERING_STANDARDS}\n\n{ANTI_WRAPPER_RULE}")
}

fn no_guess() -> String {
    format!("{NO_GUESS}\n\n{ANTI_WRAPPER_RULE}")
}

/// Layered flag lookup: enhanced vocabulary first, then the optional base set.
pub struct FlagRegistry {
    workflow: WorkflowProbe,
    base: Option<Box<dyn FlagSet>>,
}

impl FlagRegistry {
    pub fn new(workflow: WorkflowProbe, base: Option<Box<dyn FlagSet>>) -> Self {
        Self { workflow, base }
    }

    /// Resolve a raw flag token to its context fragment.
    ///
    /// Returns `None` for unknown tokens, including the whole generic
    /// vocabulary when no base set was supplied.
    pub fn resolve(&self, token: &str) -> Option<String> {
        let token = normalize_token(token);
        match token.as_str() {
            "e" | "eng" | "standards" => Some(engineering_standards()),
            "ng" | "no_guess" => Some(no_guess()),
            "bmad" => Some(self.workflow.overview()),
            "bmad_story" => Some(workflow::story_mode().to_string()),
            "bmad_review" => Some(workflow::review_mode().to_string()),
            "hh" | "hhelp" => Some(FLAG_REFERENCE.to_string()),
            _ => self.base.as_ref().and_then(|b| b.expand(&token)),
        }
    }
}
