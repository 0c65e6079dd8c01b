//! Per-invocation orchestration.
//!
//! One run: extract flags, maybe rewrite an empty prompt into the help
//! request, inject ambient facts, decide on baseline guidance, expand each
//! flag in order, then seal the output and event record. Nothing in here
//! fails: probes degrade to absence and unknown flags are dropped, so the
//! only fatal path is input parsing, which happens before this module.

use crate::ambient;
use crate::config::HookConfig;
use crate::enhancer::{EventRecord, PromptEnhancer};
use crate::flags::parse_flags;
use crate::policy::should_apply_defaults;
use crate::registry::{self, FlagRegistry, normalize_token};
use chrono::Local;
use serde::Deserialize;

/// Clean prompt substituted when an empty prompt carries a help flag.
pub const HELP_PROMPT: &str = "Show available hook flags";

/// The structured stdin object. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct HookInput {
    #[serde(default)]
    pub prompt: String,
    #[serde(default = "default_session_id")]
    pub session_id: String,
}

fn default_session_id() -> String {
    "unknown".to_string()
}

/// Result of one run: the stdout payload (if any) and the sealed record.
#[derive(Debug)]
pub struct HookOutcome {
    pub output: Option<String>,
    pub record: EventRecord,
}

fn is_help_flag(token: &str) -> bool {
    matches!(normalize_token(token).as_str(), "hh" | "hhelp")
}

fn is_standards_flag(token: &str) -> bool {
    matches!(normalize_token(token).as_str(), "e" | "eng" | "standards")
}

/// Run the full enhancement pipeline for one input.
pub fn run(input: &HookInput, config: &HookConfig, registry: &FlagRegistry) -> HookOutcome {
    let mut enhancer = PromptEnhancer::new(config, input);

    let (mut clean, flags) = parse_flags(&input.prompt);
    enhancer.set_flags(&flags);

    let help_requested = flags.iter().any(|f| is_help_flag(f));
    if clean.trim().is_empty() && help_requested {
        clean = HELP_PROMPT.to_string();
        enhancer.mark_help_request();
    }
    enhancer.set_clean_prompt(&clean);

    enhancer.add_context(ambient::date_fragment(Local::now()));
    if let Some(branch) = ambient::current_branch() {
        enhancer.add_context(format!("[Git Branch: {branch}]"));
    }

    // The explicit flag's own handler injects the identical block, so its
    // presence suppresses the auto-applied copy.
    if !help_requested
        && should_apply_defaults(&clean)
        && !flags.iter().any(|f| is_standards_flag(f))
    {
        enhancer.add_context(registry::engineering_standards());
        enhancer.mark_auto_standards();
    }

    for flag in &flags {
        if let Some(fragment) = registry.resolve(flag) {
            enhancer.add_context(fragment);
            enhancer.record_applied(flag);
        }
    }

    let (output, record) = enhancer.finish();
    HookOutcome { output, record }
}
