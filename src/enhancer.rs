//! Fragment accumulation and the per-run event record.

use crate::config::HookConfig;
use crate::pipeline::HookInput;
use chrono::Local;
use serde::{Deserialize, Serialize};

/// One structured event per hook invocation, written as a JSONL line.
///
/// Every field is always serialized, even when empty, so the downstream log
/// schema stays stable across runs. The record is write-once: the orchestrator
/// fills it in and nothing mutates it after [`PromptEnhancer::finish`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    /// RFC3339 local timestamp of the run.
    pub timestamp: String,
    /// Crate version that produced the record.
    pub hook_version: String,
    /// Engineer name from configuration.
    pub engineer: String,
    pub session_id: String,
    pub original_prompt: String,
    pub clean_prompt: String,
    /// Every extracted flag token, in order, case preserved.
    pub flags: Vec<String>,
    /// Tokens that resolved to a handler, in processing order.
    pub applied_flags: Vec<String>,
    /// Whether an empty prompt was rewritten into the help request.
    pub help_request: bool,
    /// Whether baseline guidance was auto-injected.
    pub auto_applied_standards: bool,
    /// The full text emitted on stdout, empty when nothing was emitted.
    pub injected_context: String,
}

/// Accumulates context fragments in call order and builds the event record.
pub struct PromptEnhancer {
    contexts: Vec<String>,
    record: EventRecord,
}

impl PromptEnhancer {
    pub fn new(config: &HookConfig, input: &HookInput) -> Self {
        Self {
            contexts: Vec::new(),
            record: EventRecord {
                timestamp: Local::now().to_rfc3339(),
                hook_version: env!("CARGO_PKG_VERSION").to_string(),
                engineer: config.engineer.clone(),
                session_id: input.session_id.clone(),
                original_prompt: input.prompt.clone(),
                clean_prompt: String::new(),
                flags: Vec::new(),
                applied_flags: Vec::new(),
                help_request: false,
                auto_applied_standards: false,
                injected_context: String::new(),
            },
        }
    }

    /// Append one fragment. Blank fragments are skipped; nothing is ever
    /// reordered or deduplicated.
    pub fn add_context(&mut self, fragment: impl AsRef<str>) {
        let trimmed = fragment.as_ref().trim();
        if !trimmed.is_empty() {
            self.contexts.push(trimmed.to_string());
        }
    }

    pub fn set_clean_prompt(&mut self, clean: &str) {
        self.record.clean_prompt = clean.to_string();
    }

    pub fn set_flags(&mut self, flags: &[String]) {
        self.record.flags = flags.to_vec();
    }

    pub fn record_applied(&mut self, token: &str) {
        self.record.applied_flags.push(token.to_string());
    }

    pub fn mark_help_request(&mut self) {
        self.record.help_request = true;
    }

    pub fn mark_auto_standards(&mut self) {
        self.record.auto_applied_standards = true;
    }

    /// Concatenate fragments with newlines and seal the record.
    ///
    /// Returns `None` output when no fragment was produced; the record is
    /// complete either way.
    pub fn finish(mut self) -> (Option<String>, EventRecord) {
        if self.contexts.is_empty() {
            return (None, self.record);
        }
        let output = self.contexts.join("\n");
        self.record.injected_context = output.clone();
        (Some(output), self.record)
    }
}
