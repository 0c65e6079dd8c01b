//! UserPromptSubmit hook: flag stripping and deterministic context injection.
//!
//! The hook reads one JSON object from stdin (`prompt`, `session_id`), strips a
//! trailing run of dash-prefixed flags from the prompt, and emits context
//! fragments on stdout based on the flags present and a heuristic about the
//! prompt. Each run appends one event record to a JSONL log, best-effort.
//!
//! Pipeline: [`flags::parse_flags`] -> [`policy::should_apply_defaults`] ->
//! [`registry::FlagRegistry`] lookups -> [`enhancer::PromptEnhancer`] ->
//! stdout + [`logging::EventLog`].

pub mod ambient;
pub mod base_flags;
pub mod config;
pub mod enhancer;
pub mod error;
pub mod flags;
pub mod logging;
pub mod pipeline;
pub mod policy;
pub mod registry;
pub mod workflow;

pub use config::HookConfig;
pub use enhancer::{EventRecord, PromptEnhancer};
pub use error::{HookError, Result};
pub use logging::EventLog;
pub use pipeline::{HookInput, HookOutcome};
pub use registry::{FlagRegistry, FlagSet};
pub use workflow::WorkflowProbe;
