//! Append-only JSONL event sink.
//!
//! Logging is best-effort: a failed append is reported through `tracing` and
//! never affects the hook's output or exit code.

use crate::config::HookConfig;
use crate::enhancer::EventRecord;
use crate::error::HookError;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// File name of the event log inside the configured log directory.
pub const LOG_FILE_NAME: &str = "prompt_hooks.jsonl";

pub struct EventLog {
    enabled: bool,
    dir: PathBuf,
}

impl EventLog {
    pub fn new(config: &HookConfig) -> Self {
        Self {
            enabled: config.logging_enabled,
            dir: config.log_dir.clone(),
        }
    }

    /// Append one record as one JSON line.
    ///
    /// No-op when logging is disabled. Uses a file lock so concurrent hook
    /// invocations cannot interleave partial lines.
    pub fn append(&self, record: &EventRecord) {
        if !self.enabled {
            return;
        }
        if let Err(e) = self.try_append(record) {
            tracing::warn!("failed to append event log: {e}");
        }
    }

    fn try_append(&self, record: &EventRecord) -> Result<(), HookError> {
        std::fs::create_dir_all(&self.dir)?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.dir.join(LOG_FILE_NAME))?;
        let mut lock = fd_lock::RwLock::new(file);
        let mut guard = lock.write()?;
        serde_json::to_writer(&mut *guard, record)?;
        guard.write_all(b"\n")?;
        Ok(())
    }
}
