//! Process configuration, read once from the environment at startup.

use std::path::PathBuf;

/// Environment variable that disables event logging (`1`, `true`, `yes`, `on`).
pub const LOGGING_DISABLED_ENV: &str = "PROMPT_HOOK_LOGGING_DISABLED";

/// Environment variable overriding the log directory.
pub const LOG_DIR_ENV: &str = "PROMPT_HOOK_LOG_DIR";

/// Immutable hook configuration.
///
/// Constructed once in `main` and passed explicitly to the components that
/// need it; nothing in the crate reads the environment after this point.
#[derive(Debug, Clone)]
pub struct HookConfig {
    /// Whether the event log is written at all.
    pub logging_enabled: bool,
    /// Directory holding the JSONL event log.
    pub log_dir: PathBuf,
    /// Engineer name recorded in each event, from `$USER`.
    pub engineer: String,
}

impl HookConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        let logging_enabled = !env_flag(LOGGING_DISABLED_ENV);
        let log_dir = std::env::var_os(LOG_DIR_ENV)
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".claude").join("logs")))
            .unwrap_or_else(|| PathBuf::from(".claude/logs"));
        let engineer = std::env::var("USER").unwrap_or_else(|_| "Engineer".to_string());

        Self {
            logging_enabled,
            log_dir,
            engineer,
        }
    }
}

fn env_flag(name: &str) -> bool {
    match std::env::var(name) {
        Ok(v) => matches!(v.as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => false,
    }
}
