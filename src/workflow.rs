//! Workflow-mode context: read-only probes for the BMad Method layout.
//!
//! The overview handler inspects a fixed set of relative paths under the probe
//! root (the working directory in production). Every probe failure is treated
//! as "fact absent" and narrows the fragment instead of erroring.

use std::path::{Path, PathBuf};

const NOT_DETECTED: &str = "[BMad Method Not Detected - Install with: npx bmad-method install]";

const STORY_MODE: &str = "BMad Story Mode: Reference story file for context and acceptance criteria. Implement with tests and update story with implementation notes. Use engineering standards and verify against existing codebase patterns.";

const REVIEW_MODE: &str = "BMad Review Mode: Apply BMad QA checklist. Review against acceptance criteria, check architectural alignment, suggest improvements. Use systematic review approach.";

/// Fixed story-implementation instructions.
pub fn story_mode() -> &'static str {
    STORY_MODE
}

/// Fixed review/QA instructions.
pub fn review_mode() -> &'static str {
    REVIEW_MODE
}

/// Existence probe over a workflow-root directory.
#[derive(Debug, Clone)]
pub struct WorkflowProbe {
    root: PathBuf,
}

impl WorkflowProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Probe rooted at the process working directory.
    pub fn from_current_dir() -> Self {
        Self::new(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Build the workflow overview fragment from whatever is present on disk.
    ///
    /// With no `bmad-core/` directory this is a single install hint; otherwise
    /// one line per detected artifact, in a fixed order.
    pub fn overview(&self) -> String {
        if !self.root.join("bmad-core").exists() {
            return NOT_DETECTED.to_string();
        }

        let mut lines = vec!["[BMad Method Active]".to_string()];
        if self
            .root
            .join("bmad-core/data/technical-preferences.md")
            .is_file()
        {
            lines.push(
                "Reference technical preferences from bmad-core/data/technical-preferences.md"
                    .to_string(),
            );
        }
        let stories = count_markdown_files(&self.root.join("docs/stories"));
        if stories > 0 {
            lines.push(format!(
                "Active stories available in docs/stories/ ({stories} stories)"
            ));
        }
        if self.root.join("docs/architecture").is_dir() {
            lines.push("Architecture documentation available in docs/architecture/".to_string());
        }
        if self.root.join("docs/prd.md").is_file() {
            lines.push("PRD available in docs/prd.md".to_string());
        }
        lines.push("Apply BMad workflow patterns and engineering standards.".to_string());
        lines.join("\n")
    }
}

fn count_markdown_files(dir: &Path) -> usize {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return 0;
    };
    entries
        .flatten()
        .filter(|e| {
            e.path().extension().is_some_and(|ext| ext == "md") && e.path().is_file()
        })
        .count()
}
