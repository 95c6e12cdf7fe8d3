//! Run-time notebook context consumed by the naming engine.

use std::collections::HashMap;

pub const WIDGET_GIT_URL: &str = "git_url";
pub const WIDGET_GIT_BRANCH: &str = "git_branch";
pub const WIDGET_GIT_COMMIT: &str = "git_commit";
pub const WIDGET_PIPELINE_ENV: &str = "pipeline_env";

/// Read-only snapshot of the executing notebook's identity.
///
/// The naming engine never mutates a context; every naming call is a pure
/// function of its context, config, and arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunContext {
    /// Filesystem path of the running notebook inside the workspace.
    pub notebook_path: String,
    /// Executing principal. Usernames without an `@` are treated as service
    /// principals, which leans the environment inference towards prod.
    pub username: String,
    /// Runtime widgets (`git_url`, `git_branch`, `git_commit`,
    /// `pipeline_env`). Absent keys are valid.
    pub widgets: HashMap<String, String>,
}

impl RunContext {
    pub fn widget(&self, key: &str) -> Option<&str> {
        self.widgets.get(key).map(String::as_str)
    }

    /// Git branch widget, or `""` when unset.
    pub fn git_branch(&self) -> &str {
        self.widget(WIDGET_GIT_BRANCH).unwrap_or("")
    }

    /// Git commit widget, or `""` when unset.
    pub fn git_commit(&self) -> &str {
        self.widget(WIDGET_GIT_COMMIT).unwrap_or("")
    }

    /// The `pipeline_env` widget, when present.
    pub fn pipeline_env(&self) -> Option<&str> {
        self.widget(WIDGET_PIPELINE_ENV)
    }
}
