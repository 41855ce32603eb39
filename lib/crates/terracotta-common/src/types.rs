use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Terraform action a run performs for every module.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RunAction {
    Plan,
    Apply,
}

impl std::fmt::Display for RunAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunAction::Plan => f.write_str("plan"),
            RunAction::Apply => f.write_str("apply"),
        }
    }
}

/// Outcome of one module within a run
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModuleStatus {
    Success,
    Failed,
    /// Not executed because an earlier module failed and the run stopped.
    Skipped,
}

/// Per-module entry of a [`RunSummary`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModuleReport {
    pub module: String,
    pub status: ModuleStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Wall-clock time spent on all steps of the module.
    /// None for skipped modules.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl ModuleReport {
    #[must_use]
    pub fn success(module: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            module: module.into(),
            status: ModuleStatus::Success,
            error: None,
            duration_ms: Some(duration_ms),
        }
    }

    #[must_use]
    pub fn failed(module: impl Into<String>, error: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            module: module.into(),
            status: ModuleStatus::Failed,
            error: Some(error.into()),
            duration_ms: Some(duration_ms),
        }
    }

    #[must_use]
    pub fn skipped(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            status: ModuleStatus::Skipped,
            error: None,
            duration_ms: None,
        }
    }
}

/// Result of running an action over every module, in execution order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub action: RunAction,
    pub modules: Vec<ModuleReport>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunSummary {
    fn count(&self, status: ModuleStatus) -> usize {
        self.modules.iter().filter(|m| m.status == status).count()
    }

    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.count(ModuleStatus::Success)
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(ModuleStatus::Failed)
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(ModuleStatus::Skipped)
    }

    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed() > 0
    }
}

/// One line of the `order` command output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderEntry {
    /// 1-based position in the execution order.
    pub position: usize,
    pub module: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
}

/// Resolved execution order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct OrderReport {
    pub modules: Vec<OrderEntry>,
}
