use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Unique identifier for tasks within one batch
pub type TaskId = i64;

/// Raw task as submitted by the caller, before normalization.
///
/// The three defaultable fields (`estimated_hours`, `importance`,
/// `dependencies`) are carried as loose JSON values so that a wrong-shaped
/// field becomes a warning plus a documented default instead of failing
/// deserialization of the whole batch.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TaskInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<TaskId>,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_hours: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Value>,
}

/// Normalized task with every field guaranteed valid.
///
/// Scorers only ever see this type; all coercion happens in the
/// normalization step, never inside a scorer.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// `None` means no deadline (absent or unparseable in the input)
    pub due_date: Option<NaiveDate>,
    /// Always finite and > 0
    pub estimated_hours: f64,
    /// Always in 1..=10
    pub importance: u8,
    pub dependencies: Vec<TaskId>,
}

/// The four factor sub-scores, each in [0, 1]
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ScoreBreakdown {
    pub urgency: f64,
    pub importance: f64,
    pub effort: f64,
    pub dependencies: f64,
}

/// A normalized task together with its computed priority
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScoredTask {
    #[serde(flatten)]
    pub task: Task,
    pub priority_score: f64,
    pub score_breakdown: ScoreBreakdown,
    pub explanation: String,
}

/// Outcome of one analysis call.
///
/// The engine never returns `Err` to its caller: batch-fatal problems,
/// contained per-task failures and normalization warnings are all carried
/// here. `sorted_tasks` is empty whenever the batch was rejected outright.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AnalysisResult {
    pub sorted_tasks: Vec<ScoredTask>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub strategy_used: String,
}

/// Diagnostics produced by the analysis pipeline
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// Batch has zero tasks; batch-fatal
    #[error("no tasks provided")]
    EmptyBatch,

    /// Dependency graph has a cycle; batch-fatal
    #[error("Circular dependency detected: {path}")]
    Cycle { path: String },

    /// Unexpected failure scoring one task; contained to that task
    #[error("Error processing task '{title}': {message}")]
    TaskComputation { title: String, message: String },
}

impl TaskInput {
    /// Create a task with just a title; remaining fields default at
    /// normalization time
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: TaskId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the due date as a raw `YYYY-MM-DD` string
    pub fn with_due(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }

    pub fn with_hours(mut self, estimated_hours: f64) -> Self {
        self.estimated_hours = Some(Value::from(estimated_hours));
        self
    }

    pub fn with_importance(mut self, importance: i64) -> Self {
        self.importance = Some(Value::from(importance));
        self
    }

    pub fn with_dependencies(mut self, dependencies: Vec<TaskId>) -> Self {
        self.dependencies = Some(Value::from(dependencies));
        self
    }
}

impl From<&Task> for TaskInput {
    fn from(task: &Task) -> Self {
        Self {
            id: Some(task.id),
            title: task.title.clone(),
            due_date: task.due_date.map(|d| d.format("%Y-%m-%d").to_string()),
            estimated_hours: Some(Value::from(task.estimated_hours)),
            importance: Some(Value::from(task.importance as i64)),
            dependencies: Some(Value::from(task.dependencies.clone())),
        }
    }
}

impl AnalysisResult {
    /// Batch-fatal outcome: no scores alongside the errors
    pub(crate) fn rejected(
        errors: Vec<String>,
        warnings: Vec<String>,
        strategy_used: &str,
    ) -> Self {
        Self {
            sorted_tasks: Vec::new(),
            errors,
            warnings,
            strategy_used: strategy_used.to_string(),
        }
    }

    /// Whether the whole batch was rejected before scoring
    pub fn is_rejected(&self) -> bool {
        self.sorted_tasks.is_empty() && !self.errors.is_empty()
    }
}
