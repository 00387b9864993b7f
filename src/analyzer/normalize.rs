use crate::analyzer::types::{Task, TaskId, TaskInput};
use chrono::NaiveDate;
use serde_json::Value;
use tracing::debug;

/// Replacement when `estimated_hours` is missing, non-numeric or <= 0
pub const DEFAULT_ESTIMATED_HOURS: f64 = 1.0;
/// Replacement when `importance` is missing or outside 1..=10
pub const DEFAULT_IMPORTANCE: u8 = 5;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Result of normalizing one batch: guaranteed-valid tasks in input order,
/// plus one warning per defaulted field
#[derive(Debug, Clone)]
pub struct NormalizedBatch {
    pub tasks: Vec<Task>,
    pub warnings: Vec<String>,
}

/// Replace missing/invalid fields with their documented defaults.
///
/// Never fails and never drops a task; every replacement records a warning
/// naming the task. Idempotent: normalizing an already-valid task changes
/// nothing and warns about nothing.
pub fn normalize_batch(inputs: &[TaskInput]) -> NormalizedBatch {
    let mut tasks = Vec::with_capacity(inputs.len());
    let mut warnings = Vec::new();

    for (index, input) in inputs.iter().enumerate() {
        tasks.push(normalize_task(input, index, &mut warnings));
    }

    NormalizedBatch { tasks, warnings }
}

fn normalize_task(input: &TaskInput, index: usize, warnings: &mut Vec<String>) -> Task {
    let label = display_title(input);

    let id = match input.id {
        Some(id) => id,
        None => {
            let assigned = effective_id(input, index);
            debug!(task = %label, assigned, "task submitted without id");
            warnings.push(format!("Task '{label}' assigned automatic ID {assigned}"));
            assigned
        }
    };

    let estimated_hours = match coerce_hours(input.estimated_hours.as_ref()) {
        Some(hours) => hours,
        None => {
            warnings.push(format!(
                "Task '{label}' has invalid estimated hours, using default 1"
            ));
            DEFAULT_ESTIMATED_HOURS
        }
    };

    let importance = match coerce_importance(input.importance.as_ref()) {
        Some(importance) => importance,
        None => {
            warnings.push(format!(
                "Task '{label}' has invalid importance, using default 5"
            ));
            DEFAULT_IMPORTANCE
        }
    };

    let dependencies = match coerce_dependencies(input.dependencies.as_ref()) {
        Some(dependencies) => dependencies,
        None => {
            warnings.push(format!(
                "Task '{label}' has invalid dependencies, using empty list"
            ));
            Vec::new()
        }
    };

    Task {
        id,
        title: input.title.clone(),
        due_date: parse_due_date(input.due_date.as_deref()),
        estimated_hours,
        importance,
        dependencies,
    }
}

/// The id cycle detection and id assignment agree on: the explicit id when
/// present, otherwise the 1-based input position
pub(crate) fn effective_id(input: &TaskInput, index: usize) -> TaskId {
    input.id.unwrap_or(index as TaskId + 1)
}

/// Lenient dependency extraction from the raw value; non-array shapes and
/// non-integer entries yield nothing
pub(crate) fn raw_dependencies(input: &TaskInput) -> Vec<TaskId> {
    coerce_dependencies(input.dependencies.as_ref()).unwrap_or_default()
}

/// An absent or unparseable due date means "no deadline", not an error
fn parse_due_date(due_date: Option<&str>) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(due_date?, DATE_FORMAT).ok()
}

fn coerce_hours(value: Option<&Value>) -> Option<f64> {
    let hours = value?.as_f64()?;
    (hours.is_finite() && hours > 0.0).then_some(hours)
}

fn coerce_importance(value: Option<&Value>) -> Option<u8> {
    let importance = value?.as_i64()?;
    (1..=10).contains(&importance).then_some(importance as u8)
}

fn coerce_dependencies(value: Option<&Value>) -> Option<Vec<TaskId>> {
    let entries = value?.as_array()?;
    Some(entries.iter().filter_map(Value::as_i64).collect())
}

fn display_title(input: &TaskInput) -> &str {
    if input.title.is_empty() {
        "Unknown"
    } else {
        &input.title
    }
}
