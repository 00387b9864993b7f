use crate::analyzer::graph::DependencyGraph;
use crate::analyzer::normalize::{self, NormalizedBatch};
use crate::analyzer::scoring;
use crate::analyzer::strategy::{Strategy, StrategyWeights};
use crate::analyzer::types::{
    AnalysisError, AnalysisResult, ScoreBreakdown, ScoredTask, Task, TaskId, TaskInput,
};
use chrono::{NaiveDate, Utc};
use std::collections::HashMap;
use tracing::{debug, info};

/// Orchestrates one scoring pass over a batch of tasks.
///
/// Holds the resolved strategy, its weights and the urgency reference date;
/// nothing else. `analyze` takes `&self` and only reads its inputs, so
/// independent batches can run on independent threads.
pub struct Analyzer {
    strategy: Strategy,
    weights: StrategyWeights,
    today: NaiveDate,
}

impl Analyzer {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            weights: strategy.weights(),
            today: Utc::now().date_naive(),
        }
    }

    /// Fix the "today" reference for urgency scoring. With identical input,
    /// strategy and `today`, the output is always identical.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Override the strategy's weight table; mostly useful for experiments
    pub fn with_weights(mut self, weights: StrategyWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Score and rank one self-contained batch.
    ///
    /// Structural failure (empty batch, dependency cycle) rejects the whole
    /// batch with no scores. Per-task data defects are fixed by
    /// normalization with a warning. An unexpected failure while scoring
    /// one task is contained to that task and the rest of the batch
    /// proceeds.
    pub fn analyze(&self, inputs: &[TaskInput]) -> AnalysisResult {
        if inputs.is_empty() {
            return AnalysisResult::rejected(
                vec![AnalysisError::EmptyBatch.to_string()],
                Vec::new(),
                self.strategy.name(),
            );
        }

        // Structural validation runs over raw dependency ids, before any
        // field defaulting.
        let cycles = DependencyGraph::from_inputs(inputs).find_cycles();
        if !cycles.is_empty() {
            return AnalysisResult::rejected(
                cycles.iter().map(ToString::to_string).collect(),
                Vec::new(),
                self.strategy.name(),
            );
        }

        let NormalizedBatch { tasks, warnings } = normalize::normalize_batch(inputs);
        let mut errors = Vec::new();

        let dependents = scoring::blocking_counts(&tasks);

        let mut sorted_tasks = Vec::with_capacity(tasks.len());
        for task in tasks {
            match self.score_task(task, &dependents) {
                Ok(scored) => sorted_tasks.push(scored),
                Err(contained) => errors.push(contained.to_string()),
            }
        }

        // Stable sort: ties keep their original input order.
        sorted_tasks.sort_by(|a, b| {
            b.priority_score
                .partial_cmp(&a.priority_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        info!(
            tasks = sorted_tasks.len(),
            strategy = self.strategy.name(),
            warnings = warnings.len(),
            "batch scored"
        );

        AnalysisResult {
            sorted_tasks,
            errors,
            warnings,
            strategy_used: self.strategy.name().to_string(),
        }
    }

    /// The top tasks to work on next: the full pipeline, truncated
    pub fn suggest(&self, inputs: &[TaskInput], limit: usize) -> AnalysisResult {
        let mut result = self.analyze(inputs);
        result.sorted_tasks.truncate(limit);
        result
    }

    fn score_task(
        &self,
        task: Task,
        dependents: &HashMap<TaskId, u32>,
    ) -> Result<ScoredTask, AnalysisError> {
        let blocking = dependents.get(&task.id).copied().unwrap_or(0);
        let breakdown = ScoreBreakdown {
            urgency: round4(scoring::urgency_score(task.due_date, self.today)),
            importance: round4(scoring::importance_score(task.importance)),
            effort: round4(scoring::effort_score(task.estimated_hours)),
            dependencies: round4(scoring::blocking_score(blocking)),
        };

        let weights = &self.weights;
        let total = breakdown.urgency * weights.urgency
            + breakdown.importance * weights.importance
            + breakdown.effort * weights.effort
            + breakdown.dependencies * weights.dependencies;

        // Every scorer is total over normalized input, so this guard should
        // never trip; it is the uniform containment path for anything that
        // slips through anyway.
        if !total.is_finite() {
            return Err(AnalysisError::TaskComputation {
                title: task.title,
                message: format!("non-finite priority score {total}"),
            });
        }

        debug!(task = task.id, score = total, "task scored");

        Ok(ScoredTask {
            explanation: build_explanation(&breakdown),
            priority_score: round4(total),
            score_breakdown: breakdown,
            task,
        })
    }
}

/// Convenience entry point: resolve the strategy by name (unknown names
/// fall back to `smart_balance`) and score the batch against today's date
pub fn analyze(tasks: &[TaskInput], strategy: &str) -> AnalysisResult {
    Analyzer::new(Strategy::resolve(strategy)).analyze(tasks)
}

/// Qualitative phrases checked in a fixed order and joined with commas
fn build_explanation(breakdown: &ScoreBreakdown) -> String {
    let mut parts: Vec<&str> = Vec::new();

    if breakdown.urgency > 0.7 {
        parts.push("very urgent");
    } else if breakdown.urgency > 0.4 {
        parts.push("time-sensitive");
    }
    if breakdown.importance > 0.7 {
        parts.push("high importance");
    } else if breakdown.importance > 0.4 {
        parts.push("moderately important");
    }
    if breakdown.effort > 0.7 {
        parts.push("quick win");
    } else if breakdown.effort < 0.3 {
        parts.push("significant effort");
    }
    if breakdown.dependencies > 0.6 {
        parts.push("blocks other tasks");
    }

    if parts.is_empty() {
        "This task has average priority across all factors.".to_string()
    } else {
        format!("This task is {}", parts.join(", "))
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
