//! # Taskrank
//!
//! A deterministic task prioritization engine. Feed it one self-contained
//! batch of tasks (deadlines, effort estimates, importance ratings and
//! inter-task dependencies) and it returns the batch ranked by computed
//! priority under a selectable weighting strategy, together with diagnostic
//! errors and warnings.
//!
//! ## How a batch is processed
//!
//! 1. An empty batch is rejected outright.
//! 2. The dependency graph is checked for cycles; any cycle rejects the
//!    whole batch before scoring.
//! 3. Missing or invalid fields are replaced with documented defaults,
//!    each replacement recorded as a warning.
//! 4. Four independent factor scores (urgency, importance, effort,
//!    dependency blocking) are combined through the strategy's weight
//!    table into one priority score per task, with a short natural
//!    language explanation.
//! 5. Tasks are sorted by score, descending; ties keep input order.
//!
//! The pipeline is synchronous, allocation-only and free of hidden state.
//! Given identical input, strategy and reference date, the output is
//! always identical.
//!
//! ## Quick start
//!
//! ```rust
//! use taskrank::{TaskInput, analyze};
//!
//! let tasks = vec![
//!     TaskInput::new("Ship release notes")
//!         .with_id(1)
//!         .with_hours(1.0)
//!         .with_importance(6)
//!         .with_dependencies(vec![]),
//!     TaskInput::new("Fix login bug")
//!         .with_id(2)
//!         .with_hours(4.0)
//!         .with_importance(9)
//!         .with_dependencies(vec![1]),
//! ];
//!
//! let result = analyze(&tasks, "smart_balance");
//! assert!(result.errors.is_empty());
//! assert_eq!(result.sorted_tasks.len(), 2);
//! ```

/// The scoring-and-validation pipeline: normalization, cycle detection,
/// factor scorers, strategy weight tables and the orchestrating engine.
pub mod analyzer;

/// Command line argument parsing and batch-file loading for the `taskrank`
/// binary.
pub mod cli;

pub use analyzer::{
    AnalysisError, AnalysisResult, Analyzer, ScoreBreakdown, ScoredTask, Strategy,
    StrategyWeights, Task, TaskId, TaskInput, analyze,
};
