#[cfg(test)]
mod tests {
    use crate::analyzer::engine::{Analyzer, analyze};
    use crate::analyzer::graph::DependencyGraph;
    use crate::analyzer::normalize::normalize_batch;
    use crate::analyzer::scoring::*;
    use crate::analyzer::strategy::{Strategy, StrategyWeights};
    use crate::analyzer::types::{Task, TaskInput};
    use chrono::{Duration, NaiveDate};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    fn date(days_from_today: i64) -> NaiveDate {
        today() + Duration::days(days_from_today)
    }

    fn date_str(days_from_today: i64) -> String {
        date(days_from_today).format("%Y-%m-%d").to_string()
    }

    // The reference batch: a past-due critical task, a dependent follow-up,
    // a quick win with no deadline, and a heavy near-term feature.
    fn sample_batch() -> Vec<TaskInput> {
        vec![
            TaskInput::new("Fix critical bug")
                .with_id(1)
                .with_due(date_str(-1))
                .with_hours(6.0)
                .with_importance(10)
                .with_dependencies(vec![]),
            TaskInput::new("Write follow-up docs")
                .with_id(2)
                .with_due(date_str(2))
                .with_hours(4.0)
                .with_importance(8)
                .with_dependencies(vec![1]),
            TaskInput::new("Quick UI polish")
                .with_id(3)
                .with_hours(1.0)
                .with_importance(5)
                .with_dependencies(vec![]),
            TaskInput::new("Ship reporting feature")
                .with_id(4)
                .with_due(date_str(3))
                .with_hours(8.0)
                .with_importance(8)
                .with_dependencies(vec![]),
        ]
    }

    fn valid_task(id: i64, dependencies: Vec<i64>) -> Task {
        Task {
            id,
            title: format!("Task {id}"),
            due_date: None,
            estimated_hours: 1.0,
            importance: 5,
            dependencies,
        }
    }

    #[test]
    fn test_empty_batch_rejected() {
        let result = analyze(&[], "smart_balance");

        assert_eq!(result.errors, vec!["no tasks provided".to_string()]);
        assert!(result.sorted_tasks.is_empty());
        assert!(result.warnings.is_empty());
        assert!(result.is_rejected());
    }

    #[test]
    fn test_two_cycle_rejected_without_scores() {
        let batch = vec![
            TaskInput::new("A").with_id(1).with_dependencies(vec![2]),
            TaskInput::new("B").with_id(2).with_dependencies(vec![1]),
        ];
        let result = analyze(&batch, "smart_balance");

        assert!(!result.errors.is_empty());
        assert!(result.errors[0].contains("Circular dependency"));
        assert!(result.errors[0].contains("1 -> 2 -> 1"));
        assert!(result.sorted_tasks.is_empty());
    }

    #[test]
    fn test_self_dependency_is_a_cycle() {
        let batch = vec![TaskInput::new("Loner").with_id(7).with_dependencies(vec![7])];
        let errors = DependencyGraph::from_inputs(&batch).find_cycles();

        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("7 -> 7"));
    }

    #[test]
    fn test_acyclic_graph_passes() {
        let batch = vec![
            TaskInput::new("A").with_id(1).with_dependencies(vec![2, 3]),
            TaskInput::new("B").with_id(2).with_dependencies(vec![3]),
            TaskInput::new("C").with_id(3),
        ];
        assert!(DependencyGraph::from_inputs(&batch).find_cycles().is_empty());
    }

    #[test]
    fn test_dangling_dependency_ignored() {
        let batch = vec![TaskInput::new("Solo")
            .with_id(1)
            .with_hours(1.0)
            .with_importance(5)
            .with_dependencies(vec![99])];
        let result = analyze(&batch, "smart_balance");

        assert!(result.errors.is_empty());
        assert_eq!(result.sorted_tasks.len(), 1);
        // The reference stays on the task; it just never scores anything.
        assert_eq!(result.sorted_tasks[0].task.dependencies, vec![99]);
    }

    #[test]
    fn test_urgency_buckets() {
        let t = today();
        assert_eq!(urgency_score(None, t), 0.3);
        assert_eq!(urgency_score(Some(date(-5)), t), 1.0);
        assert_eq!(urgency_score(Some(date(0)), t), 0.9);
        assert_eq!(urgency_score(Some(date(1)), t), 0.8);
        assert_eq!(urgency_score(Some(date(2)), t), 0.7);
        assert_eq!(urgency_score(Some(date(3)), t), 0.7);
        assert_eq!(urgency_score(Some(date(4)), t), 0.5);
        assert_eq!(urgency_score(Some(date(7)), t), 0.5);
        assert_eq!(urgency_score(Some(date(8)), t), 0.3);
        assert_eq!(urgency_score(Some(date(14)), t), 0.3);
        // The documented discontinuity: 15 days out jumps above 0.3.
        assert!((urgency_score(Some(date(15)), t) - 10.0 / 15.0).abs() < 1e-12);
        assert_eq!(urgency_score(Some(date(200)), t), 0.1);
    }

    #[test]
    fn test_effort_buckets() {
        assert_eq!(effort_score(0.0), 0.5);
        assert_eq!(effort_score(-3.0), 0.5);
        assert_eq!(effort_score(f64::NAN), 0.5);
        assert_eq!(effort_score(0.5), 1.0);
        assert_eq!(effort_score(1.0), 1.0);
        assert_eq!(effort_score(2.0), 0.8);
        assert_eq!(effort_score(4.0), 0.6);
        assert_eq!(effort_score(8.0), 0.4);
        assert!((effort_score(9.0) - 8.0 / 9.0).abs() < 1e-12);
        assert_eq!(effort_score(100.0), 0.1);
    }

    #[test]
    fn test_importance_score_table() {
        for value in 1..=10u8 {
            assert!((importance_score(value) - value as f64 / 10.0).abs() < 1e-12);
        }
        assert_eq!(importance_score(0), 0.5);
        assert_eq!(importance_score(11), 0.5);
    }

    #[test]
    fn test_blocking_counts_single_pass() {
        let tasks = vec![
            valid_task(1, vec![]),
            valid_task(2, vec![1]),
            // Duplicate references to the same prerequisite count once.
            valid_task(3, vec![1, 1, 2]),
        ];
        let counts = blocking_counts(&tasks);

        assert_eq!(counts.get(&1).copied(), Some(2));
        assert_eq!(counts.get(&2).copied(), Some(1));
        assert_eq!(counts.get(&3).copied(), None);
    }

    #[test]
    fn test_blocking_score_steps() {
        assert_eq!(blocking_score(0), 0.1);
        assert_eq!(blocking_score(1), 0.4);
        assert_eq!(blocking_score(2), 0.7);
        assert_eq!(blocking_score(3), 1.0);
        assert_eq!(blocking_score(12), 1.0);
    }

    #[test]
    fn test_strategy_weights_sum_to_one() {
        for strategy in Strategy::ALL {
            let w = strategy.weights();
            let sum = w.urgency + w.importance + w.effort + w.dependencies;
            assert!((sum - 1.0).abs() < 1e-9, "{strategy} weights sum to {sum}");
        }
    }

    #[test]
    fn test_strategy_profiles_differ_as_advertised() {
        assert!(
            Strategy::DeadlineDriven.weights().urgency > Strategy::SmartBalance.weights().urgency
        );
        assert!(Strategy::FastestWins.weights().effort > Strategy::HighImpact.weights().effort);
    }

    #[test]
    fn test_strategy_resolution_and_fallback() {
        for strategy in Strategy::ALL {
            assert_eq!(Strategy::resolve(strategy.name()), strategy);
        }
        assert_eq!(Strategy::resolve("sorted_by_vibes"), Strategy::SmartBalance);
        assert_eq!(Strategy::default(), Strategy::SmartBalance);
    }

    #[test]
    fn test_unknown_strategy_reports_fallback() {
        let result = analyze(&sample_batch(), "does_not_exist");
        assert_eq!(result.strategy_used, "smart_balance");
    }

    #[test]
    fn test_normalization_defaults_with_warnings() {
        let input: TaskInput = serde_json::from_str(
            r#"{
                "title": "Sloppy",
                "due_date": "not-a-date",
                "estimated_hours": "lots",
                "importance": 12,
                "dependencies": "none"
            }"#,
        )
        .unwrap();
        let normalized = normalize_batch(&[input]);

        let task = &normalized.tasks[0];
        assert_eq!(task.id, 1);
        assert_eq!(task.estimated_hours, 1.0);
        assert_eq!(task.importance, 5);
        assert!(task.dependencies.is_empty());
        // Unparseable due date means no deadline, not a warning.
        assert_eq!(task.due_date, None);

        assert_eq!(
            normalized.warnings,
            vec![
                "Task 'Sloppy' assigned automatic ID 1".to_string(),
                "Task 'Sloppy' has invalid estimated hours, using default 1".to_string(),
                "Task 'Sloppy' has invalid importance, using default 5".to_string(),
                "Task 'Sloppy' has invalid dependencies, using empty list".to_string(),
            ]
        );
    }

    #[test]
    fn test_normalization_rejects_nonpositive_hours() {
        let input = TaskInput::new("Free lunch")
            .with_id(1)
            .with_hours(0.0)
            .with_importance(5)
            .with_dependencies(vec![]);
        let normalized = normalize_batch(&[input]);

        assert_eq!(normalized.tasks[0].estimated_hours, 1.0);
        assert_eq!(normalized.warnings.len(), 1);
    }

    #[test]
    fn test_normalization_idempotent_on_valid_tasks() {
        let first = normalize_batch(&sample_batch());
        assert!(first.warnings.is_empty());

        let round_trip: Vec<TaskInput> = first.tasks.iter().map(TaskInput::from).collect();
        let second = normalize_batch(&round_trip);

        assert!(second.warnings.is_empty());
        assert_eq!(first.tasks, second.tasks);
    }

    #[test]
    fn test_malformed_task_does_not_discard_batch() {
        let mut batch = sample_batch();
        batch.push(TaskInput::new("Half filled in"));
        let result = analyze(&batch, "smart_balance");

        assert!(result.errors.is_empty());
        assert_eq!(result.sorted_tasks.len(), 5);
        assert!(!result.warnings.is_empty());
    }

    #[test]
    fn test_end_to_end_smart_balance() {
        let analyzer = Analyzer::new(Strategy::SmartBalance).with_today(today());
        let result = analyzer.analyze(&sample_batch());

        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
        assert_eq!(result.strategy_used, "smart_balance");

        let ids: Vec<i64> = result.sorted_tasks.iter().map(|t| t.task.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 3]);

        let scores: Vec<f64> = result
            .sorted_tasks
            .iter()
            .map(|t| t.priority_score)
            .collect();
        let expected = [0.82, 0.65, 0.61, 0.48];
        for (score, expected) in scores.iter().zip(expected) {
            assert!(
                (score - expected).abs() < 1e-9,
                "expected {expected}, got {score}"
            );
        }
    }

    #[test]
    fn test_sort_is_nonincreasing_and_stable() {
        // Three indistinguishable tasks tie exactly; input order must hold.
        let batch = vec![
            TaskInput::new("First")
                .with_id(10)
                .with_hours(2.0)
                .with_importance(5)
                .with_dependencies(vec![]),
            TaskInput::new("Second")
                .with_id(20)
                .with_hours(2.0)
                .with_importance(5)
                .with_dependencies(vec![]),
            TaskInput::new("Third")
                .with_id(30)
                .with_hours(2.0)
                .with_importance(5)
                .with_dependencies(vec![]),
        ];
        let result = analyze(&batch, "smart_balance");

        let ids: Vec<i64> = result.sorted_tasks.iter().map(|t| t.task.id).collect();
        assert_eq!(ids, vec![10, 20, 30]);
        for pair in result.sorted_tasks.windows(2) {
            assert!(pair[0].priority_score >= pair[1].priority_score);
        }
    }

    #[test]
    fn test_explanations_match_thresholds() {
        let analyzer = Analyzer::new(Strategy::SmartBalance).with_today(today());
        let result = analyzer.analyze(&sample_batch());

        // Past due plus importance 10; effort and blocking stay quiet.
        assert_eq!(
            result.sorted_tasks[0].explanation,
            "This task is very urgent, high importance"
        );
        // No deadline, importance 5, one hour: the quick-win phrase fires.
        let quick = result
            .sorted_tasks
            .iter()
            .find(|t| t.task.id == 3)
            .unwrap();
        assert_eq!(
            quick.explanation,
            "This task is moderately important, quick win"
        );
    }

    #[test]
    fn test_explanation_falls_back_when_nothing_stands_out() {
        // Urgency 0.3, importance 0.4, effort 0.6, blocking 0.1: every
        // threshold misses.
        let batch = vec![TaskInput::new("Plain")
            .with_id(1)
            .with_hours(4.0)
            .with_importance(4)
            .with_dependencies(vec![])];
        let result = analyze(&batch, "smart_balance");

        assert_eq!(
            result.sorted_tasks[0].explanation,
            "This task has average priority across all factors."
        );
    }

    #[test]
    fn test_blocking_phrase_appears_for_bottleneck() {
        let batch = vec![
            TaskInput::new("Bottleneck")
                .with_id(1)
                .with_hours(2.0)
                .with_importance(5)
                .with_dependencies(vec![]),
            TaskInput::new("A").with_id(2).with_dependencies(vec![1]),
            TaskInput::new("B").with_id(3).with_dependencies(vec![1]),
        ];
        let result = analyze(&batch, "smart_balance");

        let bottleneck = result
            .sorted_tasks
            .iter()
            .find(|t| t.task.id == 1)
            .unwrap();
        assert_eq!(bottleneck.score_breakdown.dependencies, 0.7);
        assert!(bottleneck.explanation.contains("blocks other tasks"));
    }

    #[test]
    fn test_suggest_truncates_ranking() {
        let analyzer = Analyzer::new(Strategy::SmartBalance).with_today(today());
        let suggestions = analyzer.suggest(&sample_batch(), 2);

        assert_eq!(suggestions.sorted_tasks.len(), 2);
        assert_eq!(suggestions.sorted_tasks[0].task.id, 1);
        assert_eq!(suggestions.sorted_tasks[1].task.id, 2);

        // A limit beyond the batch size returns everything.
        let all = analyzer.suggest(&sample_batch(), 50);
        assert_eq!(all.sorted_tasks.len(), 4);
    }

    #[test]
    fn test_weight_override_is_injected() {
        let analyzer = Analyzer::new(Strategy::SmartBalance)
            .with_today(today())
            .with_weights(StrategyWeights {
                urgency: 0.0,
                importance: 1.0,
                effort: 0.0,
                dependencies: 0.0,
            });
        let result = analyzer.analyze(&sample_batch());

        // With importance-only weights, the score is the importance factor.
        for scored in &result.sorted_tasks {
            assert!(
                (scored.priority_score - scored.score_breakdown.importance).abs() < 1e-9
            );
        }
    }
}
