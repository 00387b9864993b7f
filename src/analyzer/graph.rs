use crate::analyzer::normalize;
use crate::analyzer::types::{AnalysisError, TaskId, TaskInput};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Dependency graph over the task ids present in one batch.
///
/// Built from raw, pre-normalization input so that structural validation
/// happens before any field defaulting. Dependency ids that do not exist in
/// the batch are dropped here; they are ignored everywhere, not errors.
pub struct DependencyGraph {
    adjacency: HashMap<TaskId, Vec<TaskId>>,
    /// Ids in input order, for deterministic traversal
    order: Vec<TaskId>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnStack,
    Done,
}

impl DependencyGraph {
    pub fn from_inputs(inputs: &[TaskInput]) -> Self {
        let order: Vec<TaskId> = inputs
            .iter()
            .enumerate()
            .map(|(index, input)| normalize::effective_id(input, index))
            .collect();
        let present: HashSet<TaskId> = order.iter().copied().collect();

        let mut adjacency = HashMap::with_capacity(inputs.len());
        for (index, input) in inputs.iter().enumerate() {
            let dependencies = normalize::raw_dependencies(input)
                .into_iter()
                .filter(|dep| present.contains(dep))
                .collect();
            adjacency.insert(normalize::effective_id(input, index), dependencies);
        }

        Self { adjacency, order }
    }

    /// Detect cycles with an iterative three-color depth-first traversal.
    ///
    /// Returns one error per back edge found, with the cycle path
    /// reconstructed into the message. An empty result means the graph is a
    /// DAG; anything else is batch-fatal for the caller. All visitation
    /// state is local to this call.
    pub fn find_cycles(&self) -> Vec<AnalysisError> {
        let mut marks: HashMap<TaskId, Mark> = self
            .order
            .iter()
            .map(|&id| (id, Mark::Unvisited))
            .collect();
        let mut errors = Vec::new();

        for &root in &self.order {
            if marks[&root] != Mark::Unvisited {
                continue;
            }

            // Explicit stack of (node, next-neighbor cursor); `path` mirrors
            // the chain of on-stack nodes for message reconstruction.
            let mut stack: Vec<(TaskId, usize)> = vec![(root, 0)];
            let mut path: Vec<TaskId> = vec![root];
            marks.insert(root, Mark::OnStack);

            while let Some(frame) = stack.last_mut() {
                let node = frame.0;
                let neighbors = &self.adjacency[&node];

                if frame.1 < neighbors.len() {
                    let next = neighbors[frame.1];
                    frame.1 += 1;
                    match marks[&next] {
                        Mark::Unvisited => {
                            marks.insert(next, Mark::OnStack);
                            path.push(next);
                            stack.push((next, 0));
                        }
                        Mark::OnStack => errors.push(cycle_error(&path, next)),
                        Mark::Done => {}
                    }
                } else {
                    marks.insert(node, Mark::Done);
                    path.pop();
                    stack.pop();
                }
            }
        }

        if !errors.is_empty() {
            debug!(cycles = errors.len(), "dependency graph is not acyclic");
        }
        errors
    }
}

/// Build the `a -> b -> a` description for an edge that re-entered a node
/// currently on the traversal stack
fn cycle_error(path: &[TaskId], reentry: TaskId) -> AnalysisError {
    let start = path.iter().position(|&id| id == reentry).unwrap_or(0);
    let mut chain: Vec<String> = path[start..].iter().map(TaskId::to_string).collect();
    chain.push(reentry.to_string());
    AnalysisError::Cycle {
        path: chain.join(" -> "),
    }
}
