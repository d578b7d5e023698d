//! Bounded what-if decision tree.
//!
//! Starting from today's [`StudentState`], every node branches into three
//! habit adjustments for the next day (study, sleep, social). Expansion stops
//! at `max_depth`, and any branch that hits the burnout condition is closed
//! with a single terminal child so pathological paths stay short.
//!
//! Child order is fixed (study, sleep, social) and is part of the contract:
//! renderers and breadth-first listings depend on it.

use std::collections::VecDeque;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::state::{clamp_metric, StudentState, GPA_MAX, GPA_MIN};

/// Default number of simulated days.
pub const DEFAULT_MAX_DEPTH: u32 = 3;

/// Deepest tree the simulator will build. Node count grows as 3^depth.
pub const MAX_TREE_DEPTH: u32 = 8;

/// Label of the root node.
pub const ROOT_LABEL: &str = "Start";

/// Label of the terminal child appended to burned-out nodes.
pub const BURNOUT_LABEL: &str = "BURNOUT - STOP";

/// Habit adjustment applied when advancing one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Study,
    Sleep,
    Social,
}

impl Action {
    /// Expansion order of children.
    pub const ORDER: [Action; 3] = [Action::Study, Action::Sleep, Action::Social];

    /// Label stored on the child node.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Study => "Study +2h",
            Action::Sleep => "Sleep +2h",
            Action::Social => "Social +2h",
        }
    }

    /// Advance `current` by one day with this adjustment.
    pub fn apply(&self, current: &StudentState) -> StudentState {
        let mut next = StudentState {
            day: current.day + 1,
            ..*current
        };

        match self {
            Action::Study => {
                next.study_hours += 2.0;
                next.energy -= 15;
                next.stress_level += 10;
                next.gpa = (next.gpa + 0.05).min(GPA_MAX);
            }
            Action::Sleep => {
                next.sleep_hours += 2.0;
                next.energy += 20;
                next.stress_level -= 15;
            }
            Action::Social => {
                next.social_hours += 2.0;
                next.stress_level -= 20;
                next.energy -= 5;
                next.gpa = (next.gpa - 0.02).max(GPA_MIN);
            }
        }

        next.stress_level = clamp_metric(next.stress_level);
        next.energy = clamp_metric(next.energy);
        next
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One simulated day in the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub state: StudentState,
    pub action_taken: String,
    pub depth: u32,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    fn new(state: StudentState, action: impl Into<String>, depth: u32) -> Self {
        Self {
            state,
            action_taken: action.into(),
            depth,
            children: Vec::new(),
        }
    }

    /// Whether this is the terminal node closing a burned-out branch.
    pub fn is_burnout(&self) -> bool {
        self.action_taken == BURNOUT_LABEL
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Heuristic desirability of ending up in this node's state.
    pub fn outcome_score(&self) -> f64 {
        self.state.gpa * 20.0 + f64::from(self.state.energy) * 0.2
            - f64::from(self.state.stress_level) * 0.3
    }
}

/// A fully expanded decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    root: TreeNode,
    max_depth: u32,
}

impl DecisionTree {
    /// Build the tree depth-first from `initial`.
    pub fn build(initial: StudentState, max_depth: u32) -> Self {
        let mut root = TreeNode::new(initial, ROOT_LABEL, 0);
        expand(&mut root, max_depth);

        let tree = Self { root, max_depth };
        debug!(
            max_depth,
            nodes = tree.node_count(),
            "decision tree built"
        );
        tree
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Level-order listing, root first.
    pub fn traverse_breadth_first(&self) -> Vec<&TreeNode> {
        traverse_breadth_first(Some(&self.root))
    }

    pub fn node_count(&self) -> usize {
        count_nodes(&self.root)
    }

    /// Leaves in pre-order (left to right).
    pub fn leaves(&self) -> Vec<&TreeNode> {
        let mut leaves = Vec::new();
        collect_leaves(&self.root, &mut leaves);
        leaves
    }

    /// Leaf with the best [`TreeNode::outcome_score`], earliest on ties.
    ///
    /// Burnout terminals are skipped unless nothing else is left.
    pub fn best_leaf(&self) -> &TreeNode {
        let leaves = self.leaves();
        let candidates: Vec<&TreeNode> = leaves.iter().copied().filter(|n| !n.is_burnout()).collect();
        let pool = if candidates.is_empty() { leaves } else { candidates };

        pool.into_iter()
            .fold(None::<&TreeNode>, |best, node| match best {
                Some(b) if b.outcome_score() >= node.outcome_score() => Some(b),
                _ => Some(node),
            })
            .unwrap_or(&self.root)
    }
}

fn expand(node: &mut TreeNode, max_depth: u32) {
    if node.depth >= max_depth {
        return;
    }

    if node.state.is_burned_out() {
        node.children
            .push(TreeNode::new(node.state, BURNOUT_LABEL, node.depth + 1));
        return;
    }

    for action in Action::ORDER {
        let mut child = TreeNode::new(action.apply(&node.state), action.label(), node.depth + 1);
        expand(&mut child, max_depth);
        node.children.push(child);
    }
}

fn count_nodes(node: &TreeNode) -> usize {
    1 + node.children.iter().map(count_nodes).sum::<usize>()
}

fn collect_leaves<'a>(node: &'a TreeNode, out: &mut Vec<&'a TreeNode>) {
    if node.is_leaf() {
        out.push(node);
        return;
    }
    for child in &node.children {
        collect_leaves(child, out);
    }
}

/// Level-order enumeration using a FIFO queue. `None` yields nothing.
pub fn traverse_breadth_first(root: Option<&TreeNode>) -> Vec<&TreeNode> {
    let mut result = Vec::new();
    let Some(root) = root else {
        return result;
    };

    let mut queue = VecDeque::from([root]);
    while let Some(node) = queue.pop_front() {
        result.push(node);
        queue.extend(node.children.iter());
    }
    result
}
