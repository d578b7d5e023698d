//! Max-heap ranking of what-if scenarios.
//!
//! The ranker is an array-backed binary heap keyed on `score`. Ties between
//! equal scores are resolved arbitrarily.

use serde::{Deserialize, Serialize};

use crate::state::StudentState;

/// A hypothetical habit adjustment together with its desirability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredScenario {
    /// Higher is better
    pub score: f64,
    pub description: String,
    pub state: StudentState,
}

impl ScoredScenario {
    pub fn new(score: f64, description: impl Into<String>, state: StudentState) -> Self {
        Self {
            score,
            description: description.into(),
            state,
        }
    }
}

/// Binary max-heap over [`ScoredScenario`].
#[derive(Debug, Clone, Default)]
pub struct ScenarioRanker {
    heap: Vec<ScoredScenario>,
}

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

fn left(i: usize) -> usize {
    2 * i + 1
}

fn right(i: usize) -> usize {
    2 * i + 2
}

impl ScenarioRanker {
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Add a scenario in O(log n).
    pub fn insert(&mut self, scenario: ScoredScenario) {
        self.heap.push(scenario);
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the highest-scoring scenario.
    pub fn extract_max(&mut self) -> Option<ScoredScenario> {
        if self.heap.is_empty() {
            return None;
        }
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let max = self.heap.pop();
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        max
    }

    /// Highest-scoring scenario without removing it.
    pub fn peek(&self) -> Option<&ScoredScenario> {
        self.heap.first()
    }

    /// Descending snapshot of every entry. The heap itself is untouched.
    pub fn get_all_sorted(&self) -> Vec<ScoredScenario> {
        let mut sorted = self.heap.clone();
        sorted.sort_by(|a, b| b.score.total_cmp(&a.score));
        sorted
    }

    /// The `k` best scenarios, best first.
    pub fn top_k(&self, k: usize) -> Vec<ScoredScenario> {
        let mut sorted = self.get_all_sorted();
        sorted.truncate(k);
        sorted
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 && self.heap[i].score > self.heap[parent(i)].score {
            self.heap.swap(i, parent(i));
            i = parent(i);
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let mut largest = i;
            let (l, r) = (left(i), right(i));

            if l < len && self.heap[l].score > self.heap[largest].score {
                largest = l;
            }
            if r < len && self.heap[r].score > self.heap[largest].score {
                largest = r;
            }
            if largest == i {
                return;
            }
            self.heap.swap(i, largest);
            i = largest;
        }
    }

    #[cfg(test)]
    fn satisfies_heap_order(&self) -> bool {
        (1..self.heap.len()).all(|i| self.heap[i].score <= self.heap[parent(i)].score)
    }
}

impl Extend<ScoredScenario> for ScenarioRanker {
    fn extend<I: IntoIterator<Item = ScoredScenario>>(&mut self, iter: I) {
        for scenario in iter {
            self.insert(scenario);
        }
    }
}

impl FromIterator<ScoredScenario> for ScenarioRanker {
    fn from_iter<I: IntoIterator<Item = ScoredScenario>>(iter: I) -> Self {
        let mut ranker = Self::new();
        ranker.extend(iter);
        ranker
    }
}
