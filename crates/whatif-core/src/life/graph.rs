use std::collections::{HashMap, HashSet, VecDeque};

use super::LifeState;

/// Directed graph of allowed life-state transitions.
///
/// Built once with the canonical edge set; there is no way to add edges after
/// construction. Outgoing edges keep their insertion order.
#[derive(Debug, Clone)]
pub struct TransitionGraph {
    adjacency: HashMap<LifeState, Vec<LifeState>>,
}

impl Default for TransitionGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl TransitionGraph {
    /// Create the graph with the canonical transitions.
    pub fn new() -> Self {
        use LifeState::*;

        let mut graph = Self {
            adjacency: LifeState::ALL.iter().map(|s| (*s, Vec::new())).collect(),
        };

        graph.add_edge(Fresh, Balanced);
        graph.add_edge(Fresh, Tired);

        graph.add_edge(Balanced, Flow);
        graph.add_edge(Balanced, Tired);
        graph.add_edge(Balanced, Stressed);

        graph.add_edge(Tired, Fresh);
        graph.add_edge(Tired, Stressed);
        graph.add_edge(Tired, Burnout);

        graph.add_edge(Stressed, Tired);
        graph.add_edge(Stressed, Burnout);

        graph.add_edge(Flow, Tired);
        graph.add_edge(Flow, Balanced);

        graph.add_edge(Burnout, Fresh);

        graph
    }

    fn add_edge(&mut self, from: LifeState, to: LifeState) {
        self.adjacency.entry(from).or_default().push(to);
    }

    /// Outgoing transitions for `state`, in configured order.
    pub fn transitions(&self, state: LifeState) -> &[LifeState] {
        self.adjacency
            .get(&state)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `to` directly follows `from`.
    pub fn can_transition(&self, from: LifeState, to: LifeState) -> bool {
        self.transitions(from).contains(&to)
    }

    /// All edges, grouped by source in [`LifeState::ALL`] order.
    pub fn edges(&self) -> Vec<(LifeState, LifeState)> {
        LifeState::ALL
            .iter()
            .flat_map(|from| self.transitions(*from).iter().map(move |to| (*from, *to)))
            .collect()
    }

    /// States reachable from `start` in breadth-first order.
    ///
    /// `start` only appears if some cycle leads back to it.
    pub fn reachable_from(&self, start: LifeState) -> Vec<LifeState> {
        let mut seen = HashSet::new();
        let mut order = Vec::new();
        let mut queue: VecDeque<LifeState> = self.transitions(start).iter().copied().collect();

        while let Some(state) = queue.pop_front() {
            if !seen.insert(state) {
                continue;
            }
            order.push(state);
            queue.extend(self.transitions(state).iter().copied());
        }

        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LifeState::*;

    #[test]
    fn canonical_edges_in_order() {
        let graph = TransitionGraph::new();
        assert_eq!(graph.transitions(Fresh), &[Balanced, Tired]);
        assert_eq!(graph.transitions(Balanced), &[Flow, Tired, Stressed]);
        assert_eq!(graph.transitions(Tired), &[Fresh, Stressed, Burnout]);
        assert_eq!(graph.transitions(Stressed), &[Tired, Burnout]);
        assert_eq!(graph.transitions(Flow), &[Tired, Balanced]);
        assert_eq!(graph.transitions(Burnout), &[Fresh]);
    }

    #[test]
    fn edge_count_matches_canonical_set() {
        assert_eq!(TransitionGraph::new().edges().len(), 13);
    }

    #[test]
    fn can_transition_is_directed() {
        let graph = TransitionGraph::new();
        assert!(graph.can_transition(Burnout, Fresh));
        assert!(!graph.can_transition(Fresh, Burnout));
    }

    #[test]
    fn every_state_reaches_every_state() {
        let graph = TransitionGraph::new();
        for state in LifeState::ALL {
            let mut reachable = graph.reachable_from(state);
            reachable.sort();
            let mut all = LifeState::ALL.to_vec();
            all.sort();
            assert_eq!(reachable, all, "from {state}");
        }
    }

    #[test]
    fn reachable_is_breadth_first() {
        let graph = TransitionGraph::new();
        let order = graph.reachable_from(Burnout);
        assert_eq!(order[0], Fresh);
        assert_eq!(&order[1..3], &[Balanced, Tired]);
    }
}
