//! 0/1 knapsack over hour costs.
//!
//! Time O(n * capacity), space O(n * capacity). The full table is kept so the
//! chosen subset can be recovered by backtracking. Values are summed as `u64`
//! so a pool of `u32` values cannot overflow.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Task;
use crate::error::ValidationError;

/// Largest capacity accepted from free-form hour input.
pub const MAX_SCHEDULE_HOURS: u32 = 24;

/// Outcome of one optimizer run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub max_value: u64,
    /// Selected tasks, last-considered first.
    pub selected_tasks: Vec<Task>,
}

impl ScheduleResult {
    /// Hours consumed by the selection.
    pub fn total_cost(&self) -> u64 {
        self.selected_tasks.iter().map(|t| u64::from(t.cost)).sum()
    }

    /// Productivity points of the selection.
    pub fn total_value(&self) -> u64 {
        self.selected_tasks.iter().map(|t| u64::from(t.value)).sum()
    }
}

/// Stateless 0/1 knapsack solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleOptimizer;

impl ScheduleOptimizer {
    pub fn new() -> Self {
        Self
    }

    /// Whole hours usable as a capacity, fractions floored.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] for negative, non-finite or
    /// more-than-a-day inputs.
    pub fn capacity_from_hours(hours: f64) -> Result<u32, ValidationError> {
        let max = f64::from(MAX_SCHEDULE_HOURS);
        if !hours.is_finite() || !(0.0..=max).contains(&hours) {
            return Err(ValidationError::OutOfRange {
                field: "hours".into(),
                value: if hours.is_finite() { hours as i64 } else { i64::MAX },
                min: 0,
                max: i64::from(MAX_SCHEDULE_HOURS),
            });
        }
        Ok(hours.floor() as u32)
    }

    /// Choose the most valuable subset of `tasks` fitting in `capacity` hours.
    ///
    /// Each task is either taken whole or skipped. An empty pool or zero
    /// capacity gives zero value and no tasks.
    pub fn solve(&self, tasks: &[Task], capacity: u32) -> ScheduleResult {
        let n = tasks.len();
        let cap = capacity as usize;

        // dp[i][w]: best value using the first i tasks within w hours
        let mut dp = vec![vec![0u64; cap + 1]; n + 1];

        for i in 1..=n {
            let cost = tasks[i - 1].cost as usize;
            let value = u64::from(tasks[i - 1].value);
            for w in 0..=cap {
                dp[i][w] = if cost > w {
                    dp[i - 1][w]
                } else {
                    dp[i - 1][w].max(value + dp[i - 1][w - cost])
                };
            }
        }

        let mut selected_tasks = Vec::new();
        let mut w = cap;
        for i in (1..=n).rev() {
            if dp[i][w] != dp[i - 1][w] {
                selected_tasks.push(tasks[i - 1].clone());
                w -= tasks[i - 1].cost as usize;
            }
        }

        let max_value = dp[n][cap];
        debug!(
            tasks = n,
            capacity,
            max_value,
            selected = selected_tasks.len(),
            "knapsack solved"
        );

        ScheduleResult {
            max_value,
            selected_tasks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, cost: u32, value: u32) -> Task {
        Task::new(id, format!("task {id}"), cost, value)
    }

    fn ids(result: &ScheduleResult) -> Vec<&str> {
        result.selected_tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn tie_resolves_by_table_not_intuition() {
        let tasks = vec![task("1", 3, 15), task("2", 2, 10), task("3", 5, 25)];
        let result = ScheduleOptimizer::new().solve(&tasks, 5);
        assert_eq!(result.max_value, 25);
        // dp[3][5] == dp[2][5], so task 3 is skipped during backtracking
        assert_eq!(ids(&result), vec!["2", "1"]);
        assert_eq!(result.total_cost(), 5);
    }

    #[test]
    fn zero_capacity_selects_nothing() {
        let tasks = vec![task("1", 3, 15), task("2", 2, 10)];
        let result = ScheduleOptimizer::new().solve(&tasks, 0);
        assert_eq!(result.max_value, 0);
        assert!(result.selected_tasks.is_empty());
    }

    #[test]
    fn empty_pool_selects_nothing() {
        let result = ScheduleOptimizer::new().solve(&[], 12);
        assert_eq!(result.max_value, 0);
        assert!(result.selected_tasks.is_empty());
    }

    #[test]
    fn never_repeats_a_task() {
        let tasks = vec![task("cheap", 1, 10)];
        let result = ScheduleOptimizer::new().solve(&tasks, 8);
        assert_eq!(result.max_value, 10);
        assert_eq!(result.selected_tasks.len(), 1);
    }

    #[test]
    fn oversized_tasks_are_skipped() {
        let tasks = vec![task("big", 9, 100), task("small", 2, 4)];
        let result = ScheduleOptimizer::new().solve(&tasks, 5);
        assert_eq!(result.max_value, 4);
        assert_eq!(ids(&result), vec!["small"]);
    }

    #[test]
    fn stock_pool_with_ten_hours() {
        let pool = crate::optimizer::TaskPool::default_pool();
        let result = ScheduleOptimizer::new().solve(pool.tasks(), 10);
        // IS Assignment (5/25) + Review DSA Notes (3/15) + Self Care (1/6) + Power Nap (1/5)
        assert_eq!(result.max_value, 51);
        assert!(result.total_cost() <= 10);
        assert_eq!(result.total_value(), result.max_value);
    }

    #[test]
    fn large_values_do_not_overflow() {
        let big = u32::MAX / 2 + 1;
        let tasks = vec![task("a", 1, big), task("b", 1, big), task("c", 1, u32::MAX)];
        let result = ScheduleOptimizer::new().solve(&tasks, 2);
        assert_eq!(result.max_value, u64::from(u32::MAX) + u64::from(big));
        // dp[2][1] == dp[1][1], so "a" is kept over "b"
        assert_eq!(ids(&result), vec!["c", "a"]);
        assert_eq!(result.total_value(), result.max_value);
        assert_eq!(result.total_cost(), 2);
    }

    #[test]
    fn capacity_from_hours_floors_and_bounds() {
        assert_eq!(ScheduleOptimizer::capacity_from_hours(6.7), Ok(6));
        assert_eq!(ScheduleOptimizer::capacity_from_hours(0.0), Ok(0));
        assert_eq!(ScheduleOptimizer::capacity_from_hours(24.0), Ok(24));
        assert!(ScheduleOptimizer::capacity_from_hours(24.5).is_err());
        assert!(ScheduleOptimizer::capacity_from_hours(1e12).is_err());
        assert!(ScheduleOptimizer::capacity_from_hours(-1.0).is_err());
        assert!(ScheduleOptimizer::capacity_from_hours(f64::NAN).is_err());
    }
}
