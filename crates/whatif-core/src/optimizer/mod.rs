//! Spare-time schedule optimizer.
//!
//! Picks the subset of a task pool that maximizes productivity value within
//! the hours left over after study, sleep and social time.

mod knapsack;
mod pool;

pub use knapsack::{ScheduleOptimizer, ScheduleResult, MAX_SCHEDULE_HOURS};
pub use pool::{Task, TaskPool};
