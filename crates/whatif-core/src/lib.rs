//! # What-If Core Library
//!
//! This library provides the reasoning engines behind the What-If simulator:
//! given a student's daily study, sleep and social hours it classifies their
//! current regime, projects a few days of habit adjustments forward, ranks
//! alternative habits, and picks the most productive use of spare hours.
//! The CLI binary and any GUI are thin layers over the same API.
//!
//! ## Architecture
//!
//! - **Life states**: a priority-ordered classifier plus a static transition graph
//! - **Decision tree**: bounded depth-first expansion with burnout pruning
//! - **Ranking**: an array-backed max-heap of scored scenarios
//! - **Optimizer**: 0/1 knapsack over task hour costs with backtracking
//! - **Cache**: memoized trees keyed by canonical parameter JSON
//!
//! ## Key Components
//!
//! - [`Simulator`]: Runs every engine for one set of habits
//! - [`DecisionTree`]: What-if tree of future days
//! - [`ScenarioRanker`]: Top-K scenario selection
//! - [`ScheduleOptimizer`]: Spare-time task selection
//! - [`Config`]: Application configuration management

pub mod cache;
pub mod error;
pub mod life;
pub mod optimizer;
pub mod ranking;
pub mod simulation;
pub mod state;
pub mod storage;
pub mod tree;

pub use cache::SimulationCache;
pub use error::{ConfigError, CoreError, ValidationError};
pub use life::{classify, LifeState, TransitionGraph};
pub use optimizer::{ScheduleOptimizer, ScheduleResult, Task, TaskPool, MAX_SCHEDULE_HOURS};
pub use ranking::{ScenarioRanker, ScoredScenario};
pub use simulation::{score_variations, HabitInput, SimulationReport, SimulationSettings, Simulator};
pub use state::StudentState;
pub use storage::Config;
pub use tree::{traverse_breadth_first, Action, DecisionTree, TreeNode, MAX_TREE_DEPTH};
