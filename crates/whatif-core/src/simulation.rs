//! Simulation orchestrator.
//!
//! Feeds one set of daily habits through every engine:
//! - Classifies the current life state and looks up where it can lead
//! - Builds (or reuses from cache) the what-if decision tree
//! - Scores a handful of habit variations and keeps the best few
//! - Optimizes the task pool over whatever hours are left in the day

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cache::SimulationCache;
use crate::error::{Result, ValidationError};
use crate::life::{classify, LifeState, TransitionGraph};
use crate::optimizer::{ScheduleOptimizer, ScheduleResult, Task};
use crate::ranking::{ScenarioRanker, ScoredScenario};
use crate::state::StudentState;
use crate::tree::{DecisionTree, DEFAULT_MAX_DEPTH, MAX_TREE_DEPTH};

/// Documented range for study hours.
pub const STUDY_RANGE: (u32, u32) = (0, 14);
/// Documented range for sleep hours.
pub const SLEEP_RANGE: (u32, u32) = (0, 12);
/// Documented range for social hours.
pub const SOCIAL_RANGE: (u32, u32) = (0, 10);

const HOURS_PER_DAY: i64 = 24;

/// Daily habits as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitInput {
    pub study: u32,
    pub sleep: u32,
    pub social: u32,
}

impl HabitInput {
    /// Build an input, clamping each habit into its documented range.
    pub fn clamped(study: u32, sleep: u32, social: u32) -> Self {
        Self {
            study: study.clamp(STUDY_RANGE.0, STUDY_RANGE.1),
            sleep: sleep.clamp(SLEEP_RANGE.0, SLEEP_RANGE.1),
            social: social.clamp(SOCIAL_RANGE.0, SOCIAL_RANGE.1),
        }
    }

    /// Strict check of the documented ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] for the first habit outside
    /// its range.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let checks = [
            ("study", self.study, STUDY_RANGE),
            ("sleep", self.sleep, SLEEP_RANGE),
            ("social", self.social, SOCIAL_RANGE),
        ];
        for (field, value, (min, max)) in checks {
            if value < min || value > max {
                return Err(ValidationError::OutOfRange {
                    field: field.into(),
                    value: i64::from(value),
                    min: i64::from(min),
                    max: i64::from(max),
                });
            }
        }
        Ok(())
    }

    /// Stress implied by the habits: heavy study raises it, sleep and social
    /// time bring it down.
    pub fn baseline_stress(&self) -> i32 {
        let stress = self.study as i32 * 5 - self.sleep as i32 * 3 - self.social as i32 * 2;
        stress.max(0)
    }

    /// Hours left after habits and `reserved` hours (meals, commute).
    pub fn available_hours(&self, reserved: u32) -> u32 {
        let used = i64::from(self.study) + i64::from(self.sleep) + i64::from(self.social);
        (HOURS_PER_DAY - used - i64::from(reserved)).max(0) as u32
    }
}

/// Tunables for a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSettings {
    #[serde(default = "default_tree_depth")]
    pub tree_depth: u32,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    #[serde(default = "default_baseline_gpa")]
    pub baseline_gpa: f64,
    #[serde(default = "default_baseline_energy")]
    pub baseline_energy: i32,
    #[serde(default = "default_baseline_exercise")]
    pub baseline_exercise: f64,
    /// Hours of the day that are never free (meals, commute)
    #[serde(default = "default_reserved_hours")]
    pub reserved_hours: u32,
}

fn default_tree_depth() -> u32 {
    DEFAULT_MAX_DEPTH
}
fn default_top_k() -> usize {
    3
}
fn default_baseline_gpa() -> f64 {
    3.5
}
fn default_baseline_energy() -> i32 {
    80
}
fn default_baseline_exercise() -> f64 {
    1.0
}
fn default_reserved_hours() -> u32 {
    2
}

impl SimulationSettings {
    /// Check the tunables that bound the amount of work per run.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::OutOfRange`] when `tree_depth` exceeds
    /// [`MAX_TREE_DEPTH`].
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.tree_depth > MAX_TREE_DEPTH {
            return Err(ValidationError::OutOfRange {
                field: "tree_depth".into(),
                value: i64::from(self.tree_depth),
                min: 0,
                max: i64::from(MAX_TREE_DEPTH),
            });
        }
        Ok(())
    }
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            tree_depth: default_tree_depth(),
            top_k: default_top_k(),
            baseline_gpa: default_baseline_gpa(),
            baseline_energy: default_baseline_energy(),
            baseline_exercise: default_baseline_exercise(),
            reserved_hours: default_reserved_hours(),
        }
    }
}

/// Everything one run produces, ready for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    pub input: HabitInput,
    pub base_state: StudentState,
    pub life_state: LifeState,
    pub transitions: Vec<LifeState>,
    pub tree: DecisionTree,
    pub cache_hit: bool,
    pub top_scenarios: Vec<ScoredScenario>,
    pub available_hours: u32,
    pub schedule: ScheduleResult,
    pub generated_at: DateTime<Utc>,
}

/// Parameters identifying a tree in the cache.
#[derive(Serialize)]
struct TreeKey<'a> {
    state: &'a StudentState,
    max_depth: u32,
}

/// Composes the engines for repeated runs.
///
/// The cache survives between runs; everything else is rebuilt per call.
pub struct Simulator {
    settings: SimulationSettings,
    graph: TransitionGraph,
    optimizer: ScheduleOptimizer,
    cache: SimulationCache<DecisionTree>,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}

impl Simulator {
    pub fn new() -> Self {
        Self::with_settings(SimulationSettings::default())
    }

    pub fn with_settings(settings: SimulationSettings) -> Self {
        Self {
            settings,
            graph: TransitionGraph::new(),
            optimizer: ScheduleOptimizer::new(),
            cache: SimulationCache::new(),
        }
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    /// Starting state for `input` under the current settings.
    pub fn base_state(&self, input: &HabitInput) -> StudentState {
        StudentState::new(
            f64::from(input.study),
            f64::from(input.sleep),
            f64::from(input.social),
        )
        .with_exercise(self.settings.baseline_exercise)
        .with_gpa(self.settings.baseline_gpa)
        .with_energy(self.settings.baseline_energy)
        .with_stress(input.baseline_stress())
    }

    /// Decision tree for `state`, built at most once per distinct state.
    ///
    /// Returns the tree and whether it came from the cache.
    ///
    /// # Errors
    ///
    /// Fails if the configured depth is out of range or the cache key cannot
    /// be generated.
    pub fn decision_tree(&mut self, state: &StudentState) -> Result<(DecisionTree, bool)> {
        self.settings.validate()?;
        let max_depth = self.settings.tree_depth;
        let key = SimulationCache::<DecisionTree>::generate_key(&TreeKey { state, max_depth })?;

        if let Some(tree) = self.cache.get(&key) {
            debug!(%key, "simulation cache hit");
            return Ok((tree.clone(), true));
        }

        debug!(%key, "simulation cache miss");
        let tree = DecisionTree::build(*state, max_depth);
        self.cache.set(key, tree.clone());
        Ok((tree, false))
    }

    /// Run every engine for one set of habits.
    ///
    /// # Errors
    ///
    /// Fails if the settings are out of range or the cache key cannot be
    /// generated.
    pub fn run(&mut self, input: HabitInput, pool: &[Task]) -> Result<SimulationReport> {
        let base_state = self.base_state(&input);
        let life_state = classify(
            base_state.study_hours,
            base_state.sleep_hours,
            base_state.stress_level,
        );
        let transitions = self.graph.transitions(life_state).to_vec();

        let (tree, cache_hit) = self.decision_tree(&base_state)?;

        let ranker: ScenarioRanker = score_variations(&base_state).into_iter().collect();
        let top_scenarios = ranker.top_k(self.settings.top_k);

        let available_hours = input.available_hours(self.settings.reserved_hours);
        let schedule = self.optimizer.solve(pool, available_hours);

        info!(
            study = input.study,
            sleep = input.sleep,
            social = input.social,
            %life_state,
            nodes = tree.node_count(),
            cache_hit,
            available_hours,
            max_value = schedule.max_value,
            "simulation complete"
        );

        Ok(SimulationReport {
            input,
            base_state,
            life_state,
            transitions,
            tree,
            cache_hit,
            top_scenarios,
            available_hours,
            schedule,
            generated_at: Utc::now(),
        })
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

/// Score the stock habit variations around `base`.
///
/// Each variation replaces study, sleep, GPA and stress on a copy of `base`:
/// stress is `5 * study - 3 * sleep` (floored at zero), GPA is
/// `3.0 + 0.1 * study` (capped at 4.0), and the score rewards GPA and sleep
/// while penalizing stress.
pub fn score_variations(base: &StudentState) -> Vec<ScoredScenario> {
    let study = base.study_hours;
    let sleep = base.sleep_hours;
    let variations = [
        ("Focus Study", study + 2.0, sleep),
        ("More Sleep", study, sleep + 2.0),
        ("More Social", (study - 1.0).max(0.0), sleep),
        ("Balanced", study, sleep),
    ];

    variations
        .into_iter()
        .map(|(name, v_study, v_sleep)| {
            let v_stress = (v_study * 5.0 - v_sleep * 3.0).max(0.0);
            let v_gpa = (3.0 + v_study * 0.1).min(4.0);
            let score = v_gpa * 20.0 + v_sleep * 5.0 - v_stress * 0.5;

            let state = StudentState {
                study_hours: v_study,
                sleep_hours: v_sleep,
                ..*base
            }
            .with_gpa(v_gpa)
            .with_stress(v_stress.round() as i32);

            ScoredScenario::new(score, name, state)
        })
        .collect()
}
