//! Student habit snapshot used by every simulation engine.
//!
//! A [`StudentState`] is a plain value: engines copy it, adjust the copy and
//! re-clamp the bounded metrics. Nothing holds a reference to a state that
//! another component can mutate.

use serde::{Deserialize, Serialize};

use crate::life::{classify, LifeState};

/// Lower/upper bound for `stress_level` and `energy`.
pub const METRIC_MIN: i32 = 0;
pub const METRIC_MAX: i32 = 100;

/// Bounds for `gpa`.
pub const GPA_MIN: f64 = 0.0;
pub const GPA_MAX: f64 = 4.0;

/// Snapshot of a student's daily habits and wellbeing metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StudentState {
    /// Study hours per day
    pub study_hours: f64,
    /// Sleep hours per day
    pub sleep_hours: f64,
    /// Social hours per day
    pub social_hours: f64,
    /// Exercise hours per day
    pub exercise_hours: f64,
    /// Stress level (0-100)
    pub stress_level: i32,
    /// Energy level (0-100)
    pub energy: i32,
    /// Grade point average (0.0-4.0)
    pub gpa: f64,
    /// Simulated day, starting at 1
    pub day: u32,
}

impl StudentState {
    /// Create a day-one state with the given habits and neutral metrics.
    ///
    /// Metrics default to one hour of exercise, no stress, 80 energy and a
    /// 3.5 GPA; use the `with_*` helpers to override them.
    pub fn new(study_hours: f64, sleep_hours: f64, social_hours: f64) -> Self {
        Self {
            study_hours,
            sleep_hours,
            social_hours,
            exercise_hours: 1.0,
            stress_level: 0,
            energy: 80,
            gpa: 3.5,
            day: 1,
        }
    }

    pub fn with_stress(mut self, stress_level: i32) -> Self {
        self.stress_level = stress_level;
        self.clamped()
    }

    pub fn with_energy(mut self, energy: i32) -> Self {
        self.energy = energy;
        self.clamped()
    }

    pub fn with_gpa(mut self, gpa: f64) -> Self {
        self.gpa = gpa;
        self.clamped()
    }

    pub fn with_exercise(mut self, exercise_hours: f64) -> Self {
        self.exercise_hours = exercise_hours;
        self
    }

    /// Return a copy with stress, energy and GPA forced into their ranges.
    pub fn clamped(mut self) -> Self {
        self.stress_level = clamp_metric(self.stress_level);
        self.energy = clamp_metric(self.energy);
        self.gpa = self.gpa.clamp(GPA_MIN, GPA_MAX);
        self
    }

    /// Classify this snapshot into a [`LifeState`].
    pub fn life_state(&self) -> LifeState {
        classify(self.study_hours, self.sleep_hours, self.stress_level)
    }

    /// Terminal condition: the branch has burned out and must not be expanded.
    pub fn is_burned_out(&self) -> bool {
        self.stress_level > 90 || self.energy < 10
    }
}

/// Clamp a stress or energy reading to `0..=100`.
pub fn clamp_metric(value: i32) -> i32 {
    value.clamp(METRIC_MIN, METRIC_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_on_day_one() {
        let state = StudentState::new(4.0, 7.0, 2.0);
        assert_eq!(state.day, 1);
        assert_eq!(state.energy, 80);
        assert_eq!(state.stress_level, 0);
        assert_eq!(state.exercise_hours, 1.0);
    }

    #[test]
    fn with_helpers_clamp_metrics() {
        let state = StudentState::new(4.0, 7.0, 2.0)
            .with_stress(140)
            .with_energy(-20)
            .with_gpa(4.8);
        assert_eq!(state.stress_level, 100);
        assert_eq!(state.energy, 0);
        assert_eq!(state.gpa, 4.0);
    }

    #[test]
    fn burnout_threshold_is_exclusive() {
        let base = StudentState::new(4.0, 7.0, 2.0);
        assert!(!base.with_stress(90).is_burned_out());
        assert!(base.with_stress(91).is_burned_out());
        assert!(!base.with_energy(10).is_burned_out());
        assert!(base.with_energy(9).is_burned_out());
    }

    #[test]
    fn life_state_uses_own_fields() {
        let state = StudentState::new(8.0, 8.0, 1.0).with_stress(20);
        assert_eq!(state.life_state(), LifeState::Flow);
    }
}
