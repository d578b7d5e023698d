use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Discrete classification of a student's wellbeing regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LifeState {
    #[serde(rename = "Fresh")]
    Fresh,
    #[serde(rename = "Tired")]
    Tired,
    #[serde(rename = "Stressed")]
    Stressed,
    #[serde(rename = "Burnout")]
    Burnout,
    #[serde(rename = "Flow State")]
    Flow,
    #[serde(rename = "Balanced")]
    Balanced,
}

impl LifeState {
    /// Every state, in declaration order.
    pub const ALL: [LifeState; 6] = [
        LifeState::Fresh,
        LifeState::Tired,
        LifeState::Stressed,
        LifeState::Burnout,
        LifeState::Flow,
        LifeState::Balanced,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            LifeState::Fresh => "Fresh",
            LifeState::Tired => "Tired",
            LifeState::Stressed => "Stressed",
            LifeState::Burnout => "Burnout",
            LifeState::Flow => "Flow State",
            LifeState::Balanced => "Balanced",
        }
    }
}

impl fmt::Display for LifeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LifeState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fresh" => Ok(LifeState::Fresh),
            "tired" => Ok(LifeState::Tired),
            "stressed" => Ok(LifeState::Stressed),
            "burnout" => Ok(LifeState::Burnout),
            "flow" | "flow state" | "flow-state" => Ok(LifeState::Flow),
            "balanced" => Ok(LifeState::Balanced),
            other => Err(format!("unknown life state: {other}")),
        }
    }
}

/// Classify habit metrics into a [`LifeState`].
///
/// Rules are checked in priority order and the first match wins:
/// stress above 80 is burnout, above 60 is stressed, under five hours of sleep
/// is tired, long study with low stress and good sleep is flow, good sleep with
/// some study is balanced, and anything else is fresh.
pub fn classify(study_hours: f64, sleep_hours: f64, stress: i32) -> LifeState {
    if stress > 80 {
        return LifeState::Burnout;
    }
    if stress > 60 {
        return LifeState::Stressed;
    }
    if sleep_hours < 5.0 {
        return LifeState::Tired;
    }
    if study_hours > 6.0 && stress < 40 && sleep_hours > 7.0 {
        return LifeState::Flow;
    }
    if sleep_hours > 7.0 && study_hours > 2.0 {
        return LifeState::Balanced;
    }
    LifeState::Fresh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stress_dominates_everything() {
        assert_eq!(classify(10.0, 9.0, 81), LifeState::Burnout);
        assert_eq!(classify(10.0, 9.0, 80), LifeState::Stressed);
        assert_eq!(classify(10.0, 9.0, 61), LifeState::Stressed);
    }

    #[test]
    fn short_sleep_is_tired_before_flow() {
        assert_eq!(classify(8.0, 4.0, 10), LifeState::Tired);
        assert_eq!(classify(8.0, 5.0, 10), LifeState::Fresh);
    }

    #[test]
    fn flow_requires_all_three_conditions() {
        assert_eq!(classify(7.0, 8.0, 39), LifeState::Flow);
        // stress too high for flow, falls through to balanced
        assert_eq!(classify(7.0, 8.0, 40), LifeState::Balanced);
        // study exactly 6 is not enough
        assert_eq!(classify(6.0, 8.0, 10), LifeState::Balanced);
        // sleep exactly 7 is not enough for flow or balanced
        assert_eq!(classify(7.0, 7.0, 10), LifeState::Fresh);
    }

    #[test]
    fn balanced_and_fresh() {
        assert_eq!(classify(3.0, 8.0, 50), LifeState::Balanced);
        assert_eq!(classify(2.0, 8.0, 50), LifeState::Fresh);
        assert_eq!(classify(0.0, 6.0, 0), LifeState::Fresh);
    }

    #[test]
    fn labels_and_serde_names_match() {
        assert_eq!(LifeState::Flow.to_string(), "Flow State");
        assert_eq!(
            serde_json::to_string(&LifeState::Flow).unwrap(),
            "\"Flow State\""
        );
        for state in LifeState::ALL {
            let json = serde_json::to_string(&state).unwrap();
            assert_eq!(json, format!("\"{}\"", state.label()));
        }
    }

    #[test]
    fn parses_labels_case_insensitively() {
        assert_eq!("flow state".parse::<LifeState>(), Ok(LifeState::Flow));
        assert_eq!("BURNOUT".parse::<LifeState>(), Ok(LifeState::Burnout));
        assert!("sleepy".parse::<LifeState>().is_err());
    }
}
