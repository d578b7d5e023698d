//! Integration tests for a full simulation cycle.

use whatif_core::{
    Config, HabitInput, LifeState, ScenarioRanker, SimulationCache, SimulationSettings, Simulator,
    TaskPool,
};

#[test]
fn test_full_simulation_cycle() {
    let mut sim = Simulator::new();
    let pool = TaskPool::default_pool();

    // Heavy study with little sleep
    let report = sim.run(HabitInput::clamped(12, 4, 0), pool.tasks()).unwrap();

    // stress = 60 - 12 = 48, sleep < 5
    assert_eq!(report.base_state.stress_level, 48);
    assert_eq!(report.life_state, LifeState::Tired);
    assert_eq!(
        report.transitions,
        vec![LifeState::Fresh, LifeState::Stressed, LifeState::Burnout]
    );

    // 24 - 16 - 2 reserved
    assert_eq!(report.available_hours, 6);
    assert!(report.schedule.total_cost() <= 6);
    assert_eq!(report.top_scenarios.len(), 3);

    let scores: Vec<f64> = report.top_scenarios.iter().map(|s| s.score).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_heavy_study_hits_depth_bound_before_pruning() {
    let mut sim = Simulator::new();
    // stress = 70 - 0 - 0, then clamps nothing; > 60 is stressed
    let report = sim.run(HabitInput::clamped(14, 0, 0), &[]).unwrap();
    assert_eq!(report.base_state.stress_level, 70);
    assert_eq!(report.life_state, LifeState::Stressed);
    assert_eq!(report.schedule.max_value, 0);

    // Two study days push stress past 90 and the branch closes.
    let root = report.tree.root();
    let study_study = &root.children[0].children[0];
    assert_eq!(study_study.state.stress_level, 90);
    let third = &study_study.children[0];
    assert_eq!(third.state.stress_level, 100);
    assert!(third.children.is_empty(), "depth bound reached");
}

#[test]
fn test_burnout_branch_is_pruned_below_depth_bound() {
    let settings = SimulationSettings {
        tree_depth: 4,
        ..SimulationSettings::default()
    };
    let mut sim = Simulator::with_settings(settings);
    let report = sim.run(HabitInput::clamped(14, 0, 0), &[]).unwrap();

    // stress 70 -> 80 -> 90 -> 100 after three study days, one day short of the bound
    let root = report.tree.root();
    let burned = &root.children[0].children[0].children[0];
    assert_eq!(burned.depth, 3);
    assert_eq!(burned.state.stress_level, 100);
    assert!(burned.state.is_burned_out());

    assert_eq!(burned.children.len(), 1);
    let stop = &burned.children[0];
    assert!(stop.is_burnout());
    assert!(stop.is_leaf());
    assert_eq!(stop.depth, 4);
    assert_eq!(stop.state, burned.state);

    // a branch that stays under 90 stress keeps expanding to the bound
    let rested = &root.children[1].children[1].children[1];
    assert_eq!(rested.children.len(), 3);
}

#[test]
fn test_cache_is_shared_across_runs_with_same_state() {
    let mut sim = Simulator::new();
    let input = HabitInput::clamped(5, 8, 2);

    let first = sim.run(input, &[]).unwrap();
    let second = sim.run(input, TaskPool::default_pool().tasks()).unwrap();

    assert!(!first.cache_hit);
    assert!(second.cache_hit, "task pool does not affect the tree key");
    assert_eq!(first.tree.node_count(), second.tree.node_count());
}

#[test]
fn test_config_drives_simulator() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.set("simulation.tree_depth", "2").unwrap();
    config.set("simulation.top_k", "1").unwrap();
    config.set("simulation.reserved_hours", "0").unwrap();
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    let mut sim = Simulator::with_settings(loaded.settings());
    let report = sim
        .run(HabitInput::clamped(4, 7, 2), loaded.task_pool().tasks())
        .unwrap();

    assert_eq!(report.tree.max_depth(), 2);
    assert_eq!(report.tree.node_count(), 13);
    assert_eq!(report.top_scenarios.len(), 1);
    assert_eq!(report.top_scenarios[0].description, "More Sleep");
    assert_eq!(report.available_hours, 11);
}

#[test]
fn test_report_serializes_for_display() {
    let mut sim = Simulator::new();
    let report = sim.run(HabitInput::clamped(8, 8, 1), &[]).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["life_state"], "Flow State");
    assert_eq!(json["tree"]["root"]["action_taken"], "Start");
    assert_eq!(json["tree"]["root"]["children"].as_array().unwrap().len(), 3);
}

#[test]
fn test_ranker_and_cache_compose_manually() {
    // The engines are usable without the orchestrator.
    let state = whatif_core::StudentState::new(4.0, 7.0, 2.0);
    let mut cache: SimulationCache<&str> = SimulationCache::new();
    let key = SimulationCache::<&str>::generate_key(&state).unwrap();
    if cache.get(&key).is_none() {
        cache.set(key.clone(), "Computed");
    }
    assert_eq!(cache.get(&key), Some(&"Computed"));

    let ranker: ScenarioRanker = whatif_core::score_variations(&state).into_iter().collect();
    assert_eq!(ranker.peek().unwrap().description, "More Sleep");
}
