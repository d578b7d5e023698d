//! Full simulation run: life state, tree summary, top scenarios and schedule.

use clap::Args;
use whatif_core::{Config, Simulator};

use super::{CmdResult, HabitArgs};

#[derive(Args)]
pub struct SimulateArgs {
    #[command(flatten)]
    habits: HabitArgs,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: SimulateArgs) -> CmdResult {
    let config = Config::load_or_default();
    let pool = config.task_pool();
    let mut sim = Simulator::with_settings(config.settings());

    let input = args.habits.input();
    let report = sim.run(input, pool.tasks())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Habits: study {}h, sleep {}h, social {}h",
        input.study, input.sleep, input.social
    );
    println!("Stress: {}", report.base_state.stress_level);
    println!("Life state: {}", report.life_state);
    let next: Vec<String> = report.transitions.iter().map(|s| s.to_string()).collect();
    println!("Can move to: {}", next.join(", "));

    let best = report.tree.best_leaf();
    println!(
        "\nDecision tree: {} nodes over {} days",
        report.tree.node_count(),
        report.tree.max_depth()
    );
    println!(
        "  Best outcome: day {} -> stress {}, energy {}, gpa {:.2}",
        best.state.day, best.state.stress_level, best.state.energy, best.state.gpa
    );

    println!("\nTop scenarios:");
    for (i, scenario) in report.top_scenarios.iter().enumerate() {
        println!("  {}. {:<12} {:>7.1}", i + 1, scenario.description, scenario.score);
    }

    println!(
        "\nSpare time: {}h -> productivity {} ({} tasks)",
        report.available_hours,
        report.schedule.max_value,
        report.schedule.selected_tasks.len()
    );
    for task in &report.schedule.selected_tasks {
        println!("  +{:<3} {} ({}h)", task.value, task.name, task.cost);
    }
    if report.schedule.selected_tasks.is_empty() {
        println!("  Not enough time available");
    }

    Ok(())
}
