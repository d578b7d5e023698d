use clap::Args;
use whatif_core::{Config, ScheduleOptimizer};

use super::CmdResult;

#[derive(Args)]
pub struct ScheduleArgs {
    /// Free hours available, 0 to 24 (fractions are floored)
    #[arg(long)]
    hours: f64,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: ScheduleArgs) -> CmdResult {
    let capacity = ScheduleOptimizer::capacity_from_hours(args.hours)?;
    let config = Config::load_or_default();
    let pool = config.task_pool();

    let result = ScheduleOptimizer::new().solve(pool.tasks(), capacity);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("Productivity score: {}", result.max_value);
    println!(
        "Selected {} tasks fitting into {}h",
        result.selected_tasks.len(),
        capacity
    );
    for task in &result.selected_tasks {
        println!("  +{:<3} {} ({}h) [{}]", task.value, task.name, task.cost, task.id);
    }
    if result.selected_tasks.is_empty() {
        println!("  Not enough time available");
    }
    Ok(())
}
