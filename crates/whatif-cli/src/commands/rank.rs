use clap::Args;
use whatif_core::{score_variations, Config, ScenarioRanker, Simulator};

use super::{CmdResult, HabitArgs};

#[derive(Args)]
pub struct RankArgs {
    #[command(flatten)]
    habits: HabitArgs,
    /// Number of scenarios to show (defaults to simulation.top_k)
    #[arg(long)]
    top: Option<usize>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: RankArgs) -> CmdResult {
    let config = Config::load_or_default();
    let top = args.top.unwrap_or(config.simulation.top_k);
    let sim = Simulator::with_settings(config.settings());

    let base = sim.base_state(&args.habits.input());
    let ranker: ScenarioRanker = score_variations(&base).into_iter().collect();
    let ranked = ranker.top_k(top);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    for (i, scenario) in ranked.iter().enumerate() {
        println!(
            "{}. {:<12} score {:>6.1}  (study {}h, sleep {}h, stress {}, gpa {:.2})",
            i + 1,
            scenario.description,
            scenario.score,
            scenario.state.study_hours,
            scenario.state.sleep_hours,
            scenario.state.stress_level,
            scenario.state.gpa
        );
    }
    Ok(())
}
