use clap::Args;
use serde_json::json;
use whatif_core::{classify, TransitionGraph};

use super::{CmdResult, HabitArgs};

#[derive(Args)]
pub struct ClassifyArgs {
    #[command(flatten)]
    habits: HabitArgs,
    /// Stress level (0-100); derived from the habits when omitted
    #[arg(long)]
    stress: Option<i32>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: ClassifyArgs) -> CmdResult {
    let input = args.habits.input();
    let stress = args.stress.unwrap_or_else(|| input.baseline_stress());
    let state = classify(f64::from(input.study), f64::from(input.sleep), stress);
    let next = TransitionGraph::new().transitions(state).to_vec();

    if args.json {
        let out = json!({
            "life_state": state,
            "stress": stress,
            "transitions": next,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{state}");
    }
    Ok(())
}
