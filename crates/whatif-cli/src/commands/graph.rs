use clap::Args;
use whatif_core::{LifeState, TransitionGraph};

use super::CmdResult;

#[derive(Args)]
pub struct GraphArgs {
    /// Only show transitions out of this state (e.g. "tired", "flow")
    state: Option<LifeState>,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: GraphArgs) -> CmdResult {
    let graph = TransitionGraph::new();
    let sources: Vec<LifeState> = match args.state {
        Some(state) => vec![state],
        None => LifeState::ALL.to_vec(),
    };

    if args.json {
        let edges: Vec<(LifeState, LifeState)> = graph
            .edges()
            .into_iter()
            .filter(|(from, _)| sources.contains(from))
            .collect();
        println!("{}", serde_json::to_string_pretty(&edges)?);
        return Ok(());
    }

    for from in sources {
        let targets: Vec<&str> = graph.transitions(from).iter().map(|s| s.label()).collect();
        println!("{:<10} -> {}", from.label(), targets.join(", "));
    }
    Ok(())
}
