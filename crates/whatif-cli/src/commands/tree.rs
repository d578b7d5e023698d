use clap::Args;
use whatif_core::{Config, Simulator, TreeNode};

use super::{CmdResult, HabitArgs};

#[derive(Args)]
pub struct TreeArgs {
    #[command(flatten)]
    habits: HabitArgs,
    /// Days to simulate, at most 8 (defaults to simulation.tree_depth)
    #[arg(long)]
    depth: Option<u32>,
    /// List nodes level by level instead of as an indented tree
    #[arg(long)]
    bfs: bool,
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

fn describe(node: &TreeNode) -> String {
    format!(
        "{} [day {}] stress {} energy {} gpa {:.2}",
        node.action_taken, node.state.day, node.state.stress_level, node.state.energy, node.state.gpa
    )
}

fn print_preorder(node: &TreeNode, best: &TreeNode) {
    let marker = if std::ptr::eq(node, best) { " *" } else { "" };
    println!("{}{}{}", "  ".repeat(node.depth as usize), describe(node), marker);
    for child in &node.children {
        print_preorder(child, best);
    }
}

pub fn run(args: TreeArgs) -> CmdResult {
    let config = Config::load_or_default();
    let mut settings = config.settings();
    if let Some(depth) = args.depth {
        settings.tree_depth = depth;
    }

    let mut sim = Simulator::with_settings(settings);
    let state = sim.base_state(&args.habits.input());
    let (tree, _) = sim.decision_tree(&state)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tree)?);
        return Ok(());
    }

    if args.bfs {
        for node in tree.traverse_breadth_first() {
            println!("{} {}", node.depth, describe(node));
        }
    } else {
        print_preorder(tree.root(), tree.best_leaf());
    }
    Ok(())
}
