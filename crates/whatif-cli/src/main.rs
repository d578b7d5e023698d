use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "whatif", version, about = "What-If habit simulator CLI")]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify habits into a life state
    Classify(commands::classify::ClassifyArgs),
    /// Run every engine for one set of habits
    Simulate(commands::simulate::SimulateArgs),
    /// Show the what-if decision tree
    Tree(commands::tree::TreeArgs),
    /// Rank habit variations
    Rank(commands::rank::RankArgs),
    /// Optimize the task pool for spare hours
    Schedule(commands::schedule::ScheduleArgs),
    /// Task pool management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Show life-state transitions
    Graph(commands::graph::GraphArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Classify(args) => commands::classify::run(args),
        Commands::Simulate(args) => commands::simulate::run(args),
        Commands::Tree(args) => commands::tree::run(args),
        Commands::Rank(args) => commands::rank::run(args),
        Commands::Schedule(args) => commands::schedule::run(args),
        Commands::Task { action } => commands::task::run(action),
        Commands::Graph(args) => commands::graph::run(args),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "whatif", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
