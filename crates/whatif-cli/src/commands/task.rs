//! Task pool management commands for CLI.

use clap::Subcommand;
use whatif_core::{Config, TaskPool};

use super::CmdResult;

#[derive(Subcommand)]
pub enum TaskAction {
    /// List tasks in the pool
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a task to the pool
    Add {
        /// Task name
        name: String,
        /// Hours required
        #[arg(long)]
        cost: u32,
        /// Productivity points
        #[arg(long)]
        value: u32,
    },
    /// Remove a task from the pool
    Remove {
        /// Task ID
        id: String,
    },
    /// Restore the stock task pool
    Reset,
}

pub fn run(action: TaskAction) -> CmdResult {
    let mut config = Config::load()?;

    match action {
        TaskAction::List { json } => {
            let pool = config.task_pool();
            if json {
                println!("{}", serde_json::to_string_pretty(pool.tasks())?);
            } else if pool.is_empty() {
                println!("No tasks");
            } else {
                for task in pool.tasks() {
                    println!("{:<38} {:<24} {:>2}h {:>3}pt", task.id, task.name, task.cost, task.value);
                }
            }
        }
        TaskAction::Add { name, cost, value } => {
            let mut pool = config.task_pool();
            let id = pool.add(name, cost, value)?.id.clone();
            config.set_task_pool(&pool);
            config.save()?;
            println!("Task created: {id}");
        }
        TaskAction::Remove { id } => {
            let mut pool = config.task_pool();
            let removed = pool
                .remove(&id)
                .ok_or_else(|| format!("task not found: {id}"))?;
            config.set_task_pool(&pool);
            config.save()?;
            println!("Task removed: {}", removed.name);
        }
        TaskAction::Reset => {
            config.set_task_pool(&TaskPool::default_pool());
            config.save()?;
            println!("task pool reset to defaults");
        }
    }
    Ok(())
}
