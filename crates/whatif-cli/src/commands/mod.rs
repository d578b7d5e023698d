pub mod classify;
pub mod config;
pub mod graph;
pub mod rank;
pub mod schedule;
pub mod simulate;
pub mod task;
pub mod tree;

use clap::Args;
use whatif_core::HabitInput;

/// Daily habit flags shared by the simulation commands.
///
/// Values outside the documented ranges are clamped, not rejected.
#[derive(Args, Debug, Clone, Copy)]
pub struct HabitArgs {
    /// Study hours per day (0-14)
    #[arg(long, default_value_t = 4)]
    pub study: u32,
    /// Sleep hours per day (0-12)
    #[arg(long, default_value_t = 7)]
    pub sleep: u32,
    /// Social hours per day (0-10)
    #[arg(long, default_value_t = 2)]
    pub social: u32,
}

impl HabitArgs {
    pub fn input(&self) -> HabitInput {
        HabitInput::clamped(self.study, self.sleep, self.social)
    }
}

pub type CmdResult = Result<(), Box<dyn std::error::Error>>;
