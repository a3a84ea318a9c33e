use clap::{Parser, Subcommand};

use self::{train_binary::TrainBinaryArg, train_float::TrainFloatArg};

mod train_binary;
mod train_float;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Evolve wildcard rules over binary records
    TrainBinary(#[clap(flatten)] TrainBinaryArg),
    /// Evolve interval rules over real-valued records
    TrainFloat(#[clap(flatten)] TrainFloatArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::TrainBinary(arg) => train_binary::run(&arg)?,
        Mode::TrainFloat(arg) => train_float::run(&arg)?,
    }
    Ok(())
}

/// Seed of trial `trial`, so that seeded trials differ from each other
/// but stay reproducible.
fn trial_seed(seed: Option<u64>, trial: usize) -> Option<u64> {
    seed.map(|seed| seed.wrapping_add(trial as u64))
}

#[expect(clippy::cast_precision_loss)]
fn average(total: usize, count: usize) -> f64 {
    total as f64 / count as f64
}
