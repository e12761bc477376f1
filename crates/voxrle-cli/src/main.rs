// crates/voxrle-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;
mod logging;
mod report;

#[derive(Parser)]
#[command(name = "voxrle")]
#[command(about = "Run-length cost estimator for thresholded voxel volumes", long_about = None)]
pub struct Cli {
    /// Debug-level logging for the voxrle crates (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Single-pass estimate (dense bitmap or streaming scan)
    Seq(cmd::seq::SeqArgs),

    /// Shared-memory estimate, benchmarked over a list of thread counts
    Threads(cmd::bench::BenchArgs),

    /// Message-passing estimate: ranks own copied slices, reply with summary frames
    Dist(cmd::bench::BenchArgs),

    /// Voxel statistics and a zstd scoreboard for the packed bitmap
    Stats(cmd::stats::StatsArgs),

    /// Write a synthetic raw volume
    Synth(cmd::synth::SynthArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    match cli.cmd {
        Commands::Seq(args) => cmd::seq::run(args),
        Commands::Threads(args) => cmd::bench::run(args, voxrle_core::ExecMode::Threaded),
        Commands::Dist(args) => cmd::bench::run(args, voxrle_core::ExecMode::Distributed),
        Commands::Stats(args) => cmd::stats::run(args),
        Commands::Synth(args) => cmd::synth::run(args),
    }
}
