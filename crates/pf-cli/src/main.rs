//! pedflow — render steady-state profiles and N(t) charts from the output
//! of a pedestrian-flow analysis.
//!
//! ```text
//! pedflow profiles --field-dir Output/Fundamental_Diagram/Classical_Voronoi/field \
//!                  --geometry geometry.xml --area 1 --begin 100 --end 400
//! pedflow nt --area all Output/Fundamental_Diagram/FlowVelocity/Flow_NT_*.dat
//! ```
//!
//! Log verbosity: `-v` for debug, or `RUST_LOG` for anything finer.

mod nt;
mod profiles;
mod settings;


use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Pedestrian-flow profile and N(t) renderer", long_about = None)]
struct Cli {
    /// Debug-level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Average density and velocity over the steady window and render
    /// density, velocity and flow heatmaps
    Profiles(profiles::ProfilesArgs),
    /// Plot cumulative counts N(t) for one or every measurement area
    Nt(nt::NtArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let written = match cli.command {
        Command::Profiles(args) => profiles::run(&args)?,
        Command::Nt(args) => nt::run(&args)?,
    };
    println!("---> {}", written.display());
    Ok(())
}
