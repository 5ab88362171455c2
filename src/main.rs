//! Plot and animate a 3D trajectory log.
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use wisp::plot::View;
use wisp::{animate, plot, reader, Error};

/// Render a trajectory log as a static 3D figure and a trailing-fade
/// animation.
///
/// The log starts with a header line, followed by `Run: <id>` markers that
/// each open a run and `time x y z` sample lines that belong to the most
/// recent run. The first run in the log is the one that gets rendered.
#[derive(Parser)]
#[command(after_help = "For example: wisp data/trajectory.log result/plot.png result/trail.gif")]
struct Args {
    /// Input path (trajectory log).
    load_file: PathBuf,

    /// Output path for the static figure (png).
    save_fig_file: PathBuf,

    /// Output path for the animation (gif).
    animation_file: PathBuf,

    /// Camera elevation for the static figure, in degrees.
    #[arg(long, default_value_t = View::default().elevation)]
    elevation: f64,

    /// Camera azimuth for the static figure, in degrees.
    #[arg(long, default_value_t = View::default().azimuth)]
    azimuth: f64,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    println!("\nAll done!!!\n");
    ExitCode::SUCCESS
}

fn run(args: &Args) -> Result<(), Error> {
    let trajectories = reader::read_trajectories(&args.load_file)?;
    let first = trajectories.first().ok_or(Error::NoRuns)?;
    let view = View {
        elevation: args.elevation,
        azimuth: args.azimuth,
    };
    plot::render(&first.positions, view, &args.save_fig_file)?;
    animate::render(&first.positions, &args.animation_file)?;
    Ok(())
}
