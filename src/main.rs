use std::process::ExitCode;

use clap::Parser;
use deskbot::prelude::*;
use tracing::{error, info, Level};

/// deskbot: find the desk, press the button, sit back down.
///
/// Runs the navigator against a freshly placed desk and prints every status line of the robot.
#[derive(Parser, Debug)]
#[command(name = "deskbot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed of the simulation; a random one is used if omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Energy of a single move
    #[arg(long, default_value_t = NavigatorProp::default().step_energy)]
    step_energy: f64,

    /// Distance readings fused after every move towards the desk row
    #[arg(long, default_value_t = NavigatorProp::default().samples_per_step)]
    samples_per_step: usize,

    /// Also print navigator and filter details
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    let mut robot = match cli.seed {
        Some(seed) => RobotSimulator::from_seed(seed),
        None => RobotSimulator::new(),
    };
    let navigator = Navigator::from_prop(NavigatorProp {
        step_energy: cli.step_energy,
        samples_per_step: cli.samples_per_step,
        ..Default::default()
    });

    match navigator.run(&mut robot) {
        Ok(status) => {
            info!("Mission finished: {}", status);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Mission failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
