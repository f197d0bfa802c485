// Author: Dustin Pilgrim
// License: MIT

mod cli;
mod config;
mod crop;
mod logging;
mod preview;
mod sizes;

use clap::Parser;
use eventline::{debug, info};

use cli::{Args, Cmd};

fn main() {
    let args = Args::parse();

    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| logging::default_log_path("marq.log"));

    if let Err(e) = logging::init_logging(&log_path, args.verbose) {
        // logging should never block normal usage
        eprintln!("marq: failed to init logging: {e}");
    }

    if let Err(e) = run(args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), String> {
    info!("starting");
    debug!("parsed args: {:?}", args.cmd);

    match args.cmd {
        Cmd::Crop { image, x, y, width, height, output, no_constrain } => {
            crop::run(&image, x, y, width, height, &output, !no_constrain)
        }

        Cmd::Preview { image, x, y, width, height, fit, output } => {
            let cfg = config::load()?;
            preview::run(image.as_deref(), x, y, width, height, fit, &output, &cfg)
        }

        Cmd::Sizes { family, aspect, tier, orientation } => {
            sizes::run(family, tier, aspect.as_deref(), orientation)
        }
    }
}
