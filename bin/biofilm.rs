use std::env;
use std::process::exit;

use clap::Parser;
use log::error;

use biofilm_dynamics::{CsvTrajectory, Simulation};
use biofilm_io::{load_parameters, SimulationParameters, TrajectoryWriter};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
/// Individual-based simulator of a bacterial colony growing in a nutrient field
/// say biofilm -h to see options
struct Args {
    /// configuration file with the simulation parameters; built-in defaults are used when omitted
    #[clap(short='c', long)]
    config: Option<String>,
    /// be more verbose and log program actions on the screen
    #[clap(short='v', long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    if env::var("RUST_LOG").is_err() { env::set_var("RUST_LOG", "info") }
    if args.verbose { env::set_var("RUST_LOG", "debug"); }
    env_logger::init();

    let params = match &args.config {
        Some(fname) => match load_parameters(fname) {
            Ok(params) => params,
            Err(e) => {
                error!("{}", e);
                exit(1);
            }
        },
        None => SimulationParameters::default(),
    };

    let mut simulation = Simulation::new(&params);
    simulation.add_observer(Box::new(CsvTrajectory::new(TrajectoryWriter::new("."))));
    simulation.start();
    if let Err(e) = simulation.run() {
        error!("{}", e);
        exit(2);
    }
}
