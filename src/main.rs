use clap::Parser;
use subnet_planner::cli::{self, Cli};

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests.
    // A missing log config only disables logging, one-shot runs are fine
    // without it.
    let _ = log4rs::init_file("log4rs.yml", Default::default());
    log::info!("#Start main()");

    let cli = Cli::parse();
    std::process::exit(cli::execute(cli.command));
}
