//! backend-lb Entry Point

use backend_lb::{cli, logging};
use clap::Parser;

fn main() {
    let args = cli::Cli::parse();

    if let Err(err) = logging::init() {
        eprintln!("failed to initialize logging: {err}");
    }

    let stdout = std::io::stdout();
    if let Err(err) = cli::run(&args, &mut stdout.lock()) {
        tracing::error!("{err:#}");
        std::process::exit(1);
    }
}
