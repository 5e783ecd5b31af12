use clap::Parser;
use irqtail::cli::Cli;
use irqtail::runtime::{boot, run};

fn main() {
    boot::init_logging();
    let cli = Cli::parse();

    if let Err(err) = run::run(&cli) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}
