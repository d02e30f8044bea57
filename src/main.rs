use clap::Parser;

use abap_refcheck::cli::Cli;
use abap_refcheck::runner;

fn main() {
    let cli = Cli::parse();
    std::process::exit(runner::run(&cli));
}
