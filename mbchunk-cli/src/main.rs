//! mbchunk binary entry point

use clap::Parser;
use mbchunk_cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = cli.execute() {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}
