use clap::Parser;

use linecount::cli::Cli;
use linecount::commands::run_count;
use linecount::logging;

fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.quiet, cli.color.into());

    let exit_code = run_count(&cli);

    std::process::exit(exit_code);
}
