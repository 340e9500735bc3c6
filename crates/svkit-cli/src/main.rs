use clap::Parser;

use svkit_cli::{commands, logging, ui, Cli};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = commands::run(cli) {
        eprintln!("{} {e:#}", ui::error_label());
        std::process::exit(1);
    }
}
