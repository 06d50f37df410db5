mod cli;
mod commands;
mod logging;

use cli::build_cli;

fn main() {
    // No generation flags; parsing only serves --help, --version and
    // rejecting stray arguments.
    let _matches = build_cli().get_matches();

    logging::init();
    commands::generate::run();
}
