use std::io::IsTerminal;
use std::path::PathBuf;

use ptrgen_lib::{Catalogue, Config, Error, GenerateError};

pub fn run() {
    if let Err(e) = generate() {
        report(&e);
        std::process::exit(1);
    }
}

fn generate() -> ptrgen_lib::Result<Vec<PathBuf>> {
    let catalogue = Catalogue::standard()?;
    let config = Config::default();
    Ok(ptrgen_lib::generate(&catalogue, &config)?)
}

fn report(e: &Error) {
    match e {
        Error::Generate(GenerateError::Templates(template_error)) => {
            let colored = std::io::stderr().is_terminal();
            eprintln!("error: failed to parse templates");
            eprint!("{}", template_error.render(colored));
        }
        _ => eprintln!("error: {}", e),
    }
}
