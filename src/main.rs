//! Texbatch CLI entry point.

#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

use texbatch::constants::EXIT_CODE_INTERRUPTED;

fn main() {
    if let Err(e) = texbatch::run() {
        eprintln!("error: {e}");
        let code = match e {
            texbatch::Error::Interrupted => EXIT_CODE_INTERRUPTED,
            _ => 1,
        };
        std::process::exit(code);
    }
}
