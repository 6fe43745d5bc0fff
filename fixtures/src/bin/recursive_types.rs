//! Prints a greeting and the zero values of recursive pointer types.
//!
//! Takes no configuration: the four output lines never change.

use std::io;

use anyhow::Result;
use clap::Parser;
use fixtures::recursive::write_demo;
use fixtures::{exit_codes, logging};

#[derive(Parser)]
#[command(
    name = "recursive-types",
    version,
    about = "Print zero values of self- and mutually-referential types"
)]
struct Cli {}

fn main() {
    logging::init();
    let Cli {} = Cli::parse();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_demo(&mut out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_without_arguments() {
        assert!(Cli::try_parse_from(["recursive-types"]).is_ok());
    }

    #[test]
    fn parse_rejects_config_flag() {
        assert!(Cli::try_parse_from(["recursive-types", "--config", "fixtures.toml"]).is_err());
    }
}
