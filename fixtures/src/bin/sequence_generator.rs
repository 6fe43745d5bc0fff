//! Prints the first values of an unbounded sequence, one per line.
//!
//! A producer thread hands each integer over a rendezvous channel; `main`
//! receives `--count` of them (default 100), prints them and exits without
//! stopping the producer.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use fixtures::config::load_config;
use fixtures::sequence::write_sequence;
use fixtures::{exit_codes, logging};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "sequence-generator",
    version,
    about = "Print an increasing integer sequence received over a channel"
)]
struct Cli {
    /// Number of values to receive and print (overrides the config file).
    #[arg(short, long)]
    count: Option<u64>,

    /// Optional TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() {
    logging::init();
    if let Err(err) = run(Cli::parse()) {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut cfg = load_config(cli.config.as_deref())?;
    if let Some(count) = cli.count {
        cfg.sequence.count = count;
        cfg.validate()?;
    }
    debug!(count = cfg.sequence.count, "consuming sequence");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_sequence(&mut out, cfg.sequence.count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults() {
        let cli = Cli::parse_from(["sequence-generator"]);
        assert_eq!(cli.count, None);
        assert_eq!(cli.config, None);
    }

    #[test]
    fn parse_count_override() {
        let cli = Cli::parse_from(["sequence-generator", "--count", "101"]);
        assert_eq!(cli.count, Some(101));
    }

    #[test]
    fn zero_count_is_rejected() {
        let cli = Cli::parse_from(["sequence-generator", "-c", "0"]);
        let err = run(cli).unwrap_err();
        assert!(err.to_string().contains("sequence.count must be > 0"));
    }
}
