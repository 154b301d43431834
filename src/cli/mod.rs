pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "chiasma",
    version,
    about = "Optimal global alignment of short DNA strands",
    long_about = "Chiasma computes optimal global alignments of short DNA strands under a \
                  linear scoring scheme (match +1, mismatch -1, gap -2), either for strands \
                  given on the command line or for randomly generated pairs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Align two strands given on the command line
    Align(commands::align::AlignArgs),

    /// Generate random strand pairs and align them
    Random(commands::random::RandomArgs),
}

/// Which solver drives an alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Tabular,
    Recursive,
}

impl std::str::FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tabular" | "table" => Ok(Strategy::Tabular),
            "recursive" | "memo" => Ok(Strategy::Recursive),
            _ => Err(format!("Unknown strategy: {}", s)),
        }
    }
}
