use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use lookahead::Section;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// File containing the grammar, one `HEAD ::= ALT | ALT` rule per line
    pub file: PathBuf,

    /// Start symbol (default: head of the first rule)
    #[arg(short, long, value_name = "SYMBOL")]
    pub start: Option<String>,

    /// Reject symbols that are neither nonterminals nor declared terminals
    #[arg(long)]
    pub strict: bool,

    /// Declare a terminal, for use with --strict
    #[arg(short, long = "terminal", value_name = "NAME")]
    pub terminals: Vec<String>,

    /// Print only one family of sets
    #[arg(long, value_enum, value_name = "SETS")]
    pub only: Option<Only>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Only {
    First,
    Follow,
    Predict,
}

impl From<Only> for Section {
    fn from(only: Only) -> Self {
        match only {
            Only::First => Section::First,
            Only::Follow => Section::Follow,
            Only::Predict => Section::Predict,
        }
    }
}
