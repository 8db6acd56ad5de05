mod cli;

use std::error::Error;
use std::fs;
use std::process::ExitCode;

use clap::Parser;
use log::info;

use lookahead::{analyze_with, Grammar, GrammarLoadExt, LoadOptions, Report, SymbolPolicy};

use crate::cli::Cli;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(report) => {
            print!("{}", report);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}: {}", cli.file.display(), error);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, Box<dyn Error>> {
    let policy = if cli.strict {
        SymbolPolicy::Strict
    } else {
        SymbolPolicy::Permissive
    };
    let text = fs::read_to_string(&cli.file)?;
    let options = LoadOptions {
        policy,
        terminals: cli.terminals.clone(),
        start: cli.start.clone(),
    };
    let grammar = Grammar::load_with(&text, &options)?;
    info!(
        "{}: {} rules, {} symbols",
        cli.file.display(),
        grammar.num_rules(),
        grammar.num_syms()
    );
    let analysis = analyze_with(&grammar, policy)?;
    let mut report = Report::new(&grammar, &analysis);
    if let Some(only) = cli.only {
        report = report.only(only.into());
    }
    Ok(report.to_string())
}
