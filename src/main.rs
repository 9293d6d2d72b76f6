//! `jopts` binary entry point.
//!
//! Parses the command line, merges the supplied tokens through
//! [`OptionMerger`], and prints the canonical list. Kept thin so the
//! behaviour lives in the library and stays unit-testable.

use std::io::{self, Write};

use clap::Parser;

use jopts::cli_args::Args;
use jopts::environment;
use jopts::{JoptsError, OptionMerger, Style};

fn main() -> Result<(), JoptsError> {
    env_logger::init();
    let args = Args::parse();
    let mut stdout = io::stdout().lock();
    run(&args, &mut stdout)
}

fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), JoptsError> {
    let tokens = gather_tokens(args)?;
    if args.both {
        // Side-by-side debug view; space-joined since it is not meant to be
        // fed back to a shell.
        for (label, style) in [("legacy", Style::Legacy), ("modern", Style::Modern)] {
            writeln!(out, "{label}: {}", merge(&tokens, style).join(" "))?;
        }
        return Ok(());
    }
    let style = match args.style {
        Some(style) => style,
        None => environment::style_override()?.unwrap_or_default(),
    };
    let terminator = if args.null_separated { '\0' } else { '\n' };
    for token in merge(&tokens, style) {
        write!(out, "{token}{terminator}")?;
    }
    Ok(())
}

/// Tokens from the command line, or whitespace-split from stdin when none
/// were given.
fn gather_tokens(args: &Args) -> Result<Vec<String>, JoptsError> {
    if args.tokens.is_empty() {
        let input = io::read_to_string(io::stdin())?;
        Ok(input.split_whitespace().map(str::to_owned).collect())
    } else {
        Ok(args.tokens.clone())
    }
}

fn merge(tokens: &[String], style: Style) -> Vec<String> {
    let mut merger = OptionMerger::new(style);
    merger.add_all(tokens);
    merger.to_list()
}
