//! Command-line argument structures.
//!
//! Isolates clap derivations so lint expectations remain scoped, keeping
//! `main.rs` focused on runtime logic.

use clap::Parser;

use crate::opts::Style;

/// Arguments accepted by the `jopts` binary.
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "jopts",
    about = "Merge duplicated JDK tool options into a canonical command line"
)]
pub struct Args {
    /// Rendering style for the merged list; defaults to JOPTS_STYLE, then legacy
    #[arg(long, value_enum)]
    pub style: Option<Style>,

    /// Print both the legacy and the modern rendering, labelled
    #[arg(long, conflicts_with = "style")]
    pub both: bool,

    /// Separate output tokens with NUL instead of newline
    #[arg(short = '0', long = "null")]
    pub null_separated: bool,

    /// Raw option tokens; read whitespace-split from stdin when omitted
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}
