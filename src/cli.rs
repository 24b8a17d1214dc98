extern crate clap;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub const DEFAULT_LOOKUPS: &str = "assets/fi";

#[derive(Debug, Parser)]
#[command(name = "fi-lemma", version, about = "Rule-based Finnish lemmatizer")]
pub struct Cli {
    /// Directory holding the rule, index and exception tables.
    #[arg(long, short = 'l', default_value = DEFAULT_LOOKUPS)]
    pub lookups: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Lemmatize words given as arguments, or one per stdin line.
    Lemma(Lemma),

    /// Compare lemmas against a CoNLL-U file.
    Eval(Eval),
}

#[derive(Debug, Parser)]
pub struct Lemma {
    /// Part-of-speech tag for words without one.
    #[arg(long, short = 'p', default_value = "NOUN")]
    pub pos: String,

    /// Print every candidate instead of the first.
    #[arg(long, short = 'a')]
    pub all: bool,

    /// Stdin lines may carry their own tag after a tab.
    pub words: Vec<String>,
}

#[derive(Debug, Parser)]
pub struct Eval {
    /// Reads stdin when omitted.
    pub file: Option<PathBuf>,

    #[arg(long)]
    pub json: bool,
}
