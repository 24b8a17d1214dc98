extern crate clap;
extern crate env_logger;
extern crate log;
extern crate serde_json;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use log::info;

use fi_lemma::{
    error::{ConfigError, Error, IoError},
    Category, Lemmatizer, Lookups,
};
use fi_lemma_repo::{
    cli::{Cli, Command, Eval, Lemma},
    eval,
    read::LineReader,
};

fn main() -> ExitCode {
    env_logger::init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("fi-lemma: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Error> {
    let lookups = Lookups::load(&cli.lookups)?;
    let lemmatizer = Lemmatizer::new(lookups)?;
    info!("lemmatizer ready");

    match cli.command {
        Command::Lemma(args) => lemma(&lemmatizer, args),
        Command::Eval(args) => evaluate(&lemmatizer, args),
    }
}

fn lemma(lemmatizer: &Lemmatizer, args: Lemma) -> Result<(), Error> {
    let default = Category::from_tag(&args.pos);
    let mut out = io::stdout().lock();

    let mut print = |word: &str, category: Category| -> Result<(), Error> {
        let lemmas = lemmatizer.lemmatize(word, category);

        let line = if args.all {
            lemmas.join(" ")
        } else {
            lemmas.into_iter().next().unwrap_or_default()
        };

        writeln!(out, "{line}").map_err(write_error)
    };

    if !args.words.is_empty() {
        for word in &args.words {
            print(word, default)?;
        }
        return Ok(());
    }

    for line in LineReader::stdin().lines() {
        let line = line?;

        match line.split_once('\t') {
            Some((word, tag)) => print(word.trim(), Category::from_tag(tag))?,
            None if line.trim().is_empty() => continue,
            None => print(line.trim(), default)?,
        }
    }

    Ok(())
}

fn evaluate(lemmatizer: &Lemmatizer, args: Eval) -> Result<(), Error> {
    let reader = LineReader::open_or_stdin(args.file.as_ref())?;
    let report = eval::evaluate(lemmatizer, reader.lines())?;

    let mut out = io::stdout().lock();

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(ConfigError::from)?;
        writeln!(out, "{json}").map_err(write_error)
    } else {
        writeln!(out, "{report}").map_err(write_error)
    }
}

#[inline]
fn write_error(error: io::Error) -> Error {
    IoError::Writer(error.kind()).into()
}
