//! Accuracy of a lemmatizer against gold lemmas in CoNLL-U data.

extern crate hashbrown;
extern crate log;
extern crate serde;

use std::fmt::{Display, Formatter};

use hashbrown::HashMap;
use log::warn;
use serde::Serialize;

use fi_lemma::{error::Error, Category, Lemmatize};

use crate::util::Counter;

/// Universal POS tags whose lemmas are compared.
pub const EVALUATED_TAGS: [&str; 6] = ["NOUN", "VERB", "ADJ", "ADV", "PROPN", "ADP"];

/// Columns of one CoNLL-U token line that take part in the evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'l> {
    pub form: &'l str,
    pub lemma: &'l str,
    pub upos: &'l str,
}

impl<'l> Token<'l> {
    /// `None` for blank lines and comments. Lines with fewer than four
    /// columns are reported as malformed.
    pub fn parse(line: &'l str) -> Option<Result<Self, &'l str>> {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let mut columns = line.split('\t').skip(1);

        match (columns.next(), columns.next(), columns.next()) {
            (Some(form), Some(lemma), Some(upos)) => Some(Ok(Self { form, lemma, upos })),
            _ => Some(Err(line)),
        }
    }

    /// The tag as evaluated. Auxiliaries count as verbs.
    #[inline]
    pub fn tag(&self) -> &'l str {
        match self.upos {
            "AUX" => "VERB",
            upos => upos,
        }
    }

    /// Gold lemma spellings accepted as correct: compound boundaries removed,
    /// or written as hyphens.
    pub fn expected(&self) -> [String; 2] {
        [
            self.lemma.replace('#', "").to_lowercase(),
            self.lemma.replace('#', "-").to_lowercase(),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub word: String,
    pub upos: String,
    pub observed: String,
    pub expected: String,
}

impl Display for Mismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): {} != {}",
            self.word, self.upos, self.observed, self.expected
        )
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub mismatches: Vec<Mismatch>,

    /// Error count per tag, largest first.
    pub errors: Vec<(String, usize)>,

    pub words: usize,
    pub total_errors: usize,

    /// Errors as a percentage of all words.
    pub proportion: f64,
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for mismatch in &self.mismatches {
            writeln!(f, "{mismatch}")?;
        }

        writeln!(f)?;
        writeln!(f, "Error counts by POS tag:")?;

        for (upos, count) in &self.errors {
            writeln!(f, "{upos}\t{count}")?;
        }

        write!(
            f,
            "Total\t{}, proportion: {:.1} %",
            self.total_errors, self.proportion
        )
    }
}

pub struct Evaluator<'a, L: Lemmatize + ?Sized> {
    lemmatizer: &'a L,
    words: Counter<usize>,
    errors: HashMap<String, Counter<usize>>,
    mismatches: Vec<Mismatch>,
}

impl<'a, L: Lemmatize + ?Sized> Evaluator<'a, L> {
    pub fn new(lemmatizer: &'a L) -> Self {
        Self {
            lemmatizer,
            words: Counter::default(),
            errors: HashMap::new(),
            mismatches: Vec::new(),
        }
    }

    /// Scores one line of CoNLL-U input.
    pub fn feed(&mut self, line: &str) {
        let token = match Token::parse(line) {
            Some(Ok(token)) => token,
            Some(Err(line)) => {
                warn!("skipping malformed line: {line}");
                return;
            }
            None => return,
        };

        self.words.increment();

        let tag = token.tag();
        if !EVALUATED_TAGS.contains(&tag) {
            return;
        }

        let lemmas = self
            .lemmatizer
            .lemmatize(token.form.trim_matches('-'), Category::from_tag(tag));

        let Some(observed) = lemmas.first().map(|lemma| lemma.to_lowercase()) else {
            return;
        };

        let expected = token.expected();
        if expected.contains(&observed) {
            return;
        }

        self.errors.entry(tag.to_string()).or_default().increment();

        let [expected, _] = expected;
        self.mismatches.push(Mismatch {
            word: token.form.to_string(),
            upos: tag.to_string(),
            observed,
            expected,
        });
    }

    pub fn finish(self) -> Report {
        let mut total = Counter::<usize>::default();
        for count in self.errors.values() {
            total += *count;
        }

        let mut errors = self
            .errors
            .into_iter()
            .map(|(upos, count)| (upos, count.into_inner()))
            .collect::<Vec<_>>();
        errors.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

        Report {
            mismatches: self.mismatches,
            errors,
            words: self.words.into_inner(),
            total_errors: total.into_inner(),
            proportion: total.percent_of(self.words),
        }
    }
}

/// Runs `lemmatizer` over every line and reports the mismatches.
pub fn evaluate<L, I>(lemmatizer: &L, lines: I) -> Result<Report, Error>
where
    L: Lemmatize + ?Sized,
    I: IntoIterator<Item = Result<String, Error>>,
{
    let mut evaluator = Evaluator::new(lemmatizer);

    for line in lines {
        evaluator.feed(&line?);
    }

    Ok(evaluator.finish())
}
