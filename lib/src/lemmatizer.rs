//! The rule-based lemmatizer.
//!
//! A word is split off its compound head, stripped of enclitics and looked up
//! in the lemma index. Unknown forms go through every suffix rule that matches
//! their ending; the rewritten stems are undone for consonant gradation and
//! kept when the index accepts them. Exception lemmas not found otherwise
//! are placed in front, and when nothing validates the stripped forms
//! themselves are returned.

extern crate log;

use log::{debug, trace};

use crate::{
    candidates::Candidates,
    category::{Category, Pos},
    compound::{reattach, split_compound},
    enclitic::Enclitics,
    error::Error,
    exception::ExceptionTable,
    gradation::GradationRules,
    harmony,
    lookup::Lookups,
    rule::RuleSet,
};

/// Reduces a surface form to its candidate lemmas.
///
/// The returned list is never empty and its first element is the primary
/// lemma. An analyzer-backed implementation can stand in for [`Lemmatizer`]
/// through this trait.
pub trait Lemmatize {
    fn lemmatize(&self, surface: &str, category: Category) -> Vec<String>;
}

#[derive(Debug)]
pub struct Lemmatizer {
    lookups: Lookups,
    gradation: GradationRules,
    enclitics: Enclitics,
}

impl Lemmatizer {
    /// Builds a lemmatizer with the Finnish enclitics and gradation patterns.
    pub fn new(lookups: Lookups) -> Result<Self, Error> {
        let gradation = GradationRules::new()?;
        Ok(Self::with_parts(lookups, gradation, Enclitics::default()))
    }

    pub fn with_parts(lookups: Lookups, gradation: GradationRules, enclitics: Enclitics) -> Self {
        Self {
            lookups,
            gradation,
            enclitics,
        }
    }

    #[inline]
    pub fn lookups(&self) -> &Lookups {
        &self.lookups
    }

    pub fn lemmatize(&self, surface: &str, category: Category) -> Vec<String> {
        match category {
            Category::Punctuation => vec![surface.to_string()],
            Category::Unknown => vec![surface.to_lowercase()],
            Category::Inflecting(pos) => match split_compound(surface) {
                Some((head, tail)) => reattach(head, self.lemmatize_word(tail, pos)),
                None => self.lemmatize_word(surface, pos),
            },
        }
    }

    /// Lemmatizes with an external part-of-speech tag such as `NOUN`.
    #[inline]
    pub fn lemmatize_tag(&self, surface: &str, tag: &str) -> Vec<String> {
        self.lemmatize(surface, Category::from_tag(tag))
    }

    fn lemmatize_word(&self, surface: &str, pos: Pos) -> Vec<String> {
        let word = surface.to_lowercase();
        let forms = self.enclitics.candidates(&word);
        let index = self.lookups.index(pos);
        let exceptions = self.lookups.exceptions(pos);
        let validator = pos.validator();

        let mut candidates = Candidates::new();

        // A known form ends the rule search.
        if let Some(form) = forms.iter().find(|form| validator.is_valid(form, index)) {
            debug!("{surface} ({pos}): known form {form}");
            candidates.push(form.as_str());
            prioritize(&mut candidates, &forms, exceptions);
            return candidates.into_vec();
        }

        if let Some(rules) = self.lookups.rules(pos) {
            for form in &forms {
                self.apply_rules(form, pos, rules, &mut candidates);
            }
        }

        prioritize(&mut candidates, &forms, exceptions);

        if candidates.is_empty() {
            debug!("{surface} ({pos}): out of vocabulary");
            forms
                .iter()
                .filter(|form| !form.is_empty())
                .for_each(|form| {
                    candidates.push(form.as_str());
                });
        }

        if candidates.is_empty() {
            candidates.push(surface);
        }

        debug!("{surface} ({pos}): {} candidates", candidates.len());
        candidates.into_vec()
    }

    fn apply_rules(&self, form: &str, pos: Pos, rules: &RuleSet, candidates: &mut Candidates) {
        let index = self.lookups.index(pos);
        let exceptions = self.lookups.exceptions(pos);
        let validator = pos.validator();

        let matched = rules.matching(form);
        trace!("{form}: {} rules match", matched.len());

        for rule in matched {
            let Some(stem) = rule.stem(form) else {
                continue;
            };

            if !harmony::compatible(stem, rule.add()) {
                trace!("{form}: -{} breaks vowel harmony of {stem}", rule.add());
                continue;
            }

            let rewritten = format!("{stem}{}", rule.add());

            for variant in self
                .gradation
                .variants(&rewritten, rule.gradation(), pos.shape())
            {
                if validator.is_valid(&variant, index) {
                    trace!("{form}: {variant}");
                    candidates.push(variant);
                }
            }

            // A bare stem may itself be an irregular form.
            if rule.is_truncation() {
                if let Some(exceptions) = exceptions {
                    for lemma in exceptions.get(&rewritten) {
                        candidates.push_front(lemma.as_str());
                    }
                }
            }
        }
    }
}

impl Lemmatize for Lemmatizer {
    #[inline]
    fn lemmatize(&self, surface: &str, category: Category) -> Vec<String> {
        Lemmatizer::lemmatize(self, surface, category)
    }
}

// Exception lemmas not already found go first, each in front of the previous
// one.
fn prioritize(candidates: &mut Candidates, forms: &[String], exceptions: Option<&ExceptionTable>) {
    let Some(exceptions) = exceptions else {
        return;
    };

    for form in forms {
        for lemma in exceptions.get(form) {
            candidates.push_front(lemma.as_str());
        }
    }
}
