//! The lookup tables the lemmatizer consults: suffix rules, lemma index and
//! exceptions, one of each per part of speech.
//!
//! Tables are produced offline and shipped as JSON:
//!
//! - `fi_lemma_rules.json`: `{"noun": [["ssa", ""], ["n", "", "weak"], ...]}`
//! - `fi_lemma_index.json`: `{"noun": ["talo", ...]}`
//! - `fi_lemma_exc.json`: `{"noun": {"pojan": ["poika"]}}`

extern crate hashbrown;
extern crate log;
extern crate serde_json;

use std::{collections::BTreeMap, fs, path::Path};

use hashbrown::HashMap;
use log::info;

use crate::{
    category::Pos,
    error::{ConfigError, Error},
    exception::ExceptionTable,
    rule::{RuleEntry, RuleSet, SuffixRule},
    validate::LemmaIndex,
};

pub const RULES_FILE: &str = "fi_lemma_rules.json";
pub const INDEX_FILE: &str = "fi_lemma_index.json";
pub const EXCEPTIONS_FILE: &str = "fi_lemma_exc.json";

type RawRules = BTreeMap<String, Vec<RuleEntry>>;
type RawIndex = BTreeMap<String, Vec<String>>;
type RawExceptions = BTreeMap<String, BTreeMap<String, Vec<String>>>;

#[derive(Debug, Default)]
pub struct Lookups {
    rules: HashMap<Pos, RuleSet>,
    index: HashMap<Pos, LemmaIndex>,
    exceptions: HashMap<Pos, ExceptionTable>,
}

impl Lookups {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the three tables from `dir`. Every file must be present.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, Error> {
        let dir = dir.as_ref();
        let read = |name: &str| {
            fs::read_to_string(dir.join(name)).map_err(|error| ConfigError::File(error.kind()))
        };

        let lookups = Self::from_json(
            &read(RULES_FILE)?,
            &read(INDEX_FILE)?,
            &read(EXCEPTIONS_FILE)?,
        )?;

        info!("loaded lookups from {}", dir.display());
        Ok(lookups)
    }

    pub fn from_json(rules: &str, index: &str, exceptions: &str) -> Result<Self, Error> {
        let rules: RawRules = serde_json::from_str(rules).map_err(ConfigError::from)?;
        let index: RawIndex = serde_json::from_str(index).map_err(ConfigError::from)?;
        let exceptions: RawExceptions =
            serde_json::from_str(exceptions).map_err(ConfigError::from)?;

        let mut lookups = Self::new();

        for (key, entries) in rules {
            let pos = parse_pos(&key)?;
            let set = lookups.rules.entry(pos).or_default();

            for entry in entries {
                set.insert_entry(entry)?;
            }

            info!("{} {pos} rules", set.len());
        }

        for (key, lemmas) in index {
            let pos = parse_pos(&key)?;
            let index = lookups.index.entry(pos).or_default();
            index.extend(lemmas);

            info!("{} {pos} lemmas", index.len());
        }

        for (key, forms) in exceptions {
            let pos = parse_pos(&key)?;
            let table = lookups.exceptions.entry(pos).or_default();

            for (form, lemmas) in forms {
                table.insert(form, lemmas);
            }

            info!("{} {pos} exceptions", table.len());
        }

        Ok(lookups)
    }

    #[inline]
    pub fn insert_rule(&mut self, pos: Pos, suffix: &str, rule: SuffixRule) -> &mut Self {
        self.rules.entry(pos).or_default().insert(suffix, rule);
        self
    }

    #[inline]
    pub fn insert_lemma<S: Into<String>>(&mut self, pos: Pos, lemma: S) -> &mut Self {
        self.index.entry(pos).or_default().insert(lemma);
        self
    }

    pub fn insert_exception<S, I, L>(&mut self, pos: Pos, form: S, lemmas: I) -> &mut Self
    where
        S: Into<String>,
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        self.exceptions.entry(pos).or_default().insert(form, lemmas);
        self
    }

    #[inline]
    pub fn rules(&self, pos: Pos) -> Option<&RuleSet> {
        self.rules.get(&pos)
    }

    #[inline]
    pub fn index(&self, pos: Pos) -> Option<&LemmaIndex> {
        self.index.get(&pos)
    }

    #[inline]
    pub fn exceptions(&self, pos: Pos) -> Option<&ExceptionTable> {
        self.exceptions.get(&pos)
    }
}

fn parse_pos(key: &str) -> Result<Pos, ConfigError> {
    Pos::from_key(key).ok_or_else(|| ConfigError::UnknownPos(key.to_string()))
}

#[cfg(test)]
mod tests {
    use crate::{
        category::Pos,
        error::{ConfigError, Error},
        lookup::Lookups,
        rule::{Gradation, SuffixRule},
    };

    const RULES: &str = r#"{
        "noun": [["ssa", ""], ["n", "", "weak"]],
        "VERB": [{"suffix": "nut", "add": "a"}]
    }"#;
    const INDEX: &str = r#"{"noun": ["talo", "valikko"], "verb": ["kimpaantua"]}"#;
    const EXCEPTIONS: &str = r#"{"noun": {"pojan": ["poika"]}}"#;

    #[test]
    fn test_lookups_from_json() {
        let lookups = Lookups::from_json(RULES, INDEX, EXCEPTIONS).unwrap();

        assert_eq!(lookups.rules(Pos::Noun).map(|rules| rules.len()), Some(2));
        assert_eq!(
            lookups.rules(Pos::Verb).unwrap().matching("kimpaantunut"),
            vec![&SuffixRule::new(3, "a", Gradation::None)]
        );
        assert!(lookups.index(Pos::Noun).unwrap().contains("valikko"));
        assert_eq!(lookups.exceptions(Pos::Noun).unwrap().get("pojan"), ["poika"]);
        assert!(lookups.rules(Pos::Adverb).is_none());
    }

    #[test]
    fn test_lookups_unknown_pos() {
        let result = Lookups::from_json(r#"{"pron": []}"#, "{}", "{}");

        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::UnknownPos(key))) if key == "pron"
        ));
    }

    #[test]
    fn test_lookups_malformed_json() {
        let result = Lookups::from_json("{", "{}", "{}");
        assert!(matches!(result, Err(Error::Config(ConfigError::Serialization(_)))));

        let result = Lookups::from_json(r#"{"noun": [[1, 2]]}"#, "{}", "{}");
        assert!(matches!(result, Err(Error::Config(ConfigError::Serialization(_)))));
    }

    #[test]
    fn test_lookups_missing_directory() {
        let result = Lookups::load("does/not/exist");
        assert!(matches!(result, Err(Error::Config(ConfigError::File(_)))));
    }

    #[test]
    fn test_lookups_builder() {
        let mut lookups = Lookups::new();
        lookups
            .insert_rule(Pos::Noun, "ssa", SuffixRule::new(3, "", Gradation::None))
            .insert_lemma(Pos::Noun, "talo")
            .insert_exception(Pos::Noun, "pojissa", ["poika"]);

        assert_eq!(lookups.rules(Pos::Noun).unwrap().matching("talossa").len(), 1);
        assert!(lookups.index(Pos::Noun).unwrap().contains("talo"));
        assert_eq!(lookups.exceptions(Pos::Noun).unwrap().get("pojissa"), ["poika"]);
    }
}
