//! Suffix-rewrite rules and the suffix trie that indexes them.

use serde::Deserialize;

use crate::{error::ConfigError, trie::Trie};

/// Consonant gradation required to undo a rule.
///
/// `Weak` marks a rule whose inflected form shows the weak grade where the
/// lemma has the strong one (`valikon` / `valikko`), so the rewritten stem
/// must be strengthened. `Strong` is the inverse (`oppaan` / `opas`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gradation {
    #[default]
    None,
    Weak,
    Strong,
}

/// Removes the last `delete` characters of a word and appends `add`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuffixRule {
    delete: usize,
    add: String,
    gradation: Gradation,
}

impl SuffixRule {
    #[inline]
    pub fn new<S: Into<String>>(delete: usize, add: S, gradation: Gradation) -> Self {
        Self {
            delete,
            add: add.into(),
            gradation,
        }
    }

    #[inline]
    pub fn delete(&self) -> usize {
        self.delete
    }

    #[inline]
    pub fn add(&self) -> &str {
        &self.add
    }

    #[inline]
    pub fn gradation(&self) -> Gradation {
        self.gradation
    }

    /// A rule that only truncates, as citation forms do.
    #[inline]
    pub fn is_truncation(&self) -> bool {
        self.add.is_empty()
    }

    /// The part of `word` the rule keeps, or `None` when the word is shorter
    /// than the deletion.
    pub fn stem<'w>(&self, word: &'w str) -> Option<&'w str> {
        if self.delete == 0 {
            return Some(word);
        }

        word.char_indices()
            .rev()
            .nth(self.delete - 1)
            .map(|(position, _)| &word[..position])
    }

    /// Rewrites `word`, returning `None` when the rule cannot apply.
    pub fn apply(&self, word: &str) -> Option<String> {
        self.stem(word).map(|stem| format!("{stem}{}", self.add))
    }
}

/// One rule as written in a rule table.
///
/// Accepted shapes are `[suffix, add]`, `[suffix, add, gradation]` and
/// `{"suffix": .., "delete": .., "add": .., "gradation": ..}`.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum RuleEntry {
    Triple(String, String, Gradation),
    Pair(String, String),
    Full {
        suffix: String,
        #[serde(default)]
        delete: Option<usize>,
        #[serde(default)]
        add: String,
        #[serde(default)]
        gradation: Gradation,
    },
}

impl RuleEntry {
    /// Splits the entry into the suffix it is keyed on and the rule itself.
    pub fn into_rule(self) -> Result<(String, SuffixRule), ConfigError> {
        let (suffix, delete, add, gradation) = match self {
            RuleEntry::Triple(suffix, add, gradation) => (suffix, None, add, gradation),
            RuleEntry::Pair(suffix, add) => (suffix, None, add, Gradation::None),
            RuleEntry::Full {
                suffix,
                delete,
                add,
                gradation,
            } => (suffix, delete, add, gradation),
        };

        let length = suffix.chars().count();
        let delete = delete.unwrap_or(length);

        if delete > length {
            return Err(ConfigError::Rule { suffix, delete });
        }

        Ok((suffix, SuffixRule::new(delete, add, gradation)))
    }
}

/// The flattened rule set of one part of speech, indexed by reversed suffix.
#[derive(Debug, Default)]
pub struct RuleSet {
    trie: Trie<SuffixRule>,
}

impl RuleSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    pub fn insert(&mut self, suffix: &str, rule: SuffixRule) {
        self.trie.insert(suffix.chars().rev(), rule);
    }

    pub fn insert_entry(&mut self, entry: RuleEntry) -> Result<(), ConfigError> {
        let (suffix, rule) = entry.into_rule()?;
        self.insert(&suffix, rule);
        Ok(())
    }

    /// Every rule whose suffix ends `word`, shortest suffix first.
    #[inline]
    pub fn matching(&self, word: &str) -> Vec<&SuffixRule> {
        self.trie.find(word.chars().rev())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::ConfigError,
        rule::{Gradation, RuleEntry, RuleSet, SuffixRule},
    };

    #[test]
    fn test_rule_apply() {
        let rule = SuffixRule::new(3, "", Gradation::None);
        assert_eq!(rule.apply("talossa"), Some("talo".to_string()));

        let rule = SuffixRule::new(3, "as", Gradation::Strong);
        assert_eq!(rule.apply("oppaan"), Some("oppas".to_string()));
    }

    #[test]
    fn test_rule_apply_counts_characters() {
        let rule = SuffixRule::new(5, "yö", Gradation::None);
        assert_eq!(rule.apply("ylitöissä"), Some("ylityö".to_string()));
        assert_eq!(rule.stem("öissä"), Some(""));
    }

    #[test]
    fn test_rule_apply_too_short() {
        let rule = SuffixRule::new(4, "", Gradation::None);
        assert_eq!(rule.apply("ssa"), None);

        let rule = SuffixRule::new(0, "a", Gradation::None);
        assert_eq!(rule.apply(""), Some("a".to_string()));
    }

    #[test]
    fn test_rule_entry_shapes() {
        let entries: Vec<RuleEntry> =
            serde_json::from_str(r#"[["ssa", ""], ["n", "", "weak"], {"suffix": "kin", "delete": 2}]"#)
                .unwrap();

        let rules = entries
            .into_iter()
            .map(|entry| entry.into_rule().unwrap())
            .collect::<Vec<_>>();

        assert_eq!(rules[0], ("ssa".into(), SuffixRule::new(3, "", Gradation::None)));
        assert_eq!(rules[1], ("n".into(), SuffixRule::new(1, "", Gradation::Weak)));
        assert_eq!(rules[2], ("kin".into(), SuffixRule::new(2, "", Gradation::None)));
    }

    #[test]
    fn test_rule_entry_delete_too_long() {
        let entry = RuleEntry::Full {
            suffix: "n".into(),
            delete: Some(2),
            add: String::new(),
            gradation: Gradation::None,
        };

        assert_eq!(
            entry.into_rule(),
            Err(ConfigError::Rule {
                suffix: "n".into(),
                delete: 2
            })
        );
    }

    #[test]
    fn test_rule_set_matching_order() {
        let mut rules = RuleSet::new();
        rules.insert("ssa", SuffixRule::new(3, "", Gradation::None));
        rules.insert("a", SuffixRule::new(1, "", Gradation::None));
        rules.insert("issa", SuffixRule::new(4, "a", Gradation::Weak));
        rules.insert("n", SuffixRule::new(1, "", Gradation::None));

        let matched = rules.matching("kukissa");
        assert_eq!(
            matched,
            vec![
                &SuffixRule::new(1, "", Gradation::None),
                &SuffixRule::new(3, "", Gradation::None),
                &SuffixRule::new(4, "a", Gradation::Weak),
            ]
        );
        assert!(rules.matching("xyz").is_empty());
    }
}
