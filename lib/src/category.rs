//! Internal word categories and the mapping from external part-of-speech tags.

use std::fmt::{Display, Formatter};

use crate::{gradation::StemShape, validate::Validator};

/// Parts of speech the rule engine inflects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pos {
    Adjective,
    Adverb,
    Noun,
    Numeral,
    ProperNoun,
    Verb,
}

impl Pos {
    pub const ALL: [Pos; 6] = [
        Pos::Adjective,
        Pos::Adverb,
        Pos::Noun,
        Pos::Numeral,
        Pos::ProperNoun,
        Pos::Verb,
    ];

    /// Key of this part of speech in the lookup tables.
    #[inline]
    pub fn key(self) -> &'static str {
        match self {
            Pos::Adjective => "adj",
            Pos::Adverb => "adv",
            Pos::Noun => "noun",
            Pos::Numeral => "num",
            Pos::ProperNoun => "propn",
            Pos::Verb => "verb",
        }
    }

    /// Parses a table key. Both the table spelling and the inflecting UD tags
    /// are accepted, in any case.
    pub fn from_key(key: &str) -> Option<Self> {
        match Category::from_tag(key) {
            Category::Inflecting(pos) => Some(pos),
            Category::Punctuation | Category::Unknown => None,
        }
    }

    #[inline]
    pub fn shape(self) -> StemShape {
        match self {
            Pos::Verb => StemShape::Verbal,
            Pos::Adjective | Pos::Adverb | Pos::Noun | Pos::Numeral | Pos::ProperNoun => {
                StemShape::Nominal
            }
        }
    }

    /// Proper nouns are nouns, so both accept `-minen` derivations.
    #[inline]
    pub fn validator(self) -> Validator {
        match self {
            Pos::Noun | Pos::ProperNoun => Validator::Nominal,
            Pos::Adjective | Pos::Adverb | Pos::Numeral | Pos::Verb => Validator::General,
        }
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Inflecting(Pos),

    /// Returned as given.
    Punctuation,

    /// Returned lowercased.
    Unknown,
}

impl Category {
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim().to_ascii_uppercase();

        match tag.as_str() {
            "ADJ" => Category::Inflecting(Pos::Adjective),
            "ADV" => Category::Inflecting(Pos::Adverb),
            "NOUN" => Category::Inflecting(Pos::Noun),
            "NUM" => Category::Inflecting(Pos::Numeral),
            "PROPN" => Category::Inflecting(Pos::ProperNoun),
            "VERB" | "AUX" => Category::Inflecting(Pos::Verb),
            "PUNCT" | "SYM" => Category::Punctuation,
            _ => Category::Unknown,
        }
    }
}

impl From<Pos> for Category {
    fn from(pos: Pos) -> Self {
        Category::Inflecting(pos)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        category::{Category, Pos},
        gradation::StemShape,
        validate::Validator,
    };

    #[test]
    fn test_category_from_tag() {
        assert_eq!(Category::from_tag("NOUN"), Category::Inflecting(Pos::Noun));
        assert_eq!(Category::from_tag("propn"), Category::Inflecting(Pos::ProperNoun));
        assert_eq!(Category::from_tag("AUX"), Category::Inflecting(Pos::Verb));
        assert_eq!(Category::from_tag("PUNCT"), Category::Punctuation);
        assert_eq!(Category::from_tag("SYM"), Category::Punctuation);
        assert_eq!(Category::from_tag("ADP"), Category::Unknown);
        assert_eq!(Category::from_tag(""), Category::Unknown);
    }

    #[test]
    fn test_pos_keys_round_trip() {
        for pos in Pos::ALL {
            assert_eq!(Pos::from_key(pos.key()), Some(pos));
        }

        assert_eq!(Pos::from_key("punct"), None);
        assert_eq!(Pos::from_key("pron"), None);
    }

    #[test]
    fn test_pos_dispatch() {
        assert_eq!(Pos::Verb.shape(), StemShape::Verbal);
        assert_eq!(Pos::Noun.shape(), StemShape::Nominal);
        assert_eq!(Pos::Noun.validator(), Validator::Nominal);
        assert_eq!(Pos::ProperNoun.validator(), Validator::Nominal);
        assert_eq!(Pos::Adjective.validator(), Validator::General);
        assert_eq!(Pos::Verb.validator(), Validator::General);
    }
}
