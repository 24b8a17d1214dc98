//! Consonant gradation reversal.
//!
//! A rewritten stem may still carry the grade of the inflected form, e.g.
//! `valiko` from `valikon`. Each [`GradationPattern`] locates the alternating
//! consonants of the last syllable boundary and swaps them for the other
//! grade using the literal table of its [`GradationClass`].

extern crate log;
extern crate regex;

use std::cmp::Reverse;

use log::trace;
use regex::Regex;

use crate::{error::ConfigError, rule::Gradation};

const VOWELS: &str = "aeiouyäöé";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GradationClass {
    /// `kk`, `pp`, `tt` against `k`, `p`, `t`.
    Geminate,
    /// Clusters assimilating to the preceding sonorant: `nk`/`ng`, `mp`/`mm`,
    /// `lt`/`ll`, `nt`/`nn`, `rt`/`rr`.
    Assimilation,
    Dental,
    /// `p`/`v`, and `k`/`v` between rounded vowels (`luku`/`luvun`).
    Labial,
    /// `k`/`j` after a liquid or `h` (`särki`/`särjen`).
    Palatal,
    /// `k` disappearing in the weak grade.
    Velar,
}

impl GradationClass {
    pub const ALL: [GradationClass; 6] = [
        GradationClass::Geminate,
        GradationClass::Assimilation,
        GradationClass::Dental,
        GradationClass::Labial,
        GradationClass::Palatal,
        GradationClass::Velar,
    ];

    /// `(strong, weak)` pairs.
    pub fn alternations(self) -> &'static [(&'static str, &'static str)] {
        match self {
            GradationClass::Geminate => &[("kk", "k"), ("pp", "p"), ("tt", "t")],
            GradationClass::Assimilation => &[
                ("nk", "ng"),
                ("mp", "mm"),
                ("lt", "ll"),
                ("nt", "nn"),
                ("rt", "rr"),
            ],
            GradationClass::Dental => &[("t", "d")],
            GradationClass::Labial => &[("p", "v"), ("k", "v")],
            GradationClass::Palatal => &[("k", "j")],
            GradationClass::Velar => &[("k", "")],
        }
    }

    // Characters allowed right before the alternating segment.
    fn left_context(self) -> &'static str {
        match self {
            GradationClass::Geminate => "[aeiouyäöélrnmh]",
            GradationClass::Assimilation => "[aeiouyäöé]",
            GradationClass::Dental | GradationClass::Velar => "[aeiouyäöéh]",
            GradationClass::Labial => "[aeiouyäöélrh]",
            GradationClass::Palatal => "[lrh]",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Weaken,
    Strengthen,
}

impl Direction {
    /// The direction that undoes the gradation a rule declares.
    #[inline]
    pub fn reversing(gradation: Gradation) -> Option<Self> {
        match gradation {
            Gradation::None => None,
            Gradation::Weak => Some(Direction::Strengthen),
            Gradation::Strong => Some(Direction::Weaken),
        }
    }

    #[inline]
    fn source(self, (strong, weak): (&'static str, &'static str)) -> &'static str {
        match self {
            Direction::Weaken => strong,
            Direction::Strengthen => weak,
        }
    }

    #[inline]
    fn target(self, (strong, weak): (&'static str, &'static str)) -> &'static str {
        match self {
            Direction::Weaken => weak,
            Direction::Strengthen => strong,
        }
    }
}

/// Where the gradation site sits relative to the end of a lemma-like stem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StemShape {
    /// Last syllable: `valik|k|o`, `op|p|as`.
    Nominal,
    /// Vowel stem plus an optional infinitive ending: `a|nt|aa`, `hy|pp|ätä`.
    Verbal,
}

impl StemShape {
    fn trailing(self) -> String {
        match self {
            StemShape::Nominal => format!("[{VOWELS}]+[^{VOWELS}]{{0,2}}"),
            StemShape::Verbal => "[aeiouyäö]+(?:[dt][aä])?".to_string(),
        }
    }
}

/// A string split around its alternating segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Split<'w> {
    pub prefix: &'w str,
    pub segment: &'w str,
    pub trailing: &'w str,
}

impl Split<'_> {
    /// Whether putting `replacement` in place of the segment would put two
    /// identical characters side by side where the original had none.
    pub fn collides(&self, replacement: &str) -> bool {
        let before = self.prefix.chars().last();
        let after = self.trailing.chars().next();

        let joints = |segment: &str| {
            [
                (before, segment.chars().next().or(after)),
                (segment.chars().last().or(before), after),
            ]
        };

        joints(replacement)
            .iter()
            .zip(joints(self.segment).iter())
            .any(|(new, old)| is_double(*new) && !is_double(*old))
    }
}

#[inline]
fn is_double(pair: (Option<char>, Option<char>)) -> bool {
    matches!(pair, (Some(left), Some(right)) if left == right)
}

#[derive(Clone, Debug)]
pub struct GradationPattern {
    class: GradationClass,
    direction: Direction,
    matcher: Regex,
}

impl GradationPattern {
    pub fn new(
        class: GradationClass,
        direction: Direction,
        shape: StemShape,
    ) -> Result<Self, ConfigError> {
        let mut sources = class
            .alternations()
            .iter()
            .map(|pair| direction.source(*pair))
            .collect::<Vec<_>>();

        sources.sort_by_key(|source| Reverse(source.len()));
        sources.dedup();

        let alternatives = sources
            .iter()
            .map(|source| regex::escape(source))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = format!(
            "^(.*{})({alternatives})({})$",
            class.left_context(),
            shape.trailing()
        );

        Ok(Self {
            class,
            direction,
            matcher: Regex::new(&pattern)?,
        })
    }

    #[inline]
    pub fn class(&self) -> GradationClass {
        self.class
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn split<'w>(&self, word: &'w str) -> Option<Split<'w>> {
        let captures = self.matcher.captures(word)?;

        Some(Split {
            prefix: captures.get(1)?.as_str(),
            segment: captures.get(2)?.as_str(),
            trailing: captures.get(3)?.as_str(),
        })
    }

    /// Segments of the opposite grade for a matched `segment`.
    pub fn substitutes<'a>(&'a self, segment: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.class
            .alternations()
            .iter()
            .filter(move |pair| self.direction.source(**pair) == segment)
            .map(move |pair| self.direction.target(*pair))
    }

    /// Every reconstruction of `word` this pattern allows.
    pub fn reconstruct(&self, word: &str) -> Vec<String> {
        let Some(split) = self.split(word) else {
            return Vec::new();
        };

        self.substitutes(split.segment)
            .filter(|replacement| {
                let collides = split.collides(replacement);
                if collides {
                    trace!("{word}: {:?} {replacement:?} rejected", self.class);
                }
                !collides
            })
            .map(|replacement| format!("{}{replacement}{}", split.prefix, split.trailing))
            .collect()
    }
}

/// All gradation patterns, one ordered list per stem shape and direction.
#[derive(Clone, Debug)]
pub struct GradationRules {
    nominal_weaken: Vec<GradationPattern>,
    nominal_strengthen: Vec<GradationPattern>,
    verbal_weaken: Vec<GradationPattern>,
    verbal_strengthen: Vec<GradationPattern>,
}

impl GradationRules {
    pub fn new() -> Result<Self, ConfigError> {
        let build = |shape, direction| {
            GradationClass::ALL
                .iter()
                .map(|class| GradationPattern::new(*class, direction, shape))
                .collect::<Result<Vec<_>, _>>()
        };

        Ok(Self {
            nominal_weaken: build(StemShape::Nominal, Direction::Weaken)?,
            nominal_strengthen: build(StemShape::Nominal, Direction::Strengthen)?,
            verbal_weaken: build(StemShape::Verbal, Direction::Weaken)?,
            verbal_strengthen: build(StemShape::Verbal, Direction::Strengthen)?,
        })
    }

    #[inline]
    pub fn patterns(&self, shape: StemShape, direction: Direction) -> &[GradationPattern] {
        match (shape, direction) {
            (StemShape::Nominal, Direction::Weaken) => &self.nominal_weaken,
            (StemShape::Nominal, Direction::Strengthen) => &self.nominal_strengthen,
            (StemShape::Verbal, Direction::Weaken) => &self.verbal_weaken,
            (StemShape::Verbal, Direction::Strengthen) => &self.verbal_strengthen,
        }
    }

    /// Variants of `word` to validate: every accepted reconstruction in
    /// pattern order, then `word` itself.
    pub fn variants(&self, word: &str, gradation: Gradation, shape: StemShape) -> Vec<String> {
        let Some(direction) = Direction::reversing(gradation) else {
            return vec![word.to_string()];
        };

        let mut variants = Vec::new();

        for pattern in self.patterns(shape, direction) {
            for variant in pattern.reconstruct(word) {
                if variant != word && !variants.contains(&variant) {
                    variants.push(variant);
                }
            }
        }

        variants.push(word.to_string());
        variants
    }
}
