extern crate hashbrown;

use hashbrown::HashSet;

/// Ending of nouns derived from the fourth infinitive (`löytäminen`).
pub const DEVERBAL_SUFFIX: &str = "minen";

/// Known base forms of one part of speech.
#[derive(Clone, Debug, Default)]
pub struct LemmaIndex {
    inner: HashSet<String>,
}

impl LemmaIndex {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn insert<S: Into<String>>(&mut self, lemma: S) -> bool {
        self.inner.insert(lemma.into())
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.inner.contains(word)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for LemmaIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for LemmaIndex {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.inner.extend(iter.into_iter().map(Into::into));
    }
}

/// Decides whether a candidate may be returned as a lemma.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validator {
    /// Listed in the index, or not a plain word at all (digits, hyphens,
    /// symbols are not inflected by the rules).
    General,

    /// As `General`, and also any `-minen` noun, since those are productive
    /// and never listed exhaustively.
    Nominal,
}

impl Validator {
    pub fn is_valid(self, candidate: &str, index: Option<&LemmaIndex>) -> bool {
        if candidate.is_empty() {
            return false;
        }

        let general = index.is_some_and(|index| index.contains(candidate))
            || !candidate.chars().all(char::is_alphabetic);

        match self {
            Validator::General => general,
            Validator::Nominal => general || candidate.ends_with(DEVERBAL_SUFFIX),
        }
    }
}
