extern crate hashbrown;

use hashbrown::HashSet;

/// An insertion-ordered set of lemma candidates.
///
/// A repeated candidate keeps the position it was first added at, whether
/// it went to the back or the front.
#[derive(Debug, Default)]
pub struct Candidates {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl Candidates {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `candidate` unless it is already present.
    pub fn push<S: Into<String>>(&mut self, candidate: S) -> bool {
        let candidate = candidate.into();

        if self.seen.contains(&candidate) {
            return false;
        }

        self.seen.insert(candidate.clone());
        self.order.push(candidate);
        true
    }

    /// Puts `candidate` first unless it is already present.
    pub fn push_front<S: Into<String>>(&mut self, candidate: S) -> bool {
        let candidate = candidate.into();

        if self.seen.contains(&candidate) {
            return false;
        }

        self.seen.insert(candidate.clone());
        self.order.insert(0, candidate);
        true
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}
