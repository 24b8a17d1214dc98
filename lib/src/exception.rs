extern crate hashbrown;

use hashbrown::HashMap;

/// Forms whose lemmas override whatever the rules derive, mostly irregular
/// words (`pojissa` / `poika`, `olen` / `olla`).
#[derive(Clone, Debug, Default)]
pub struct ExceptionTable {
    inner: HashMap<String, Vec<String>>,
}

impl ExceptionTable {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds lemmas for `form` after any it already has.
    pub fn insert<S, I, L>(&mut self, form: S, lemmas: I)
    where
        S: Into<String>,
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        let entry = self.inner.entry(form.into()).or_default();

        for lemma in lemmas {
            let lemma = lemma.into();
            if !entry.contains(&lemma) {
                entry.push(lemma);
            }
        }
    }

    /// Lemmas for `form` in priority order; empty when there is no entry.
    #[inline]
    pub fn get(&self, form: &str) -> &[String] {
        self.inner.get(form).map(Vec::as_slice).unwrap_or_default()
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
