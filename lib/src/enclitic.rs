//! Enclitic particle stripping.

/// Particles that attach to the end of an inflected word, including the
/// common fused sequences.
pub const FINNISH_ENCLITICS: [&str; 15] = [
    "ko", "kö", "han", "hän", "pa", "pä", "kaan", "kään", "kin", "kohan", "köhän", "pahan",
    "pähän", "kaankohan", "käänköhän",
];

#[derive(Clone, Debug)]
pub struct Enclitics {
    // Longest first, so the first hit is the longest match.
    particles: Vec<String>,
}

impl Default for Enclitics {
    fn default() -> Self {
        Self::new(FINNISH_ENCLITICS)
    }
}

impl Enclitics {
    pub fn new<I, S>(particles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut particles = particles
            .into_iter()
            .map(Into::into)
            .filter(|particle: &String| !particle.is_empty())
            .collect::<Vec<_>>();

        // Stable, so equally long particles keep their given priority.
        particles.sort_by_key(|particle| std::cmp::Reverse(particle.chars().count()));

        Self { particles }
    }

    /// The longest particle ending `word`, if any.
    pub fn matching(&self, word: &str) -> Option<&str> {
        self.particles
            .iter()
            .find(|particle| word.ends_with(particle.as_str()))
            .map(String::as_str)
    }

    /// Forms to try for an already lowercased `word`: the stripped form first
    /// when a particle could be removed, then `word` itself.
    pub fn candidates(&self, word: &str) -> Vec<String> {
        match self.matching(word) {
            Some(particle) => {
                let stripped = &word[..word.len() - particle.len()];

                if stripped.is_empty() || stripped == word {
                    vec![word.to_string()]
                } else {
                    vec![stripped.to_string(), word.to_string()]
                }
            }
            None => vec![word.to_string()],
        }
    }
}
