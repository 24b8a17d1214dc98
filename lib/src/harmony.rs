//! Vowel harmony classification.

const BACK: [char; 3] = ['a', 'o', 'u'];
const FRONT: [char; 3] = ['ä', 'ö', 'y'];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Harmony {
    Front,
    Back,
    Indefinite,
}

impl Harmony {
    /// Classifies `word` by whichever harmony vowel occurs last. Words with
    /// only neutral vowels (`e`, `i`) are indefinite.
    pub fn of(word: &str) -> Self {
        let mut last_back = None;
        let mut last_front = None;

        for (position, ch) in word.chars().enumerate() {
            if BACK.contains(&ch) {
                last_back = Some(position);
            } else if FRONT.contains(&ch) {
                last_front = Some(position);
            }
        }

        match (last_back, last_front) {
            (Some(back), Some(front)) if back > front => Harmony::Back,
            (Some(_), Some(_)) => Harmony::Front,
            (Some(_), None) => Harmony::Back,
            (None, Some(_)) => Harmony::Front,
            (None, None) => Harmony::Indefinite,
        }
    }

    #[inline]
    pub fn is_compatible(self, other: Harmony) -> bool {
        !matches!(
            (self, other),
            (Harmony::Front, Harmony::Back) | (Harmony::Back, Harmony::Front)
        )
    }
}

/// Whether a stem and the suffix a rule attaches to it can share one word.
#[inline]
pub fn compatible(stem: &str, suffix: &str) -> bool {
    Harmony::of(stem).is_compatible(Harmony::of(suffix))
}

#[cfg(test)]
mod tests {
    use crate::harmony::{compatible, Harmony};

    #[test]
    fn test_harmony_type() {
        assert_eq!(Harmony::of("talo"), Harmony::Back);
        assert_eq!(Harmony::of("kylä"), Harmony::Front);
        assert_eq!(Harmony::of("tie"), Harmony::Indefinite);
        assert_eq!(Harmony::of(""), Harmony::Indefinite);
    }

    #[test]
    fn test_harmony_rightmost_vowel_wins() {
        // Compounds take the harmony of their last part.
        assert_eq!(Harmony::of("ampumahiihtäjä"), Harmony::Front);
        assert_eq!(Harmony::of("työlupa"), Harmony::Back);
        assert_eq!(Harmony::of("yliopisto"), Harmony::Back);
    }

    #[test]
    fn test_harmony_compatibility() {
        assert!(compatible("talo", "a"));
        assert!(compatible("kylä", "ä"));
        assert!(compatible("tie", "ä"));
        assert!(compatible("talo", ""));
        assert!(!compatible("talo", "ä"));
        assert!(!compatible("kylä", "a"));
    }
}
