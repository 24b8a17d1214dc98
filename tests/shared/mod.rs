use std::path::PathBuf;

use fi_lemma::{Lemmatizer, Lookups};

pub(crate) fn lookups_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fi")
}

pub(crate) fn get_test_lemmatizer() -> Lemmatizer {
    let lookups = Lookups::load(lookups_dir()).unwrap();
    Lemmatizer::new(lookups).unwrap()
}

/// Inflected forms and their expected primary lemma, by tag.
pub(crate) fn get_test_regressions() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("valikon", "NOUN", "valikko"),
        ("oppaan", "NOUN", "opas"),
        ("haan", "NOUN", "haka"),
        ("talossa", "NOUN", "talo"),
        ("talossakin", "NOUN", "talo"),
        ("1500-luvulla", "NOUN", "1500-luku"),
        ("ylitöissä", "NOUN", "ylityö"),
        ("johdolle", "NOUN", "johto"),
        ("hangossa", "NOUN", "hanko"),
        ("kadulla", "NOUN", "katu"),
        ("linnut", "NOUN", "lintu"),
        ("kukan", "NOUN", "kukka"),
        ("pöydällä", "NOUN", "pöytä"),
        ("vuoden", "NOUN", "vuosi"),
        ("yhteisyyden", "NOUN", "yhteisyys"),
        ("löytämisen", "NOUN", "löytäminen"),
        ("pojissa", "NOUN", "poika"),
        ("miehen", "NOUN", "mies"),
        ("annan", "VERB", "antaa"),
        ("kimpaantunut", "VERB", "kimpaantua"),
        ("tuli", "VERB", "tulla"),
        ("tulee", "VERB", "tulla"),
        ("hyppää", "VERB", "hypätä"),
        ("puhuu", "VERB", "puhua"),
        ("olen", "AUX", "olla"),
        ("lähdin", "VERB", "lähteä"),
        ("hyvää", "ADJ", "hyvä"),
        ("suuriin", "ADJ", "suuri"),
        ("uuden", "ADJ", "uusi"),
        ("avointa", "ADJ", "avoin"),
        ("kauniin", "ADJ", "kaunis"),
        ("parempi", "ADJ", "hyvä"),
        ("nopeammin", "ADV", "nopeasti"),
        ("viiden", "NUM", "viisi"),
        ("kahdessa", "NUM", "kaksi"),
        ("Helsingissä", "PROPN", "helsinki"),
        ("Espoossa", "PROPN", "espoo"),
        ("Suomessa", "PROPN", "suomi"),
    ]
}
