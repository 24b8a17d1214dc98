/// Splits `word` at its last hyphen into the untouched head and the tail that
/// gets lemmatized. Words with no hyphen, or with nothing on one side of it,
/// are not split.
pub fn split_compound(word: &str) -> Option<(&str, &str)> {
    let (head, tail) = word.rsplit_once('-')?;

    if head.is_empty() || tail.is_empty() {
        return None;
    }

    Some((head, tail))
}

/// Puts the head back in front of every lemma found for the tail.
pub fn reattach<I>(head: &str, lemmas: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    lemmas
        .into_iter()
        .map(|lemma| format!("{head}-{lemma}"))
        .collect()
}
