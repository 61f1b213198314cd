//! Text normalisation shared by every record type.
//!
//! Stored text is trimmed. Blank optional text is stored as absent.

/// Returns the trimmed text, or `None` when nothing but whitespace remains.
pub(crate) fn trimmed(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Trims each entry of a list and drops blank entries, preserving order.
pub(crate) fn trimmed_list<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .filter_map(|entry| trimmed(entry.as_ref()))
        .collect()
}
