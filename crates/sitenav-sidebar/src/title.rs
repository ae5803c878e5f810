//! Display title derivation from slug segments.

/// Derive a display title from a slug segment.
///
/// Hyphens become spaces and the first letter of each word is capitalized:
/// `"getting-started"` becomes `"Getting Started"`. Used for group labels
/// and for documents without an explicit title.
#[must_use]
pub fn humanize(segment: &str) -> String {
    segment
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character of a word, leaving the rest untouched.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
