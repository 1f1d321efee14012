use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Accent- and punctuation-insensitive comparison keys for recipe labels.
///
/// Remote results are not reliably alphabetically ordered, and accents must
/// not perturb ordering, so every label gets a normalized form used only for
/// sorting and matching. The key is never shown to the user.
///
/// Normalization decomposes accented characters (NFD) and drops the combining
/// marks, spells out `&` as `and`, and removes every remaining character that
/// is not an ASCII letter, digit, or whitespace.
pub fn normalize(label: &str) -> String {
    let mut out = String::with_capacity(label.len());

    for c in label.nfd().filter(|c| !is_combining_mark(*c)) {
        if c == '&' {
            out.push_str("and");
        } else if c.is_ascii_alphanumeric() || c.is_whitespace() {
            out.push(c);
        }
    }

    out
}

/// Key used for ordering the current page
pub fn sort_key(label: &str) -> String {
    normalize(label).to_uppercase()
}

/// Key used for the starts-with search filter
pub fn filter_key(label: &str) -> String {
    normalize(label).to_lowercase()
}
