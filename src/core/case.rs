//! ASCII-only lowercase mapping.

/// Maps `A`..=`Z` to `a`..=`z`; every other code point is returned unchanged.
pub fn lower_ascii_char(ch: char) -> char {
    if ch.is_ascii_uppercase() {
        char::from(ch as u8 + 32)
    } else {
        ch
    }
}

/// Lowercases ASCII letters only, leaving non-ASCII text verbatim.
///
/// Unlike [`str::to_lowercase`], `"ÄB"` becomes `"Äb"`.
pub fn to_ascii_lower(input: &str) -> String {
    input.chars().map(lower_ascii_char).collect()
}
