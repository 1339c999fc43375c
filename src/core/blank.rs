//! Emptiness checks for optional text.

/// Placeholder shown instead of a value the user chose to hide ("secret").
pub const PRIVACY_PLACEHOLDER: &str = "保密";

/// True for `None`, or when removing every space, `\n` and `\r` leaves nothing.
///
/// Only those three characters are ignored; a tab counts as content.
pub fn is_blank(input: Option<&str>) -> bool {
    match input {
        None => true,
        Some(text) => text.chars().all(|c| matches!(c, ' ' | '\n' | '\r')),
    }
}

/// True when there is something worth showing: not blank and not the privacy placeholder.
pub fn is_displayable(input: Option<&str>) -> bool {
    !is_blank(input) && input != Some(PRIVACY_PLACEHOLDER)
}
