//! Mainland China resident identity card number checksum (GB 11643-1999).

const ID_LENGTH: usize = 18;

/// Positional weights applied to the first seventeen digits.
const WEIGHTS: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

/// Expected check character indexed by `sum % 11`.
const CHECK_CHARS: [char; 11] = ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'];

/// Computes the check character for a seventeen digit prefix.
///
/// Returns `None` unless `prefix` is exactly seventeen ASCII digits.
pub fn national_id_check_char(prefix: &str) -> Option<char> {
    let bytes = prefix.as_bytes();
    if bytes.len() != WEIGHTS.len() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let sum: u32 = bytes
        .iter()
        .zip(WEIGHTS.iter())
        .map(|(digit, weight)| u32::from(digit - b'0') * weight)
        .sum();

    Some(CHECK_CHARS[(sum % 11) as usize])
}

/// Returns true when `input` is an eighteen character ID number whose final
/// character matches the weighted checksum of the preceding digits. The check
/// character `X` is accepted in either case.
pub fn is_national_id(input: &str) -> bool {
    if input.chars().count() != ID_LENGTH {
        return false;
    }

    let mut chars = input.chars();
    let Some(last) = chars.next_back() else {
        return false;
    };

    match national_id_check_char(chars.as_str()) {
        Some(expected) => expected == last.to_ascii_uppercase(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_valid_numbers() {
        assert!(is_national_id("11010519491231002X"));
        assert!(is_national_id("11010519491231002x"));
        assert!(is_national_id("440304199001010011"));
        assert!(is_national_id("320102198005151238"));
    }

    #[test]
    fn test_wrong_check_char() {
        assert!(!is_national_id("110105194912310021"));
        assert!(!is_national_id("440304199001010012"));
    }

    #[test]
    fn test_wrong_length() {
        assert!(!is_national_id(""));
        assert!(!is_national_id("11010519491231002"));
        assert!(!is_national_id("11010519491231002X0"));
    }

    #[test]
    fn test_non_digit_prefix() {
        assert!(!is_national_id("1101051949123100AX"));
        assert!(!is_national_id("-1010519491231002X"));
        assert!(!is_national_id(" 1010519491231002X"));
        // 18 code points, but the prefix is not ASCII.
        assert!(!is_national_id("１１０１０５１９４９１２３１００２X"));
    }

    #[test]
    fn test_check_char_table() {
        assert_eq!(national_id_check_char("11010519491231002"), Some('X'));
        assert_eq!(national_id_check_char("51010419871212888"), Some('7'));
        assert_eq!(national_id_check_char("1101051949123100"), None);
        assert_eq!(national_id_check_char("1101051949123100a"), None);
    }
}
