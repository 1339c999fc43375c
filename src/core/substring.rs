//! Code-point addressed substring helpers.
//!
//! Every offset is counted in Unicode scalar values, never bytes. Offsets
//! outside the text produce [`StrKitError::IndexOutOfRange`] instead of being
//! clamped.

use crate::utils::error::{Result, StrKitError};
use std::ops::Range;

/// Translates a code-point range into the matching byte range of `input`.
fn byte_range(input: &str, start: usize, end: usize) -> Result<Range<usize>> {
    let out_of_range = || StrKitError::IndexOutOfRange {
        start,
        end,
        len: input.chars().count(),
    };

    if start > end {
        return Err(out_of_range());
    }

    // Byte offset of every code point boundary, including the end of the text.
    let mut boundaries = input
        .char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(input.len()));

    let start_byte = boundaries.nth(start).ok_or_else(out_of_range)?;
    let end_byte = if end == start {
        start_byte
    } else {
        boundaries.nth(end - start - 1).ok_or_else(out_of_range)?
    };

    Ok(start_byte..end_byte)
}

/// Returns `length` code points starting at `start`.
///
/// ```
/// use strkit::core::substring::substring;
/// assert_eq!(substring("abcdefg", 3, 2).unwrap(), "de");
/// assert!(substring("abc", 5, 1).is_err());
/// ```
pub fn substring(input: &str, start: usize, length: usize) -> Result<String> {
    let end = start
        .checked_add(length)
        .ok_or_else(|| StrKitError::IndexOutOfRange {
            start,
            end: usize::MAX,
            len: input.chars().count(),
        })?;
    slice(input, start..end)
}

pub fn slice(input: &str, range: Range<usize>) -> Result<String> {
    let bytes = byte_range(input, range.start, range.end)?;
    Ok(input[bytes].to_string())
}

pub fn char_at(input: &str, index: usize) -> Result<char> {
    input
        .chars()
        .nth(index)
        .ok_or_else(|| StrKitError::IndexOutOfRange {
            start: index,
            end: index.saturating_add(1),
            len: input.chars().count(),
        })
}

/// The first `end` code points.
pub fn substring_to(input: &str, end: usize) -> Result<String> {
    slice(input, 0..end)
}

/// Everything from code point `start` to the end.
pub fn substring_from(input: &str, start: usize) -> Result<String> {
    let len = input.chars().count();
    slice(input, start..len.max(start))
}

/// Replaces `length` code points at `start` with `replacement`.
pub fn replace_range(input: &str, start: usize, length: usize, replacement: &str) -> Result<String> {
    let end = start
        .checked_add(length)
        .ok_or_else(|| StrKitError::IndexOutOfRange {
            start,
            end: usize::MAX,
            len: input.chars().count(),
        })?;
    let bytes = byte_range(input, start, end)?;

    let mut replaced = String::with_capacity(input.len() - bytes.len() + replacement.len());
    replaced.push_str(&input[..bytes.start]);
    replaced.push_str(replacement);
    replaced.push_str(&input[bytes.end..]);
    Ok(replaced)
}

/// Left pads `input` with `pad` until it is at least `min_width` code points wide.
pub fn left_pad(input: &str, pad: char, min_width: usize) -> String {
    let count = input.chars().count();
    if min_width <= count {
        return input.to_string();
    }

    let mut padded: String = std::iter::repeat(pad).take(min_width - count).collect();
    padded.push_str(input);
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_ascii() {
        assert_eq!(substring("abcdefg", 3, 2).unwrap(), "de");
        assert_eq!(substring("abcdefg", 0, 7).unwrap(), "abcdefg");
        assert_eq!(substring("abcdefg", 7, 0).unwrap(), "");
    }

    #[test]
    fn test_substring_counts_code_points() {
        assert_eq!(substring("中文字符串", 1, 3).unwrap(), "文字符");
        assert_eq!(substring("a😀b", 1, 1).unwrap(), "😀");
    }

    #[test]
    fn test_substring_out_of_range() {
        match substring("abc", 5, 1) {
            Err(StrKitError::IndexOutOfRange { start, end, len }) => {
                assert_eq!((start, end, len), (5, 6, 3));
            }
            other => panic!("expected IndexOutOfRange, got {:?}", other),
        }
        assert!(substring("abc", 2, 2).is_err());
        assert!(substring("abc", 1, usize::MAX).is_err());
    }

    #[test]
    fn test_slice_rejects_reversed_range() {
        assert!(slice("abcdef", 4..2).is_err());
        assert_eq!(slice("abcdefg", 3..4).unwrap(), "d");
    }

    #[test]
    fn test_char_at() {
        assert_eq!(char_at("abcdefg", 3).unwrap(), 'd');
        assert_eq!(char_at("你好", 1).unwrap(), '好');
        assert!(char_at("你好", 2).is_err());
    }

    #[test]
    fn test_prefix_and_suffix() {
        assert_eq!(substring_to("abcdefg", 3).unwrap(), "abc");
        assert_eq!(substring_from("abcdefg", 3).unwrap(), "defg");
        assert_eq!(substring_from("abc", 3).unwrap(), "");
        assert!(substring_to("abc", 4).is_err());
        assert!(substring_from("abc", 4).is_err());
    }

    #[test]
    fn test_replace_range() {
        assert_eq!(
            replace_range("http://a.com", 0, 4, "https").unwrap(),
            "https://a.com"
        );
        assert_eq!(replace_range("你好世界", 2, 2, "朋友").unwrap(), "你好朋友");
        assert!(replace_range("abc", 2, 5, "x").is_err());
    }

    #[test]
    fn test_left_pad() {
        assert_eq!(left_pad("7", '0', 3), "007");
        assert_eq!(left_pad("1234", '0', 3), "1234");
        assert_eq!(left_pad("中", '*', 2), "*中");
    }
}
