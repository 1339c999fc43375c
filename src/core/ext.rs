//! Method-call access to the helpers in this crate.
//!
//! ```
//! use strkit::core::ext::StrExt;
//!
//! assert!("13800138000".is_mobile_phone());
//! assert_eq!("abcdefg".substring(3, 2).unwrap(), "de");
//! ```

use crate::core::{blank, case, id_card, markup, patterns, substring};
use crate::utils::error::Result;
use std::fmt::Display;

/// String helpers
pub trait StrExt {
    fn substring(&self, start: usize, length: usize) -> Result<String>;
    fn char_at(&self, index: usize) -> Result<char>;
    fn substring_to(&self, end: usize) -> Result<String>;
    fn substring_from(&self, start: usize) -> Result<String>;
    fn replace_range(&self, start: usize, length: usize, replacement: &str) -> Result<String>;
    fn left_pad(&self, pad: char, min_width: usize) -> String;

    fn is_national_id(&self) -> bool;
    fn is_mobile_phone(&self) -> bool;
    fn is_wechat_id(&self) -> bool;
    fn is_all_chinese(&self) -> bool;
    fn is_input_text(&self) -> bool;
    fn is_integer(&self) -> bool;
    fn is_blank(&self) -> bool;

    fn to_ascii_lower(&self) -> String;
    fn strip_html_tags(&self) -> String;
    fn http_to_https(&self) -> String;
    fn url_encode(&self) -> String;
    fn circle_image_url(&self) -> String;
}

impl StrExt for str {
    fn substring(&self, start: usize, length: usize) -> Result<String> {
        substring::substring(self, start, length)
    }

    fn char_at(&self, index: usize) -> Result<char> {
        substring::char_at(self, index)
    }

    fn substring_to(&self, end: usize) -> Result<String> {
        substring::substring_to(self, end)
    }

    fn substring_from(&self, start: usize) -> Result<String> {
        substring::substring_from(self, start)
    }

    fn replace_range(&self, start: usize, length: usize, replacement: &str) -> Result<String> {
        substring::replace_range(self, start, length, replacement)
    }

    fn left_pad(&self, pad: char, min_width: usize) -> String {
        substring::left_pad(self, pad, min_width)
    }

    fn is_national_id(&self) -> bool {
        id_card::is_national_id(self)
    }

    fn is_mobile_phone(&self) -> bool {
        patterns::is_mobile_phone(self)
    }

    fn is_wechat_id(&self) -> bool {
        patterns::is_wechat_id(self)
    }

    fn is_all_chinese(&self) -> bool {
        patterns::is_all_chinese(self)
    }

    fn is_input_text(&self) -> bool {
        patterns::is_input_text(self)
    }

    fn is_integer(&self) -> bool {
        patterns::is_integer(self)
    }

    fn is_blank(&self) -> bool {
        blank::is_blank(Some(self))
    }

    fn to_ascii_lower(&self) -> String {
        case::to_ascii_lower(self)
    }

    fn strip_html_tags(&self) -> String {
        markup::strip_html_tags(self)
    }

    fn http_to_https(&self) -> String {
        markup::http_to_https(self)
    }

    fn url_encode(&self) -> String {
        markup::url_encode(self)
    }

    fn circle_image_url(&self) -> String {
        markup::circle_image_url(self)
    }
}

/// Renders an optional value for logs, printing `nil` for `None`.
pub trait OrNil {
    fn or_nil(&self) -> String;
}

impl<T: Display> OrNil for Option<T> {
    fn or_nil(&self) -> String {
        match self {
            Some(value) => value.to_string(),
            None => "nil".to_string(),
        }
    }
}
