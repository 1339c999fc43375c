//! Anchored regular-expression validators.

use crate::utils::error::Result;
use regex::Regex;
use std::sync::LazyLock;

/// A compiled regular expression that only accepts whole-input matches.
#[derive(Debug, Clone)]
pub struct AnchoredPattern {
    regex: Regex,
}

impl AnchoredPattern {
    /// Compiles `source`, wrapped so that it has to consume the entire input.
    pub fn new(source: &str) -> Result<Self> {
        let regex = Regex::new(&format!("^(?:{})$", source))?;
        Ok(Self { regex })
    }

    /// For the built-in patterns; these are all exercised by the unit tests.
    fn fixed(source: &str) -> Self {
        Self::new(source).expect("built-in pattern must compile")
    }

    pub fn is_full_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

static MOBILE_PHONE: LazyLock<AnchoredPattern> =
    LazyLock::new(|| AnchoredPattern::fixed(r"1[2-9][0-9]{9}"));

static WECHAT_ID: LazyLock<AnchoredPattern> =
    LazyLock::new(|| AnchoredPattern::fixed(r"[a-zA-Z][-_a-zA-Z0-9]{5,19}"));

static ALL_CHINESE: LazyLock<AnchoredPattern> =
    LazyLock::new(|| AnchoredPattern::fixed(r"[\u{4e00}-\u{9fa5}]+"));

static INPUT_TEXT: LazyLock<AnchoredPattern> =
    LazyLock::new(|| AnchoredPattern::fixed(r"[a-zA-Z\u{4e00}-\u{9fa5}\d\s]*"));

const MOBILE_PHONE_LENGTH: usize = 11;

/// Eleven digit mainland mobile number starting with `1[2-9]`.
pub fn is_mobile_phone(input: &str) -> bool {
    input.chars().count() == MOBILE_PHONE_LENGTH && MOBILE_PHONE.is_full_match(input)
}

/// A letter followed by 5 to 19 letters, digits, `-` or `_`.
pub fn is_wechat_id(input: &str) -> bool {
    WECHAT_ID.is_full_match(input)
}

/// One or more CJK unified ideographs and nothing else.
pub fn is_all_chinese(input: &str) -> bool {
    ALL_CHINESE.is_full_match(input)
}

/// Only letters, CJK ideographs, digits and whitespace. The empty string passes.
pub fn is_input_text(input: &str) -> bool {
    INPUT_TEXT.is_full_match(input)
}

/// Optional leading whitespace, an optional sign, then decimal digits that fit an `i64`.
pub fn is_integer(input: &str) -> bool {
    input.trim_start().parse::<i64>().is_ok()
}
