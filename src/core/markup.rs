//! Plain-text clean-up of HTML fragments and small URL rewrites.

use crate::core::substring::replace_range;
use crate::utils::error::Result;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use std::sync::LazyLock;

static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("built-in pattern must compile"));

/// Everything except alphanumerics and the sub-delimiters allowed in a URL query.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'!')
    .remove(b'$')
    .remove(b'&')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*')
    .remove(b'+')
    .remove(b',')
    .remove(b'-')
    .remove(b'.')
    .remove(b'/')
    .remove(b':')
    .remove(b';')
    .remove(b'=')
    .remove(b'?')
    .remove(b'@')
    .remove(b'_')
    .remove(b'~');

const CIRCLE_PROCESS: &str = "x-oss-process=image/circle,r_400/format,png";

/// Removes every `<...>` tag and keeps the text between them.
pub fn strip_html_tags(input: &str) -> String {
    HTML_TAG.replace_all(input, "").into_owned()
}

/// Upgrades a leading `http` to `https`; anything else is returned as is.
pub fn http_to_https(input: &str) -> String {
    if input.starts_with("https") || !input.starts_with("http") {
        return input.to_string();
    }
    // "http" is four ASCII code points, so the range is always in bounds.
    replace_range(input, 0, 4, "https").unwrap_or_else(|_| input.to_string())
}

/// Percent-encodes `input` for use inside a URL query.
pub fn url_encode(input: &str) -> String {
    utf8_percent_encode(input, QUERY_ENCODE_SET).to_string()
}

/// Rewrites an OSS image URL so the service returns a circular PNG crop.
///
/// Any `@` style suffix is dropped first.
pub fn circle_image_url(input: &str) -> String {
    let base = input.split('@').next().unwrap_or_default();
    let separator = if input.contains('?') { '&' } else { '?' };
    format!("{}{}{}", base, separator, CIRCLE_PROCESS)
}

/// Replaces every match of `pattern` in `input`. `$1`-style group references
/// in `replacement` are expanded.
pub fn regex_replace(input: &str, pattern: &str, replacement: &str) -> Result<String> {
    let regex = Regex::new(pattern)?;
    Ok(regex.replace_all(input, replacement).into_owned())
}
