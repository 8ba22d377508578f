//! Syntactic validation for destination URLs and short codes.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Shape of a caller-supplied short code: 6 to 8 alphanumeric characters.
static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z0-9]{6,8}$").expect("valid regex"));

/// Returns `true` iff `input` parses as an absolute URL whose scheme is
/// exactly `http` or `https`.
///
/// Malformed input returns `false`; this function never errors.
pub fn is_valid_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => matches!(url.scheme(), "http" | "https"),
        Err(_) => false,
    }
}

/// Returns `true` iff `code` is 6-8 characters drawn from `[A-Za-z0-9]`.
pub fn is_valid_code(code: &str) -> bool {
    CODE_PATTERN.is_match(code)
}
