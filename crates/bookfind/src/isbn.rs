//! Detection of ISBN shaped search terms and construction of the search query.

use once_cell::sync::Lazy;
use regex::Regex;

// ISBN-10 [0-9]-[0-9]{2}-[0-9]{6}-[0-9X]
// ISBN-13 (978|979)-[0-9]-[0-9]{2}-[0-9]{6}-[0-9]
static ISBN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(978|979)?-?[0-9]-?[0-9]{2}-?[0-9]{6}-?[0-9X]$")
        .expect("ISBN pattern is a valid regex")
});

/// Returns `true` when `code` has the shape of an ISBN-10 or ISBN-13.
///
/// Hyphens between the digit groups are optional and the last character may be an uppercase `X`.
/// A single trailing newline is tolerated. The check digit is not validated, this only decides
/// how a search term is sent to the API.
///
/// # Examples
///
/// ```
/// use bookfind::isbn::is_isbn;
///
/// assert!(is_isbn("978-4-87-311565-8"));
/// assert!(is_isbn("487311565X"));
/// assert!(!is_isbn("readable code"));
/// ```
#[must_use]
pub fn is_isbn(code: &str) -> bool {
    ISBN_PATTERN.is_match(strip_newline(code))
}

/// Builds the value of the `q` query parameter for a search term.
///
/// An ISBN is stripped of its hyphens and sent as `isbn:<digits>`, anything else is sent as
/// URL encoded free text.
#[must_use]
pub fn query(term: &str) -> String {
    if is_isbn(term) {
        format!("isbn:{}", strip_newline(term).replace('-', ""))
    } else {
        urlencoding::encode(term).into_owned()
    }
}

fn strip_newline(code: &str) -> &str {
    code.strip_suffix('\n').unwrap_or(code)
}
