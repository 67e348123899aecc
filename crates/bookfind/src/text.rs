//! Codepoint aware text truncation.

use std::borrow::Cow;

/// Marker appended to truncated text.
pub const TRUNCATE_MARKER: &str = "…";

/// Truncates `text` to `max_length` codepoints and appends `marker`.
///
/// Lengths are counted in codepoints so multi-byte text (Japanese for example) is never cut in
/// the middle of a character. Text that already fits, or a `max_length` of [`None`], is returned
/// unchanged.
///
/// The marker is not counted against `max_length`, so a truncated result is `max_length`
/// codepoints of text followed by the marker. See [`truncate_to_fit`] for a variant that keeps
/// the marker inside the limit.
///
/// # Examples
///
/// ```
/// use bookfind::text::{truncate, TRUNCATE_MARKER};
///
/// assert_eq!("リーダ…", truncate("リーダブルコード", Some(3), TRUNCATE_MARKER));
/// assert_eq!("リーダブルコード", truncate("リーダブルコード", Some(8), TRUNCATE_MARKER));
/// ```
#[must_use]
pub fn truncate<'a>(text: &'a str, max_length: Option<usize>, marker: &str) -> Cow<'a, str> {
    let length = text.chars().count();
    let max_length = match max_length {
        Some(max_length) if length > max_length => max_length,
        _ => return Cow::Borrowed(text),
    };

    // The retained length is `max_length - length`. That is negative here and a negative length
    // drops that many codepoints from the end of the text.
    let dropped = length - max_length;
    let mut truncated = head(text, length - dropped).to_owned();
    truncated.push_str(marker);
    Cow::Owned(truncated)
}

/// Truncates `text` so that the result, marker included, is at most `max_length` codepoints.
///
/// Behaves like [`truncate`] for text that already fits. A marker longer than `max_length` is
/// still appended in full.
///
/// # Examples
///
/// ```
/// use bookfind::text::{truncate_to_fit, TRUNCATE_MARKER};
///
/// assert_eq!("リー…", truncate_to_fit("リーダブルコード", Some(3), TRUNCATE_MARKER));
/// ```
#[must_use]
pub fn truncate_to_fit<'a>(
    text: &'a str,
    max_length: Option<usize>,
    marker: &str,
) -> Cow<'a, str> {
    let max_length = match max_length {
        Some(max_length) if text.chars().count() > max_length => max_length,
        _ => return Cow::Borrowed(text),
    };

    let retained = max_length.saturating_sub(marker.chars().count());
    let mut truncated = head(text, retained).to_owned();
    truncated.push_str(marker);
    Cow::Owned(truncated)
}

/// The first `count` codepoints of `text`.
fn head(text: &str, count: usize) -> &str {
    text.char_indices()
        .nth(count)
        .map_or(text, |(index, _)| &text[..index])
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::{head, truncate, truncate_to_fit, TRUNCATE_MARKER};

    fn long_description() -> String {
        "リーダブルコード".repeat(70)
    }

    #[test]
    fn long_japanese_text_is_truncated_with_marker() {
        let description = long_description();
        assert_eq!(560, description.chars().count());

        let summary = truncate(&description, Some(500), TRUNCATE_MARKER);

        assert!(summary.ends_with(TRUNCATE_MARKER));
        assert_eq!(501, summary.chars().count());
        assert!(description.starts_with(summary.trim_end_matches(TRUNCATE_MARKER)));
    }

    #[test]
    fn text_within_limit_is_unchanged() {
        let description = "リーダブルコード".repeat(62);
        assert_eq!(496, description.chars().count());

        let summary = truncate(&description, Some(500), TRUNCATE_MARKER);

        assert!(matches!(summary, Cow::Borrowed(_)));
        assert_eq!(description, summary);
    }

    #[test]
    fn text_exactly_at_limit_is_unchanged() {
        assert_eq!("abc", truncate("abc", Some(3), TRUNCATE_MARKER));
        assert_eq!("abc", truncate_to_fit("abc", Some(3), TRUNCATE_MARKER));
    }

    #[test]
    fn no_limit_returns_text_unchanged() {
        let description = long_description();

        assert_eq!(description, truncate(&description, None, TRUNCATE_MARKER));
        assert_eq!(
            description,
            truncate_to_fit(&description, None, TRUNCATE_MARKER)
        );
    }

    #[test]
    fn byte_length_is_not_used_for_the_limit() {
        // 8 codepoints but 24 bytes
        let title = "リーダブルコード";
        assert_eq!(title, truncate(title, Some(10), TRUNCATE_MARKER));
    }

    #[test]
    fn custom_marker_is_appended() {
        assert_eq!("read...", truncate("readable code", Some(4), "..."));
    }

    #[test]
    fn zero_length_keeps_only_the_marker() {
        assert_eq!(TRUNCATE_MARKER, truncate("abc", Some(0), TRUNCATE_MARKER));
    }

    #[test]
    fn truncate_to_fit_keeps_the_marker_within_the_limit() {
        let description = long_description();

        let summary = truncate_to_fit(&description, Some(500), TRUNCATE_MARKER);

        assert!(summary.ends_with(TRUNCATE_MARKER));
        assert_eq!(500, summary.chars().count());
        assert_eq!("rea...", truncate_to_fit("readable code", Some(6), "..."));
    }

    #[test]
    fn truncate_to_fit_with_marker_longer_than_limit() {
        assert_eq!("...", truncate_to_fit("readable code", Some(2), "..."));
    }

    #[test]
    fn head_counts_codepoints() {
        assert_eq!("リー", head("リーダブル", 2));
        assert_eq!("リーダブル", head("リーダブル", 5));
        assert_eq!("リーダブル", head("リーダブル", 10));
        assert_eq!("", head("リーダブル", 0));
    }
}
