//! Content escaping for the hand-formatted legacy output.

/// Replacement passes, applied one after another over the whole string.
///
/// The order is part of the output format: backslashes are doubled after the
/// control characters have been rewritten, so a newline comes out as `\\n`.
/// Doubling also strands the quotes escaped by the first pass, so the last
/// pass escapes them again.
const PASSES: [(&str, &str); 9] = [
    ("\"", "\\\""),
    ("\n", "\\n"),
    ("\u{8}", "\\b"),
    ("\u{c}", "\\f"),
    ("\r", "\\r"),
    ("\t", "\\t"),
    ("\\", "\\\\"),
    ("/", "\\/"),
    ("\"", "\\\""),
];

/// Escape free-text content for embedding between double quotes.
///
/// Not idempotent: escaping already-escaped text escapes it again.
///
/// # Examples
///
/// ```
/// use catnostk_core::escape::escape_content;
///
/// assert_eq!(escape_content("a/b"), r"a\/b");
/// assert_eq!(escape_content("say \"hi\""), r#"say \\\"hi\\\""#);
/// ```
pub fn escape_content(raw: &str) -> String {
    PASSES
        .iter()
        .fold(raw.to_string(), |buf, &(from, to)| buf.replace(from, to))
}
