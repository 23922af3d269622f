//! ASCII case insensitive search.
//!
//! Non-ASCII bytes compare as-is, so a match offset is valid
//! for both the raw and the lowercased identity string.

/// Byte offset of the first occurrence of `needle` in `haystack`,
/// ignoring ASCII case. An empty `needle` is found at `0`.
pub(crate) fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    let needle = needle.as_bytes();
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}
