use crate::search::find_ignore_ascii_case;

/// Delimiter which ends a raw version token early.
///
/// Tokens without this delimiter run until the end of the identity string,
/// which is fine given [`normalize`](super::normalize) stops scanning
/// on its own once it runs into enough noise.
pub const VERSION_TOKEN_TERMINATOR: &str = " );";

/// Locate the raw version token that follows `marker` in `identity`.
///
/// The marker is searched ASCII case insensitively. The token starts
/// right after the first occurrence of the marker and ends right before
/// the first [`VERSION_TOKEN_TERMINATOR`] found after it, or at the end of `identity`.
///
/// Returns an empty string if the marker cannot be found.
///
/// ```
/// use uafacts::version::resolve_version_token;
///
/// let ua = "Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 6.1; Trident/4.0)";
/// assert_eq!(resolve_version_token("msie ", ua), "8.0; Windows NT 6.1; Trident/4.0)");
/// assert_eq!(resolve_version_token("firefox/", ua), "");
/// ```
#[must_use]
pub fn resolve_version_token<'a>(marker: &str, identity: &'a str) -> &'a str {
    let Some(offset) = find_ignore_ascii_case(identity, marker) else {
        return "";
    };
    let Some(token) = identity.get(offset + marker.len()..) else {
        return "";
    };
    token
        .split_once(VERSION_TOKEN_TERMINATOR)
        .map_or(token, |(token, _)| token)
}
