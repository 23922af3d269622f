use super::{VersionTriple, parse_component};

/// Amount of characters, other than digits, `.` and `_`,
/// after which a raw version token is no longer scanned.
const MAX_INVALID_CHARS: usize = 3;

/// Normalize a raw (noisy) version token into a [`VersionTriple`].
///
/// The token is scanned from left to right until the third character that
/// is neither an ASCII digit, nor `.` nor `_` is seen. Digits and `.` are kept,
/// `_` is kept as `.` and everything else is dropped. A `0` directly following
/// a `.` and directly followed by another digit is treated as a component on
/// its own, such that `3.07` reads as `3.0.7`.
///
/// The first three `.`-separated components are parsed as base-10 integers.
/// An empty component is `0`, a component too large for a `u32` is [`u32::MAX`].
///
/// This function accepts any input and never fails.
///
/// ```
/// use uafacts::version::{VersionTriple, normalize};
///
/// assert_eq!(normalize("10_15_7) AppleWebKit"), VersionTriple::new(10, 15, 7));
/// assert_eq!(normalize("3.07"), VersionTriple::new(3, 0, 7));
/// assert_eq!(normalize(""), VersionTriple::ZERO);
/// ```
#[must_use]
pub fn normalize(raw: &str) -> VersionTriple {
    let mut buffer = String::with_capacity(raw.len() + 2);
    let mut invalid_chars = 0;

    let mut previous = None;
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '0'..='9' => {
                buffer.push(c);
                if c == '0'
                    && previous == Some('.')
                    && chars.peek().is_some_and(char::is_ascii_digit)
                {
                    buffer.push('.');
                }
            }
            '.' | '_' => buffer.push('.'),
            _ => {
                invalid_chars += 1;
                if invalid_chars >= MAX_INVALID_CHARS {
                    break;
                }
            }
        }
        previous = Some(c);
    }

    let mut components = [0u32; 3];
    for (component, part) in components.iter_mut().zip(buffer.split('.')) {
        *component = parse_component(part);
    }
    components.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_normalize() {
        for (raw, expected) in [
            ("", (0, 0, 0)),
            ("3.5.2", (3, 5, 2)),
            ("3.07", (3, 0, 7)),
            ("3.007", (3, 0, 7)),
            ("3.0", (3, 0, 0)),
            ("3.0.", (3, 0, 0)),
            ("10.0", (10, 0, 0)),
            ("5_1_1", (5, 1, 1)),
            ("10_15_7) applewebkit/537.36", (10, 15, 7)),
            ("8.0; trident/4.0)", (8, 0, 0)),
            ("124.0.0.0 safari/537.36", (124, 0, 0)),
            ("1.2.3.4", (1, 2, 3)),
            ("17.4.1 mobile/15e148", (17, 4, 1)),
            ("v2.1", (2, 1, 0)),
            ("..", (0, 0, 0)),
            (".5", (0, 5, 0)),
            ("4294967296.1", (u32::MAX, 1, 0)),
            ("5000000000.1", (u32::MAX, 1, 0)),
            ("1.99999999999999999999", (1, u32::MAX, 0)),
            ("abc1.2.3", (0, 0, 0)),
            ("ab1.2.3", (1, 2, 3)),
            ("1a2b3c4", (123, 0, 0)),
            ("1;2;3", (123, 0, 0)),
            ("ÿ9", (9, 0, 0)),
        ] {
            assert_eq!(
                normalize(raw),
                VersionTriple::from(expected),
                "test_case: '{raw}'",
            );
        }
    }

    #[test]
    fn test_normalize_repair_requires_literal_dot() {
        // `_` is copied as `.`, but only a literal `.` triggers the split
        assert_eq!(normalize("3_07"), VersionTriple::new(3, 7, 0));
        assert_eq!(normalize("3.x07"), VersionTriple::new(3, 7, 0));
    }

    #[quickcheck]
    fn normalize_is_total_and_stable(raw: String) -> bool {
        let version = normalize(&raw);
        normalize(&version.to_string()) == version
    }

    #[quickcheck]
    fn normalize_dotted_round_trip(major: u32, minor: u32, patch: u32) -> bool {
        normalize(&format!("{major}.{minor}.{patch}")) == VersionTriple::new(major, minor, patch)
    }

    #[quickcheck]
    fn normalize_underscored_round_trip(major: u32, minor: u32, patch: u32) -> bool {
        normalize(&format!("{major}_{minor}_{patch}")) == VersionTriple::new(major, minor, patch)
    }
}
