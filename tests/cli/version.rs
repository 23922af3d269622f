use super::utils::UafactsCli;

#[test]
#[ignore]
fn test_version_normalize() {
    for (raw, expected) in [
        ("3.07", "3.0.7\n"),
        ("10_15_7) AppleWebKit", "10.15.7\n"),
        ("", "0.0.0\n"),
    ] {
        let output = UafactsCli::run(&["version", "normalize", raw]);
        assert_eq!(output, expected, "test_case: '{raw}'");
    }
}

#[test]
#[ignore]
fn test_version_compare() {
    for (query, target, expected) in [
        ("3", "3.5.1", "equal\n"),
        ("3.0", "3.5.1", "less\n"),
        ("3.5.2", "3.5.1", "more\n"),
    ] {
        let output = UafactsCli::run(&["version", "compare", query, target]);
        assert_eq!(output, expected, "test_case: '{query}' vs '{target}'");
    }
}
