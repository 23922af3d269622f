use super::utils::UafactsCli;

#[test]
#[ignore]
fn test_help() {
    let output = UafactsCli::run(&["help"]);
    assert!(output.contains("uafacts cli to classify agent identity strings"));
    assert!(output.contains("Usage:"));
    assert!(output.contains("Commands:"));
    assert!(output.contains("Options:"));
}

#[test]
#[ignore]
fn test_help_classify() {
    let output = UafactsCli::run(&["help", "classify"]);
    assert!(output.contains("classify an agent identity string"));
    assert!(output.contains("UAFACTS_IDENTITY"));
    assert!(output.contains("--rules"));
    assert!(output.contains("--json"));
}
