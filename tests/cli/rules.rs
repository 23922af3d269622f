use super::utils::UafactsCli;
use uafacts::RuleTable;

#[test]
#[ignore]
fn test_rules_prints_builtin_table() {
    let output = UafactsCli::run(&["rules"]);
    let rules = RuleTable::from_json_str(&output).unwrap();
    assert_eq!(rules, RuleTable::builtin());
}
