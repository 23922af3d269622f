use super::utils::UafactsCli;

const FIREFOX_WINDOWS: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:125.0) Gecko/20100101 Firefox/125.0";

#[test]
#[ignore]
fn test_classify_summary() {
    let output = UafactsCli::run(&["classify", FIREFOX_WINDOWS]);
    assert_eq!(
        output,
        "Firefox 125.0.0 on Windows 10.0.0 on a PC (desktop)\n"
    );
}

#[test]
#[ignore]
fn test_classify_from_stdin() {
    let output =
        UafactsCli::run_with_stdin(&["classify"], Some(&format!("{FIREFOX_WINDOWS}\n")));
    assert_eq!(
        output,
        "Firefox 125.0.0 on Windows 10.0.0 on a PC (desktop)\n"
    );
}

#[test]
#[ignore]
fn test_classify_json() {
    let output = UafactsCli::run(&["classify", "--json", FIREFOX_WINDOWS]);
    let record: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(
        record,
        serde_json::json!({
            "device_class": "desktop",
            "agent_name": "Firefox",
            "agent_version": "125.0.0",
            "platform_name": "Windows",
            "platform_version": "10.0.0",
            "device_name": "PC",
        })
    );
}

#[test]
#[ignore]
fn test_classify_custom_rules() {
    let dir = std::env::temp_dir().join(format!("uafacts-cli-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("rules.json");
    std::fs::write(
        &path,
        r#"[
            {"key": "ipad", "device_class": "desktop", "device_name": "iPad"},
            {"key": "mobile", "device_class": "mobile"}
        ]"#,
    )
    .unwrap();

    let output = UafactsCli::run(&[
        "classify",
        "--rules",
        path.to_str().unwrap(),
        "Mozilla/5.0 (iPad) Mobile/15E148",
    ]);
    assert_eq!(output, "Unknown 0.0.0 on Unknown 0.0.0 on an iPad (desktop)\n");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
#[ignore]
fn test_classify_missing_rules_file() {
    let stderr = UafactsCli::run_failure(&[
        "classify",
        "--rules",
        "/this/path/does/not/exist.json",
        FIREFOX_WINDOWS,
    ]);
    assert!(stderr.contains("open rule table"), "stderr: {stderr}");
}
