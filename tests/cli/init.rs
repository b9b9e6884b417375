use anyhow::{Context, Result};
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::{CliTest, stdout};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert_eq!(parsed["dictionariesRoot"], "./dictionaries");
    assert_eq!(parsed["primaryLocale"], "en");
    assert_eq!(parsed["missingArgument"], "error");
    assert_eq!(parsed["maxDepth"], 64);
    assert!(
        parsed.get("includes").is_some(),
        "Config should have 'includes' field"
    );

    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Created .dictumrc.json

    ----- stderr -----
    ");

    assert!(test.root().join(".dictumrc.json").exists());
    let content = test.read_file(".dictumrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".dictumrc.json", "{}")?;

    assert_cmd_snapshot!(test.command().arg("init"), @r"
    success: false
    exit_code: 1
    ----- stdout -----

    ----- stderr -----
    Error: .dictumrc.json already exists
    ");

    assert_eq!(test.read_file(".dictumrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    test.command().arg("init").output()?;
    test.write_file("dictionaries/en.json", r#"{ "hello": "Hello" }"#)?;

    let output = test.check_command().output()?;
    assert!(
        output.status.success(),
        "Check command should work with initialized config. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        stdout(&output),
        "\u{2713} Checked 1 dictionary file - no issues found\n"
    );

    Ok(())
}
