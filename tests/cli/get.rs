use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, stderr, stdout};

const DICTIONARY: &str = r#"{
  "Common": {
    "greeting": "Hello, {{name}}! You have {{count}} messages.",
    "save": "Save"
  },
  "limits": { "upload": 25 },
  "tags": ["new", "hot"]
}"#;

#[test]
fn test_get_plain_string() -> Result<()> {
    let test = CliTest::with_file("en.json", DICTIONARY)?;

    assert_cmd_snapshot!(test.command().args(["get", "en.json", "Common.save"]), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    Save

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_get_resolves_template() -> Result<()> {
    let test = CliTest::with_file("en.json", DICTIONARY)?;

    let output = test
        .command()
        .args(["get", "en.json", "Common.greeting"])
        .args(["--arg", "name=Ada", "--arg", "count=3"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Hello, Ada! You have 3 messages.\n");

    Ok(())
}

#[test]
fn test_get_missing_argument_fails_by_default() -> Result<()> {
    let test = CliTest::with_file("en.json", DICTIONARY)?;

    let output = test
        .command()
        .args(["get", "en.json", "Common.greeting", "--arg", "name=Ada"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr(&output).contains("missing argument for placeholder \"{{count}}\""),
        "stderr: {}",
        stderr(&output)
    );

    Ok(())
}

#[test]
fn test_get_missing_argument_policies() -> Result<()> {
    let test = CliTest::with_file("en.json", DICTIONARY)?;

    let output = test
        .command()
        .args(["get", "en.json", "Common.greeting", "--arg", "name=Ada"])
        .args(["--missing-argument", "keep"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Hello, Ada! You have {{count}} messages.\n");

    test.write_file(".dictumrc.json", r#"{ "missingArgument": "empty" }"#)?;
    let output = test
        .command()
        .args(["get", "en.json", "Common.greeting", "--arg", "name=Ada"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "Hello, Ada! You have  messages.\n");

    Ok(())
}

#[test]
fn test_get_non_string_values_print_as_json() -> Result<()> {
    let test = CliTest::with_file("en.json", DICTIONARY)?;

    let output = test
        .command()
        .args(["get", "en.json", "limits.upload", "--arg", "ignored=1"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "25\n");

    let output = test.command().args(["get", "en.json", "tags"]).output()?;
    assert_eq!(stdout(&output), "[\n  \"new\",\n  \"hot\"\n]\n");

    let output = test.command().args(["get", "en.json", "limits"]).output()?;
    assert_eq!(stdout(&output), "{\n  \"upload\": 25\n}\n");

    Ok(())
}

#[test]
fn test_get_unknown_path() -> Result<()> {
    let test = CliTest::with_file("en.json", DICTIONARY)?;

    let output = test
        .command()
        .args(["get", "en.json", "Common.missing"])
        .output()?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stderr(&output),
        "Error: Path \"Common.missing\" not found in en.json\n"
    );

    Ok(())
}

#[test]
fn test_get_sequence_path_is_not_flattened() -> Result<()> {
    let test = CliTest::with_file("en.json", DICTIONARY)?;

    let output = test.command().args(["get", "en.json", "tags.0"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Path \"tags.0\" not found"));

    Ok(())
}

#[test]
fn test_get_rejects_malformed_arg() -> Result<()> {
    let test = CliTest::with_file("en.json", DICTIONARY)?;

    let output = test
        .command()
        .args(["get", "en.json", "Common.save", "--arg", "novalue"])
        .output()?;
    assert!(!output.status.success());
    assert!(stderr(&output).contains("expected NAME=VALUE"));

    Ok(())
}
